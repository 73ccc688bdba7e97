//! Annotation extraction

use super::{location_of, node_text};
use crate::ir::{AnnotationEntity, AnnotationPhase, TargetType};
use std::collections::BTreeMap;
use tree_sitter::Node;

/// Convert one annotation node into an [`AnnotationEntity`].
///
/// `declaration` is the annotated declaration, used for the target element
/// text; `target_type` is supplied by the calling extractor since it knows
/// which kind of element it is working on. Attribute values are coerced to
/// plain strings: string literals lose their surrounding quotes, and the
/// special `type` attribute, written as a dotted enum reference, is reduced
/// to its trailing unqualified segment.
pub fn extract_annotation(
    node: Node,
    declaration: Node,
    source: &str,
    file_path: &str,
    target_type: TargetType,
) -> AnnotationEntity {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source))
        .unwrap_or_default();

    let mut attributes = BTreeMap::new();
    if let Some(arguments) = node.child_by_field_name("arguments") {
        let mut cursor = arguments.walk();
        for argument in arguments.named_children(&mut cursor) {
            if argument.kind() == "element_value_pair" {
                let key = argument
                    .child_by_field_name("key")
                    .map(|n| node_text(n, source))
                    .unwrap_or_default();
                let value = argument
                    .child_by_field_name("value")
                    .map(|n| node_text(n, source))
                    .unwrap_or_default();
                attributes.insert(key.clone(), coerce_value(&key, &value));
            } else if !matches!(argument.kind(), "line_comment" | "block_comment") {
                // Single-element shorthand: @Foo("bar")
                let value = node_text(argument, source);
                attributes.insert("value".to_string(), coerce_value("value", &value));
            }
        }
    }

    AnnotationEntity {
        name,
        attributes,
        target_element: node_text(declaration, source),
        target_type,
        condition: None,
        dependencies: None,
        phase: AnnotationPhase::Runtime,
        source_location: Some(location_of(node, file_path)),
    }
}

fn coerce_value(key: &str, raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(raw);
    if key == "type" {
        // Dotted enum reference like FeatureType.FUNCTIONAL
        return unquoted
            .rsplit('.')
            .next()
            .unwrap_or(unquoted)
            .to_string();
    }
    unquoted.to_string()
}
