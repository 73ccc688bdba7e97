//! Field extraction

use super::{annotation_nodes, location_of, modifier_string, node_text};
use super::annotation::extract_annotation;
use super::classifier;
use crate::ir::{IRFieldEntity, TargetType};
use tree_sitter::Node;

/// Convert one field (or interface constant) declaration into IR fields.
///
/// A declaration with multiple declarators (`int a, b;`) produces one entity
/// per declared variable; annotations and modifiers apply to each.
pub fn extract_fields(node: Node, source: &str, file_path: &str) -> Vec<IRFieldEntity> {
    let field_type = node
        .child_by_field_name("type")
        .map(|n| node_text(n, source))
        .unwrap_or_default();
    let modifiers = modifier_string(node, source);

    let annotations: Vec<_> = annotation_nodes(node)
        .into_iter()
        .map(|a| extract_annotation(a, node, source, file_path, TargetType::Field))
        .collect();

    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() == "variable_declarator")
        .map(|declarator| {
            let name = declarator
                .child_by_field_name("name")
                .map(|n| node_text(n, source))
                .unwrap_or_default();
            let classified = classifier::classify(annotations.clone());
            IRFieldEntity {
                name,
                field_type: field_type.clone(),
                modifiers: modifiers.clone(),
                annotations: classified.residual,
                features: classified.features,
                mappings: classified.mappings,
                source_location: location_of(node, file_path),
                embedding: None,
            }
        })
        .collect()
}
