//! Class and interface extraction

use super::annotation::extract_annotation;
use super::field::extract_fields;
use super::method::extract_method;
use super::{annotation_nodes, classifier, complexity, location_of, modifier_string, node_text};
use crate::ir::{ClassKind, IRClassEntity, StaticRelationEntity, TargetType};
use anyhow::Result;
use tree_sitter::Node;

/// Convert one class or interface declaration into an [`IRClassEntity`].
///
/// Delegates to the annotation, field, and method extractors and the
/// complexity calculator, classifies class-level annotations, and
/// synthesizes relation entries: one "extends" entry if a superclass
/// exists, then one "implements" entry per interface in declaration order.
pub fn extract_class(
    node: Node,
    source: &str,
    file_path: &str,
    package: &str,
) -> Result<IRClassEntity> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source))
        .filter(|n| !n.is_empty());
    let Some(name) = name else {
        anyhow::bail!("type declaration has no name");
    };

    let kind = if node.kind() == "interface_declaration" {
        ClassKind::Interface
    } else {
        ClassKind::Class
    };

    let super_class = superclass_name(node, source);
    let interfaces = interface_names(node, source);
    let modifiers = modifier_string(node, source);

    let classified = classifier::classify(
        annotation_nodes(node)
            .into_iter()
            .map(|a| extract_annotation(a, node, source, file_path, TargetType::Class))
            .collect(),
    );

    let mut fields = Vec::new();
    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    fields.extend(extract_fields(member, source, file_path));
                }
                "method_declaration" => {
                    methods.push(extract_method(member, source, file_path));
                }
                _ => {}
            }
        }
    }

    let mut relations = Vec::new();
    if let Some(super_class) = &super_class {
        relations.push(StaticRelationEntity {
            relation_type: "extends".to_string(),
            target_class: super_class.clone(),
        });
    }
    for interface in &interfaces {
        relations.push(StaticRelationEntity {
            relation_type: "implements".to_string(),
            target_class: interface.clone(),
        });
    }

    let complexity_metrics = complexity::calculate_complexity(node, source);

    Ok(IRClassEntity {
        name,
        kind,
        package: package.to_string(),
        file_path: file_path.to_string(),
        modifiers,
        super_class,
        interfaces,
        annotations: classified.residual,
        features: classified.features,
        mappings: classified.mappings,
        fields,
        methods,
        relations,
        source_location: location_of(node, file_path),
        complexity_metrics,
        embedding: None,
    })
}

fn superclass_name(node: Node, source: &str) -> Option<String> {
    let superclass = node.child_by_field_name("superclass")?;
    let mut cursor = superclass.walk();
    let name = superclass
        .named_children(&mut cursor)
        .next()
        .map(|t| node_text(t, source));
    name
}

/// Implemented interfaces of a class, or extended interfaces of an
/// interface, in declaration order
fn interface_names(node: Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    let clause = node
        .children(&mut cursor)
        .find(|child| matches!(child.kind(), "super_interfaces" | "extends_interfaces"));
    let Some(clause) = clause else {
        return Vec::new();
    };

    let mut cursor = clause.walk();
    let Some(type_list) = clause
        .named_children(&mut cursor)
        .find(|child| child.kind() == "type_list")
    else {
        return Vec::new();
    };

    let mut cursor = type_list.walk();
    type_list
        .named_children(&mut cursor)
        .map(|t| node_text(t, source))
        .collect()
}
