//! Entity extractors: pure synchronous mappers from AST nodes to IR entities.
//!
//! Each extractor converts one node of the typed syntax tree into its IR
//! counterpart. None of them perform I/O or suspend; the orchestrator in
//! [`crate::analyzer`] drives them per file.

pub mod annotation;
pub mod class;
pub mod classifier;
pub mod complexity;
pub mod field;
pub mod method;
pub mod parameter;
pub mod statement;

use crate::ir::SourceLocation;
use tree_sitter::Node;

/// Textual form of a node, empty when the span is not valid UTF-8
pub(crate) fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or_default()
        .to_string()
}

/// Source span of a node as a 1-indexed location
pub(crate) fn location_of(node: Node, file_path: &str) -> SourceLocation {
    let start = node.start_position();
    let end = node.end_position();
    SourceLocation {
        file_path: file_path.to_string(),
        start_line: start.row + 1,
        end_line: end.row + 1,
        start_column: start.column + 1,
        end_column: end.column + 1,
    }
}

/// The `modifiers` child of a declaration, if present
pub(crate) fn modifiers_node<'tree>(declaration: Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = declaration.walk();
    let found = declaration
        .named_children(&mut cursor)
        .find(|child| child.kind() == "modifiers");
    found
}

/// Modifier keywords of a declaration joined by single spaces.
///
/// Annotations live inside the `modifiers` node in the Java grammar and are
/// excluded here; they are extracted separately.
pub(crate) fn modifier_string(declaration: Node, source: &str) -> String {
    let Some(modifiers) = modifiers_node(declaration) else {
        return String::new();
    };
    let mut cursor = modifiers.walk();
    let keywords: Vec<String> = modifiers
        .children(&mut cursor)
        .filter(|child| !matches!(child.kind(), "annotation" | "marker_annotation"))
        .map(|child| node_text(child, source))
        .collect();
    keywords.join(" ")
}

/// Annotation nodes attached to a declaration, in source order
pub(crate) fn annotation_nodes<'tree>(declaration: Node<'tree>) -> Vec<Node<'tree>> {
    let Some(modifiers) = modifiers_node(declaration) else {
        return Vec::new();
    };
    let mut cursor = modifiers.walk();
    modifiers
        .named_children(&mut cursor)
        .filter(|child| matches!(child.kind(), "annotation" | "marker_annotation"))
        .collect()
}
