//! Method parameter extraction

use super::{location_of, node_text};
use crate::ir::StaticParameterEntity;
use tree_sitter::Node;

/// Convert one formal parameter node into a [`StaticParameterEntity`]
pub fn extract_parameter(node: Node, source: &str, file_path: &str) -> StaticParameterEntity {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source))
        .unwrap_or_default();
    let param_type = node
        .child_by_field_name("type")
        .map(|n| node_text(n, source))
        .unwrap_or_default();

    StaticParameterEntity {
        name,
        param_type,
        source_location: location_of(node, file_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::java_ast::{AstOptions, JavaAst};

    #[test]
    fn test_extracts_name_type_and_location() {
        let source = "class A { void run(int count, java.util.List items) {} }";
        let mut ast = JavaAst::new(AstOptions::default()).unwrap();
        let tree = ast.parse(source).unwrap();
        let class = tree.root_node().named_child(0).unwrap();
        let body = class.child_by_field_name("body").unwrap();
        let mut cursor = body.walk();
        let method = body
            .named_children(&mut cursor)
            .find(|n| n.kind() == "method_declaration")
            .unwrap();
        let params_node = method.child_by_field_name("parameters").unwrap();
        let mut cursor = params_node.walk();
        let params: Vec<_> = params_node
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "formal_parameter")
            .map(|n| extract_parameter(n, source, "A.java"))
            .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "count");
        assert_eq!(params[0].param_type, "int");
        assert_eq!(params[1].name, "items");
        assert_eq!(params[1].param_type, "java.util.List");
        assert_eq!(params[0].source_location.start_line, 1);
    }
}
