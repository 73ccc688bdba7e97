//! Statement simplification into the shallow low-level AST

use super::{location_of, node_text};
use crate::ir::{LowLevelAst, StaticStatementEntity};
use tree_sitter::Node;

/// Build the simplified statement tree for a method body.
///
/// Block statements recurse into nested sub-statement lists; every other
/// statement kind is a leaf carrying its textual form and span. The result
/// deliberately discards most structure beyond the leaf-vs-block shape.
pub fn build_low_level_ast(body: Node, source: &str, file_path: &str) -> LowLevelAst {
    LowLevelAst {
        statements: statements_of(body, source, file_path),
    }
}

fn statements_of(block: Node, source: &str, file_path: &str) -> Vec<StaticStatementEntity> {
    let mut cursor = block.walk();
    block
        .named_children(&mut cursor)
        .filter(|child| !matches!(child.kind(), "line_comment" | "block_comment"))
        .map(|child| simplify_statement(child, source, file_path))
        .collect()
}

fn simplify_statement(node: Node, source: &str, file_path: &str) -> StaticStatementEntity {
    if node.kind() == "block" {
        StaticStatementEntity {
            statement_type: node.kind().to_string(),
            expression: None,
            sub_statements: Some(statements_of(node, source, file_path)),
            source_location: Some(location_of(node, file_path)),
        }
    } else {
        StaticStatementEntity {
            statement_type: node.kind().to_string(),
            expression: Some(node_text(node, source)),
            sub_statements: None,
            source_location: Some(location_of(node, file_path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::java_ast::{AstOptions, JavaAst};

    fn body_ast(method_source: &str) -> LowLevelAst {
        let source = format!("class A {{ {} }}", method_source);
        let mut ast = JavaAst::new(AstOptions::default()).unwrap();
        let tree = ast.parse(&source).unwrap();
        let class = tree.root_node().named_child(0).unwrap();
        let body = class.child_by_field_name("body").unwrap();
        let mut cursor = body.walk();
        let method = body
            .named_children(&mut cursor)
            .find(|n| n.kind() == "method_declaration")
            .unwrap();
        let method_body = method.child_by_field_name("body").unwrap();
        build_low_level_ast(method_body, &source, "A.java")
    }

    #[test]
    fn test_flat_statements_become_leaves() {
        let ast = body_ast("void run() { int x = 1; return; }");
        assert_eq!(ast.statements.len(), 2);
        assert_eq!(ast.statements[0].statement_type, "local_variable_declaration");
        assert_eq!(ast.statements[0].expression.as_deref(), Some("int x = 1;"));
        assert!(ast.statements[0].sub_statements.is_none());
        assert_eq!(ast.statements[1].statement_type, "return_statement");
    }

    #[test]
    fn test_nested_block_recurses() {
        let ast = body_ast("void run() { { int x = 1; } }");
        assert_eq!(ast.statements.len(), 1);
        let block = &ast.statements[0];
        assert_eq!(block.statement_type, "block");
        assert!(block.expression.is_none());
        let sub = block.sub_statements.as_ref().unwrap();
        assert_eq!(sub.len(), 1);
        assert_eq!(sub[0].statement_type, "local_variable_declaration");
    }

    #[test]
    fn test_empty_body_yields_no_statements() {
        let ast = body_ast("void run() {}");
        assert!(ast.statements.is_empty());
    }

    #[test]
    fn test_statement_locations_are_one_indexed() {
        let ast = body_ast("void run() { return; }");
        let location = ast.statements[0].source_location.as_ref().unwrap();
        assert_eq!(location.file_path, "A.java");
        assert_eq!(location.start_line, 1);
        assert!(location.start_column > 0);
    }
}
