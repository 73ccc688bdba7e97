//! Per-class complexity metrics

use super::node_text;
use crate::ir::ComplexityMetrics;
use tree_sitter::Node;

/// Compute complexity metrics for a class declaration.
///
/// Branch points are if/loop/catch/ternary constructs, switch case labels,
/// and short-circuit `&&`/`||` operators anywhere in the class subtree.
/// Cyclomatic complexity is 1 plus the branch count; nesting depth is the
/// deepest statement-block nesting, where a method body counts as depth 1.
pub fn calculate_complexity(class_node: Node, source: &str) -> ComplexityMetrics {
    let mut branch_count = 0;
    let mut nesting_depth = 0;
    walk(class_node, source, 0, &mut branch_count, &mut nesting_depth);

    ComplexityMetrics {
        cyclomatic_complexity: branch_count + 1,
        nesting_depth,
        branch_count,
    }
}

fn walk(node: Node, source: &str, block_depth: u32, branches: &mut u32, max_depth: &mut u32) {
    let depth = if node.kind() == "block" {
        let d = block_depth + 1;
        *max_depth = (*max_depth).max(d);
        d
    } else {
        block_depth
    };

    if is_branch_point(node, source) {
        *branches += 1;
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(child, source, depth, branches, max_depth);
    }
}

fn is_branch_point(node: Node, source: &str) -> bool {
    match node.kind() {
        "if_statement" | "while_statement" | "do_statement" | "for_statement"
        | "enhanced_for_statement" | "catch_clause" | "ternary_expression" => true,
        // One branch per case label, excluding the default arm
        "switch_label" => !node_text(node, source).starts_with("default"),
        "binary_expression" => node
            .child_by_field_name("operator")
            .map(|op| matches!(node_text(op, source).as_str(), "&&" | "||"))
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::java_ast::{AstOptions, JavaAst};

    fn metrics_for(source: &str) -> ComplexityMetrics {
        let mut ast = JavaAst::new(AstOptions::default()).unwrap();
        let tree = ast.parse(source).unwrap();
        let class = tree.root_node().named_child(0).unwrap();
        calculate_complexity(class, source)
    }

    #[test]
    fn test_empty_class_is_baseline() {
        let metrics = metrics_for("class A {}");
        assert_eq!(metrics.cyclomatic_complexity, 1);
        assert_eq!(metrics.nesting_depth, 0);
        assert_eq!(metrics.branch_count, 0);
    }

    #[test]
    fn test_straight_line_method() {
        let metrics = metrics_for("class A { void run() { int x = 1; } }");
        assert_eq!(metrics.cyclomatic_complexity, 1);
        assert_eq!(metrics.nesting_depth, 1);
        assert_eq!(metrics.branch_count, 0);
    }

    #[test]
    fn test_branches_increase_complexity() {
        let metrics = metrics_for(
            "class A { void run(int x) { if (x > 0) { x--; } for (int i = 0; i < x; i++) { x += i; } } }",
        );
        assert_eq!(metrics.branch_count, 2);
        assert_eq!(metrics.cyclomatic_complexity, 3);
        // Method body is depth 1; the if-block and for-block are siblings at 2
        assert_eq!(metrics.nesting_depth, 2);
    }

    #[test]
    fn test_nested_blocks_deepen_nesting() {
        let metrics = metrics_for(
            "class A { void run(int x) { if (x > 0) { if (x > 1) { x--; } } } }",
        );
        assert_eq!(metrics.nesting_depth, 3);
    }

    #[test]
    fn test_logical_operators_count() {
        let metrics = metrics_for("class A { boolean ok(int x) { return x > 0 && x < 10 || x == -1; } }");
        assert_eq!(metrics.branch_count, 2);
        assert_eq!(metrics.cyclomatic_complexity, 3);
    }

    #[test]
    fn test_switch_counts_cases_not_default() {
        let metrics = metrics_for(
            "class A { int pick(int x) { switch (x) { case 1: return 1; case 2: return 2; default: return 0; } } }",
        );
        assert_eq!(metrics.branch_count, 2);
    }

    #[test]
    fn test_catch_and_ternary() {
        let metrics = metrics_for(
            "class A { int run(int x) { try { return x > 0 ? 1 : 0; } catch (Exception e) { return -1; } } }",
        );
        assert_eq!(metrics.branch_count, 2);
    }
}
