//! Method extraction

use super::annotation::extract_annotation;
use super::parameter::extract_parameter;
use super::{annotation_nodes, classifier, location_of, modifier_string, node_text, statement};
use crate::ir::{IRMethodEntity, StaticCallEntity, TargetType};
use tree_sitter::Node;

/// Convert one method declaration into an [`IRMethodEntity`].
///
/// Besides the signature this collects every method invocation in the body
/// as a [`StaticCallEntity`] and runs the statement simplifier over the body
/// when one is present (interface methods may have none).
pub fn extract_method(node: Node, source: &str, file_path: &str) -> IRMethodEntity {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source))
        .unwrap_or_default();
    let return_type = node
        .child_by_field_name("type")
        .map(|n| node_text(n, source))
        .unwrap_or_else(|| "void".to_string());
    let modifiers = modifier_string(node, source);

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| {
            let mut cursor = params.walk();
            params
                .named_children(&mut cursor)
                .filter(|n| matches!(n.kind(), "formal_parameter" | "spread_parameter"))
                .map(|n| extract_parameter(n, source, file_path))
                .collect()
        })
        .unwrap_or_default();

    let classified = classifier::classify(
        annotation_nodes(node)
            .into_iter()
            .map(|a| extract_annotation(a, node, source, file_path, TargetType::Method))
            .collect(),
    );

    let body = node.child_by_field_name("body");
    let called_methods = body
        .map(|b| collect_calls(b, source, file_path))
        .unwrap_or_default();
    let low_level_ast = body.map(|b| statement::build_low_level_ast(b, source, file_path));

    IRMethodEntity {
        name,
        return_type,
        parameters,
        modifiers,
        annotations: classified.residual,
        features: classified.features,
        mappings: classified.mappings,
        called_methods,
        low_level_ast,
        source_location: location_of(node, file_path),
        embedding: None,
    }
}

fn collect_calls(node: Node, source: &str, file_path: &str) -> Vec<StaticCallEntity> {
    let mut calls = Vec::new();
    collect_calls_rec(node, source, file_path, &mut calls);
    calls
}

fn collect_calls_rec(node: Node, source: &str, file_path: &str, out: &mut Vec<StaticCallEntity>) {
    if node.kind() == "method_invocation" {
        let method_name = node
            .child_by_field_name("name")
            .map(|n| node_text(n, source))
            .unwrap_or_default();
        let arguments = node
            .child_by_field_name("arguments")
            .map(|args| {
                let mut cursor = args.walk();
                args.named_children(&mut cursor)
                    .map(|arg| node_text(arg, source))
                    .collect()
            })
            .unwrap_or_default();
        out.push(StaticCallEntity {
            method_name,
            arguments,
            source_location: location_of(node, file_path),
        });
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_calls_rec(child, source, file_path, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::java_ast::{AstOptions, JavaAst};

    fn method_for(source: &str) -> IRMethodEntity {
        let mut ast = JavaAst::new(AstOptions::default()).unwrap();
        let tree = ast.parse(source).unwrap();
        let class = tree.root_node().named_child(0).unwrap();
        let body = class.child_by_field_name("body").unwrap();
        let mut cursor = body.walk();
        let method = body
            .named_children(&mut cursor)
            .find(|n| n.kind() == "method_declaration")
            .unwrap();
        extract_method(method, source, "A.java")
    }

    #[test]
    fn test_signature_extraction() {
        let method = method_for("class A { public String greet(String name, int times) { return name; } }");
        assert_eq!(method.name, "greet");
        assert_eq!(method.return_type, "String");
        assert_eq!(method.modifiers, "public");
        assert_eq!(method.parameters.len(), 2);
        assert_eq!(method.parameters[0].name, "name");
        assert_eq!(method.parameters[1].param_type, "int");
    }

    #[test]
    fn test_called_methods_with_arguments() {
        let method = method_for(
            "class A { void run() { helper.process(a, 42); log(\"done\"); } }",
        );
        assert_eq!(method.called_methods.len(), 2);
        assert_eq!(method.called_methods[0].method_name, "process");
        assert_eq!(method.called_methods[0].arguments, vec!["a", "42"]);
        assert_eq!(method.called_methods[1].method_name, "log");
        assert_eq!(method.called_methods[1].arguments, vec!["\"done\""]);
    }

    #[test]
    fn test_nested_calls_are_found() {
        let method = method_for("class A { void run() { if (ok()) { inner(); } } }");
        let names: Vec<_> = method
            .called_methods
            .iter()
            .map(|c| c.method_name.as_str())
            .collect();
        assert!(names.contains(&"ok"));
        assert!(names.contains(&"inner"));
    }

    #[test]
    fn test_body_produces_low_level_ast() {
        let method = method_for("class A { void run() { int x = 1; } }");
        let ast = method.low_level_ast.unwrap();
        assert_eq!(ast.statements.len(), 1);
    }

    #[test]
    fn test_abstract_method_has_no_ast_or_calls() {
        let source = "interface A { String greet(String name); }";
        let mut ast = JavaAst::new(AstOptions::default()).unwrap();
        let tree = ast.parse(source).unwrap();
        let iface = tree.root_node().named_child(0).unwrap();
        let body = iface.child_by_field_name("body").unwrap();
        let mut cursor = body.walk();
        let method = body
            .named_children(&mut cursor)
            .find(|n| n.kind() == "method_declaration")
            .unwrap();
        let method = extract_method(method, source, "A.java");
        assert!(method.low_level_ast.is_none());
        assert!(method.called_methods.is_empty());
    }

    #[test]
    fn test_method_annotations_are_classified() {
        let method = method_for(
            "class A { @FathomMapping(toConcept = \"Audit\") @Override public void run() {} }",
        );
        assert_eq!(method.mappings.len(), 1);
        assert_eq!(method.mappings[0].to_concept, "Audit");
        assert_eq!(method.annotations.len(), 1);
        assert_eq!(method.annotations[0].name, "Override");
        assert_eq!(method.annotations[0].target_type, TargetType::Method);
    }
}
