use anyhow::{Context, Result};
use tree_sitter::{Node, Parser, Tree};

/// Best-effort parsing options for the AST adapter.
///
/// Mirrors the adapter's recognized configuration: no classpath resolution,
/// syntax errors degrade to warnings, imports resolved automatically where
/// possible. Tree-sitter is classpath-free and error-tolerant by nature, so
/// the first and last flags are honored implicitly; `ignore_syntax_errors`
/// controls whether a tree containing error nodes is still accepted.
#[derive(Debug, Clone)]
pub struct AstOptions {
    pub no_classpath_resolution: bool,
    pub ignore_syntax_errors: bool,
    pub auto_imports: bool,
}

impl Default for AstOptions {
    fn default() -> Self {
        Self {
            no_classpath_resolution: true,
            ignore_syntax_errors: true,
            auto_imports: true,
        }
    }
}

/// AST adapter for Java sources
pub struct JavaAst {
    parser: Parser,
    options: AstOptions,
}

impl JavaAst {
    pub fn new(options: AstOptions) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .context("Failed to set parser language")?;
        Ok(Self { parser, options })
    }

    /// Parse one file's text into a typed syntax tree
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .context("Parser produced no tree")?;

        if tree.root_node().has_error() {
            if self.options.ignore_syntax_errors {
                tracing::warn!("Source contains syntax errors, continuing best-effort");
            } else {
                anyhow::bail!("source contains syntax errors");
            }
        }

        Ok(tree)
    }
}

/// Collect every class and interface declaration in the tree, including
/// nested types, in document order.
pub fn collect_type_declarations(root: Node) -> Vec<Node> {
    let mut declarations = Vec::new();
    collect_types_rec(root, &mut declarations);
    declarations
}

fn collect_types_rec<'tree>(node: Node<'tree>, out: &mut Vec<Node<'tree>>) {
    if matches!(node.kind(), "class_declaration" | "interface_declaration") {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_types_rec(child, out);
    }
}

/// Read the package name declared at the top of a compilation unit,
/// returning an empty string when there is none.
pub fn package_name(root: Node, source: &str) -> String {
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "package_declaration" {
            let mut inner = child.walk();
            for part in child.named_children(&mut inner) {
                if matches!(part.kind(), "scoped_identifier" | "identifier") {
                    return part
                        .utf8_text(source.as_bytes())
                        .unwrap_or_default()
                        .to_string();
                }
            }
        }
    }
    String::new()
}
