//! Lowering from tree-sitter parse trees into the generic node tree.

use anyhow::{bail, Result};
use tracing::debug;
use tree_sitter::Node;

use crate::core::ast::{HandlerAst, HandlerFunction, HandlerNode};

use super::{node_line, node_text};

/// Locate the first function-like node in the parse tree and lower it.
///
/// Route handlers are arrow functions or anonymous function expressions;
/// the first one in document order is taken as the handler.
pub fn extract_handler(ast: &HandlerAst) -> Result<HandlerFunction> {
    let root = ast.tree.root_node();
    let Some(func) = find_function(&root) else {
        bail!("no handler function found in {}", ast.path.display());
    };

    debug!(
        line = node_line(&func),
        kind = func.kind(),
        "Found handler function"
    );

    let parameters = parameter_names(&func, &ast.source);
    let body = match func.child_by_field_name("body") {
        Some(body) => lower_node(&body, &ast.source),
        None => bail!("handler function in {} has no body", ast.path.display()),
    };

    Ok(HandlerFunction::new(parameters, body))
}

/// Depth-first search for the first arrow function or function expression.
fn find_function<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    if matches!(
        node.kind(),
        "arrow_function" | "function_expression" | "function"
    ) {
        return Some(*node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_function(&child) {
            return Some(found);
        }
    }
    None
}

/// Parameter names in declaration order.
///
/// Unparenthesized arrow parameters sit under the `parameter` field;
/// parenthesized lists under `parameters`. TypeScript wraps each entry in
/// a required/optional parameter node whose `pattern` carries the name.
fn parameter_names(func: &Node, source: &str) -> Vec<String> {
    if let Some(single) = func.child_by_field_name("parameter") {
        return vec![node_text(&single, source).to_string()];
    }
    let Some(list) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };
    named_children(&list)
        .iter()
        .filter(|param| param.kind() != "comment")
        .map(|param| {
            let name = param.child_by_field_name("pattern").unwrap_or(*param);
            node_text(&name, source).to_string()
        })
        .collect()
}

/// Lower one tree-sitter node into the generic tree.
///
/// Only the kinds the analyzer interprets get dedicated variants; every
/// other construct becomes an uninterpreted subtree over its named
/// children, keeping its source slice for the deriver's benefit.
fn lower_node(node: &Node, source: &str) -> HandlerNode {
    match node.kind() {
        "return_statement" => {
            let expression = named_children(node)
                .into_iter()
                .find(|child| child.kind() != "comment")
                .map(|expr| Box::new(lower_node(&expr, source)));
            HandlerNode::Return { expression }
        }
        "call_expression" => lower_call(node, source),
        "member_expression" => lower_member(node, source),
        "identifier" => HandlerNode::Identifier {
            name: node_text(node, source).to_string(),
        },
        "number" => HandlerNode::NumericLiteral {
            text: node_text(node, source).to_string(),
        },
        _ => lower_other(node, source),
    }
}

fn lower_call(node: &Node, source: &str) -> HandlerNode {
    let (Some(callee), Some(args)) = (
        node.child_by_field_name("function"),
        node.child_by_field_name("arguments"),
    ) else {
        return lower_other(node, source);
    };
    // Tagged templates parse as call_expression with a template argument;
    // they are not emission calls, so they stay uninterpreted.
    if args.kind() != "arguments" {
        return lower_other(node, source);
    }

    let arguments = named_children(&args)
        .iter()
        .filter(|arg| arg.kind() != "comment")
        .map(|arg| lower_node(arg, source))
        .collect();

    HandlerNode::Call {
        callee: Box::new(lower_node(&callee, source)),
        arguments,
    }
}

fn lower_member(node: &Node, source: &str) -> HandlerNode {
    let (Some(object), Some(property)) = (
        node.child_by_field_name("object"),
        node.child_by_field_name("property"),
    ) else {
        return lower_other(node, source);
    };
    HandlerNode::PropertyAccess {
        object: Box::new(lower_node(&object, source)),
        property: node_text(&property, source).to_string(),
    }
}

fn lower_other(node: &Node, source: &str) -> HandlerNode {
    HandlerNode::Other {
        kind: node.kind().to_string(),
        text: node_text(node, source).to_string(),
        children: named_children(node)
            .iter()
            .map(|child| lower_node(child, source))
            .collect(),
    }
}

fn named_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::JsLanguageVariant;
    use crate::parsers::parse_source;
    use std::path::Path;

    fn lower_handler(source: &str) -> HandlerFunction {
        let ast = parse_source(source, Path::new("route.ts"), JsLanguageVariant::TypeScript)
            .unwrap();
        extract_handler(&ast).unwrap()
    }

    #[test]
    fn test_extracts_arrow_parameters() {
        let handler = lower_handler("(c, next) => { return; }");
        assert_eq!(handler.parameters, ["c", "next"]);
    }

    #[test]
    fn test_extracts_unparenthesized_parameter() {
        let handler = lower_handler("c => { return; }");
        assert_eq!(handler.parameters, ["c"]);
    }

    #[test]
    fn test_type_annotations_do_not_leak_into_names() {
        let handler = lower_handler("(c: Context, next: Next) => { return; }");
        assert_eq!(handler.parameters, ["c", "next"]);
    }

    #[test]
    fn test_lowers_emission_return() {
        let handler = lower_handler("(c) => { return c.json(payload, 404); }");

        let HandlerNode::Other { kind, children, .. } = &handler.body else {
            panic!("expected statement block, got {:?}", handler.body);
        };
        assert_eq!(kind, "statement_block");

        let HandlerNode::Return {
            expression: Some(expression),
        } = &children[0]
        else {
            panic!("expected return statement, got {:?}", children[0]);
        };
        let HandlerNode::Call { callee, arguments } = expression.as_ref() else {
            panic!("expected call expression");
        };
        let HandlerNode::PropertyAccess { object, property } = callee.as_ref() else {
            panic!("expected member callee");
        };

        assert_eq!(**object, HandlerNode::ident("c"));
        assert_eq!(property, "json");
        assert_eq!(arguments[0], HandlerNode::ident("payload"));
        assert_eq!(arguments[1], HandlerNode::number("404"));
    }

    #[test]
    fn test_bare_return_has_no_expression() {
        let handler = lower_handler("(c) => { return; }");
        let HandlerNode::Other { children, .. } = &handler.body else {
            panic!("expected statement block");
        };
        assert_eq!(children[0], HandlerNode::bare_return());
    }

    #[test]
    fn test_uninterpreted_nodes_keep_kind_and_text() {
        let handler = lower_handler("(c) => { return c.json({ ok: true }); }");

        let mut objects = Vec::new();
        collect_kind(&handler.body, "object", &mut objects);
        assert_eq!(objects.len(), 1);

        let HandlerNode::Other { text, .. } = objects[0] else {
            unreachable!();
        };
        assert_eq!(text, "{ ok: true }");
    }

    #[test]
    fn test_function_expression_handler() {
        let handler = lower_handler("const h = function (ctx) { return ctx.json(x); };");
        assert_eq!(handler.parameters, ["ctx"]);
    }

    #[test]
    fn test_no_function_is_an_error() {
        let ast = parse_source(
            "const x = 42;",
            Path::new("route.ts"),
            JsLanguageVariant::TypeScript,
        )
        .unwrap();
        assert!(extract_handler(&ast).is_err());
    }

    fn collect_kind<'a>(node: &'a HandlerNode, kind: &str, out: &mut Vec<&'a HandlerNode>) {
        if let HandlerNode::Other { kind: k, .. } = node {
            if k == kind {
                out.push(node);
            }
        }
        for child in node.children() {
            collect_kind(child, kind, out);
        }
    }
}
