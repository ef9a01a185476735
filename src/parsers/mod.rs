//! Tree-sitter front end for JavaScript/TypeScript handler sources.
//!
//! Parsing and lowering into the generic node tree live here; the
//! analyzer core never touches tree-sitter types, so callers with their
//! own parser can skip this module entirely and build
//! [`HandlerFunction`](crate::core::ast::HandlerFunction) trees directly.

mod lower;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, debug_span};
use tree_sitter::{Language as TsLanguage, Parser, Tree};

use crate::core::ast::{HandlerAst, HandlerFunction, JsLanguageVariant};

pub use lower::extract_handler;

/// Tree-sitter grammar for a language variant.
fn get_language(variant: JsLanguageVariant) -> TsLanguage {
    match variant {
        JsLanguageVariant::JavaScript | JsLanguageVariant::Jsx => {
            tree_sitter_javascript::LANGUAGE.into()
        }
        JsLanguageVariant::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        JsLanguageVariant::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse JavaScript/TypeScript source into a handler parse artifact.
pub fn parse_source(content: &str, path: &Path, variant: JsLanguageVariant) -> Result<HandlerAst> {
    let _span = debug_span!("parse_source", path = %path.display()).entered();

    let mut parser = Parser::new();
    let language = get_language(variant);

    parser
        .set_language(&language)
        .context("Failed to set tree-sitter language")?;

    let tree = parser
        .parse(content, None)
        .context("Failed to parse source code")?;

    debug!(bytes = content.len(), "Parsed handler source");

    Ok(HandlerAst {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
        language_variant: variant,
    })
}

/// Determine the language variant from a file path, defaulting to plain
/// JavaScript when the extension is missing or unknown.
pub fn detect_variant(path: &Path) -> JsLanguageVariant {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(JsLanguageVariant::from_extension)
        .unwrap_or(JsLanguageVariant::JavaScript)
}

/// Whether the parse tree contains syntax errors.
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Source slice covered by a tree-sitter node.
pub fn node_text<'a>(node: &tree_sitter::Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// 1-indexed line of a tree-sitter node.
pub fn node_line(node: &tree_sitter::Node) -> usize {
    node.start_position().row + 1
}

/// Parse a handler snippet and lower the first function it contains.
///
/// Convenience entry for the common case: language variant from the path
/// extension, syntax errors rejected up front.
pub fn parse_handler(content: &str, path: &Path) -> Result<HandlerFunction> {
    let ast = parse_source(content, path, detect_variant(path))?;
    if has_parse_errors(&ast.tree) {
        bail!("handler source {} contains syntax errors", path.display());
    }
    extract_handler(&ast)
}
