//! Generic node tree consumed by the response analyzer.
//!
//! The analyzer interprets a small, closed set of node kinds; every other
//! construct is an uninterpreted subtree whose children are still visited.

use std::path::PathBuf;

use tree_sitter::Tree;

/// JavaScript/TypeScript language variants supported by the parser front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsLanguageVariant {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl JsLanguageVariant {
    /// Map a file extension to a language variant.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }
}

/// Parsed source artifact for a handler file or snippet.
#[derive(Clone, Debug)]
pub struct HandlerAst {
    pub tree: Tree,
    pub source: String,
    pub path: PathBuf,
    pub language_variant: JsLanguageVariant,
}

/// One node of the generic tree the analyzer walks.
///
/// `Other` covers every construct without a dedicated variant. Its `kind`
/// is the producing parser's node tag and `text` its source slice; the
/// analyzer reads neither, but an injected deriver may.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerNode {
    /// `return <expr>;` with `expression` absent for a bare `return;`.
    Return { expression: Option<Box<HandlerNode>> },
    /// `<callee>(<arguments>...)`
    Call {
        callee: Box<HandlerNode>,
        arguments: Vec<HandlerNode>,
    },
    /// `<object>.<property>`
    PropertyAccess {
        object: Box<HandlerNode>,
        property: String,
    },
    Identifier {
        name: String,
    },
    /// Numeric literal, source text kept verbatim.
    NumericLiteral {
        text: String,
    },
    /// Uninterpreted subtree.
    Other {
        kind: String,
        text: String,
        children: Vec<HandlerNode>,
    },
}

impl HandlerNode {
    /// `return <expr>;`
    pub fn ret(expression: HandlerNode) -> Self {
        HandlerNode::Return {
            expression: Some(Box::new(expression)),
        }
    }

    /// `return;` with no expression.
    pub fn bare_return() -> Self {
        HandlerNode::Return { expression: None }
    }

    /// `<callee>(<arguments>...)`
    pub fn call(callee: HandlerNode, arguments: Vec<HandlerNode>) -> Self {
        HandlerNode::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// `<object>.<property>`
    pub fn property(object: HandlerNode, property: impl Into<String>) -> Self {
        HandlerNode::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        HandlerNode::Identifier { name: name.into() }
    }

    pub fn number(text: impl Into<String>) -> Self {
        HandlerNode::NumericLiteral { text: text.into() }
    }

    /// Uninterpreted subtree with no source text attached.
    pub fn other(kind: impl Into<String>, children: Vec<HandlerNode>) -> Self {
        HandlerNode::Other {
            kind: kind.into(),
            text: String::new(),
            children,
        }
    }

    /// Child nodes in source order; leaf variants yield nothing.
    pub fn children(&self) -> Vec<&HandlerNode> {
        match self {
            HandlerNode::Return { expression } => {
                expression.iter().map(|expr| expr.as_ref()).collect()
            }
            HandlerNode::Call { callee, arguments } => std::iter::once(callee.as_ref())
                .chain(arguments.iter())
                .collect(),
            HandlerNode::PropertyAccess { object, .. } => vec![object.as_ref()],
            HandlerNode::Identifier { .. } | HandlerNode::NumericLiteral { .. } => Vec::new(),
            HandlerNode::Other { children, .. } => children.iter().collect(),
        }
    }

    /// Stable node-kind tag for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            HandlerNode::Return { .. } => "return_statement",
            HandlerNode::Call { .. } => "call_expression",
            HandlerNode::PropertyAccess { .. } => "member_expression",
            HandlerNode::Identifier { .. } => "identifier",
            HandlerNode::NumericLiteral { .. } => "number",
            HandlerNode::Other { kind, .. } => kind,
        }
    }
}

/// An anonymous route-handler function: parameter names plus body tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerFunction {
    /// Parameter names in declaration order; the first is the context
    /// binding through which response emission methods are invoked.
    pub parameters: Vec<String>,
    pub body: HandlerNode,
}

impl HandlerFunction {
    pub fn new(parameters: Vec<String>, body: HandlerNode) -> Self {
        Self { parameters, body }
    }

    /// Name of the context binding, when the handler declares one.
    pub fn context_var_name(&self) -> Option<&str> {
        self.parameters.first().map(String::as_str)
    }
}
