//! Traversal engine: depth-first discovery of response emission sites.
//!
//! Walks a handler body in pre-order and reports every return statement
//! whose expression is a method call on the context binding. All failure
//! handling lives in the resolver; the walk itself never fails.

use crate::core::ast::HandlerNode;
use crate::core::errors::AnalyzeError;

/// Content type for every emission method except the binary-body one.
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";
/// Content type for the binary-body emission method.
pub(crate) const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Context method that emits a raw binary body.
const BINARY_BODY_METHOD: &str = "body";

/// One matched emission: a `return <ctx>.<method>(...)` site.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EmissionSite<'a> {
    pub body: Option<&'a HandlerNode>,
    pub status_code: Option<&'a HandlerNode>,
    pub headers: Option<&'a HandlerNode>,
    pub content_type: &'static str,
}

/// Walk `node` depth-first in pre-order, invoking `on_emission` once per
/// matched site.
///
/// Descent continues into every child unconditionally, including into a
/// matched return statement's own expression, so emission calls nested in
/// another emission's arguments are reported as additional sites.
pub(crate) fn visit<'a, F>(
    node: &'a HandlerNode,
    context_var: &str,
    on_emission: &mut F,
) -> Result<(), AnalyzeError>
where
    F: FnMut(EmissionSite<'a>) -> Result<(), AnalyzeError>,
{
    if let Some(site) = match_emission(node, context_var) {
        on_emission(site)?;
    }
    for child in node.children() {
        visit(child, context_var, on_emission)?;
    }
    Ok(())
}

/// Match `return <ctx>.<method>(body, status?, headers?)`.
///
/// The callee object must be an identifier whose text equals the context
/// variable name; any other return shape is skipped but still descended.
fn match_emission<'a>(node: &'a HandlerNode, context_var: &str) -> Option<EmissionSite<'a>> {
    let HandlerNode::Return {
        expression: Some(expression),
    } = node
    else {
        return None;
    };
    let HandlerNode::Call { callee, arguments } = expression.as_ref() else {
        return None;
    };
    let HandlerNode::PropertyAccess { object, property } = callee.as_ref() else {
        return None;
    };
    let HandlerNode::Identifier { name } = object.as_ref() else {
        return None;
    };
    if name != context_var {
        return None;
    }

    Some(EmissionSite {
        body: arguments.first(),
        status_code: arguments.get(1),
        headers: arguments.get(2),
        content_type: content_type_for(property),
    })
}

/// Classify the content type from the emission method name. Closed two-way
/// mapping: the binary-body method and everything else.
fn content_type_for(method: &str) -> &'static str {
    if method == BINARY_BODY_METHOD {
        CONTENT_TYPE_OCTET_STREAM
    } else {
        CONTENT_TYPE_JSON
    }
}
