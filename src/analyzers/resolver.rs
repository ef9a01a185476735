//! Response resolver: turns one matched emission site into a descriptor.

use crate::core::ast::HandlerNode;
use crate::core::errors::AnalyzeError;
use crate::core::{ResponseItem, ShapeDescription};
use crate::deriver::TypeDeriver;

use super::traversal::EmissionSite;

/// Status code used when an emission omits the status argument.
const DEFAULT_STATUS_CODE: &str = "200";

/// Resolve one emission site into a [`ResponseItem`].
///
/// Status resolution runs before the deriver so a non-literal status is
/// reported even when shape derivation would also fail. Deriver failures
/// propagate unmodified.
pub(crate) fn resolve_emission(
    site: EmissionSite<'_>,
    deriver: &dyn TypeDeriver,
) -> Result<ResponseItem, AnalyzeError> {
    let body = site.body.ok_or(AnalyzeError::MissingBodyArgument)?;

    let status_code = match site.status_code {
        Some(node) => resolve_status_code(node)?,
        None => DEFAULT_STATUS_CODE.to_string(),
    };
    let headers = match site.headers {
        Some(node) => header_names(deriver.serialize_node(node)?),
        None => Vec::new(),
    };

    Ok(ResponseItem {
        status_code,
        content_type: site.content_type.to_string(),
        headers,
        response: deriver.serialize_node(body)?,
    })
}

/// Top-level key set of a headers shape.
fn header_names(shape: ShapeDescription) -> Vec<String> {
    shape.keys().cloned().collect()
}

/// A status argument must be a numeric literal; its text is taken
/// verbatim. Anything else is a hard failure, never a guess.
fn resolve_status_code(node: &HandlerNode) -> Result<String, AnalyzeError> {
    match node {
        HandlerNode::NumericLiteral { text } => Ok(text.clone()),
        other => Err(AnalyzeError::UnresolvableStatusCode {
            found: other.kind_name().to_string(),
        }),
    }
}
