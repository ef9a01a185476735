//! Core data model: response descriptors and shape descriptions.

pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};

/// Structural-type summary produced by the injected deriver: a mapping of
/// field names to opaque type representations. The analyzer reads its key
/// set for headers and stores its raw value for bodies, nothing more.
pub type ShapeDescription = serde_json::Map<String, serde_json::Value>;

/// Normalized record of one response emission site.
///
/// Serializes in camelCase to match the descriptor shape the SDK pipeline
/// consumes downstream.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    /// Decimal status code text, `"200"` when the emission omits it.
    pub status_code: String,
    /// MIME type classified from the emission method name.
    pub content_type: String,
    /// Top-level header names declared by the emission; order irrelevant.
    pub headers: Vec<String>,
    /// Body shape, stored verbatim from the deriver.
    pub response: ShapeDescription,
}
