//! Type-derivation seam.
//!
//! Deriving the structural type of a body or headers expression is
//! delegated to the caller through [`TypeDeriver`]; the analyzer only
//! decides which node to hand over and when. A reference implementation
//! for object-literal bodies lives in [`literal`].

pub mod literal;

use anyhow::Result;

use crate::core::ast::HandlerNode;
use crate::core::ShapeDescription;

pub use literal::LiteralShapeDeriver;

/// Caller-supplied capability summarizing a node's structural type.
pub trait TypeDeriver {
    /// Summarize `node` as a field-name → type mapping.
    ///
    /// Failures propagate out of the analysis unmodified; the analyzer
    /// never inspects the mapping's values, only its key set for headers.
    fn serialize_node(&self, node: &HandlerNode) -> Result<ShapeDescription>;
}
