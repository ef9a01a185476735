//! Static route-handler response analysis.
//!
//! `respmap` walks a route handler's AST and extracts one descriptor per
//! response the handler can emit (status code, content type, declared
//! header names, and body shape) so SDK and type-generation pipelines can
//! synthesize accurate client types without executing the handler.
//!
//! The analyzer core operates on a generic node tree and is parser
//! agnostic; a tree-sitter front end for JavaScript/TypeScript sources is
//! included in [`parsers`]. Body and header shapes are delegated to a
//! caller-injected [`TypeDeriver`].
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use respmap::{analyze_handler, parsers, LiteralShapeDeriver};
//!
//! let source = r#"(c) => {
//!     if (!valid) {
//!         return c.json({ message: 'invalid' }, 400);
//!     }
//!     return c.json({ ok: true });
//! }"#;
//!
//! let handler = parsers::parse_handler(source, Path::new("route.ts"))?;
//! let responses = analyze_handler(&handler, &LiteralShapeDeriver)?;
//!
//! assert_eq!(responses.len(), 2);
//! assert_eq!(responses[0].status_code, "400");
//! assert_eq!(responses[1].status_code, "200");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analyzers;
pub mod core;
pub mod deriver;
pub mod parsers;

// Re-export commonly used types
pub use crate::analyzers::{analyze_handler, analyze_handlers};
pub use crate::core::ast::{HandlerAst, HandlerFunction, HandlerNode, JsLanguageVariant};
pub use crate::core::errors::AnalyzeError;
pub use crate::core::{ResponseItem, ShapeDescription};
pub use crate::deriver::{LiteralShapeDeriver, TypeDeriver};
