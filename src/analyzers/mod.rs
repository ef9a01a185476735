//! Handler response analysis.
//!
//! A single synchronous pass over a handler's body tree discovers every
//! response the handler can emit and resolves each into a
//! [`ResponseItem`]: the traversal engine finds `return <ctx>.<method>(...)`
//! sites, the resolver turns each site into a descriptor via the injected
//! [`TypeDeriver`].
//!
//! Analyses are pure and independent: nothing is shared between calls, so
//! many handlers can be analyzed in parallel (see [`analyze_handlers`]).

mod resolver;
mod traversal;

use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::core::ast::HandlerFunction;
use crate::core::errors::AnalyzeError;
use crate::core::ResponseItem;
use crate::deriver::TypeDeriver;

/// Extract every response `handler` can emit, in source order.
///
/// The handler's first parameter names the context binding; a return
/// statement calling a method on that binding is one emission site. The
/// caller receives either a complete descriptor list or the first
/// failure, never a partial list.
pub fn analyze_handler(
    handler: &HandlerFunction,
    deriver: &dyn TypeDeriver,
) -> Result<Vec<ResponseItem>, AnalyzeError> {
    let context_var = handler
        .context_var_name()
        .ok_or(AnalyzeError::MissingContextParameter)?;
    let _span = debug_span!("analyze_handler", context = context_var).entered();

    let mut responses = Vec::new();
    traversal::visit(&handler.body, context_var, &mut |site| {
        responses.push(resolver::resolve_emission(site, deriver)?);
        Ok(())
    })?;

    debug!(responses = responses.len(), "Handler analysis complete");
    Ok(responses)
}

/// Analyze independent handlers in parallel.
///
/// Each analysis owns its call stack and accumulator, so handlers
/// distribute freely across rayon workers. The first failing handler
/// aborts the batch.
pub fn analyze_handlers<D>(
    handlers: &[HandlerFunction],
    deriver: &D,
) -> Result<Vec<Vec<ResponseItem>>, AnalyzeError>
where
    D: TypeDeriver + Sync,
{
    handlers
        .par_iter()
        .map(|handler| analyze_handler(handler, deriver))
        .collect()
}
