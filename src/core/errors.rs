//! Shared error types for handler analysis.

use thiserror::Error;

/// Failures raised while resolving response emission sites.
///
/// Every variant aborts the whole handler analysis; a partial descriptor
/// list is never returned.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// A status-code argument was present but is not a numeric literal.
    #[error("could not resolve status code: expected numeric literal, found {found}")]
    UnresolvableStatusCode { found: String },

    /// A matched emission call carried no body argument.
    #[error("response emission call has no body argument")]
    MissingBodyArgument,

    /// The handler declares no parameters, so no context binding exists.
    #[error("handler declares no context parameter")]
    MissingContextParameter,

    /// Failure from the injected type deriver, passed through untouched.
    #[error(transparent)]
    Deriver(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_status_code_names_the_node_kind() {
        let err = AnalyzeError::UnresolvableStatusCode {
            found: "identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not resolve status code: expected numeric literal, found identifier"
        );
    }

    #[test]
    fn test_deriver_errors_pass_through_unmodified() {
        let err: AnalyzeError = anyhow::anyhow!("shape derivation exploded").into();
        assert_eq!(err.to_string(), "shape derivation exploded");
    }
}
