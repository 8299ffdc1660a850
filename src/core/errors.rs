//! Error types for the reagent clone-detection engine.
//!
//! The taxonomy mirrors the three error kinds the engine's contract names:
//! a [`ReagentError::UserInput`] for caller mistakes that must surface
//! unchanged to a boundary, a [`ReagentError::InvariantViolation`] for bugs
//! detected mid-algorithm, and thin I/O/serialization wrappers for the CLI
//! shell around the core. `ExternalFailure` (clone/pull, parsing, database)
//! is never constructed here — those collaborators are out of scope for this
//! crate and the core never catches their errors.

use std::io;

use thiserror::Error;

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, ReagentError>;

/// Errors raised by the clone-detection engine and its CLI shell.
#[derive(Error, Debug)]
pub enum ReagentError {
    /// The caller supplied something the system cannot satisfy: an empty
    /// repository, an unsupported (algorithm, repo-count) combination, or
    /// malformed configuration. Carries the process exit code the CLI
    /// boundary should use, following the original CLI's `ex.code`.
    #[error("{message}")]
    UserInput {
        /// Human-readable description of what was wrong.
        message: String,
        /// Exit code the CLI boundary should use when reporting this error.
        exit_code: i32,
    },

    /// An internal invariant was violated — e.g. anti-unification was asked
    /// to recurse on two nodes whose arity should have matched but didn't.
    /// Indicates a bug in the caller or the engine; analysis should stop.
    #[error("invariant violated: {message}")]
    InvariantViolation {
        /// Description of the violated invariant.
        message: String,
        /// Optional context, e.g. the node indices involved.
        context: Option<String>,
    },

    /// Malformed `IODINE_*` environment configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the problem.
        message: String,
        /// Name of the offending configuration field, if known.
        field: Option<String>,
    },

    /// I/O failure in the CLI shell (reading module files, writing results).
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable context.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON (de)serialization failure in the CLI shell.
    #[error("serialization error: {message}")]
    Serialization {
        /// Human-readable context.
        message: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl ReagentError {
    /// Construct a [`ReagentError::UserInput`] with the default exit code.
    pub fn user_input(message: impl Into<String>) -> Self {
        Self::UserInput {
            message: message.into(),
            exit_code: 1,
        }
    }

    /// Construct a [`ReagentError::UserInput`] with an explicit exit code.
    pub fn user_input_with_code(message: impl Into<String>, exit_code: i32) -> Self {
        Self::UserInput {
            message: message.into(),
            exit_code,
        }
    }

    /// Construct a [`ReagentError::InvariantViolation`] without context.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
            context: None,
        }
    }

    /// Construct a [`ReagentError::InvariantViolation`] with context.
    pub fn invariant_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Construct a [`ReagentError::Config`] error.
    pub fn config(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// The process exit code that should be used when reporting this error
    /// at the CLI boundary. Non-`UserInput` variants default to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UserInput { exit_code, .. } => *exit_code,
            _ => 1,
        }
    }
}

impl From<io::Error> for ReagentError {
    fn from(source: io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for ReagentError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON (de)serialization failed: {source}"),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_defaults_to_exit_code_one() {
        let err = ReagentError::user_input("empty repository");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn user_input_carries_explicit_exit_code() {
        let err = ReagentError::user_input_with_code("bad config", 2);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn other_variants_default_exit_code_to_one() {
        let err = ReagentError::invariant("arity mismatch");
        assert_eq!(err.exit_code(), 1);
    }
}
