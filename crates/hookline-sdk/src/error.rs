//! Error types shared by hookline hosts and the engine

/// Argument conversion errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Type mismatch during conversion
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: &'static str,
        /// Actual type name
        got: &'static str,
    },

    /// Positional argument not supplied
    #[error("Missing argument at index {index}")]
    MissingArgument {
        /// Zero-based argument index
        index: usize,
    },
}

/// A named operation could not be resolved on a class at call time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("undefined operation `{operation}` for {class}")]
pub struct NoMethodError {
    /// Class the lookup ran against
    pub class: String,
    /// Operation name that was not found
    pub operation: String,
}

impl NoMethodError {
    /// Create a new error for `operation` on `class`
    pub fn new(class: impl Into<String>, operation: impl Into<String>) -> Self {
        NoMethodError {
            class: class.into(),
            operation: operation.into(),
        }
    }
}

/// Default error type for host operations and advice.
///
/// Hosts with their own error enum only need `From<NoMethodError>`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Named operation could not be resolved
    #[error(transparent)]
    NoMethod(#[from] NoMethodError),

    /// Argument conversion failed
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Raised by host code
    #[error("{0}")]
    Raised(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Raised(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Raised(s.to_string())
    }
}
