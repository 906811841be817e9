//! Engine error types.

use crate::registry::Phase;

/// Errors raised while defining a class. Never raised by dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A `*_defined` registration (or strict declaration order) named an
    /// operation that has not been defined yet
    #[error("`{operation}` is not or not yet defined for {class}")]
    OperationNotDefined {
        /// Class being defined
        class: String,
        /// Operation the advice was registered for
        operation: String,
    },

    /// A named advice handler does not resolve to any operation
    #[error("{phase} advice for `{operation}` on {class} names unknown operation `{handler}`")]
    UnknownHandler {
        /// Class being defined
        class: String,
        /// Operation the advice was registered for
        operation: String,
        /// Phase of the advice
        phase: Phase,
        /// Unresolved handler name
        handler: String,
    },

    /// A named guard does not resolve to any operation
    #[error("{phase} advice for `{operation}` on {class} has guard naming unknown operation `{guard}`")]
    UnknownGuard {
        /// Class being defined
        class: String,
        /// Operation the advice was registered for
        operation: String,
        /// Phase of the advice
        phase: Phase,
        /// Unresolved guard name
        guard: String,
    },
}

/// Errors that can occur while loading class options
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// Failed to parse TOML
    #[error("Failed to parse class options: {0}")]
    Parse(#[from] toml::de::Error),
}
