//! Errors raised while dispatching actions.

use thiserror::Error;

/// Errors that abort a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The reducer received an action it does not understand. This is a
    /// programmer error and is never swallowed.
    #[error("Unsupported action type: {kind}")]
    UnsupportedActionKind { kind: String },

    /// A custom action claimed the tag of a built-in one.
    #[error("Action type `{kind}` is reserved for the built-in action")]
    ReservedActionKind { kind: String },
}
