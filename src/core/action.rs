//! Action descriptors consumed by reducers.

use super::error::ToggleError;
use super::state::ToggleState;
use serde::{Deserialize, Serialize};

/// Tag of the built-in toggle action.
pub const TOGGLE: &str = "toggle";

/// Tag of the built-in reset action.
pub const RESET: &str = "reset";

/// An action dispatched to a toggle controller.
///
/// Serialized with an internal `type` tag, so `Toggle` becomes
/// `{"type":"toggle"}`.
///
/// `Custom` actions exist for user-supplied reducers. The built-in
/// [`toggle_reducer`](super::toggle_reducer) rejects them. Their kind must
/// not be one of the built-in tags ([`TOGGLE`], [`RESET`]).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToggleAction {
    /// Flip the state.
    Toggle,

    /// Return to the state captured when the controller was created.
    Reset { initial_state: ToggleState },

    /// Any other action, understood only by custom reducers.
    Custom {
        kind: String,
        #[serde(default)]
        payload: serde_json::Value,
    },
}

impl ToggleAction {
    /// Create a custom action without payload.
    ///
    /// Fails with [`ToggleError::ReservedActionKind`] for `"toggle"` and
    /// `"reset"`, which belong to the built-in variants.
    pub fn custom(kind: impl Into<String>) -> Result<Self, ToggleError> {
        let kind = kind.into();
        if is_reserved(&kind) {
            return Err(ToggleError::ReservedActionKind { kind });
        }
        Ok(Self::Custom {
            kind,
            payload: serde_json::Value::Null,
        })
    }

    /// The action's tag.
    pub fn kind(&self) -> &str {
        match self {
            Self::Toggle => TOGGLE,
            Self::Reset { .. } => RESET,
            Self::Custom { kind, .. } => kind,
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, Self::Toggle)
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset { .. })
    }
}

/// Whether `kind` is the tag of a built-in action.
pub fn is_reserved(kind: &str) -> bool {
    kind == TOGGLE || kind == RESET
}
