//! The toggle state value.
//!
//! `ToggleState` is the only domain value of the crate. It is an immutable
//! `Copy` value; every transition produces a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a boolean toggle.
///
/// # Example
///
/// ```rust
/// use toggle_props::core::ToggleState;
///
/// let state = ToggleState::new(true);
/// assert!(state.on);
/// assert_eq!(state.flipped(), ToggleState::OFF);
/// assert_eq!(state.name(), "on");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ToggleState {
    /// Whether the toggle is on.
    pub on: bool,
}

impl ToggleState {
    /// The `on = false` state.
    pub const OFF: Self = Self { on: false };

    /// The `on = true` state.
    pub const ON: Self = Self { on: true };

    /// Create a state with the given `on` value.
    pub const fn new(on: bool) -> Self {
        Self { on }
    }

    /// Return the opposite state (pure).
    pub const fn flipped(self) -> Self {
        Self { on: !self.on }
    }

    /// Copy of this state with `on` replaced.
    pub const fn with_on(self, on: bool) -> Self {
        Self { on }
    }

    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        if self.on {
            "on"
        } else {
            "off"
        }
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        Self::new(on)
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
