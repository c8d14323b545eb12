//! Core toggle types and logic.
//!
//! This module contains the pure functional core:
//! - the `ToggleState` value and `ToggleAction` descriptors
//! - the built-in reducer and the `Reducer` wrapper for custom ones
//! - the immutable transition log
//!
//! Nothing in here has side effects; the controller is the imperative shell.

mod action;
mod error;
mod history;
mod id;
mod reducer;
mod state;

pub use action::{is_reserved, ToggleAction, RESET, TOGGLE};
pub use error::ToggleError;
pub use history::{ToggleTransition, TransitionLog};
pub use id::ControllerId;
pub use reducer::{toggle_reducer, Reducer};
pub use state::ToggleState;
