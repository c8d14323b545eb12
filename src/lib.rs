//! Toggle Props: a boolean toggle that is either self-managed or driven by
//! its owner.
//!
//! The crate follows a "pure core, imperative shell" split. The core is a
//! pure reducer over a single `ToggleState`; the controller is the shell
//! that reconciles two operating modes behind one API:
//!
//! - **Uncontrolled**: the controller owns its state and applies every
//!   dispatched action to it.
//! - **Controlled**: the owner supplies the value (`on`) and is told about
//!   requested changes through `on_change`; the controller never applies
//!   them itself.
//!
//! Misuse of that contract (switching modes mid-lifetime, or a controlled
//! value with no change handler) is reported by the diagnostics module as
//! warnings and never changes behavior.
//!
//! # Core Concepts
//!
//! - **State**: [`ToggleState`], a single `on` flag
//! - **Reducer**: [`toggle_reducer`] or any [`Reducer`] supplied by the caller
//! - **Controller**: [`ToggleController`], configured by [`ControllerConfig`]
//! - **Diagnostics**: pure checks plus a per-controller dependency cache
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use toggle_props::{ControllerConfig, ToggleController};
//!
//! let owner_value = Rc::new(Cell::new(false));
//! let owner = owner_value.clone();
//!
//! let toggle = ToggleController::new(
//!     ControllerConfig::new()
//!         .controlled(owner_value.get())
//!         .on_change(move |next, _action| owner.set(next.on)),
//! );
//!
//! toggle.toggle().unwrap();
//! // The owner received the change; the controller still shows the old value
//! // until the owner feeds the new one back.
//! assert!(owner_value.get());
//! assert!(!toggle.current_on());
//!
//! toggle.update(
//!     ControllerConfig::new()
//!         .controlled(owner_value.get())
//!         .on_change(|_, _| {}),
//! );
//! assert!(toggle.current_on());
//! ```

pub mod controller;
pub mod core;
pub mod demo;
pub mod diagnostics;
pub mod widget;

// Re-export commonly used types
pub use crate::controller::{ControllerConfig, ToggleController};
pub use crate::core::{toggle_reducer, Reducer, ToggleAction, ToggleError, ToggleState};
pub use crate::diagnostics::{DiagnosticsConfig, DiagnosticsMode, UsageWarning};
