//! Controller configuration.

use crate::core::{Reducer, ToggleAction, ToggleError, ToggleState};
use crate::diagnostics::DiagnosticsConfig;
use std::fmt;
use std::rc::Rc;

/// Receives the predicted next state and the action that produced it.
pub type ChangeHandler = Rc<dyn Fn(&ToggleState, &ToggleAction)>;

/// Configuration ("props") of a toggle controller.
///
/// | Field | Default |
/// |---|---|
/// | `initial_on` | `false` |
/// | `reducer` | [`toggle_reducer`](crate::core::toggle_reducer) |
/// | `on_change` | none |
/// | `on` | none (uncontrolled) |
/// | `read_only` | `false` |
/// | `diagnostics` | [`DiagnosticsConfig::default`] |
///
/// `initial_on` and `diagnostics` are read only when the controller is
/// created; later configurations passed to
/// [`ToggleController::update`](super::ToggleController::update) cannot
/// change them.
///
/// # Example
///
/// ```rust
/// use toggle_props::controller::ControllerConfig;
///
/// let config = ControllerConfig::new()
///     .on(Some(true))
///     .on_change(|state, action| println!("{action:?} -> {state}"));
///
/// assert!(config.is_controlled());
/// assert!(config.on_change.is_some());
/// ```
#[derive(Clone, Default)]
pub struct ControllerConfig {
    pub initial_on: bool,
    pub reducer: Reducer,
    pub on_change: Option<ChangeHandler>,
    /// Controlled value; `None` leaves the controller uncontrolled
    pub on: Option<bool>,
    pub read_only: bool,
    pub diagnostics: DiagnosticsConfig,
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_on(mut self, initial_on: bool) -> Self {
        self.initial_on = initial_on;
        self
    }

    pub fn reducer(mut self, reducer: Reducer) -> Self {
        self.reducer = reducer;
        self
    }

    /// Use a closure as reducer.
    pub fn reduce_with<F>(self, reduce: F) -> Self
    where
        F: Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, ToggleError> + 'static,
    {
        self.reducer(Reducer::new(reduce))
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ToggleState, &ToggleAction) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Set or clear an already shared handler.
    pub fn on_change_handler(mut self, handler: Option<ChangeHandler>) -> Self {
        self.on_change = handler;
        self
    }

    /// Set the controlled value. `None` means uncontrolled.
    pub fn on(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    /// Shorthand for `on(Some(value))`.
    pub fn controlled(self, value: bool) -> Self {
        self.on(Some(value))
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.on.is_some()
    }
}

impl fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("initial_on", &self.initial_on)
            .field("on", &self.on)
            .field("on_change", &self.on_change.is_some())
            .field("read_only", &self.read_only)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}
