//! Destinations for usage warnings.

use crate::core::ControllerId;
use crate::diagnostics::warnings::UsageWarning;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Receives every warning a controller raises.
pub trait WarningSink {
    fn warn(&self, controller: ControllerId, warning: &UsageWarning);
}

/// Logs warnings through `tracing` at `WARN` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, controller: ControllerId, warning: &UsageWarning) {
        tracing::warn!(
            controller_id = %controller,
            warning = warning.kind(),
            "{warning}"
        );
    }
}

/// Keeps warnings in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// controller and inspect another.
///
/// # Example
///
/// ```rust
/// use toggle_props::controller::{ControllerConfig, ToggleController};
/// use toggle_props::diagnostics::{CollectingSink, DiagnosticsConfig};
///
/// let sink = CollectingSink::new();
/// let config = ControllerConfig::new()
///     .on(Some(true))
///     .diagnostics(DiagnosticsConfig::development().sink(sink.clone()));
///
/// let _controller = ToggleController::new(config);
/// assert_eq!(sink.count("read_only_without_on_change"), 1);
/// ```
#[derive(Clone, Default)]
pub struct CollectingSink {
    warnings: Rc<RefCell<Vec<(ControllerId, UsageWarning)>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings received so far, oldest first.
    pub fn warnings(&self) -> Vec<UsageWarning> {
        self.warnings
            .borrow()
            .iter()
            .map(|(_, warning)| warning.clone())
            .collect()
    }

    /// Warnings raised by one controller.
    pub fn warnings_for(&self, controller: ControllerId) -> Vec<UsageWarning> {
        self.warnings
            .borrow()
            .iter()
            .filter(|(id, _)| *id == controller)
            .map(|(_, warning)| warning.clone())
            .collect()
    }

    /// Number of warnings of the given kind.
    pub fn count(&self, kind: &str) -> usize {
        self.warnings
            .borrow()
            .iter()
            .filter(|(_, warning)| warning.kind() == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.warnings.borrow_mut().clear();
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, controller: ControllerId, warning: &UsageWarning) {
        self.warnings.borrow_mut().push((controller, warning.clone()));
    }
}

impl fmt::Debug for CollectingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectingSink")
            .field("warnings", &self.len())
            .finish()
    }
}
