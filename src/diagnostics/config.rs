//! Diagnostics configuration.

use crate::diagnostics::sink::{TracingSink, WarningSink};
use crate::diagnostics::warnings::PropNames;
use std::fmt;
use std::rc::Rc;

/// Whether usage checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsMode {
    /// Run the checks and report warnings
    Development,

    /// Skip the checks entirely
    Production,
}

impl Default for DiagnosticsMode {
    /// `Development` in debug builds, `Production` otherwise.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Diagnostics settings of one controller, fixed at creation.
#[derive(Clone)]
pub struct DiagnosticsConfig {
    pub mode: DiagnosticsMode,
    pub names: PropNames,
    pub sink: Rc<dyn WarningSink>,
}

impl DiagnosticsConfig {
    /// Checks enabled, warnings logged through `tracing`.
    pub fn development() -> Self {
        Self {
            mode: DiagnosticsMode::Development,
            ..Self::default()
        }
    }

    /// Checks disabled.
    pub fn production() -> Self {
        Self {
            mode: DiagnosticsMode::Production,
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: DiagnosticsMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn names(mut self, names: PropNames) -> Self {
        self.names = names;
        self
    }

    /// Send warnings to `sink` instead of `tracing`.
    pub fn sink(mut self, sink: impl WarningSink + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.mode == DiagnosticsMode::Development
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            mode: DiagnosticsMode::default(),
            names: PropNames::default(),
            sink: Rc::new(TracingSink),
        }
    }
}

impl fmt::Debug for DiagnosticsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsConfig")
            .field("mode", &self.mode)
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
