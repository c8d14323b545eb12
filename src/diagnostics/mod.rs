//! Usage diagnostics for toggle controllers.
//!
//! Two contract violations are detected:
//!
//! - switching between controlled and uncontrolled mode during a
//!   controller's lifetime;
//! - supplying a controlled value without a change handler and without
//!   marking the toggle read-only.
//!
//! The checks themselves are pure functions returning a `Validation`, so
//! every violation of an evaluation is collected at once. [`Diagnostics`]
//! wraps them with a previous-value cache per check; the [`Evaluation`] it
//! returns forwards warnings to a [`WarningSink`] when reported. Warnings
//! never change controller behavior.
//!
//! # Example
//!
//! ```rust
//! use toggle_props::core::ControllerId;
//! use toggle_props::diagnostics::{
//!     CollectingSink, DiagnosticInputs, Diagnostics, DiagnosticsConfig,
//! };
//!
//! let sink = CollectingSink::new();
//! let mut diagnostics = Diagnostics::new(
//!     ControllerId::new(),
//!     DiagnosticsConfig::development().sink(sink.clone()),
//! );
//!
//! let uncontrolled = DiagnosticInputs { is_controlled: false, has_on_change: true, read_only: false };
//! let controlled = DiagnosticInputs { is_controlled: true, ..uncontrolled };
//!
//! diagnostics.evaluate(uncontrolled).report();
//! diagnostics.evaluate(controlled).report();
//! diagnostics.evaluate(controlled).report();
//!
//! assert_eq!(sink.count("uncontrolled_to_controlled"), 1);
//! ```

pub mod checks;
pub mod config;
pub mod monitor;
pub mod sink;
pub mod tracker;
pub mod warnings;

pub use checks::{check_mode_switch, check_read_only, Diagnosis};
pub use config::{DiagnosticsConfig, DiagnosticsMode};
pub use monitor::{DiagnosticInputs, Diagnostics, Evaluation};
pub use sink::{CollectingSink, TracingSink, WarningSink};
pub use tracker::EffectTracker;
pub use warnings::{PropNames, UsageWarning};
