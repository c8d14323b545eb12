//! Per-controller evaluation of the usage checks.

use crate::core::ControllerId;
use crate::diagnostics::checks::{self, check_mode_switch, check_read_only, Diagnosis};
use crate::diagnostics::config::DiagnosticsConfig;
use crate::diagnostics::sink::WarningSink;
use crate::diagnostics::tracker::EffectTracker;
use std::fmt;
use std::rc::Rc;
use stillwater::validation::Validation;

/// Inputs the checks observe on every evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticInputs {
    pub is_controlled: bool,
    pub has_on_change: bool,
    pub read_only: bool,
}

/// Runs the usage checks for one controller.
///
/// The first evaluation fixes the mode the controller started in. Each
/// check then reruns only when its own inputs changed since its last run,
/// so a persistent violation is reported once, not on every evaluation.
#[derive(Debug)]
pub struct Diagnostics {
    controller: ControllerId,
    config: DiagnosticsConfig,
    was_controlled: Option<bool>,
    mode_switch: EffectTracker<(bool, bool)>,
    read_only: EffectTracker<(bool, bool, bool)>,
}

impl Diagnostics {
    pub fn new(controller: ControllerId, config: DiagnosticsConfig) -> Self {
        Self {
            controller,
            config,
            was_controlled: None,
            mode_switch: EffectTracker::new(),
            read_only: EffectTracker::new(),
        }
    }

    /// Evaluate the checks whose inputs changed.
    ///
    /// Nothing is sent to the sink yet: the returned [`Evaluation`] does
    /// that in [`report`](Evaluation::report), so a caller holding a borrow
    /// can release it before user sink code runs.
    pub fn evaluate(&mut self, inputs: DiagnosticInputs) -> Evaluation {
        let was_controlled = *self.was_controlled.get_or_insert(inputs.is_controlled);

        if !self.config.is_enabled() {
            return self.evaluation(Validation::success(()));
        }

        let names = &self.config.names;
        let mut results = Vec::with_capacity(2);

        if self
            .mode_switch
            .should_run((inputs.is_controlled, was_controlled))
        {
            results.push(check_mode_switch(was_controlled, inputs.is_controlled, names));
        }

        if self
            .read_only
            .should_run((inputs.is_controlled, inputs.has_on_change, inputs.read_only))
        {
            results.push(check_read_only(
                inputs.is_controlled,
                inputs.has_on_change,
                inputs.read_only,
                names,
            ));
        }

        self.evaluation(checks::combine(results))
    }

    fn evaluation(&self, diagnosis: Diagnosis) -> Evaluation {
        Evaluation {
            controller: self.controller,
            sink: self.config.sink.clone(),
            diagnosis,
        }
    }

    /// Mode seen at the first evaluation.
    pub fn was_controlled(&self) -> Option<bool> {
        self.was_controlled
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }
}

/// Result of one evaluation, not yet delivered to the sink.
#[must_use = "warnings are only delivered by `report`"]
pub struct Evaluation {
    controller: ControllerId,
    sink: Rc<dyn WarningSink>,
    diagnosis: Diagnosis,
}

impl Evaluation {
    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    /// Send every warning to the sink and hand back the diagnosis.
    pub fn report(self) -> Diagnosis {
        for warning in checks::warnings(&self.diagnosis) {
            self.sink.warn(self.controller, warning);
        }
        self.diagnosis
    }
}

impl fmt::Debug for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluation")
            .field("controller", &self.controller)
            .field("diagnosis", &self.diagnosis)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::sink::CollectingSink;
    use crate::diagnostics::warnings::UsageWarning;

    fn inputs(is_controlled: bool, has_on_change: bool, read_only: bool) -> DiagnosticInputs {
        DiagnosticInputs {
            is_controlled,
            has_on_change,
            read_only,
        }
    }

    fn diagnostics(sink: &CollectingSink) -> Diagnostics {
        Diagnostics::new(
            ControllerId::new(),
            DiagnosticsConfig::development().sink(sink.clone()),
        )
    }

    #[test]
    fn first_evaluation_fixes_mode() {
        let sink = CollectingSink::new();
        let mut diagnostics = diagnostics(&sink);

        assert!(diagnostics.evaluate(inputs(false, false, false)).report().is_success());
        assert_eq!(diagnostics.was_controlled(), Some(false));

        diagnostics.evaluate(inputs(true, true, false)).report();
        assert_eq!(diagnostics.was_controlled(), Some(false));
    }

    #[test]
    fn mode_switch_reported_once_per_change() {
        let sink = CollectingSink::new();
        let mut diagnostics = diagnostics(&sink);

        diagnostics.evaluate(inputs(false, true, false)).report();
        let switched = diagnostics.evaluate(inputs(true, true, false)).report();
        assert!(matches!(
            checks::warnings(&switched).as_slice(),
            [UsageWarning::UncontrolledToControlled { .. }]
        ));

        assert!(diagnostics.evaluate(inputs(true, true, false)).report().is_success());
        assert!(diagnostics.evaluate(inputs(true, true, false)).report().is_success());
        assert_eq!(sink.count("uncontrolled_to_controlled"), 1);
    }

    #[test]
    fn switching_back_to_initial_mode_is_silent() {
        let sink = CollectingSink::new();
        let mut diagnostics = diagnostics(&sink);

        diagnostics.evaluate(inputs(true, true, false)).report();
        diagnostics.evaluate(inputs(false, true, false)).report();
        diagnostics.evaluate(inputs(true, true, false)).report();

        assert_eq!(sink.count("controlled_to_uncontrolled"), 1);
        assert_eq!(sink.count("uncontrolled_to_controlled"), 0);
    }

    #[test]
    fn read_only_reported_on_mount_and_on_change() {
        let sink = CollectingSink::new();
        let mut diagnostics = diagnostics(&sink);

        diagnostics.evaluate(inputs(true, false, false)).report();
        diagnostics.evaluate(inputs(true, false, false)).report();
        assert_eq!(sink.count("read_only_without_on_change"), 1);

        diagnostics.evaluate(inputs(true, false, true)).report();
        diagnostics.evaluate(inputs(true, false, false)).report();
        assert_eq!(sink.count("read_only_without_on_change"), 2);
    }

    #[test]
    fn evaluation_waits_for_report() {
        let sink = CollectingSink::new();
        let mut diagnostics = diagnostics(&sink);

        let evaluation = diagnostics.evaluate(inputs(true, false, false));
        assert!(evaluation.diagnosis().is_failure());
        assert!(sink.is_empty());

        let diagnosis = evaluation.report();
        assert!(diagnosis.is_failure());
        assert_eq!(sink.count("read_only_without_on_change"), 1);
    }

    #[test]
    fn production_mode_reports_nothing() {
        let sink = CollectingSink::new();
        let mut diagnostics = Diagnostics::new(
            ControllerId::new(),
            DiagnosticsConfig::production().sink(sink.clone()),
        );

        diagnostics.evaluate(inputs(false, false, false)).report();
        assert!(diagnostics.evaluate(inputs(true, false, false)).report().is_success());
        assert!(sink.is_empty());
        assert_eq!(diagnostics.was_controlled(), Some(false));
    }
}
