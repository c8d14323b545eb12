//! Previous-value cache for observers that rerun on dependency changes.

/// Decides whether an observer must run for a new set of dependencies.
///
/// The observer runs on the first evaluation and afterwards only when the
/// dependencies differ from those of its last run.
///
/// # Example
///
/// ```rust
/// use toggle_props::diagnostics::EffectTracker;
///
/// let mut tracker = EffectTracker::new();
/// assert!(tracker.should_run((false, false)));
/// assert!(!tracker.should_run((false, false)));
/// assert!(tracker.should_run((true, false)));
/// assert_eq!(tracker.runs(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct EffectTracker<D> {
    last: Option<D>,
    runs: usize,
}

impl<D: PartialEq> EffectTracker<D> {
    pub fn new() -> Self {
        Self { last: None, runs: 0 }
    }

    /// Record `deps` and report whether the observer must run.
    pub fn should_run(&mut self, deps: D) -> bool {
        if self.last.as_ref() == Some(&deps) {
            return false;
        }
        self.last = Some(deps);
        self.runs += 1;
        true
    }

    /// Dependencies of the last run.
    pub fn last(&self) -> Option<&D> {
        self.last.as_ref()
    }

    /// How many times the observer ran.
    pub fn runs(&self) -> usize {
        self.runs
    }
}

impl<D: PartialEq> Default for EffectTracker<D> {
    fn default() -> Self {
        Self::new()
    }
}
