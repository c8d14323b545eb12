//! Pure usage checks.
//!
//! Each check returns a `Validation`, so a single evaluation reports every
//! violated rule instead of stopping at the first one.

use crate::diagnostics::warnings::{PropNames, UsageWarning};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of one or more checks.
pub type Diagnosis = Validation<(), NonEmptyVec<UsageWarning>>;

/// Compare the current control mode with the first-seen one.
///
/// Fails in either direction: uncontrolled to controlled, or controlled to
/// uncontrolled.
pub fn check_mode_switch(was_controlled: bool, is_controlled: bool, names: &PropNames) -> Diagnosis {
    match (was_controlled, is_controlled) {
        (false, true) => Validation::fail(UsageWarning::uncontrolled_to_controlled(names)),
        (true, false) => Validation::fail(UsageWarning::controlled_to_uncontrolled(names)),
        _ => Validation::success(()),
    }
}

/// A controlled value without a change handler makes the toggle read-only
/// unless `read_only` says that is intended.
pub fn check_read_only(
    is_controlled: bool,
    has_on_change: bool,
    read_only: bool,
    names: &PropNames,
) -> Diagnosis {
    if is_controlled && !has_on_change && !read_only {
        Validation::fail(UsageWarning::read_only_without_on_change(names))
    } else {
        Validation::success(())
    }
}

/// Accumulate ALL failures of `checks`.
pub fn combine(checks: Vec<Diagnosis>) -> Diagnosis {
    Validation::all_vec(checks).map(|_| ())
}

/// Warnings carried by a diagnosis, empty on success.
pub fn warnings(diagnosis: &Diagnosis) -> Vec<&UsageWarning> {
    match diagnosis {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(warnings) => warnings.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_mode_passes() {
        let names = PropNames::default();
        assert!(check_mode_switch(false, false, &names).is_success());
        assert!(check_mode_switch(true, true, &names).is_success());
    }

    #[test]
    fn mode_switch_fails_in_both_directions() {
        let names = PropNames::default();

        let to_controlled = check_mode_switch(false, true, &names);
        assert!(matches!(
            warnings(&to_controlled).as_slice(),
            [UsageWarning::UncontrolledToControlled { .. }]
        ));

        let to_uncontrolled = check_mode_switch(true, false, &names);
        assert!(matches!(
            warnings(&to_uncontrolled).as_slice(),
            [UsageWarning::ControlledToUncontrolled { .. }]
        ));
    }

    #[test]
    fn read_only_requires_all_three_conditions() {
        let names = PropNames::default();

        assert!(check_read_only(true, false, false, &names).is_failure());
        assert!(check_read_only(true, true, false, &names).is_success());
        assert!(check_read_only(true, false, true, &names).is_success());
        assert!(check_read_only(false, false, false, &names).is_success());
    }

    #[test]
    fn combine_accumulates_all_warnings() {
        let names = PropNames::default();
        let diagnosis = combine(vec![
            check_mode_switch(false, true, &names),
            check_read_only(true, false, false, &names),
        ]);

        match diagnosis {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(matches!(
                    errors.head(),
                    UsageWarning::UncontrolledToControlled { .. }
                ));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, UsageWarning::ReadOnlyWithoutOnChange { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn combine_succeeds_when_all_checks_pass() {
        let names = PropNames::default();
        let diagnosis = combine(vec![
            check_mode_switch(true, true, &names),
            check_read_only(true, true, false, &names),
        ]);

        assert!(diagnosis.is_success());
        assert!(warnings(&diagnosis).is_empty());
    }

    #[test]
    fn combine_of_nothing_succeeds() {
        assert!(combine(Vec::new()).is_success());
    }
}
