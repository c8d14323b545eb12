//! Property-based tests for the reducer and controller.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use toggle_props::core::{toggle_reducer, ToggleAction, ToggleState};
use toggle_props::diagnostics::{CollectingSink, DiagnosticsConfig};
use toggle_props::{ControllerConfig, ToggleController};

prop_compose! {
    fn arbitrary_state()(on in any::<bool>()) -> ToggleState {
        ToggleState::new(on)
    }
}

#[derive(Clone, Debug)]
enum Step {
    Toggle,
    Reset,
}

fn arbitrary_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(prop_oneof![Just(Step::Toggle), Just(Step::Reset)], 0..20)
}

fn quiet() -> DiagnosticsConfig {
    DiagnosticsConfig::development().sink(CollectingSink::new())
}

proptest! {
    #[test]
    fn double_toggle_is_identity(state in arbitrary_state()) {
        let once = toggle_reducer(&state, &ToggleAction::Toggle).unwrap();
        let twice = toggle_reducer(&once, &ToggleAction::Toggle).unwrap();
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn reset_ignores_current_state(state in arbitrary_state(), initial in arbitrary_state()) {
        let next = toggle_reducer(&state, &ToggleAction::Reset { initial_state: initial }).unwrap();
        prop_assert_eq!(next, initial);
    }

    #[test]
    fn reducer_is_deterministic(state in arbitrary_state(), initial in arbitrary_state()) {
        for action in [ToggleAction::Toggle, ToggleAction::Reset { initial_state: initial }] {
            let first = toggle_reducer(&state, &action);
            let second = toggle_reducer(&state, &action);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn custom_kinds_are_always_rejected(state in arbitrary_state(), kind in "[a-z_]{1,12}") {
        let action = ToggleAction::Custom { kind, payload: serde_json::Value::Null };
        let result = toggle_reducer(&state, &action);
        prop_assert!(result.is_err());
    }

    #[test]
    fn uncontrolled_matches_parity_of_toggles(initial_on in any::<bool>(), steps in arbitrary_steps()) {
        let controller = ToggleController::new(
            ControllerConfig::new().initial_on(initial_on).diagnostics(quiet()),
        );

        let mut expected = initial_on;
        for step in &steps {
            match step {
                Step::Toggle => {
                    controller.toggle().unwrap();
                    expected = !expected;
                }
                Step::Reset => {
                    controller.reset().unwrap();
                    expected = initial_on;
                }
            }
            prop_assert_eq!(controller.current_on(), expected);
        }
        prop_assert_eq!(controller.transition_count(), steps.len());
    }

    #[test]
    fn controlled_value_always_wins(
        value in any::<bool>(),
        initial_on in any::<bool>(),
        steps in arbitrary_steps()
    ) {
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = reported.clone();
        let controller = ToggleController::new(
            ControllerConfig::new()
                .initial_on(initial_on)
                .controlled(value)
                .on_change(move |next, _| sink.borrow_mut().push(next.on))
                .diagnostics(quiet()),
        );

        for step in &steps {
            match step {
                Step::Toggle => controller.toggle().unwrap(),
                Step::Reset => controller.reset().unwrap(),
            }
            prop_assert_eq!(controller.current_on(), value);
        }

        let expected: Vec<bool> = steps
            .iter()
            .map(|step| match step {
                Step::Toggle => !value,
                Step::Reset => initial_on,
            })
            .collect();
        let reported = reported.borrow().clone();
        prop_assert_eq!(reported, expected);
        prop_assert_eq!(controller.transition_count(), 0);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ToggleState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
