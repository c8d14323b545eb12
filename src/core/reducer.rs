//! Pure reducers computing the next toggle state.
//!
//! A reducer maps `(state, action)` to the next state. Reducers never
//! mutate their inputs and never touch controller state, so they can be
//! called any number of times.

use super::action::{is_reserved, ToggleAction};
use super::error::ToggleError;
use super::state::ToggleState;
use std::fmt;
use std::rc::Rc;

/// The built-in reducer.
///
/// - `Toggle` flips `on`.
/// - `Reset` returns its `initial_state` and ignores `state`.
/// - a `Custom` action built by hand with a built-in tag fails with
///   [`ToggleError::ReservedActionKind`];
/// - anything else fails with [`ToggleError::UnsupportedActionKind`].
///
/// # Example
///
/// ```rust
/// use toggle_props::core::{toggle_reducer, ToggleAction, ToggleState};
///
/// let next = toggle_reducer(&ToggleState::OFF, &ToggleAction::Toggle).unwrap();
/// assert_eq!(next, ToggleState::ON);
///
/// let err = toggle_reducer(&ToggleState::OFF, &ToggleAction::custom("explode").unwrap());
/// assert!(err.is_err());
/// ```
pub fn toggle_reducer(state: &ToggleState, action: &ToggleAction) -> Result<ToggleState, ToggleError> {
    match action {
        ToggleAction::Toggle => Ok(state.flipped()),
        ToggleAction::Reset { initial_state } => Ok(*initial_state),
        ToggleAction::Custom { kind, .. } if is_reserved(kind) => {
            Err(ToggleError::ReservedActionKind { kind: kind.clone() })
        }
        ToggleAction::Custom { kind, .. } => Err(ToggleError::UnsupportedActionKind {
            kind: kind.clone(),
        }),
    }
}

/// A shareable reducer function.
///
/// Wraps either the built-in [`toggle_reducer`] or a caller-supplied
/// function, which lets callers customize transitions (for example to
/// handle [`ToggleAction::Custom`] or to veto toggles).
///
/// # Example
///
/// ```rust
/// use toggle_props::core::{toggle_reducer, Reducer, ToggleAction, ToggleState};
///
/// // Never allow switching off.
/// let sticky = Reducer::new(|state: &ToggleState, action: &ToggleAction| {
///     let next = toggle_reducer(state, action)?;
///     Ok(if state.on { *state } else { next })
/// });
///
/// assert_eq!(sticky.reduce(&ToggleState::ON, &ToggleAction::Toggle), Ok(ToggleState::ON));
/// assert_eq!(sticky.reduce(&ToggleState::OFF, &ToggleAction::Toggle), Ok(ToggleState::ON));
/// ```
#[derive(Clone)]
pub struct Reducer {
    reduce: Rc<dyn Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, ToggleError>>,
}

impl Reducer {
    /// Create a reducer from a pure function.
    pub fn new<F>(reduce: F) -> Self
    where
        F: Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, ToggleError> + 'static,
    {
        Reducer {
            reduce: Rc::new(reduce),
        }
    }

    /// Compute the next state.
    pub fn reduce(&self, state: &ToggleState, action: &ToggleAction) -> Result<ToggleState, ToggleError> {
        (self.reduce)(state, action)
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Reducer::new(toggle_reducer)
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer").finish_non_exhaustive()
    }
}
