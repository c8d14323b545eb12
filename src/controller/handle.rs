//! The dual-mode toggle controller.

use crate::controller::config::{ChangeHandler, ControllerConfig};
use crate::controller::props::{
    call_all, ClickEvent, ClickHandler, PropOverrides, ResetterProps, TogglerProps,
};
use crate::core::{
    ControllerId, Reducer, ToggleAction, ToggleError, ToggleState, ToggleTransition, TransitionLog,
};
use crate::diagnostics::{DiagnosticInputs, Diagnosis, Diagnostics, Evaluation};
use chrono::Utc;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct Inner {
    id: ControllerId,
    initial_state: ToggleState,
    state: ToggleState,
    reducer: Reducer,
    on_change: Option<ChangeHandler>,
    controlled_on: Option<bool>,
    read_only: bool,
    diagnostics: Diagnostics,
    log: TransitionLog,
}

impl Inner {
    fn current_on(&self) -> bool {
        self.controlled_on.unwrap_or(self.state.on)
    }

    fn evaluate_diagnostics(&mut self) -> Evaluation {
        self.diagnostics.evaluate(DiagnosticInputs {
            is_controlled: self.controlled_on.is_some(),
            has_on_change: self.on_change.is_some(),
            read_only: self.read_only,
        })
    }
}

/// What a dispatch needs, copied out so no user code runs while the
/// controller is borrowed.
struct Snapshot {
    id: ControllerId,
    state: ToggleState,
    controlled_on: Option<bool>,
    reducer: Reducer,
    on_change: Option<ChangeHandler>,
}

/// A toggle that is either self-managed or driven by its owner.
///
/// When the configuration carries a controlled value (`on`), that value is
/// always reported and dispatched actions are only forwarded to `on_change`
/// as a predicted next state; the owner must feed the new value back through
/// [`update`](Self::update). Without a controlled value the controller
/// applies actions to its own state.
///
/// The controller is a cheap handle: clones share the same instance, which
/// is how click handlers in the prop bags reach it.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use toggle_props::controller::{ControllerConfig, ToggleController};
///
/// // Uncontrolled
/// let toggle = ToggleController::new(ControllerConfig::new());
/// toggle.toggle().unwrap();
/// assert!(toggle.current_on());
/// toggle.reset().unwrap();
/// assert!(!toggle.current_on());
///
/// // Controlled
/// let reported = Rc::new(Cell::new(None));
/// let sink = reported.clone();
/// let toggle = ToggleController::new(
///     ControllerConfig::new()
///         .controlled(true)
///         .on_change(move |next, _| sink.set(Some(next.on))),
/// );
/// toggle.toggle().unwrap();
/// assert!(toggle.current_on());
/// assert_eq!(reported.get(), Some(false));
/// ```
#[derive(Clone)]
pub struct ToggleController {
    inner: Rc<RefCell<Inner>>,
}

impl ToggleController {
    /// Create a controller. The initial state is captured here, once.
    pub fn new(config: ControllerConfig) -> Self {
        let id = ControllerId::new();
        let initial_state = ToggleState::new(config.initial_on);

        tracing::debug!(
            controller_id = %id,
            initial = %initial_state,
            controlled = config.is_controlled(),
            "toggle controller created"
        );

        let mut inner = Inner {
            id,
            initial_state,
            state: initial_state,
            reducer: config.reducer,
            on_change: config.on_change,
            controlled_on: config.on,
            read_only: config.read_only,
            diagnostics: Diagnostics::new(id, config.diagnostics),
            log: TransitionLog::new(),
        };
        let evaluation = inner.evaluate_diagnostics();

        let controller = Self {
            inner: Rc::new(RefCell::new(inner)),
        };
        evaluation.report();
        controller
    }

    /// Apply a new configuration, as on a re-render.
    ///
    /// Replaces the controlled value, change handler, read-only flag and
    /// reducer, then re-evaluates diagnostics. `initial_on` and the
    /// diagnostics settings of `config` are ignored.
    ///
    /// Warnings reach the sink after the controller is released, so a sink
    /// may read the controller it watches.
    pub fn update(&self, config: ControllerConfig) -> Diagnosis {
        let evaluation = {
            let mut inner = self.inner.borrow_mut();
            inner.reducer = config.reducer;
            inner.on_change = config.on_change;
            inner.controlled_on = config.on;
            inner.read_only = config.read_only;
            inner.evaluate_diagnostics()
        };
        evaluation.report()
    }

    pub fn id(&self) -> ControllerId {
        self.inner.borrow().id
    }

    /// Whether a controlled value is currently supplied.
    pub fn is_controlled(&self) -> bool {
        self.inner.borrow().controlled_on.is_some()
    }

    /// The controlled value if present, otherwise the internal state.
    pub fn current_on(&self) -> bool {
        self.inner.borrow().current_on()
    }

    /// The state the toggle displays.
    pub fn state(&self) -> ToggleState {
        let inner = self.inner.borrow();
        inner.state.with_on(inner.current_on())
    }

    /// State captured at creation.
    pub fn initial_state(&self) -> ToggleState {
        self.inner.borrow().initial_state
    }

    /// Recent transitions applied to the internal state.
    pub fn transitions(&self) -> TransitionLog {
        self.inner.borrow().log.clone()
    }

    /// Transitions applied over the controller's lifetime.
    pub fn transition_count(&self) -> usize {
        self.inner.borrow().log.total()
    }

    /// Dispatch an action.
    ///
    /// When uncontrolled, the internal state is replaced by the reducer's
    /// result. In both modes a present `on_change` receives the state the
    /// reducer predicts from the displayed value, along with the action.
    ///
    /// Both reductions run before anything is applied, so a reducer error
    /// leaves the controller unchanged and `on_change` uncalled.
    pub fn dispatch(&self, action: ToggleAction) -> Result<(), ToggleError> {
        let snapshot = self.snapshot();
        let on = snapshot.controlled_on.unwrap_or(snapshot.state.on);

        let applied = match snapshot.controlled_on {
            Some(_) => None,
            None => Some(snapshot.reducer.reduce(&snapshot.state, &action)?),
        };

        let reported = match snapshot.on_change {
            Some(ref handler) => {
                let next = snapshot.reducer.reduce(&snapshot.state.with_on(on), &action)?;
                Some((handler.clone(), next))
            }
            None => None,
        };

        tracing::trace!(
            controller_id = %snapshot.id,
            action = action.kind(),
            controlled = snapshot.controlled_on.is_some(),
            "dispatch"
        );

        if let Some(next) = applied {
            self.apply(snapshot.state, next, &action);
        }

        if let Some((handler, next)) = reported {
            handler(&next, &action);
        }

        Ok(())
    }

    /// Flip the toggle.
    pub fn toggle(&self) -> Result<(), ToggleError> {
        self.dispatch(ToggleAction::Toggle)
    }

    /// Return to the state captured at creation.
    pub fn reset(&self) -> Result<(), ToggleError> {
        let initial_state = self.initial_state();
        self.dispatch(ToggleAction::Reset { initial_state })
    }

    /// Props for the element that flips the toggle.
    ///
    /// The caller's click handler runs first, then [`toggle`](Self::toggle).
    /// `aria_pressed` always mirrors [`current_on`](Self::current_on): an
    /// `aria-pressed` entry in the override attributes is passed through
    /// in `attributes` and does not replace it.
    pub fn toggler_props(&self, overrides: PropOverrides) -> TogglerProps {
        let controller = self.clone();
        let toggle: ClickHandler = Rc::new(move |_: &ClickEvent| controller.toggle());

        TogglerProps {
            aria_pressed: self.current_on(),
            on_click: call_all([overrides.on_click, Some(toggle)]),
            attributes: overrides.attributes,
        }
    }

    /// Props for the element that resets the toggle.
    ///
    /// The caller's click handler runs first, then [`reset`](Self::reset).
    pub fn resetter_props(&self, overrides: PropOverrides) -> ResetterProps {
        let controller = self.clone();
        let reset: ClickHandler = Rc::new(move |_: &ClickEvent| controller.reset());

        ResetterProps {
            on_click: call_all([overrides.on_click, Some(reset)]),
            attributes: overrides.attributes,
        }
    }

    fn snapshot(&self) -> Snapshot {
        let inner = self.inner.borrow();
        Snapshot {
            id: inner.id,
            state: inner.state,
            controlled_on: inner.controlled_on,
            reducer: inner.reducer.clone(),
            on_change: inner.on_change.clone(),
        }
    }

    fn apply(&self, from: ToggleState, to: ToggleState, action: &ToggleAction) {
        let mut inner = self.inner.borrow_mut();
        inner.state = to;
        inner.log.record(ToggleTransition {
            from,
            to,
            action: action.kind().to_string(),
            timestamp: Utc::now(),
        });
        tracing::debug!(controller_id = %inner.id, %from, %to, "toggle state applied");
    }
}

impl fmt::Debug for ToggleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ToggleController")
            .field("id", &inner.id)
            .field("state", &inner.state)
            .field("controlled_on", &inner.controlled_on)
            .field("read_only", &inner.read_only)
            .finish_non_exhaustive()
    }
}
