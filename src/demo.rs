//! Two controlled switches sharing one boolean.
//!
//! The harness owns `both_on` and a click counter. Both switches render
//! `both_on` and report changes to one handler, which stops accepting
//! toggles once the counter passes [`CLICK_LIMIT`]. A third, uncontrolled
//! switch only logs its changes.

use crate::controller::ChangeHandler;
use crate::core::{ToggleAction, ToggleError, ToggleState};
use crate::diagnostics::DiagnosticsConfig;
use crate::widget::{SwitchView, ToggleWidget, WidgetProps};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Toggles are ignored once more than this many clicks were counted.
pub const CLICK_LIMIT: u32 = 4;

/// State owned by the harness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoState {
    pub both_on: bool,
    pub times_clicked: u32,
}

impl DemoState {
    pub fn too_many_clicks(&self) -> bool {
        self.times_clicked > CLICK_LIMIT
    }
}

/// Counter display under the shared switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickNotice {
    Count(u32),
    TooMany,
}

impl fmt::Display for ClickNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "Click count: {n}"),
            Self::TooMany => f.write_str("Whoa, you clicked too much!"),
        }
    }
}

/// One of the two shared switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharedSwitch {
    First,
    Second,
}

impl SharedSwitch {
    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Everything the harness shows after a render.
#[derive(Clone, Debug)]
pub struct DemoFrame {
    pub shared: [SwitchView; 2],
    pub notice: ClickNotice,
    pub uncontrolled: SwitchView,
}

impl DemoFrame {
    pub fn switch(&self, switch: SharedSwitch) -> &SwitchView {
        &self.shared[switch.index()]
    }
}

impl fmt::Display for DemoFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |view: &SwitchView| if view.on { "[on ]" } else { "[off]" };
        write!(
            f,
            "{} {} | {} | uncontrolled {}",
            mark(&self.shared[0]),
            mark(&self.shared[1]),
            self.notice,
            mark(&self.uncontrolled)
        )
    }
}

/// The demo application.
///
/// # Example
///
/// ```rust
/// use toggle_props::demo::{ClickNotice, SharedSwitch, SharedSwitchesDemo};
///
/// let mut demo = SharedSwitchesDemo::new();
/// let frame = demo.click(SharedSwitch::First).unwrap();
///
/// assert!(frame.switch(SharedSwitch::First).on);
/// assert!(frame.switch(SharedSwitch::Second).on);
/// assert_eq!(frame.notice, ClickNotice::Count(1));
/// ```
pub struct SharedSwitchesDemo {
    state: Rc<RefCell<DemoState>>,
    on_change: ChangeHandler,
    shared: [ToggleWidget; 2],
    uncontrolled: ToggleWidget,
}

impl SharedSwitchesDemo {
    pub fn new() -> Self {
        Self::with_diagnostics(DiagnosticsConfig::default())
    }

    pub fn with_diagnostics(diagnostics: DiagnosticsConfig) -> Self {
        let state = Rc::new(RefCell::new(DemoState::default()));
        let on_change: ChangeHandler = {
            let state = state.clone();
            Rc::new(move |next: &ToggleState, action: &ToggleAction| {
                handle_toggle_change(&state, next, action)
            })
        };

        Self {
            state,
            on_change,
            shared: [
                ToggleWidget::with_diagnostics(diagnostics.clone()),
                ToggleWidget::with_diagnostics(diagnostics.clone()),
            ],
            uncontrolled: ToggleWidget::with_diagnostics(diagnostics),
        }
    }

    pub fn state(&self) -> DemoState {
        *self.state.borrow()
    }

    /// Render every widget from the current harness state.
    pub fn render(&mut self) -> DemoFrame {
        let state = self.state();
        let props = WidgetProps::new()
            .on(Some(state.both_on))
            .on_change_handler(Some(self.on_change.clone()));

        let [first, second] = &mut self.shared;
        let shared = [first.render(props.clone()), second.render(props)];

        let uncontrolled = self
            .uncontrolled
            .render(WidgetProps::new().on_change(|next, action| {
                tracing::info!(state = %next, action = action.kind(), "uncontrolled toggle changed");
            }));

        DemoFrame {
            shared,
            notice: if state.too_many_clicks() {
                ClickNotice::TooMany
            } else {
                ClickNotice::Count(state.times_clicked)
            },
            uncontrolled,
        }
    }

    /// Click one of the shared switches and re-render.
    pub fn click(&mut self, switch: SharedSwitch) -> Result<DemoFrame, ToggleError> {
        self.render().switch(switch).click()?;
        Ok(self.render())
    }

    /// Click the uncontrolled switch and re-render.
    pub fn click_uncontrolled(&mut self) -> Result<DemoFrame, ToggleError> {
        self.render().uncontrolled.click()?;
        Ok(self.render())
    }

    /// The reset button: switches off and clears the counter.
    pub fn click_reset(&mut self) -> DemoFrame {
        *self.state.borrow_mut() = DemoState::default();
        tracing::info!("demo reset");
        self.render()
    }
}

impl Default for SharedSwitchesDemo {
    fn default() -> Self {
        Self::new()
    }
}

fn handle_toggle_change(state: &RefCell<DemoState>, next: &ToggleState, action: &ToggleAction) {
    let mut state = state.borrow_mut();
    if action.is_toggle() && state.too_many_clicks() {
        tracing::debug!(times_clicked = state.times_clicked, "toggle ignored");
        return;
    }
    state.both_on = next.on;
    state.times_clicked += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;

    fn demo() -> (SharedSwitchesDemo, CollectingSink) {
        let sink = CollectingSink::new();
        let demo =
            SharedSwitchesDemo::with_diagnostics(DiagnosticsConfig::development().sink(sink.clone()));
        (demo, sink)
    }

    #[test]
    fn initial_frame_is_off_with_zero_count() {
        let (mut demo, sink) = demo();
        let frame = demo.render();

        assert!(!frame.switch(SharedSwitch::First).on);
        assert!(!frame.switch(SharedSwitch::Second).on);
        assert_eq!(frame.notice, ClickNotice::Count(0));
        assert!(sink.is_empty());
    }

    #[test]
    fn either_switch_drives_both() {
        let (mut demo, _) = demo();

        let frame = demo.click(SharedSwitch::Second).unwrap();
        assert!(frame.switch(SharedSwitch::First).on);
        assert!(frame.switch(SharedSwitch::First).aria_pressed());

        let frame = demo.click(SharedSwitch::First).unwrap();
        assert!(!frame.switch(SharedSwitch::Second).on);
        assert_eq!(frame.notice, ClickNotice::Count(2));
    }

    #[test]
    fn reset_button_clears_state() {
        let (mut demo, _) = demo();
        demo.click(SharedSwitch::First).unwrap();

        let frame = demo.click_reset();

        assert_eq!(demo.state(), DemoState::default());
        assert!(!frame.switch(SharedSwitch::First).on);
        assert_eq!(frame.notice, ClickNotice::Count(0));
    }

    #[test]
    fn uncontrolled_switch_is_independent() {
        let (mut demo, _) = demo();

        let frame = demo.click_uncontrolled().unwrap();

        assert!(frame.uncontrolled.on);
        assert!(!frame.switch(SharedSwitch::First).on);
        assert_eq!(demo.state().times_clicked, 0);
    }

    #[test]
    fn notice_text() {
        assert_eq!(ClickNotice::Count(3).to_string(), "Click count: 3");
        assert_eq!(ClickNotice::TooMany.to_string(), "Whoa, you clicked too much!");
    }
}
