//! Adapter binding a toggle controller to a switch element.

use crate::controller::{
    ChangeHandler, ClickEvent, ControllerConfig, PropOverrides, ToggleController, TogglerProps,
};
use crate::core::{ToggleAction, ToggleError, ToggleState};
use crate::diagnostics::DiagnosticsConfig;
use std::fmt;
use std::rc::Rc;

/// Props of a [`ToggleWidget`], passed to its controller unchanged.
#[derive(Clone, Default)]
pub struct WidgetProps {
    pub on: Option<bool>,
    pub on_change: Option<ChangeHandler>,
    pub read_only: bool,
}

impl WidgetProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ToggleState, &ToggleAction) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_change_handler(mut self, handler: Option<ChangeHandler>) -> Self {
        self.on_change = handler;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

impl fmt::Debug for WidgetProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetProps")
            .field("on", &self.on)
            .field("on_change", &self.on_change.is_some())
            .field("read_only", &self.read_only)
            .finish()
    }
}

/// What a switch element needs: a pressed state and a click handler.
#[derive(Clone, Debug)]
pub struct SwitchView {
    pub on: bool,
    pub props: TogglerProps,
}

impl SwitchView {
    pub fn aria_pressed(&self) -> bool {
        self.props.aria_pressed
    }

    pub fn click(&self) -> Result<(), ToggleError> {
        self.props.click(&ClickEvent::on("switch"))
    }
}

/// A switch backed by one [`ToggleController`].
///
/// The controller is created on the first render and reconfigured on every
/// later one, like a component instance across re-renders.
///
/// # Example
///
/// ```rust
/// use toggle_props::widget::{ToggleWidget, WidgetProps};
///
/// let mut widget = ToggleWidget::new();
/// let view = widget.render(WidgetProps::new());
/// assert!(!view.on);
///
/// view.click().unwrap();
/// assert!(widget.render(WidgetProps::new()).on);
/// ```
#[derive(Debug, Default)]
pub struct ToggleWidget {
    controller: Option<ToggleController>,
    diagnostics: DiagnosticsConfig,
}

impl ToggleWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(diagnostics: DiagnosticsConfig) -> Self {
        Self {
            controller: None,
            diagnostics,
        }
    }

    /// Render the widget with `props`.
    pub fn render(&mut self, props: WidgetProps) -> SwitchView {
        let config = ControllerConfig::new()
            .on(props.on)
            .on_change_handler(props.on_change)
            .read_only(props.read_only)
            .diagnostics(self.diagnostics.clone());

        let controller = match self.controller.clone() {
            Some(controller) => {
                controller.update(config);
                controller
            }
            None => self.controller.insert(ToggleController::new(config)).clone(),
        };

        let on = controller.current_on();
        SwitchView {
            on,
            props: controller.toggler_props(PropOverrides::new().attribute("on", on)),
        }
    }

    /// The controller, once the widget has rendered.
    pub fn controller(&self) -> Option<&ToggleController> {
        self.controller.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use std::cell::Cell;

    #[test]
    fn first_render_creates_controller() {
        let mut widget = ToggleWidget::new();
        assert!(widget.controller().is_none());

        widget.render(WidgetProps::new());
        let id = widget.controller().map(|c| c.id());

        widget.render(WidgetProps::new());
        assert_eq!(widget.controller().map(|c| c.id()), id);
    }

    #[test]
    fn view_exposes_pressed_state_and_on_attribute() {
        let mut widget = ToggleWidget::new();
        let view = widget.render(WidgetProps::new().on(Some(true)).read_only(true));

        assert!(view.on);
        assert!(view.aria_pressed());
        assert_eq!(view.props.attribute("on"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn props_pass_through_to_controller() {
        let sink = CollectingSink::new();
        let mut widget =
            ToggleWidget::with_diagnostics(DiagnosticsConfig::development().sink(sink.clone()));

        let reported = Rc::new(Cell::new(None));
        let slot = reported.clone();
        let view = widget.render(
            WidgetProps::new()
                .on(Some(false))
                .on_change(move |next, _| slot.set(Some(next.on))),
        );
        view.click().unwrap();

        assert_eq!(reported.get(), Some(true));
        assert!(!widget.render(WidgetProps::new().on(Some(false)).read_only(true)).on);
        assert!(sink.is_empty());
    }

    #[test]
    fn controlled_without_handler_is_read_only() {
        let sink = CollectingSink::new();
        let mut widget =
            ToggleWidget::with_diagnostics(DiagnosticsConfig::development().sink(sink.clone()));

        let view = widget.render(WidgetProps::new().on(Some(false)));
        view.click().unwrap();

        assert!(!widget.render(WidgetProps::new().on(Some(false))).on);
        assert_eq!(sink.count("read_only_without_on_change"), 1);
    }
}
