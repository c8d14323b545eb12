//! Prop bags handed to interactive elements.

use crate::core::ToggleError;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A fallible event handler.
pub type Handler<A> = Rc<dyn Fn(&A) -> Result<(), ToggleError>>;

/// Handler attached to a clickable element.
pub type ClickHandler = Handler<ClickEvent>;

/// Extra attributes passed through to the element untouched.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// A click on an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Optional name of the element that was clicked
    pub target: Option<String>,
}

impl ClickEvent {
    pub fn on(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
        }
    }
}

/// Combine optional handlers into one that calls each present handler in
/// order with the same argument.
///
/// Absent handlers are skipped. The first error stops the chain and is
/// returned.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use toggle_props::controller::{call_all, Handler};
///
/// let calls = Rc::new(RefCell::new(Vec::new()));
/// let first: Handler<u8> = {
///     let calls = calls.clone();
///     Rc::new(move |n: &u8| {
///         calls.borrow_mut().push(("first", *n));
///         Ok(())
///     })
/// };
/// let second: Handler<u8> = {
///     let calls = calls.clone();
///     Rc::new(move |n: &u8| {
///         calls.borrow_mut().push(("second", *n));
///         Ok(())
///     })
/// };
///
/// let all = call_all([Some(first), None, Some(second)]);
/// all(&7).unwrap();
/// assert_eq!(*calls.borrow(), vec![("first", 7), ("second", 7)]);
/// ```
pub fn call_all<A: 'static>(handlers: impl IntoIterator<Item = Option<Handler<A>>>) -> Handler<A> {
    let handlers: Vec<Handler<A>> = handlers.into_iter().flatten().collect();
    Rc::new(move |args: &A| {
        for handler in &handlers {
            handler(args)?;
        }
        Ok(())
    })
}

/// Caller-supplied additions to a prop bag.
#[derive(Clone, Default)]
pub struct PropOverrides {
    /// Runs before the controller's own handler
    pub on_click: Option<ClickHandler>,
    pub attributes: Attributes,
}

impl PropOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ClickEvent) -> Result<(), ToggleError> + 'static,
    {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for PropOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropOverrides")
            .field("on_click", &self.on_click.is_some())
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// Props for the element that flips the toggle.
#[derive(Clone)]
pub struct TogglerProps {
    /// Pressed state announced to assistive technology
    pub aria_pressed: bool,
    pub on_click: ClickHandler,
    pub attributes: Attributes,
}

impl TogglerProps {
    /// Simulate a click.
    pub fn click(&self, event: &ClickEvent) -> Result<(), ToggleError> {
        (self.on_click)(event)
    }

    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }
}

impl fmt::Debug for TogglerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglerProps")
            .field("aria_pressed", &self.aria_pressed)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// Props for the element that resets the toggle.
#[derive(Clone)]
pub struct ResetterProps {
    pub on_click: ClickHandler,
    pub attributes: Attributes,
}

impl ResetterProps {
    pub fn click(&self, event: &ClickEvent) -> Result<(), ToggleError> {
        (self.on_click)(event)
    }
}

impl fmt::Debug for ResetterProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetterProps")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
