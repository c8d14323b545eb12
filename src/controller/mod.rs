//! The toggle controller: the imperative shell around the pure core.
//!
//! - [`ControllerConfig`]: the controller's props, with defaults
//! - [`ToggleController`]: owns internal state when uncontrolled and defers
//!   to the supplied value when controlled
//! - prop bags ([`TogglerProps`], [`ResetterProps`]) and the [`call_all`]
//!   combinator used to compose their click handlers

mod config;
mod handle;
mod props;

pub use config::{ChangeHandler, ControllerConfig};
pub use handle::ToggleController;
pub use props::{
    call_all, Attributes, ClickEvent, ClickHandler, Handler, PropOverrides, ResetterProps,
    TogglerProps,
};
