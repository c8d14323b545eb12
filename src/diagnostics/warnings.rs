//! Usage warnings and the names quoted in them.

use thiserror::Error;

/// Component and prop names quoted in warning messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropNames {
    pub component: String,
    /// The controlled value prop
    pub control: String,
    pub initial_value: String,
    pub on_change: String,
    pub read_only: String,
}

impl PropNames {
    /// Names for a component whose props follow the toggle naming.
    pub fn for_component(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Self::default()
        }
    }
}

impl Default for PropNames {
    fn default() -> Self {
        Self {
            component: "ToggleController".to_string(),
            control: "on".to_string(),
            initial_value: "initial_on".to_string(),
            on_change: "on_change".to_string(),
            read_only: "read_only".to_string(),
        }
    }
}

/// A violation of the controller's usage contract.
///
/// Warnings are observational: they are logged, never returned as errors,
/// and never change how the controller behaves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageWarning {
    #[error(
        "`{component}` switched from uncontrolled to controlled. A component must stay \
         controlled or uncontrolled for its whole lifetime; check the `{control}` value."
    )]
    UncontrolledToControlled { component: String, control: String },

    #[error(
        "`{component}` switched from controlled to uncontrolled. A component must stay \
         controlled or uncontrolled for its whole lifetime; check the `{control}` value."
    )]
    ControlledToUncontrolled { component: String, control: String },

    #[error(
        "`{control}` was provided without an `{on_change}` handler, so `{component}` is \
         read-only. Use `{initial_value}` for a mutable toggle, or set `{on_change}` or \
         `{read_only}`."
    )]
    ReadOnlyWithoutOnChange {
        component: String,
        control: String,
        initial_value: String,
        on_change: String,
        read_only: String,
    },
}

impl UsageWarning {
    pub(crate) fn uncontrolled_to_controlled(names: &PropNames) -> Self {
        Self::UncontrolledToControlled {
            component: names.component.clone(),
            control: names.control.clone(),
        }
    }

    pub(crate) fn controlled_to_uncontrolled(names: &PropNames) -> Self {
        Self::ControlledToUncontrolled {
            component: names.component.clone(),
            control: names.control.clone(),
        }
    }

    pub(crate) fn read_only_without_on_change(names: &PropNames) -> Self {
        Self::ReadOnlyWithoutOnChange {
            component: names.component.clone(),
            control: names.control.clone(),
            initial_value: names.initial_value.clone(),
            on_change: names.on_change.clone(),
            read_only: names.read_only.clone(),
        }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UncontrolledToControlled { .. } => "uncontrolled_to_controlled",
            Self::ControlledToUncontrolled { .. } => "controlled_to_uncontrolled",
            Self::ReadOnlyWithoutOnChange { .. } => "read_only_without_on_change",
        }
    }

    /// Whether this warning is about switching control mode.
    pub fn is_mode_switch(&self) -> bool {
        matches!(
            self,
            Self::UncontrolledToControlled { .. } | Self::ControlledToUncontrolled { .. }
        )
    }
}
