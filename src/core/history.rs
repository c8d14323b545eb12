//! Log of transitions a controller applied to its own state.
//!
//! Only uncontrolled dispatches are recorded: a controlled controller never
//! applies a transition locally.

use super::state::ToggleState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of one applied transition.
///
/// # Example
///
/// ```rust
/// use toggle_props::core::{ToggleState, ToggleTransition};
/// use chrono::Utc;
///
/// let transition = ToggleTransition {
///     from: ToggleState::OFF,
///     to: ToggleState::ON,
///     action: "toggle".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToggleTransition {
    pub from: ToggleState,
    pub to: ToggleState,
    /// Kind of the action that caused it
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl ToggleTransition {
    /// Whether the transition changed the `on` value. A reset to the
    /// current state does not.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Bounded log of transitions.
///
/// Keeps the most recent `capacity` transitions plus running totals, so a
/// long-lived controller records in constant time and memory. `len` and
/// `get_path` cover the retained window; `total` and `flips` cover the
/// whole lifetime.
///
/// # Example
///
/// ```rust
/// use toggle_props::core::{ToggleState, ToggleTransition, TransitionLog};
/// use chrono::Utc;
///
/// let mut log = TransitionLog::with_capacity(1);
/// for (from, to) in [(false, true), (true, false)] {
///     log.record(ToggleTransition {
///         from: ToggleState::new(from),
///         to: ToggleState::new(to),
///         action: "toggle".to_string(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.total(), 2);
/// assert_eq!(log.get_path(), vec![ToggleState::ON, ToggleState::OFF]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    transitions: VecDeque<ToggleTransition>,
    capacity: usize,
    total: usize,
    flips: usize,
}

impl TransitionLog {
    /// Transitions retained by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Retain at most `capacity` recent transitions. Totals are always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
            flips: 0,
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: ToggleTransition) {
        self.total += 1;
        if transition.changed() {
            self.flips += 1;
        }
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed within the window: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<ToggleState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Transitions recorded over the whole lifetime that changed `on`.
    pub fn flips(&self) -> usize {
        self.flips
    }

    /// Transitions recorded over the whole lifetime.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Time between the oldest retained and the last transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &ToggleTransition> {
        self.transitions.iter()
    }
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}
