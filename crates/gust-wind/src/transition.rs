use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::WindState;

/// Why the wind state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCause {
    /// Rain or thunder started or stopped.
    Weather,
    /// The previous state ran out its duration.
    Expired,
    /// The dimension suppresses natural wind and forced a state.
    DimensionOverride,
    /// The override ended and the saved state resumed.
    DimensionRestored,
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransitionCause::Weather => "weather changed",
            TransitionCause::Expired => "duration expired",
            TransitionCause::DimensionOverride => "dimension override",
            TransitionCause::DimensionRestored => "dimension restored",
        };
        f.write_str(label)
    }
}

/// A change of the effective wind state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Tick (counted from construction or the last reset) of the change.
    pub tick: u64,
    /// State before the tick.
    pub from: WindState,
    /// State after the tick.
    pub to: WindState,
    /// What triggered the change.
    pub cause: TransitionCause,
}

impl fmt::Display for StateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: {} -> {} ({})",
            self.tick, self.from, self.to, self.cause
        )
    }
}

/// Bounded record of state transitions.
#[derive(Debug, Clone, Default)]
pub struct TransitionLog {
    transitions: VecDeque<StateTransition>,
    max_transitions: usize,
}

impl TransitionLog {
    /// Create a log with the given capacity (0 = unlimited).
    pub fn new(max_transitions: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            max_transitions,
        }
    }

    /// Append a transition, dropping the oldest ones beyond capacity.
    pub fn push(&mut self, transition: StateTransition) {
        if self.max_transitions > 0 && self.transitions.len() == self.max_transitions {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Recorded transitions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Return `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Remove all recorded transitions.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(tick: u64) -> StateTransition {
        StateTransition {
            tick,
            from: WindState::Calm,
            to: WindState::Windy,
            cause: TransitionCause::Expired,
        }
    }

    #[test]
    fn log_push_and_last() {
        let mut log = TransitionLog::new(0);
        assert!(log.is_empty());
        log.push(transition(1));
        log.push(transition(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().map(|t| t.tick), Some(2));
    }

    #[test]
    fn log_max_trims_oldest() {
        let mut log = TransitionLog::new(2);
        for i in 0..5 {
            log.push(transition(i));
        }
        let ticks: Vec<u64> = log.iter().map(|t| t.tick).collect();
        assert_eq!(ticks, vec![3, 4]);
        assert_eq!(log.last().map(|t| t.tick), Some(4));
    }

    #[test]
    fn log_capacity_one_keeps_latest() {
        let mut log = TransitionLog::new(1);
        log.push(transition(1));
        log.push(transition(2));
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().map(|t| t.tick), Some(2));
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(
            transition(9).to_string(),
            "tick 9: calm -> windy (duration expired)"
        );
    }

    #[test]
    fn serializes_with_lowercase_names() {
        let t = StateTransition {
            tick: 3,
            from: WindState::Stormy,
            to: WindState::Calm,
            cause: TransitionCause::DimensionOverride,
        };
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["from"], "stormy");
        assert_eq!(json["to"], "calm");
        assert_eq!(json["cause"], "dimension_override");
    }

    #[test]
    fn clear_empties() {
        let mut log = TransitionLog::new(0);
        log.push(transition(1));
        log.clear();
        assert!(log.is_empty());
    }
}
