//! Domain events emitted by state transitions.
//!
//! Events are tagged JSON values so front ends (CLI output today, anything
//! subscribing later) can dispatch on the `type` field without knowing the
//! full set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::breathing::Phase;

/// Something that happened as a result of a state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A breathing session was started.
    SessionStarted { at: DateTime<Utc> },
    /// The breathing engine moved to the next phase.
    PhaseAdvanced { phase: Phase },
    /// A full breathing cycle finished.
    CycleCompleted { completed_cycles: u32 },
    /// A breathing session was stopped.
    ///
    /// `session_logged` is true when at least one full cycle completed, in
    /// which case the mindfulness session counter was incremented once.
    SessionStopped {
        completed_cycles: u32,
        session_logged: bool,
    },
    /// The breathing engine was reset without logging anything.
    SessionReset,
    /// A journal entry was saved.
    EntrySaved { id: i64 },
    /// Admin sign-in succeeded.
    AdminSignedIn { at: DateTime<Utc> },
    /// Admin signed out.
    AdminSignedOut { at: DateTime<Utc> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_type_tagged() {
        let event = Event::SessionStopped {
            completed_cycles: 3,
            session_logged: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "session_stopped");
        assert_eq!(json["completed_cycles"], 3);
        assert_eq!(json["session_logged"], true);
    }

    #[test]
    fn phase_advanced_round_trips() {
        let event = Event::PhaseAdvanced { phase: Phase::Hold };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
