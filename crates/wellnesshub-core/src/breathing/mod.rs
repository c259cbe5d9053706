//! Guided breathing and grounding exercises.

pub mod engine;
pub mod phases;

pub use engine::{BreathingEngine, EngineStatus};
pub use phases::{Phase, PhasePattern};

use serde::Serialize;

use crate::error::Result;
use crate::events::Event;
use crate::storage::Database;

/// Persist the session increment for a stop event.
///
/// The counter moves by exactly one per stop that logged a session
/// (`session_logged: true`); any other event leaves it untouched.
/// Returns the new count when it moved.
pub fn log_stopped_session(db: &Database, event: &Event) -> Result<Option<u64>> {
    match event {
        Event::SessionStopped {
            session_logged: true,
            ..
        } => Ok(Some(db.increment_session_count()?)),
        _ => Ok(None),
    }
}

/// One step of the 5-4-3-2-1 grounding technique.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GroundingStep {
    pub count: u8,
    pub sense: &'static str,
    pub instruction: &'static str,
    pub example: &'static str,
}

/// The 5-4-3-2-1 grounding sequence, in order.
pub const GROUNDING_STEPS: [GroundingStep; 5] = [
    GroundingStep {
        count: 5,
        sense: "See",
        instruction: "Name 5 things you can see around you",
        example: "A window, a plant, your hands, a picture, a door",
    },
    GroundingStep {
        count: 4,
        sense: "Touch",
        instruction: "Name 4 things you can physically feel",
        example: "Your feet on the floor, the chair beneath you, your clothes, the air",
    },
    GroundingStep {
        count: 3,
        sense: "Hear",
        instruction: "Name 3 things you can hear",
        example: "Traffic outside, a clock ticking, your own breathing",
    },
    GroundingStep {
        count: 2,
        sense: "Smell",
        instruction: "Name 2 things you can smell",
        example: "Coffee, fresh air",
    },
    GroundingStep {
        count: 1,
        sense: "Taste",
        instruction: "Name 1 thing you can taste",
        example: "A sip of water, mint from your toothpaste",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounding_counts_down_from_five() {
        let counts: Vec<u8> = GROUNDING_STEPS.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn stop_with_cycles_moves_the_counter_by_one() {
        let db = Database::open_memory().unwrap();
        let mut engine = BreathingEngine::default();
        engine.start();
        for _ in 0..25 {
            engine.tick();
        }
        let event = engine.stop().unwrap();
        assert_eq!(log_stopped_session(&db, &event).unwrap(), Some(1));
        assert_eq!(db.session_count().unwrap(), 1);
    }

    #[test]
    fn stop_without_a_full_cycle_leaves_the_counter() {
        let db = Database::open_memory().unwrap();
        let mut engine = BreathingEngine::default();
        engine.start();
        for _ in 0..5 {
            engine.tick();
        }
        let event = engine.stop().unwrap();
        assert_eq!(log_stopped_session(&db, &event).unwrap(), None);
        assert_eq!(db.session_count().unwrap(), 0);
    }

    #[test]
    fn non_stop_events_never_log() {
        let db = Database::open_memory().unwrap();
        let event = Event::PhaseAdvanced { phase: Phase::Hold };
        assert_eq!(log_stopped_session(&db, &event).unwrap(), None);
        assert_eq!(db.session_count().unwrap(), 0);
    }
}
