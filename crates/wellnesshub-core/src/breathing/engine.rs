//! Guided breathing state machine.
//!
//! The engine does not keep time itself. The caller drives it with one
//! `tick()` per elapsed second, which keeps the state machine deterministic
//! and trivially testable. Phase changes happen when the elapsed count
//! reaches the phase duration, so a 4 second inhale lasts exactly 4 ticks.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Phase, PhasePattern};
use crate::events::Event;

/// The breathing exercise state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingEngine {
    pattern: PhasePattern,
    active: bool,
    phase: Phase,
    elapsed_in_phase: u32,
    completed_cycles: u32,
}

impl BreathingEngine {
    pub fn new(pattern: PhasePattern) -> Self {
        Self {
            pattern,
            active: false,
            phase: Phase::Inhale,
            elapsed_in_phase: 0,
            completed_cycles: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Seconds remaining in the current phase.
    pub fn remaining_in_phase(&self) -> u32 {
        self.pattern
            .duration_secs(self.phase)
            .saturating_sub(self.elapsed_in_phase)
    }

    /// Begin a session from the top of the inhale phase.
    ///
    /// Starting an already active engine is a no-op and emits nothing.
    pub fn start(&mut self) -> Option<Event> {
        if self.active {
            return None;
        }
        self.active = true;
        self.phase = Phase::Inhale;
        self.elapsed_in_phase = 0;
        self.completed_cycles = 0;
        Some(Event::SessionStarted { at: Utc::now() })
    }

    /// Advance the engine by one second.
    ///
    /// Returns the events that fired: a phase advance when the current
    /// phase's duration is used up, plus a cycle completion when the
    /// advance wraps back to inhale. Ticking an inactive engine does
    /// nothing.
    pub fn tick(&mut self) -> Vec<Event> {
        if !self.active {
            return Vec::new();
        }
        self.elapsed_in_phase += 1;
        if self.elapsed_in_phase < self.pattern.duration_secs(self.phase) {
            return Vec::new();
        }
        self.phase = self.phase.next();
        self.elapsed_in_phase = 0;
        let mut events = vec![Event::PhaseAdvanced { phase: self.phase }];
        if self.phase == Phase::Inhale {
            self.completed_cycles += 1;
            events.push(Event::CycleCompleted {
                completed_cycles: self.completed_cycles,
            });
        }
        events
    }

    /// Stop the session and reset to the initial state.
    ///
    /// The returned event carries `session_logged: true` when at least one
    /// full cycle completed; the caller is responsible for incrementing the
    /// persistent session counter exactly once in that case. Stopping an
    /// inactive engine is a no-op.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }
        let completed_cycles = self.completed_cycles;
        *self = Self::new(self.pattern);
        Some(Event::SessionStopped {
            completed_cycles,
            session_logged: completed_cycles > 0,
        })
    }

    /// Discard all session state without logging anything.
    pub fn reset(&mut self) -> Event {
        *self = Self::new(self.pattern);
        Event::SessionReset
    }

    /// Current state as a display-ready view.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            active: self.active,
            phase: self.phase,
            instruction: self.phase.instruction(),
            remaining_in_phase: self.remaining_in_phase(),
            completed_cycles: self.completed_cycles,
        }
    }
}

/// Snapshot of the engine for status output.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub active: bool,
    pub phase: Phase,
    pub instruction: &'static str,
    pub remaining_in_phase: u32,
    pub completed_cycles: u32,
}

impl Default for BreathingEngine {
    fn default() -> Self {
        Self::new(PhasePattern::four_seven_eight())
    }
}
