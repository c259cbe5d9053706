//! Breathing phases and timing patterns.

use serde::{Deserialize, Serialize};

/// A phase of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
    Pause,
}

impl Phase {
    /// The phase that follows this one in the cycle.
    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Pause,
            Phase::Pause => Phase::Inhale,
        }
    }

    /// Guidance text shown while the phase runs.
    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe Out",
            Phase::Pause => "Pause",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
            Phase::Pause => "pause",
        }
    }
}

/// Per-phase durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePattern {
    pub inhale_secs: u32,
    pub hold_secs: u32,
    pub exhale_secs: u32,
    pub pause_secs: u32,
}

impl PhasePattern {
    /// The 4-7-8 relaxation pattern with a one second pause.
    pub fn four_seven_eight() -> Self {
        Self {
            inhale_secs: 4,
            hold_secs: 7,
            exhale_secs: 8,
            pause_secs: 1,
        }
    }

    pub fn duration_secs(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Inhale => self.inhale_secs,
            Phase::Hold => self.hold_secs,
            Phase::Exhale => self.exhale_secs,
            Phase::Pause => self.pause_secs,
        }
    }

    /// Total seconds in one full cycle.
    pub fn cycle_secs(&self) -> u32 {
        self.inhale_secs + self.hold_secs + self.exhale_secs + self.pause_secs
    }
}

impl Default for PhasePattern {
    fn default() -> Self {
        Self::four_seven_eight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_in_order() {
        assert_eq!(Phase::Inhale.next(), Phase::Hold);
        assert_eq!(Phase::Hold.next(), Phase::Exhale);
        assert_eq!(Phase::Exhale.next(), Phase::Pause);
        assert_eq!(Phase::Pause.next(), Phase::Inhale);
    }

    #[test]
    fn default_pattern_is_four_seven_eight() {
        let pattern = PhasePattern::default();
        assert_eq!(pattern.duration_secs(Phase::Inhale), 4);
        assert_eq!(pattern.duration_secs(Phase::Hold), 7);
        assert_eq!(pattern.duration_secs(Phase::Exhale), 8);
        assert_eq!(pattern.duration_secs(Phase::Pause), 1);
        assert_eq!(pattern.cycle_secs(), 20);
    }
}
