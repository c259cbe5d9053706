//! Achievement badges derived from activity counts.
//!
//! Each badge is a fixed threshold predicate over the progress snapshot.
//! Nothing about "earned" state is persisted; the set is recomputed on
//! every invocation from the source counts.

use serde::Serialize;

/// Counts a badge evaluation runs over.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProgressSnapshot {
    pub entry_count: u64,
    pub session_count: u64,
    pub streak: u32,
}

/// A named achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Evaluate the fixed badge set against a snapshot.
///
/// The returned order is stable: journal badges, session badges, streak.
pub fn evaluate(snapshot: &ProgressSnapshot) -> Vec<Badge> {
    let mut badges = Vec::new();
    if snapshot.entry_count >= 1 {
        badges.push(Badge { name: "First Entry", icon: "📝" });
    }
    if snapshot.entry_count >= 10 {
        badges.push(Badge { name: "Consistent Journalist", icon: "✍️" });
    }
    if snapshot.session_count >= 1 {
        badges.push(Badge { name: "Mindful Start", icon: "🧘" });
    }
    if snapshot.session_count >= 10 {
        badges.push(Badge { name: "Zen Master", icon: "🧘‍♀️" });
    }
    if snapshot.streak >= 7 {
        badges.push(Badge { name: "Week Streak", icon: "🔥" });
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(snapshot: ProgressSnapshot) -> Vec<&'static str> {
        evaluate(&snapshot).iter().map(|b| b.name).collect()
    }

    #[test]
    fn no_activity_earns_nothing() {
        assert!(names(ProgressSnapshot::default()).is_empty());
    }

    #[test]
    fn first_entry_at_one() {
        let earned = names(ProgressSnapshot { entry_count: 1, ..Default::default() });
        assert_eq!(earned, vec!["First Entry"]);
    }

    #[test]
    fn journalist_at_ten() {
        let earned = names(ProgressSnapshot { entry_count: 10, ..Default::default() });
        assert_eq!(earned, vec!["First Entry", "Consistent Journalist"]);
    }

    #[test]
    fn session_badges() {
        let earned = names(ProgressSnapshot { session_count: 10, ..Default::default() });
        assert_eq!(earned, vec!["Mindful Start", "Zen Master"]);
    }

    #[test]
    fn week_streak_earned_iff_seven() {
        let below = names(ProgressSnapshot { streak: 6, ..Default::default() });
        assert!(below.is_empty());
        let at = names(ProgressSnapshot { streak: 7, ..Default::default() });
        assert_eq!(at, vec!["Week Streak"]);
    }
}
