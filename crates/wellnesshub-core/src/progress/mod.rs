//! Derived gamification state: check-in streak and badges.
//!
//! Everything here is a pure function over a snapshot of stored records.
//! Given the trivial input sizes there is no caching; the dashboard is
//! reassembled from storage on every read.

pub mod badges;
pub mod streak;

pub use badges::{evaluate, Badge, ProgressSnapshot};
pub use streak::current_streak;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::storage::Database;

/// Dashboard view: counts, streak and earned badges.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub entry_count: u64,
    pub session_count: u64,
    pub streak: u32,
    pub badges: Vec<Badge>,
}

/// Assemble the dashboard from stored records.
///
/// # Errors
/// Returns an error if reading the store fails.
pub fn dashboard(db: &Database, today: NaiveDate) -> Result<DashboardSummary> {
    let entry_count = db.entry_count()?;
    let session_count = db.session_count()?;
    let streak = current_streak(&db.entry_dates()?, today);
    let badges = evaluate(&ProgressSnapshot {
        entry_count,
        session_count,
        streak,
    });
    Ok(DashboardSummary {
        entry_count,
        session_count,
        streak,
        badges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{JournalEntry, Mood};
    use chrono::Utc;

    #[test]
    fn dashboard_reflects_store() {
        let db = Database::open_memory().unwrap();
        let now = Utc::now();
        let entry = JournalEntry {
            id: now.timestamp_millis(),
            title: "Check-in".into(),
            content: "Feeling fine".into(),
            mood: Mood::Good,
            date: now.date_naive(),
            created_at: now,
        };
        db.insert_entry(&entry).unwrap();
        db.increment_session_count().unwrap();

        let summary = dashboard(&db, now.date_naive()).unwrap();
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.session_count, 1);
        assert_eq!(summary.streak, 1);
        let names: Vec<_> = summary.badges.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["First Entry", "Mindful Start"]);
    }
}
