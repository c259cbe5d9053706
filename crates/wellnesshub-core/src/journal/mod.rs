//! Journal entries and mood tracking.
//!
//! Entries are created by validated submission, are immutable once created,
//! and are never deleted. Mood statistics are derived on every call from the
//! full entry list; nothing derived is persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Mood recorded with a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Okay,
    Poor,
    Terrible,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Excellent,
        Mood::Good,
        Mood::Okay,
        Mood::Poor,
        Mood::Terrible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Poor => "poor",
            Mood::Terrible => "terrible",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Excellent => "Excellent",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Poor => "Poor",
            Mood::Terrible => "Terrible",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mood::Excellent => "😄",
            Mood::Good => "😊",
            Mood::Okay => "😐",
            Mood::Poor => "😔",
            Mood::Terrible => "😢",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(Mood::Excellent),
            "good" => Ok(Mood::Good),
            "okay" => Ok(Mood::Okay),
            "poor" => Ok(Mood::Poor),
            "terrible" => Ok(Mood::Terrible),
            other => Err(ValidationError::InvalidValue {
                field: "mood".into(),
                message: format!("unknown mood '{other}'"),
            }),
        }
    }
}

/// A single journal entry.
///
/// The id is the creation timestamp in milliseconds, which doubles as a
/// unique key. The date carries no time component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A draft entry as submitted by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
    pub date: Option<NaiveDate>,
}

impl NewEntry {
    /// Validate the draft and stamp it into a [`JournalEntry`].
    ///
    /// Title, content and mood are all required. On failure the draft is
    /// untouched so the caller can redisplay it for correction.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first missing field.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<JournalEntry, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingField("content"));
        }
        let mood = self.mood.ok_or(ValidationError::MissingField("mood"))?;
        Ok(JournalEntry {
            id: now.timestamp_millis(),
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            mood,
            date: self.date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
        })
    }
}

/// Per-mood entry count.
#[derive(Debug, Clone, Serialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: u64,
}

/// Derived mood statistics. Recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct MoodStats {
    pub total_entries: u64,
    pub most_common_mood: Mood,
    pub counts: Vec<MoodCount>,
}

/// Compute mood statistics over a set of entries.
///
/// Returns `None` for an empty entry list.
pub fn mood_stats(entries: &[JournalEntry]) -> Option<MoodStats> {
    if entries.is_empty() {
        return None;
    }
    let counts: Vec<MoodCount> = Mood::ALL
        .iter()
        .map(|&mood| MoodCount {
            mood,
            count: entries.iter().filter(|e| e.mood == mood).count() as u64,
        })
        .collect();
    let most_common_mood = counts
        .iter()
        .max_by_key(|c| c.count)
        .map(|c| c.mood)
        .unwrap_or(Mood::Okay);
    Some(MoodStats {
        total_entries: entries.len() as u64,
        most_common_mood,
        counts,
    })
}
