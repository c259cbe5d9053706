//! Core library for Wellness Hub: a local-first mental wellness tracker.
//!
//! Everything here is UI-agnostic. State machines are caller-driven (the
//! breathing engine advances only when told a second has passed), derived
//! values like streaks, badges and mood statistics are recomputed from
//! stored records on demand, and all persistence goes through the local
//! SQLite store. The CLI crate is one front end over this library; any
//! other front end would use the same surface.

pub mod access;
pub mod breathing;
pub mod community;
pub mod content;
pub mod directory;
pub mod error;
pub mod events;
pub mod journal;
pub mod progress;
pub mod quiz;
pub mod report;
pub mod routes;
pub mod storage;

pub use access::{AdminGate, LocalUser, Role};
pub use breathing::{BreathingEngine, Phase, PhasePattern};
pub use error::{CoreError, Result};
pub use events::Event;
pub use journal::{JournalEntry, Mood, NewEntry};
pub use progress::DashboardSummary;
pub use quiz::Quiz;
pub use routes::Page;
pub use storage::{Config, Database};
