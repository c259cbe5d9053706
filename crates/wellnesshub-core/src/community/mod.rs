//! Community forum and blog.
//!
//! Both stores keep their posts as a single JSON list in the key-value
//! store, newest first. There is no server; "community" content is local
//! to the install, pre-seeded with sample posts on first read so the
//! pages never start empty.

pub mod blog;
pub mod forum;

pub use blog::{BlogPost, BlogStore};
pub use forum::{ForumPost, ForumStore};

use chrono::{DateTime, Utc};

/// Relative timestamp for post listings.
///
/// Under an hour reads "Just now", under a day "Nh ago", under a week
/// "Nd ago", anything older the plain date.
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }
    created_at.format("%Y-%m-%d").to_string()
}

/// Display name for a post author as seen by `viewer_id`.
///
/// The viewer's own posts read "You"; other authors show their stored
/// username, or an id-derived handle when none was recorded.
pub fn display_name(viewer_id: &str, author_id: &str, username: Option<&str>) -> String {
    if viewer_id == author_id {
        return "You".to_string();
    }
    match username {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            let tail: String = author_id
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("User {tail}")
        }
    }
}
