//! The community forum: short support posts with likes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::access::Role;
use crate::error::{AccessError, Result, ValidationError};
use crate::storage::Database;

const FORUM_POSTS_KEY: &str = "forum_posts";

/// A forum post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
}

/// Forum post store backed by the key-value table.
pub struct ForumStore<'a> {
    db: &'a Database,
}

impl<'a> ForumStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All posts, newest first. Seeds the sample posts on first read so
    /// the forum never starts empty. A list emptied by deletions stays
    /// empty; malformed stored data reads as an empty list.
    pub fn list(&self) -> Result<Vec<ForumPost>> {
        match self.db.load_json::<Vec<ForumPost>>(FORUM_POSTS_KEY)? {
            Some(posts) => Ok(posts),
            None => {
                let posts = Self::sample_posts(Utc::now());
                self.db.store_json(FORUM_POSTS_KEY, &posts)?;
                Ok(posts)
            }
        }
    }

    /// Publish a new post at the head of the list.
    ///
    /// # Errors
    /// Rejects empty titles or content.
    pub fn create(&self, title: &str, content: &str, user_id: &str) -> Result<ForumPost> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        if content.trim().is_empty() {
            return Err(ValidationError::MissingField("content").into());
        }
        let now = Utc::now();
        let post = ForumPost {
            id: now.timestamp_millis(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            user_id: user_id.to_string(),
            username: None,
            created_at: now,
            likes: 0,
        };
        let mut posts = self.list()?;
        posts.insert(0, post.clone());
        self.db.store_json(FORUM_POSTS_KEY, &posts)?;
        Ok(post)
    }

    /// Toggle the caller's like on a post; returns the new like count.
    ///
    /// Each user counts at most once per post, tracked by a marker key,
    /// so toggling twice returns to the starting count.
    ///
    /// # Errors
    /// Returns an error when the post does not exist.
    pub fn toggle_like(&self, post_id: i64, user_id: &str) -> Result<i64> {
        let marker = format!("liked_forum_{post_id}_{user_id}");
        let already_liked = self.db.kv_get(&marker)?.is_some();

        let mut posts = self.list()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "post_id".to_string(),
                message: format!("no forum post with id {post_id}"),
            })?;
        if already_liked {
            self.db.kv_delete(&marker)?;
            post.likes -= 1;
        } else {
            self.db.kv_set(&marker, "true")?;
            post.likes += 1;
        }
        let likes = post.likes;
        self.db.store_json(FORUM_POSTS_KEY, &posts)?;
        Ok(likes)
    }

    /// Delete a post. Allowed for the post's author and for moderators.
    ///
    /// # Errors
    /// Returns [`AccessError::NotPermitted`] for anyone else, and an
    /// error when the post does not exist.
    pub fn delete(&self, post_id: i64, user_id: &str, role: Role) -> Result<()> {
        let mut posts = self.list()?;
        let post = posts
            .iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "post_id".to_string(),
                message: format!("no forum post with id {post_id}"),
            })?;
        if post.user_id != user_id && !role.can_moderate() {
            return Err(
                AccessError::NotPermitted("only the author or a moderator can delete a post".to_string())
                    .into(),
            );
        }
        posts.retain(|p| p.id != post_id);
        self.db.store_json(FORUM_POSTS_KEY, &posts)?;
        Ok(())
    }

    fn sample_posts(now: DateTime<Utc>) -> Vec<ForumPost> {
        vec![
            ForumPost {
                id: 1,
                title: "Finding Hope in Dark Times".to_string(),
                content: "Remember that it's okay to not be okay, and seeking help is a sign of strength.".to_string(),
                user_id: "user_sample1".to_string(),
                username: Some("HopefulSoul".to_string()),
                created_at: now - Duration::days(1),
                likes: 12,
            },
            ForumPost {
                id: 2,
                title: "Meditation Changed My Life".to_string(),
                content: "A daily meditation practice has greatly improved my mood and stress levels.".to_string(),
                user_id: "user_sample2".to_string(),
                username: Some("ZenSeeker".to_string()),
                created_at: now - Duration::days(2),
                likes: 8,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_seeds_samples() {
        let db = Database::open_memory().unwrap();
        let posts = ForumStore::new(&db).list().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].username.as_deref(), Some("HopefulSoul"));
    }

    #[test]
    fn new_posts_go_first() {
        let db = Database::open_memory().unwrap();
        let store = ForumStore::new(&db);
        store.create("A hard week", "It got better", "user_me").unwrap();
        let posts = store.list().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "A hard week");
        assert_eq!(posts[0].likes, 0);
    }

    #[test]
    fn empty_fields_rejected() {
        let db = Database::open_memory().unwrap();
        let store = ForumStore::new(&db);
        assert!(store.create("  ", "text", "user_me").is_err());
        assert!(store.create("title", "", "user_me").is_err());
    }

    #[test]
    fn like_toggles_per_user() {
        let db = Database::open_memory().unwrap();
        let store = ForumStore::new(&db);
        assert_eq!(store.toggle_like(1, "user_me").unwrap(), 13);
        assert_eq!(store.toggle_like(1, "user_other").unwrap(), 14);
        assert_eq!(store.toggle_like(1, "user_me").unwrap(), 13);
    }

    #[test]
    fn delete_requires_ownership_or_moderator() {
        let db = Database::open_memory().unwrap();
        let store = ForumStore::new(&db);
        assert!(store.delete(1, "user_me", Role::Member).is_err());
        store.delete(1, "user_me", Role::Moderator).unwrap();
        store.delete(2, "user_sample2", Role::Member).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
