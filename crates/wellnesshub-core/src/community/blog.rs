//! The community blog: longer-form posts with excerpts and view counts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::storage::Database;

const BLOG_POSTS_KEY: &str = "blog_posts";

/// Estimated reading speed used for the read-time label.
const WORDS_PER_MINUTE: usize = 200;

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub read_time: String,
}

/// Blog post store backed by the key-value table.
pub struct BlogStore<'a> {
    db: &'a Database,
}

impl<'a> BlogStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All posts, newest first. Seeds the sample posts on first read;
    /// malformed stored data reads as an empty list.
    pub fn list(&self) -> Result<Vec<BlogPost>> {
        match self.db.load_json::<Vec<BlogPost>>(BLOG_POSTS_KEY)? {
            Some(posts) => Ok(posts),
            None => {
                let posts = Self::sample_posts(Utc::now());
                self.db.store_json(BLOG_POSTS_KEY, &posts)?;
                Ok(posts)
            }
        }
    }

    /// Publish a new post at the head of the list.
    ///
    /// The read-time label is derived from the word count at roughly 200
    /// words per minute, rounded up.
    ///
    /// # Errors
    /// Rejects an empty title, excerpt or content.
    pub fn create(
        &self,
        title: &str,
        excerpt: &str,
        content: &str,
        user_id: &str,
    ) -> Result<BlogPost> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        if excerpt.trim().is_empty() {
            return Err(ValidationError::MissingField("excerpt").into());
        }
        if content.trim().is_empty() {
            return Err(ValidationError::MissingField("content").into());
        }
        let now = Utc::now();
        let post = BlogPost {
            id: now.timestamp_millis(),
            title: title.trim().to_string(),
            excerpt: excerpt.trim().to_string(),
            content: content.trim().to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            views: 0,
            read_time: read_time_label(content),
        };
        let mut posts = self.list()?;
        posts.insert(0, post.clone());
        self.db.store_json(BLOG_POSTS_KEY, &posts)?;
        Ok(post)
    }

    /// Open a post for reading: increments its view counter and returns
    /// the updated post.
    ///
    /// # Errors
    /// Returns an error when the post does not exist.
    pub fn read(&self, post_id: i64) -> Result<BlogPost> {
        let mut posts = self.list()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "post_id".to_string(),
                message: format!("no blog post with id {post_id}"),
            })?;
        post.views += 1;
        let updated = post.clone();
        self.db.store_json(BLOG_POSTS_KEY, &posts)?;
        Ok(updated)
    }

    fn sample_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
        vec![
            BlogPost {
                id: 1,
                title: "The Journey to Self-Acceptance: My Story".to_string(),
                excerpt: "Learning to accept myself wasn't easy, but it was the most important journey I've ever taken. Here's what I learned along the way.".to_string(),
                content: "Learning to accept myself wasn't easy, but it was the most important journey I've ever taken. For years, I struggled with self-doubt and negative self-talk that seemed to follow me everywhere.\n\nThe turning point came when I realized that self-acceptance doesn't mean giving up on growth or improvement. Instead, it means acknowledging where you are right now while still working toward where you want to be.\n\nHere are some key insights that helped me:\n\n1. Practice self-compassion: Treat yourself with the same kindness you'd show a good friend.\n\n2. Challenge negative thoughts: When you catch yourself being self-critical, ask if you'd say the same thing to someone you care about.\n\n3. Celebrate small wins: Every step forward, no matter how small, is worth acknowledging.\n\n4. Embrace imperfection: Nobody has it all figured out, and that's perfectly okay.\n\nThe journey to self-acceptance is ongoing, and some days are harder than others. But I've learned that being gentle with myself makes all the difference. Remember, you are worthy of love and acceptance exactly as you are right now.".to_string(),
                user_id: "user_blogger1".to_string(),
                created_at: now - Duration::days(3),
                views: 45,
                read_time: "5 min read".to_string(),
            },
            BlogPost {
                id: 2,
                title: "Building Healthy Boundaries: A Practical Guide".to_string(),
                excerpt: "Setting boundaries isn't selfish, it's essential for mental health. Here's how to start building healthier relationships.".to_string(),
                content: "Setting boundaries isn't selfish, it's essential for mental health and building healthier relationships. I used to think that saying \"no\" made me a bad person, but I've learned that boundaries are actually acts of self-care and respect.\n\nWhat are boundaries?\nBoundaries are limits we set to protect our physical, emotional, and mental well-being. They help us define what we're comfortable with and how we want to be treated.\n\nTypes of boundaries:\n- Physical boundaries: Personal space and physical touch\n- Emotional boundaries: Protecting your feelings and energy\n- Time boundaries: How you spend your time and availability\n- Digital boundaries: Social media and technology limits\n\nHow to set boundaries:\n\n1. Identify your limits: What makes you uncomfortable? What drains your energy?\n\n2. Start small: Begin with low-stakes situations to practice.\n\n3. Be clear and direct: Use \"I\" statements like \"I need some time to think about this.\"\n\n4. Stay consistent: Boundaries only work if you maintain them.\n\n5. Expect pushback: Some people might not like your boundaries, and that's okay.\n\nRemember, setting boundaries is a skill that takes practice. Be patient with yourself as you learn to prioritize your well-being. You deserve relationships that respect your limits and support your growth.".to_string(),
                user_id: "user_blogger2".to_string(),
                created_at: now - Duration::days(5),
                views: 67,
                read_time: "7 min read".to_string(),
            },
        ]
    }
}

/// "N min read" label at roughly 200 words per minute, rounded up.
fn read_time_label(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_seeds_samples() {
        let db = Database::open_memory().unwrap();
        let posts = BlogStore::new(&db).list().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].read_time, "5 min read");
    }

    #[test]
    fn create_computes_read_time() {
        let db = Database::open_memory().unwrap();
        let store = BlogStore::new(&db);
        let short = store
            .create("Short", "A quick note", "just a few words", "user_me")
            .unwrap();
        assert_eq!(short.read_time, "1 min read");

        let long_content = "word ".repeat(401);
        let long = store
            .create("Long", "A longer read", &long_content, "user_me")
            .unwrap();
        assert_eq!(long.read_time, "3 min read");
    }

    #[test]
    fn create_requires_all_fields() {
        let db = Database::open_memory().unwrap();
        let store = BlogStore::new(&db);
        assert!(store.create("", "e", "c", "user_me").is_err());
        assert!(store.create("t", " ", "c", "user_me").is_err());
        assert!(store.create("t", "e", "", "user_me").is_err());
    }

    #[test]
    fn reading_increments_views() {
        let db = Database::open_memory().unwrap();
        let store = BlogStore::new(&db);
        assert_eq!(store.read(1).unwrap().views, 46);
        assert_eq!(store.read(1).unwrap().views, 47);
        assert!(store.read(999).is_err());
    }
}
