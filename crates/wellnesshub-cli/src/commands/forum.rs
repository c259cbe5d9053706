use chrono::Utc;
use clap::Subcommand;
use wellnesshub_core::community::{display_name, format_time_ago, ForumStore};
use wellnesshub_core::storage::{Config, Database};
use wellnesshub_core::{AdminGate, LocalUser};

#[derive(Subcommand)]
pub enum ForumAction {
    /// List all forum posts, newest first
    List,
    /// Publish a post
    Post {
        /// Post title
        #[arg(long)]
        title: String,
        /// Post body
        #[arg(long)]
        content: String,
    },
    /// Toggle your like on a post
    Like {
        /// Post id
        id: i64,
    },
    /// Delete a post (author or moderator only)
    Delete {
        /// Post id
        id: i64,
    },
}

pub fn run(action: ForumAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = ForumStore::new(&db);
    let user = LocalUser::load_or_create(&db)?;

    match action {
        ForumAction::List => {
            let now = Utc::now();
            let posts: Vec<_> = store
                .list()?
                .into_iter()
                .map(|post| {
                    serde_json::json!({
                        "id": post.id,
                        "title": post.title,
                        "content": post.content,
                        "author": display_name(&user.id, &post.user_id, post.username.as_deref()),
                        "posted": format_time_ago(post.created_at, now),
                        "likes": post.likes,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        ForumAction::Post { title, content } => {
            let post = store.create(&title, &content, &user.id)?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        ForumAction::Like { id } => {
            let likes = store.toggle_like(id, &user.id)?;
            println!("{}", serde_json::json!({ "id": id, "likes": likes }));
        }
        ForumAction::Delete { id } => {
            let config = Config::load_or_default()?;
            let role = AdminGate::new(config.admin.password).role(&db)?;
            store.delete(id, &user.id, role)?;
            println!("{}", serde_json::json!({ "deleted": id }));
        }
    }

    Ok(())
}
