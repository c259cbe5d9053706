use chrono::Utc;
use clap::Subcommand;
use wellnesshub_core::community::{display_name, format_time_ago, BlogStore};
use wellnesshub_core::storage::Database;
use wellnesshub_core::LocalUser;

#[derive(Subcommand)]
pub enum BlogAction {
    /// List all blog posts with excerpts, newest first
    List,
    /// Publish a post
    Post {
        /// Post title
        #[arg(long)]
        title: String,
        /// One or two sentence summary shown in listings
        #[arg(long)]
        excerpt: String,
        /// Full post body
        #[arg(long)]
        content: String,
    },
    /// Read a post in full; reading counts as a view
    Read {
        /// Post id
        id: i64,
    },
}

pub fn run(action: BlogAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = BlogStore::new(&db);
    let user = LocalUser::load_or_create(&db)?;

    match action {
        BlogAction::List => {
            let now = Utc::now();
            let posts: Vec<_> = store
                .list()?
                .into_iter()
                .map(|post| {
                    serde_json::json!({
                        "id": post.id,
                        "title": post.title,
                        "excerpt": post.excerpt,
                        "author": display_name(&user.id, &post.user_id, None),
                        "posted": format_time_ago(post.created_at, now),
                        "views": post.views,
                        "read_time": post.read_time,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        BlogAction::Post {
            title,
            excerpt,
            content,
        } => {
            let post = store.create(&title, &excerpt, &content, &user.id)?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        BlogAction::Read { id } => {
            let post = store.read(id)?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
    }

    Ok(())
}
