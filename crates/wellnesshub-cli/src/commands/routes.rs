use clap::Subcommand;
use wellnesshub_core::Page;

#[derive(Subcommand)]
pub enum RoutesAction {
    /// List every page with its path and title
    List,
    /// Resolve a path to a page
    Resolve {
        /// Path to resolve, e.g. /journal
        path: String,
    },
}

pub fn run(action: RoutesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoutesAction::List => {
            let pages: Vec<_> = Page::ALL
                .iter()
                .map(|page| {
                    serde_json::json!({
                        "path": page.path(),
                        "title": page.title(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
        RoutesAction::Resolve { path } => match Page::resolve(&path) {
            Some(page) => {
                println!(
                    "{}",
                    serde_json::json!({
                        "path": page.path(),
                        "title": page.title(),
                    })
                );
            }
            None => return Err(format!("no page at '{path}'").into()),
        },
    }

    Ok(())
}
