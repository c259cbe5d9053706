use clap::Subcommand;
use wellnesshub_core::directory::{self, DirectoryFilter};

#[derive(Subcommand)]
pub enum DirectoryAction {
    /// List every professional
    List,
    /// Search the directory
    Search {
        /// Free-text match against name, profession and specialty
        #[arg(long)]
        term: Option<String>,
        /// Exact specialty filter
        #[arg(long)]
        specialty: Option<String>,
        /// Exact location filter
        #[arg(long)]
        location: Option<String>,
    },
    /// List the available specialties
    Specialties,
    /// List the available locations
    Locations,
}

pub fn run(action: DirectoryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DirectoryAction::List => {
            println!("{}", serde_json::to_string_pretty(directory::builtin())?);
        }
        DirectoryAction::Search {
            term,
            specialty,
            location,
        } => {
            let criteria = DirectoryFilter {
                search: term,
                specialty,
                location,
            };
            let matches = directory::filter(&criteria);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        DirectoryAction::Specialties => {
            println!("{}", serde_json::to_string_pretty(&directory::specialties())?);
        }
        DirectoryAction::Locations => {
            println!("{}", serde_json::to_string_pretty(&directory::locations())?);
        }
    }

    Ok(())
}
