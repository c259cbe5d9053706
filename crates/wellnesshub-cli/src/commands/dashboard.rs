use chrono::Utc;
use clap::Subcommand;
use wellnesshub_core::progress;
use wellnesshub_core::storage::Database;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Print counts, current streak and earned badges as JSON
    Show,
}

pub fn run(action: DashboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        DashboardAction::Show => {
            let summary = progress::dashboard(&db, Utc::now().date_naive())?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
