use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use wellnesshub_core::journal::{mood_stats, Mood, NewEntry};
use wellnesshub_core::storage::{Config, Database};
use wellnesshub_core::{report, Event};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Add a journal entry
    Add {
        /// Entry title
        #[arg(long)]
        title: String,
        /// Entry body
        #[arg(long)]
        content: String,
        /// Mood: excellent, good, okay, poor or terrible
        #[arg(long)]
        mood: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all entries as JSON, newest first
    List,
    /// Print mood statistics
    Stats,
    /// List the recognized moods
    Moods,
    /// Export all entries to a PDF file
    Export {
        /// Output path, defaults to wellness-report-YYYY-MM-DD.pdf
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        JournalAction::Add {
            title,
            content,
            mood,
            date,
        } => {
            let draft = NewEntry {
                title,
                content,
                mood: Some(mood.parse::<Mood>()?),
                date,
            };
            let entry = draft.validate(Utc::now())?;
            db.insert_entry(&entry)?;
            let event = Event::EntrySaved { id: entry.id };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        JournalAction::List => {
            let entries = db.list_entries()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        JournalAction::Stats => {
            let entries = db.list_entries()?;
            match mood_stats(&entries) {
                Some(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
                None => println!("{{\"total_entries\": 0}}"),
            }
        }
        JournalAction::Moods => {
            let moods: Vec<_> = Mood::ALL
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "value": m.as_str(),
                        "label": m.label(),
                        "icon": m.icon(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&moods)?);
        }
        JournalAction::Export { output } => {
            let config = Config::load_or_default()?;
            let entries = db.list_entries()?;
            let today = Utc::now().date_naive();
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("wellness-report-{today}.pdf")));
            report::export_journal(&entries, &config.report, &output, today)?;
            println!(
                "{}",
                serde_json::json!({
                    "exported": entries.len(),
                    "path": output,
                })
            );
        }
    }

    Ok(())
}
