use clap::Subcommand;
use wellnesshub_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the full configuration as JSON
    Show,
    /// Get a value by dotted key, e.g. breathing.inhale_secs
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key and save
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Print the configuration file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            let value = config.get(&key)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{}", serde_json::json!({ "key": key, "value": config.get(&key)? }));
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }

    Ok(())
}
