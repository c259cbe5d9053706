use clap::Subcommand;
use wellnesshub_core::breathing::{self, BreathingEngine, GROUNDING_STEPS};
use wellnesshub_core::storage::{Config, Database};

const ENGINE_KEY: &str = "breathing_engine";

#[derive(Subcommand)]
pub enum BreatheAction {
    /// Start a breathing session
    Start,
    /// Advance the session by elapsed seconds
    Tick {
        /// Seconds that have passed
        #[arg(long, default_value = "1")]
        seconds: u32,
    },
    /// Print current session state as JSON
    Status,
    /// Stop the session; a session with at least one full cycle is logged
    Stop,
    /// Discard session state without logging
    Reset,
    /// Print the breathing instructions and the 5-4-3-2-1 grounding steps
    Guide,
    /// Log a completed grounding exercise as one mindfulness session
    GroundComplete,
}

fn load_engine(db: &Database) -> BreathingEngine {
    if let Ok(Some(json)) = db.kv_get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<BreathingEngine>(&json) {
            return engine;
        }
    }
    let pattern = Config::load_or_default()
        .map(|c| c.breathing.phase_pattern())
        .unwrap_or_default();
    BreathingEngine::new(pattern)
}

fn save_engine(db: &Database, engine: &BreathingEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}

pub fn run(action: BreatheAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = load_engine(&db);

    match action {
        BreatheAction::Start => {
            match engine.start() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.status())?),
            }
            save_engine(&db, &engine)?;
        }
        BreatheAction::Tick { seconds } => {
            let mut events = Vec::new();
            for _ in 0..seconds {
                events.extend(engine.tick());
            }
            save_engine(&db, &engine)?;
            if events.is_empty() {
                println!("{}", serde_json::to_string_pretty(&engine.status())?);
            } else {
                println!("{}", serde_json::to_string_pretty(&events)?);
            }
        }
        BreatheAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.status())?);
        }
        BreatheAction::Stop => match engine.stop() {
            Some(event) => {
                // The reset engine must be persisted before the counter
                // moves; a stop interrupted in between must not leave an
                // active engine that would log the same session again.
                save_engine(&db, &engine)?;
                if let Some(sessions) = breathing::log_stopped_session(&db, &event)? {
                    log::info!("logged breathing session ({sessions} total)");
                }
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            None => println!("{}", serde_json::to_string_pretty(&engine.status())?),
        },
        BreatheAction::Reset => {
            let event = engine.reset();
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        BreatheAction::Guide => {
            let pattern = Config::load_or_default()
                .map(|c| c.breathing.phase_pattern())
                .unwrap_or_default();
            let guide = serde_json::json!({
                "breathing": {
                    "pattern": pattern,
                    "instructions": [
                        format!("Breathe In for {} seconds", pattern.inhale_secs),
                        format!("Hold for {} seconds", pattern.hold_secs),
                        format!("Breathe Out for {} seconds", pattern.exhale_secs),
                        format!("Pause for {} second(s)", pattern.pause_secs),
                    ],
                },
                "grounding": GROUNDING_STEPS,
            });
            println!("{}", serde_json::to_string_pretty(&guide)?);
        }
        BreatheAction::GroundComplete => {
            let sessions = db.increment_session_count()?;
            println!("{}", serde_json::json!({ "sessions": sessions }));
        }
    }

    Ok(())
}
