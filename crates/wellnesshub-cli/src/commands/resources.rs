use clap::Subcommand;
use wellnesshub_core::content::{CONDITIONS, HOTLINES, SAFETY_STEPS, THOUGHT_RECORD_STEPS};

#[derive(Subcommand)]
pub enum ResourcesAction {
    /// Print the crisis hotline list
    Hotlines,
    /// Print the immediate safety plan steps
    SafetyPlan,
    /// Print the common condition overviews
    Conditions,
    /// Print the CBT thought record prompts
    ThoughtRecord,
}

pub fn run(action: ResourcesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ResourcesAction::Hotlines => {
            println!("{}", serde_json::to_string_pretty(&HOTLINES)?);
        }
        ResourcesAction::SafetyPlan => {
            println!("{}", serde_json::to_string_pretty(&SAFETY_STEPS)?);
        }
        ResourcesAction::Conditions => {
            println!("{}", serde_json::to_string_pretty(&CONDITIONS)?);
        }
        ResourcesAction::ThoughtRecord => {
            println!("{}", serde_json::to_string_pretty(&THOUGHT_RECORD_STEPS)?);
        }
    }

    Ok(())
}
