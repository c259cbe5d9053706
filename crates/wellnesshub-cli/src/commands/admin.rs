use clap::Subcommand;
use wellnesshub_core::storage::{Config, Database};
use wellnesshub_core::{AdminGate, LocalUser};

#[derive(Subcommand)]
pub enum AdminAction {
    /// Sign in with the admin password
    Signin {
        /// The admin password
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Signout,
    /// Print the current role and local user
    Status,
}

pub fn run(action: AdminAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default()?;
    let gate = AdminGate::new(config.admin.password);

    match action {
        AdminAction::Signin { password } => {
            let event = gate.sign_in(&db, &password)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AdminAction::Signout => {
            let event = gate.sign_out(&db)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AdminAction::Status => {
            let role = gate.role(&db)?;
            let user = LocalUser::load_or_create(&db)?;
            println!(
                "{}",
                serde_json::json!({
                    "user": user.short_name(),
                    "user_id": user.id,
                    "role": role.as_str(),
                    "can_moderate": role.can_moderate(),
                })
            );
        }
    }

    Ok(())
}
