use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wellnesshub-cli", version, about = "Wellness Hub CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Journal and mood tracking
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Activity overview: counts, streak and badges
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },
    /// Guided breathing and grounding exercises
    Breathe {
        #[command(subcommand)]
        action: commands::breathe::BreatheAction,
    },
    /// Self-assessment quizzes
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Community forum
    Forum {
        #[command(subcommand)]
        action: commands::forum::ForumAction,
    },
    /// Community blog
    Blog {
        #[command(subcommand)]
        action: commands::blog::BlogAction,
    },
    /// Find a mental health professional
    Directory {
        #[command(subcommand)]
        action: commands::directory::DirectoryAction,
    },
    /// Admin gate
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Page routing table
    Routes {
        #[command(subcommand)]
        action: commands::routes::RoutesAction,
    },
    /// Crisis resources and informational content
    Resources {
        #[command(subcommand)]
        action: commands::resources::ResourcesAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Dashboard { action } => commands::dashboard::run(action),
        Commands::Breathe { action } => commands::breathe::run(action),
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Forum { action } => commands::forum::run(action),
        Commands::Blog { action } => commands::blog::run(action),
        Commands::Directory { action } => commands::directory::run(action),
        Commands::Admin { action } => commands::admin::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Routes { action } => commands::routes::run(action),
        Commands::Resources { action } => commands::resources::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
