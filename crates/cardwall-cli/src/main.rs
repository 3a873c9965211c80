use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cardwall", version, about = "Cardwall CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
    /// Board management
    Board {
        #[command(subcommand)]
        action: commands::board::BoardAction,
    },
    /// List management
    List {
        #[command(subcommand)]
        action: commands::list::ListAction,
    },
    /// Card management
    Card {
        #[command(subcommand)]
        action: commands::card::CardAction,
    },
    /// Board recommendations
    Recommend(commands::recommend::RecommendArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::User { action } => commands::user::run(action),
        Commands::Board { action } => commands::board::run(action),
        Commands::List { action } => commands::list::run(action),
        Commands::Card { action } => commands::card::run(action),
        Commands::Recommend(args) => commands::recommend::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
