//! User management commands for CLI.

use cardwall_core::BoardDb;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a user
    Create {
        /// Display name
        name: String,
        /// Email address (unique)
        email: String,
    },
    /// List all users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: UserAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = BoardDb::open()?;

    match action {
        UserAction::Create { name, email } => {
            let user = db.create_user(&name, &email)?;
            println!("User created: {} <{}> ({})", user.name, user.email, user.id);
        }
        UserAction::List { json } => {
            let users = db.list_users()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                for user in users {
                    println!("{}  {} <{}>", user.id, user.name, user.email);
                }
            }
        }
    }

    Ok(())
}
