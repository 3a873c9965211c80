//! Board management commands for CLI.

use cardwall_core::{materialize, BoardDb};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        /// Board title
        title: String,
        /// Acting user id (owner)
        #[arg(long = "as")]
        user: String,
    },
    /// List boards the user owns or belongs to
    List {
        /// Acting user id
        #[arg(long = "as")]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a board with its lists and cards nested
    Show {
        /// Board id
        id: String,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a board and everything on it (owner only)
    Delete {
        /// Board id
        id: String,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
    /// Invite a user to a board by email (owner only)
    Invite {
        /// Board id
        id: String,
        /// Email of the user to invite
        email: String,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
}

pub fn run(action: BoardAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = BoardDb::open()?;

    match action {
        BoardAction::Create { title, user } => {
            let board = db.create_board(&title, &user)?;
            println!("Board created: {} ({})", board.title, board.id);
        }
        BoardAction::List { user, json } => {
            let boards = db.boards_for_user(&user)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&boards)?);
            } else {
                for board in boards {
                    let role = if board.owned_by(&user) { "owner" } else { "member" };
                    println!("{}  {} [{}]", board.id, board.title, role);
                }
            }
        }
        BoardAction::Show { id, user, json } => {
            let view = materialize(&db, &id, &user)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{} ({})", view.board.title, view.board.id);
                for lv in &view.lists {
                    println!("  [{}] {} ({})", lv.list.position, lv.list.title, lv.list.id);
                    for card in &lv.cards {
                        let due = card
                            .due_date
                            .map(|d| format!(" due {d}"))
                            .unwrap_or_default();
                        println!("    - {}{} ({})", card.title, due, card.id);
                    }
                }
            }
        }
        BoardAction::Delete { id, user } => {
            db.delete_board(&id, &user)?;
            println!("Board deleted: {id}");
        }
        BoardAction::Invite { id, email, user } => {
            let board = db.invite(&id, &user, &email)?;
            println!(
                "Invited {} to {} ({} members)",
                email,
                board.title,
                board.members.len()
            );
        }
    }

    Ok(())
}
