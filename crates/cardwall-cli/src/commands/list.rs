//! List management commands for CLI.

use cardwall_core::model::ListPatch;
use cardwall_core::BoardDb;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ListAction {
    /// Create a new list on a board
    Create {
        /// Board id
        board_id: String,
        /// List title
        title: String,
        /// Position within the board (default 0)
        #[arg(long, default_value = "0")]
        position: i64,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
    /// Update a list
    Update {
        /// List id
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New position
        #[arg(long)]
        position: Option<i64>,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
    /// Delete a list (its cards are kept)
    Delete {
        /// List id
        id: String,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
}

pub fn run(action: ListAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = BoardDb::open()?;

    match action {
        ListAction::Create {
            board_id,
            title,
            position,
            user,
        } => {
            let list = db.create_list(&board_id, &user, &title, position)?;
            println!("List created: {} ({})", list.title, list.id);
        }
        ListAction::Update {
            id,
            title,
            position,
            user,
        } => {
            let patch = ListPatch { title, position };
            let list = db.update_list(&id, &user, &patch)?;
            println!("List updated: {} [{}] ({})", list.title, list.position, list.id);
        }
        ListAction::Delete { id, user } => {
            db.delete_list(&id, &user)?;
            println!("List deleted: {id}");
        }
    }

    Ok(())
}
