//! Card management commands for CLI.

use cardwall_core::model::CardPatch;
use cardwall_core::BoardDb;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a new card
    Create {
        /// Board id
        board_id: String,
        /// List id (must belong to the board)
        list_id: String,
        /// Card title
        title: String,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
    /// Update a card
    Update {
        /// Card id
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Move to this list
        #[arg(long)]
        list_id: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
        /// New position within the list
        #[arg(long)]
        position: Option<i64>,
        /// Comma-separated member user ids (replaces the set)
        #[arg(long)]
        members: Option<String>,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
    /// Delete a card
    Delete {
        /// Card id
        id: String,
        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
}

pub fn run(action: CardAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = BoardDb::open()?;

    match action {
        CardAction::Create {
            board_id,
            list_id,
            title,
            user,
        } => {
            let card = db.create_card(&board_id, &list_id, &user, &title)?;
            println!("Card created: {} ({})", card.title, card.id);
        }
        CardAction::Update {
            id,
            title,
            description,
            list_id,
            due_date,
            position,
            members,
            user,
        } => {
            let patch = CardPatch {
                title,
                description,
                list_id,
                due_date,
                position,
                members: members.map(|m| {
                    m.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                }),
            };
            let card = db.update_card(&id, &user, &patch)?;
            println!("Card updated: {} ({})", card.title, card.id);
        }
        CardAction::Delete { id, user } => {
            db.delete_card(&id, &user)?;
            println!("Card deleted: {id}");
        }
    }

    Ok(())
}
