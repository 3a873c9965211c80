//! Recommendation command for CLI.

use cardwall_core::{BoardDb, Config, Recommendation, RecommendationEngine};
use clap::Args;

#[derive(Args)]
pub struct RecommendArgs {
    /// Board id
    pub board_id: String,
    /// Acting user id
    #[arg(long = "as")]
    pub user: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = BoardDb::open()?;
    let config = Config::load()?;
    let engine = RecommendationEngine::with_config(&db, config.keywords, config.recommend);

    let recommendations = engine.recommendations(&args.board_id, &args.user)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("No recommendations.");
        return Ok(());
    }

    for rec in &recommendations {
        match rec {
            Recommendation::DueDate {
                card_title,
                suggested_date,
                reason,
                ..
            } => {
                println!("due date     {card_title}: {suggested_date} ({reason})");
            }
            Recommendation::MoveCard {
                card_title,
                from_list,
                to_list,
                reason,
                ..
            } => {
                println!("move card    {card_title}: {from_list} -> {to_list} ({reason})");
            }
            Recommendation::RelatedCards {
                card_title,
                related_cards,
                reason,
                ..
            } => {
                let titles: Vec<&str> =
                    related_cards.iter().map(|r| r.title.as_str()).collect();
                println!(
                    "related      {card_title}: {} ({reason})",
                    titles.join(", ")
                );
            }
        }
    }

    Ok(())
}
