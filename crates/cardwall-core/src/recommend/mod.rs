//! Heuristic suggestion engine for board content.
//!
//! Pure keyword heuristics only -- no learning, no language understanding
//! beyond the fixed sets in [`keywords::KeywordSets`]. Suggestions are
//! recomputed on demand and never stored.

pub mod due_date;
pub mod engine;
pub mod keywords;
pub mod list_move;
pub mod related;

pub use due_date::suggest_due_date;
pub use engine::{EngineConfig, Recommendation, RecommendationEngine, RelatedCardRef};
pub use keywords::{Horizon, KeywordSets, StatusCategory};
pub use list_move::suggest_list_move;
pub use related::find_related;
