//! Read/apply seam between the engine and whatever holds the board data.
//!
//! The materializer and the recommendation engine only ever see this trait;
//! the SQLite implementation lives in [`crate::storage::BoardDb`] and tests
//! supply an in-memory snapshot.

use crate::error::Result;
use crate::model::{Board, Card, CardPatch, List};

/// Read access to one board's data plus the single mutation hook used when a
/// caller accepts a recommendation.
///
/// Implementations are expected to hand the engine an immutable snapshot for
/// the duration of one call; the engine itself holds no state between calls.
pub trait BoardStore {
    /// Fetch a board by id, `None` if it does not exist.
    fn fetch_board(&self, board_id: &str) -> Result<Option<Board>>;

    /// Fetch all lists for a board, sorted by position.
    fn fetch_lists(&self, board_id: &str) -> Result<Vec<List>>;

    /// Fetch all cards for a board, in stored order.
    fn fetch_cards(&self, board_id: &str) -> Result<Vec<Card>>;

    /// Apply an accepted suggestion to a card (set due date, or list and
    /// position). Returns the updated card.
    fn apply_suggestion(&self, card_id: &str, patch: &CardPatch) -> Result<Card>;
}
