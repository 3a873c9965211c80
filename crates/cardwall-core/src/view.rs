//! Board materialization: one nested view of a board's lists and cards.

use crate::error::{CoreError, Result};
use crate::model::{BoardView, ListView};
use crate::store::BoardStore;

/// Assemble a board into a single nested view for a requester.
///
/// Fails with [`CoreError::NotFound`] if the board is absent and
/// [`CoreError::Access`] if the requester is neither owner nor member.
/// Lists come back in position order; each card is nested under the list
/// whose id it references. Cards pointing at a missing list are dropped from
/// the view (they still exist in storage).
pub fn materialize<S: BoardStore>(
    store: &S,
    board_id: &str,
    requester: &str,
) -> Result<BoardView> {
    let board = store
        .fetch_board(board_id)?
        .ok_or_else(CoreError::board_not_found)?;

    if !board.accessible_by(requester) {
        return Err(CoreError::not_authorized(requester));
    }

    let lists = store.fetch_lists(board_id)?;
    let cards = store.fetch_cards(board_id)?;

    let lists = lists
        .into_iter()
        .map(|list| {
            let cards = cards
                .iter()
                .filter(|c| c.list_id == list.id)
                .cloned()
                .collect();
            ListView { list, cards }
        })
        .collect();

    Ok(BoardView { board, lists })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, Card, List};
    use crate::store::memory::MemoryStore;

    fn fixture() -> MemoryStore {
        let mut board = Board::new("Sprint", "alice");
        board.id = "b1".to_string();
        board.members.push("bob".to_string());

        let mut todo = List::new("b1", "To Do", 1);
        todo.id = "l1".to_string();
        let mut done = List::new("b1", "Done", 0);
        done.id = "l2".to_string();

        let mut c1 = Card::new("b1", "l1", "First");
        c1.id = "c1".to_string();
        let mut c2 = Card::new("b1", "l2", "Second");
        c2.id = "c2".to_string();
        let mut c3 = Card::new("b1", "l1", "Third");
        c3.id = "c3".to_string();

        MemoryStore::new(vec![board], vec![todo, done], vec![c1, c2, c3])
    }

    #[test]
    fn nests_cards_under_their_lists_in_position_order() {
        let store = fixture();
        let view = materialize(&store, "b1", "alice").unwrap();

        assert_eq!(view.board.title, "Sprint");
        assert_eq!(view.lists.len(), 2);
        // "Done" has position 0 and sorts first.
        assert_eq!(view.lists[0].list.title, "Done");
        assert_eq!(view.lists[0].cards.len(), 1);
        assert_eq!(view.lists[0].cards[0].id, "c2");
        assert_eq!(view.lists[1].list.title, "To Do");
        assert_eq!(
            view.lists[1].cards.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            vec!["c1", "c3"]
        );
    }

    #[test]
    fn member_may_materialize() {
        let store = fixture();
        assert!(materialize(&store, "b1", "bob").is_ok());
    }

    #[test]
    fn outsider_denied() {
        let store = fixture();
        let err = materialize(&store, "b1", "mallory").unwrap_err();
        assert!(matches!(err, CoreError::Access(_)));
    }

    #[test]
    fn missing_board_not_found() {
        let store = fixture();
        let err = materialize(&store, "nope", "alice").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn orphaned_card_dropped_from_view() {
        let store = fixture();
        let mut orphan = Card::new("b1", "deleted-list", "Orphan");
        orphan.id = "c4".to_string();
        store.cards.borrow_mut().push(orphan);

        let view = materialize(&store, "b1", "alice").unwrap();
        let total: usize = view.lists.iter().map(|l| l.cards.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn view_serializes_with_nested_lists() {
        let store = fixture();
        let view = materialize(&store, "b1", "alice").unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "Sprint");
        assert_eq!(json["lists"][0]["cards"][0]["id"], "c2");
    }
}
