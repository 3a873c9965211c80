//! Recommendation orchestrator.
//!
//! Runs the three suggesters over every card of a board and assembles the
//! ordered result. Recommendations are computed fresh on every call and
//! never persisted.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::due_date::suggest_due_date;
use super::keywords::KeywordSets;
use super::list_move::suggest_list_move;
use super::related::find_related;
use crate::error::{CoreError, Result};
use crate::store::BoardStore;

const DUE_DATE_REASON: &str = "Based on keywords in title/description";
const MOVE_CARD_REASON: &str = "Based on status keywords";
const RELATED_CARDS_REASON: &str = "Shared keywords or members";

/// Reference to a related card in a `related_cards` recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedCardRef {
    pub id: String,
    pub title: String,
}

/// One computed suggestion for a card.
///
/// Serializes with the exact wire fields clients consume: a `type` tag plus
/// camelCase variant fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recommendation {
    #[serde(rename_all = "camelCase")]
    DueDate {
        card_id: String,
        card_title: String,
        suggested_date: NaiveDate,
        reason: String,
    },
    #[serde(rename_all = "camelCase")]
    MoveCard {
        card_id: String,
        card_title: String,
        from_list: String,
        to_list: String,
        to_list_id: String,
        reason: String,
    },
    #[serde(rename_all = "camelCase")]
    RelatedCards {
        card_id: String,
        card_title: String,
        related_cards: Vec<RelatedCardRef>,
        reason: String,
    },
}

/// Engine tuning knobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Optional cap on related cards per recommendation. `None` keeps the
    /// result unbounded.
    #[serde(default)]
    pub max_related: Option<usize>,
}

/// The recommendation engine: stateless over a [`BoardStore`] snapshot.
pub struct RecommendationEngine<'a, S: BoardStore> {
    store: &'a S,
    keywords: KeywordSets,
    config: EngineConfig,
}

impl<'a, S: BoardStore> RecommendationEngine<'a, S> {
    /// Engine with the default keyword sets and no related-card cap.
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, KeywordSets::default(), EngineConfig::default())
    }

    /// Engine with custom keyword sets and config.
    pub fn with_config(store: &'a S, keywords: KeywordSets, config: EngineConfig) -> Self {
        RecommendationEngine {
            store,
            keywords,
            config,
        }
    }

    /// Compute the full recommendation list for a board.
    ///
    /// Fails with [`CoreError::NotFound`] if the board does not exist and
    /// [`CoreError::Access`] if the requester is neither owner nor member;
    /// no partial results are returned in either case. Within the per-card
    /// loop a missing signal or a vanished list contributes nothing and
    /// never aborts the remaining cards.
    ///
    /// Per card, recommendations are emitted in the fixed order
    /// due_date, move_card, related_cards; cards follow fetch order.
    pub fn recommendations(&self, board_id: &str, requester: &str) -> Result<Vec<Recommendation>> {
        let board = self
            .store
            .fetch_board(board_id)?
            .ok_or_else(CoreError::board_not_found)?;

        if !board.accessible_by(requester) {
            return Err(CoreError::not_authorized(requester));
        }

        let lists = self.store.fetch_lists(board_id)?;
        let cards = self.store.fetch_cards(board_id)?;
        let today = Utc::now().date_naive();

        let mut recommendations = Vec::new();

        for card in &cards {
            let description = card.description.as_deref().unwrap_or("");

            // Due date: only for cards without one.
            if card.due_date.is_none() {
                if let Some(date) = suggest_due_date(&self.keywords, &card.title, description, today)
                {
                    recommendations.push(Recommendation::DueDate {
                        card_id: card.id.clone(),
                        card_title: card.title.clone(),
                        suggested_date: date,
                        reason: DUE_DATE_REASON.to_string(),
                    });
                }
            }

            // List movement: needs the current list to still exist, and the
            // target to differ from it.
            if let Some(current) = lists.iter().find(|l| l.id == card.list_id) {
                if let Some(target) =
                    suggest_list_move(&self.keywords, &card.title, description, &lists)
                {
                    if target.id != current.id {
                        recommendations.push(Recommendation::MoveCard {
                            card_id: card.id.clone(),
                            card_title: card.title.clone(),
                            from_list: current.title.clone(),
                            to_list: target.title.clone(),
                            to_list_id: target.id.clone(),
                            reason: MOVE_CARD_REASON.to_string(),
                        });
                    }
                }
            }

            // Related cards.
            let related = find_related(card, &cards, self.config.max_related);
            if !related.is_empty() {
                recommendations.push(Recommendation::RelatedCards {
                    card_id: card.id.clone(),
                    card_title: card.title.clone(),
                    related_cards: related
                        .iter()
                        .map(|r| RelatedCardRef {
                            id: r.id.clone(),
                            title: r.title.clone(),
                        })
                        .collect(),
                    reason: RELATED_CARDS_REASON.to_string(),
                });
            }
        }

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, Card, List};
    use crate::store::memory::MemoryStore;
    use chrono::Days;

    fn board() -> Board {
        let mut b = Board::new("Sprint", "alice");
        b.id = "b1".to_string();
        b.members.push("bob".to_string());
        b
    }

    fn list(id: &str, title: &str, position: i64) -> List {
        let mut l = List::new("b1", title, position);
        l.id = id.to_string();
        l
    }

    fn card(id: &str, list_id: &str, title: &str, description: &str) -> Card {
        let mut c = Card::new("b1", list_id, title);
        c.id = id.to_string();
        if !description.is_empty() {
            c.description = Some(description.to_string());
        }
        c
    }

    fn standard_lists() -> Vec<List> {
        vec![
            list("l1", "To Do", 0),
            list("l2", "In Progress", 1),
            list("l3", "Done", 2),
        ]
    }

    #[test]
    fn unknown_board_is_not_found() {
        let store = MemoryStore::default();
        let engine = RecommendationEngine::new(&store);
        let err = engine.recommendations("nope", "alice").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn outsider_gets_access_error_even_with_qualifying_cards() {
        let store = MemoryStore::new(
            vec![board()],
            standard_lists(),
            vec![card("c1", "l1", "Fix bug ASAP", "")],
        );
        let engine = RecommendationEngine::new(&store);
        let err = engine.recommendations("b1", "mallory").unwrap_err();
        assert!(matches!(err, CoreError::Access(_)));
    }

    #[test]
    fn member_passes_access_check() {
        let store = MemoryStore::new(vec![board()], standard_lists(), vec![]);
        let engine = RecommendationEngine::new(&store);
        assert!(engine.recommendations("b1", "bob").unwrap().is_empty());
    }

    #[test]
    fn asap_card_gets_exactly_one_due_date_for_tomorrow() {
        let store = MemoryStore::new(
            vec![board()],
            standard_lists(),
            vec![card("c1", "l1", "Fix bug ASAP", "")],
        );
        let engine = RecommendationEngine::new(&store);
        let recs = engine.recommendations("b1", "alice").unwrap();

        assert_eq!(recs.len(), 1);
        let tomorrow = Utc::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap();
        match &recs[0] {
            Recommendation::DueDate {
                card_id,
                suggested_date,
                reason,
                ..
            } => {
                assert_eq!(card_id, "c1");
                assert_eq!(*suggested_date, tomorrow);
                assert_eq!(reason, DUE_DATE_REASON);
            }
            other => panic!("expected due_date, got {other:?}"),
        }
    }

    #[test]
    fn card_with_due_date_gets_no_due_date_recommendation() {
        let mut c = card("c1", "l1", "urgent thing", "");
        c.due_date = Utc::now().date_naive().checked_add_days(Days::new(3));
        let store = MemoryStore::new(vec![board()], standard_lists(), vec![c]);
        let engine = RecommendationEngine::new(&store);
        assert!(engine.recommendations("b1", "alice").unwrap().is_empty());
    }

    #[test]
    fn started_card_in_todo_moves_to_in_progress() {
        let store = MemoryStore::new(
            vec![board()],
            standard_lists(),
            vec![card("c1", "l1", "Refactor", "started working on this")],
        );
        let engine = RecommendationEngine::new(&store);
        let recs = engine.recommendations("b1", "alice").unwrap();

        assert_eq!(recs.len(), 1);
        match &recs[0] {
            Recommendation::MoveCard {
                from_list,
                to_list,
                to_list_id,
                reason,
                ..
            } => {
                assert_eq!(from_list, "To Do");
                assert_eq!(to_list, "In Progress");
                assert_eq!(to_list_id, "l2");
                assert_eq!(reason, MOVE_CARD_REASON);
            }
            other => panic!("expected move_card, got {other:?}"),
        }
    }

    #[test]
    fn no_move_when_already_in_target_list() {
        // Idempotence: accepting the suggestion and re-running must not
        // re-suggest the same move.
        let store = MemoryStore::new(
            vec![board()],
            standard_lists(),
            vec![card("c1", "l2", "Refactor", "started working on this")],
        );
        let engine = RecommendationEngine::new(&store);
        assert!(engine.recommendations("b1", "alice").unwrap().is_empty());
    }

    #[test]
    fn vanished_list_skips_move_but_not_other_cards() {
        let store = MemoryStore::new(
            vec![board()],
            standard_lists(),
            vec![
                card("c1", "ghost", "started on it", ""),
                card("c2", "l1", "Fix bug ASAP", ""),
            ],
        );
        let engine = RecommendationEngine::new(&store);
        let recs = engine.recommendations("b1", "alice").unwrap();
        assert_eq!(recs.len(), 1);
        assert!(matches!(&recs[0], Recommendation::DueDate { card_id, .. } if card_id == "c2"));
    }

    #[test]
    fn related_cards_found_in_both_directions() {
        let mut a = card("c1", "l1", "Design review", "");
        let mut b = card("c2", "l1", "Review the design doc", "");
        a.members.push("u1".to_string());
        b.members.push("u1".to_string());
        let store = MemoryStore::new(vec![board()], standard_lists(), vec![a, b]);
        let engine = RecommendationEngine::new(&store);
        let recs = engine.recommendations("b1", "alice").unwrap();

        assert_eq!(recs.len(), 2);
        match (&recs[0], &recs[1]) {
            (
                Recommendation::RelatedCards {
                    card_id: first,
                    related_cards: first_related,
                    reason,
                    ..
                },
                Recommendation::RelatedCards {
                    card_id: second,
                    related_cards: second_related,
                    ..
                },
            ) => {
                assert_eq!(first, "c1");
                assert_eq!(first_related[0].id, "c2");
                assert_eq!(second, "c2");
                assert_eq!(second_related[0].id, "c1");
                assert_eq!(reason, RELATED_CARDS_REASON);
            }
            other => panic!("expected two related_cards, got {other:?}"),
        }
    }

    #[test]
    fn per_card_kind_order_is_due_move_related() {
        let a = card("c1", "l1", "urgent deploy", "started working on deploy");
        let b = card("c2", "l3", "deploy scripts", "");
        let store = MemoryStore::new(vec![board()], standard_lists(), vec![a, b]);
        let engine = RecommendationEngine::new(&store);
        let recs = engine.recommendations("b1", "alice").unwrap();

        // c1 triggers all three kinds in order, then c2's related entry.
        assert_eq!(recs.len(), 4);
        assert!(matches!(&recs[0], Recommendation::DueDate { card_id, .. } if card_id == "c1"));
        assert!(matches!(&recs[1], Recommendation::MoveCard { card_id, .. } if card_id == "c1"));
        assert!(
            matches!(&recs[2], Recommendation::RelatedCards { card_id, .. } if card_id == "c1")
        );
        assert!(
            matches!(&recs[3], Recommendation::RelatedCards { card_id, .. } if card_id == "c2")
        );
    }

    #[test]
    fn max_related_cap_applies() {
        let cards = vec![
            card("c1", "l1", "shared word", ""),
            card("c2", "l1", "shared one", ""),
            card("c3", "l1", "shared two", ""),
            card("c4", "l1", "shared three", ""),
        ];
        let store = MemoryStore::new(vec![board()], standard_lists(), cards);
        let engine = RecommendationEngine::with_config(
            &store,
            KeywordSets::default(),
            EngineConfig {
                max_related: Some(1),
            },
        );
        let recs = engine.recommendations("b1", "alice").unwrap();
        for rec in &recs {
            match rec {
                Recommendation::RelatedCards { related_cards, .. } => {
                    assert_eq!(related_cards.len(), 1)
                }
                other => panic!("expected related_cards, got {other:?}"),
            }
        }
    }

    #[test]
    fn wire_format_due_date() {
        let rec = Recommendation::DueDate {
            card_id: "c1".to_string(),
            card_title: "Fix bug ASAP".to_string(),
            suggested_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            reason: DUE_DATE_REASON.to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "due_date");
        assert_eq!(json["cardId"], "c1");
        assert_eq!(json["cardTitle"], "Fix bug ASAP");
        assert_eq!(json["suggestedDate"], "2026-08-31");
        assert_eq!(json["reason"], DUE_DATE_REASON);
    }

    #[test]
    fn wire_format_move_card() {
        let rec = Recommendation::MoveCard {
            card_id: "c1".to_string(),
            card_title: "Refactor".to_string(),
            from_list: "To Do".to_string(),
            to_list: "In Progress".to_string(),
            to_list_id: "l2".to_string(),
            reason: MOVE_CARD_REASON.to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "move_card");
        assert_eq!(json["fromList"], "To Do");
        assert_eq!(json["toList"], "In Progress");
        assert_eq!(json["toListId"], "l2");
    }

    #[test]
    fn wire_format_related_cards() {
        let rec = Recommendation::RelatedCards {
            card_id: "c1".to_string(),
            card_title: "Design review".to_string(),
            related_cards: vec![RelatedCardRef {
                id: "c2".to_string(),
                title: "Review the design doc".to_string(),
            }],
            reason: RELATED_CARDS_REASON.to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "related_cards");
        assert_eq!(json["relatedCards"][0]["id"], "c2");
        assert_eq!(json["relatedCards"][0]["title"], "Review the design doc");
    }
}
