//! Board, list, and card types.
//!
//! A board owns its lists and cards; every card references exactly one list
//! and one board, and that list belongs to the same board. Positions are
//! display ordering keys only -- they need not be contiguous or unique.
//!
//! Wire names follow the client contract: camelCase, with `list`/`board` for
//! the owning references and `dueDate` as a calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. Authentication is handled outside this crate;
/// identities are opaque ids referenced by boards and cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// Top-level collaborative workspace.
///
/// The owner is implicitly a member but is not stored in `members`; access
/// checks treat ownership and membership as independent or-conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub title: String,
    pub owner: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board with an empty member set.
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        let now = Utc::now();
        Board {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            owner: owner.into(),
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` may read this board (owner or member).
    pub fn accessible_by(&self, user_id: &str) -> bool {
        self.owner == user_id || self.members.iter().any(|m| m == user_id)
    }

    /// Whether `user_id` owns this board.
    pub fn owned_by(&self, user_id: &str) -> bool {
        self.owner == user_id
    }
}

/// A named column on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub title: String,
    #[serde(rename = "board")]
    pub board_id: String,
    #[serde(default)]
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl List {
    pub fn new(board_id: impl Into<String>, title: impl Into<String>, position: i64) -> Self {
        let now = Utc::now();
        List {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            board_id: board_id.into(),
            position,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A unit of work on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "list")]
    pub list_id: String,
    #[serde(rename = "board")]
    pub board_id: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a new card at position 0 with no description, members, or due
    /// date.
    pub fn new(
        board_id: impl Into<String>,
        list_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Card {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            list_id: list_id.into(),
            board_id: board_id.into(),
            members: Vec::new(),
            due_date: None,
            position: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Lowercased concatenation of title and description, the text every
    /// classifier axis operates on.
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title,
            self.description.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

/// Partial update for a card.
///
/// Only the listed fields are recognized; unknown fields are rejected at
/// deserialization. Accepts `listId` on the wire for list moves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "listId", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
}

impl CardPatch {
    /// Patch that sets a due date (accepting a due-date recommendation).
    pub fn set_due_date(date: NaiveDate) -> Self {
        CardPatch {
            due_date: Some(date),
            ..Default::default()
        }
    }

    /// Patch that moves a card to a list (accepting a move recommendation).
    pub fn move_to_list(list_id: impl Into<String>, position: i64) -> Self {
        CardPatch {
            list_id: Some(list_id.into()),
            position: Some(position),
            ..Default::default()
        }
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.list_id.is_none()
            && self.due_date.is_none()
            && self.position.is_none()
            && self.members.is_none()
    }
}

/// Partial update for a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// A list with its cards nested under it, as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    #[serde(flatten)]
    pub list: List,
    pub cards: Vec<Card>,
}

/// A fully materialized board: lists in position order, each carrying its
/// cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    #[serde(flatten)]
    pub board: Board,
    pub lists: Vec<ListView>,
}
