//! SQLite-based storage for users, boards, lists, and cards.
//!
//! Access rules ride along with each mutation: owner-or-member for reads and
//! card/list changes, owner-only for board deletion and invites. Board
//! deletion cascades to its lists and cards; list deletion removes only the
//! list row.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use super::migrations;
use crate::error::{CoreError, Result};
use crate::model::{Board, Card, CardPatch, List, ListPatch, User};
use crate::store::BoardStore;

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: parse_datetime_fallback(&row.get::<_, String>(3)?),
    })
}

fn row_to_board(row: &rusqlite::Row) -> rusqlite::Result<Board> {
    let members_json: String = row.get(3)?;
    Ok(Board {
        id: row.get(0)?,
        title: row.get(1)?,
        owner: row.get(2)?,
        members: serde_json::from_str(&members_json).unwrap_or_default(),
        created_at: parse_datetime_fallback(&row.get::<_, String>(4)?),
        updated_at: parse_datetime_fallback(&row.get::<_, String>(5)?),
    })
}

fn row_to_list(row: &rusqlite::Row) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        title: row.get(1)?,
        board_id: row.get(2)?,
        position: row.get(3)?,
        created_at: parse_datetime_fallback(&row.get::<_, String>(4)?),
        updated_at: parse_datetime_fallback(&row.get::<_, String>(5)?),
    })
}

fn row_to_card(row: &rusqlite::Row) -> rusqlite::Result<Card> {
    let members_json: String = row.get(5)?;
    let due_date: Option<String> = row.get(6)?;
    Ok(Card {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        list_id: row.get(3)?,
        board_id: row.get(4)?,
        members: serde_json::from_str(&members_json).unwrap_or_default(),
        due_date: due_date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        position: row.get(7)?,
        created_at: parse_datetime_fallback(&row.get::<_, String>(8)?),
        updated_at: parse_datetime_fallback(&row.get::<_, String>(9)?),
    })
}

const CARD_COLUMNS: &str =
    "id, title, description, list_id, board_id, members, due_date, position, created_at, updated_at";

/// SQLite-backed store for all board data.
pub struct BoardDb {
    conn: Connection,
}

impl BoardDb {
    /// Open (or create) the database at the default data directory.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("cardwall.db");
        Self::open_at(&path)
    }

    /// Open (or create) the database at a specific path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        migrations::migrate(&conn)?;
        Ok(BoardDb { conn })
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::migrate(&conn)?;
        Ok(BoardDb { conn })
    }

    // === Users ===

    /// Create a user. Emails are unique.
    pub fn create_user(&self, name: &str, email: &str) -> Result<User> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please add a name and email".to_string(),
            ));
        }
        if self.find_user_by_email(email)?.is_some() {
            return Err(CoreError::Validation(format!(
                "Email already registered: {email}"
            )));
        }

        let user = User::new(name, email);
        self.conn.execute(
            "INSERT INTO users (id, name, email, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![user.id, user.name, user.email, user.created_at.to_rfc3339()],
        )?;
        Ok(user)
    }

    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, email, created_at FROM users WHERE id = ?1",
                [id],
                row_to_user,
            )
            .optional()?)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, email, created_at FROM users WHERE email = ?1",
                [email],
                row_to_user,
            )
            .optional()?)
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, created_at FROM users ORDER BY created_at")?;
        let users = stmt
            .query_map([], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    // === Boards ===

    /// Create a board owned by `owner` with an empty member set.
    pub fn create_board(&self, title: &str, owner: &str) -> Result<Board> {
        if title.trim().is_empty() {
            return Err(CoreError::Validation("Please add a title".to_string()));
        }

        let board = Board::new(title, owner);
        self.conn.execute(
            "INSERT INTO boards (id, title, owner, members, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                board.id,
                board.title,
                board.owner,
                serde_json::to_string(&board.members).unwrap(),
                board.created_at.to_rfc3339(),
                board.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(board)
    }

    pub fn get_board(&self, id: &str) -> Result<Option<Board>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, title, owner, members, created_at, updated_at
                 FROM boards WHERE id = ?1",
                [id],
                row_to_board,
            )
            .optional()?)
    }

    /// All boards the user owns or is a member of.
    pub fn boards_for_user(&self, user_id: &str) -> Result<Vec<Board>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, owner, members, created_at, updated_at
             FROM boards ORDER BY created_at",
        )?;
        let boards = stmt
            .query_map([], row_to_board)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(boards
            .into_iter()
            .filter(|b| b.accessible_by(user_id))
            .collect())
    }

    /// Delete a board and everything on it. Owner-only.
    pub fn delete_board(&self, id: &str, requester: &str) -> Result<()> {
        let board = self.require_board(id)?;
        if !board.owned_by(requester) {
            return Err(CoreError::not_authorized(requester));
        }

        self.conn
            .execute("DELETE FROM boards WHERE id = ?1", [id])?;
        self.conn
            .execute("DELETE FROM lists WHERE board_id = ?1", [id])?;
        self.conn
            .execute("DELETE FROM cards WHERE board_id = ?1", [id])?;
        Ok(())
    }

    /// Add the user with `email` to the board's member set. Owner-only;
    /// rejects the owner and existing members.
    pub fn invite(&self, board_id: &str, requester: &str, email: &str) -> Result<Board> {
        let mut board = self.require_board(board_id)?;
        if !board.owned_by(requester) {
            return Err(CoreError::Access("Only owner can invite".to_string()));
        }

        let user = self
            .find_user_by_email(email)?
            .ok_or_else(|| CoreError::NotFound("User".to_string()))?;

        if board.members.contains(&user.id) || board.owner == user.id {
            return Err(CoreError::Validation("User already a member".to_string()));
        }

        board.members.push(user.id);
        board.updated_at = Utc::now();
        self.conn.execute(
            "UPDATE boards SET members = ?1, updated_at = ?2 WHERE id = ?3",
            params![
                serde_json::to_string(&board.members).unwrap(),
                board.updated_at.to_rfc3339(),
                board.id,
            ],
        )?;
        Ok(board)
    }

    // === Lists ===

    /// Create a list on a board. Requester must have board access.
    pub fn create_list(
        &self,
        board_id: &str,
        requester: &str,
        title: &str,
        position: i64,
    ) -> Result<List> {
        if title.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please add a title and boardId".to_string(),
            ));
        }
        let board = self.require_board(board_id)?;
        self.check_access(&board, requester)?;

        let list = List::new(board_id, title, position);
        self.conn.execute(
            "INSERT INTO lists (id, title, board_id, position, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                list.id,
                list.title,
                list.board_id,
                list.position,
                list.created_at.to_rfc3339(),
                list.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(list)
    }

    pub fn get_list(&self, id: &str) -> Result<Option<List>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, title, board_id, position, created_at, updated_at
                 FROM lists WHERE id = ?1",
                [id],
                row_to_list,
            )
            .optional()?)
    }

    /// Apply a patch to a list. Requester must have board access.
    pub fn update_list(&self, id: &str, requester: &str, patch: &ListPatch) -> Result<List> {
        let mut list = self
            .get_list(id)?
            .ok_or_else(|| CoreError::NotFound("List".to_string()))?;
        let board = self.require_board(&list.board_id)?;
        self.check_access(&board, requester)?;

        if let Some(ref title) = patch.title {
            list.title = title.clone();
        }
        if let Some(position) = patch.position {
            list.position = position;
        }
        list.updated_at = Utc::now();

        self.conn.execute(
            "UPDATE lists SET title = ?1, position = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                list.title,
                list.position,
                list.updated_at.to_rfc3339(),
                list.id,
            ],
        )?;
        Ok(list)
    }

    /// Delete a list. Its cards are NOT deleted and keep their dangling
    /// list reference; the engine and the materializer both tolerate that.
    pub fn delete_list(&self, id: &str, requester: &str) -> Result<()> {
        let list = self
            .get_list(id)?
            .ok_or_else(|| CoreError::NotFound("List".to_string()))?;
        let board = self.require_board(&list.board_id)?;
        self.check_access(&board, requester)?;

        self.conn.execute("DELETE FROM lists WHERE id = ?1", [id])?;
        Ok(())
    }

    // === Cards ===

    /// Create a card on a board's list. Requester must have board access and
    /// the list must belong to the board.
    pub fn create_card(
        &self,
        board_id: &str,
        list_id: &str,
        requester: &str,
        title: &str,
    ) -> Result<Card> {
        if title.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please add title, listId and boardId".to_string(),
            ));
        }
        let board = self.require_board(board_id)?;
        self.check_access(&board, requester)?;

        let list = self
            .get_list(list_id)?
            .ok_or_else(|| CoreError::NotFound("List".to_string()))?;
        if list.board_id != board_id {
            return Err(CoreError::Validation(
                "List does not belong to this board".to_string(),
            ));
        }

        let card = Card::new(board_id, list_id, title);
        self.insert_card(&card)?;
        Ok(card)
    }

    fn insert_card(&self, card: &Card) -> Result<()> {
        self.conn.execute(
            "INSERT INTO cards (id, title, description, list_id, board_id, members,
                                due_date, position, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                card.id,
                card.title,
                card.description,
                card.list_id,
                card.board_id,
                serde_json::to_string(&card.members).unwrap(),
                card.due_date.map(|d| d.to_string()),
                card.position,
                card.created_at.to_rfc3339(),
                card.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_card(&self, id: &str) -> Result<Option<Card>> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?1"),
                [id],
                row_to_card,
            )
            .optional()?)
    }

    /// Apply a patch to a card. Requester must have board access.
    pub fn update_card(&self, id: &str, requester: &str, patch: &CardPatch) -> Result<Card> {
        let card = self
            .get_card(id)?
            .ok_or_else(|| CoreError::NotFound("Card".to_string()))?;
        let board = self.require_board(&card.board_id)?;
        self.check_access(&board, requester)?;

        self.apply_patch(card, patch)
    }

    /// Delete a card. Requester must have board access.
    pub fn delete_card(&self, id: &str, requester: &str) -> Result<()> {
        let card = self
            .get_card(id)?
            .ok_or_else(|| CoreError::NotFound("Card".to_string()))?;
        let board = self.require_board(&card.board_id)?;
        self.check_access(&board, requester)?;

        self.conn.execute("DELETE FROM cards WHERE id = ?1", [id])?;
        Ok(())
    }

    // === Helpers ===

    fn apply_patch(&self, mut card: Card, patch: &CardPatch) -> Result<Card> {
        if let Some(ref title) = patch.title {
            card.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            card.description = Some(description.clone());
        }
        if let Some(ref list_id) = patch.list_id {
            card.list_id = list_id.clone();
        }
        if let Some(due_date) = patch.due_date {
            card.due_date = Some(due_date);
        }
        if let Some(position) = patch.position {
            card.position = position;
        }
        if let Some(ref members) = patch.members {
            card.members = members.clone();
        }
        card.updated_at = Utc::now();

        self.conn.execute(
            "UPDATE cards SET title = ?1, description = ?2, list_id = ?3, members = ?4,
                              due_date = ?5, position = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                card.title,
                card.description,
                card.list_id,
                serde_json::to_string(&card.members).unwrap(),
                card.due_date.map(|d| d.to_string()),
                card.position,
                card.updated_at.to_rfc3339(),
                card.id,
            ],
        )?;
        Ok(card)
    }

    fn require_board(&self, board_id: &str) -> Result<Board> {
        self.get_board(board_id)?
            .ok_or_else(CoreError::board_not_found)
    }

    fn check_access(&self, board: &Board, requester: &str) -> Result<()> {
        if board.accessible_by(requester) {
            Ok(())
        } else {
            Err(CoreError::not_authorized(requester))
        }
    }
}

impl BoardStore for BoardDb {
    fn fetch_board(&self, board_id: &str) -> Result<Option<Board>> {
        self.get_board(board_id)
    }

    fn fetch_lists(&self, board_id: &str) -> Result<Vec<List>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, board_id, position, created_at, updated_at
             FROM lists WHERE board_id = ?1 ORDER BY position",
        )?;
        let lists = stmt
            .query_map([board_id], row_to_list)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(lists)
    }

    fn fetch_cards(&self, board_id: &str) -> Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE board_id = ?1 ORDER BY rowid"
        ))?;
        let cards = stmt
            .query_map([board_id], row_to_card)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(cards)
    }

    /// Suggestion application skips the access check: the caller has already
    /// passed it for the recommendation request this patch came from.
    fn apply_suggestion(&self, card_id: &str, patch: &CardPatch) -> Result<Card> {
        let card = self
            .get_card(card_id)?
            .ok_or_else(|| CoreError::NotFound("Card".to_string()))?;
        self.apply_patch(card, patch)
    }
}
