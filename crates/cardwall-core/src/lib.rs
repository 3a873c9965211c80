//! # Cardwall Core Library
//!
//! Core business logic for Cardwall, a collaborative task board (columns of
//! draggable cards) with heuristic suggestions. The CLI binary is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Model**: boards own lists and cards; members are opaque user ids
//! - **Storage**: SQLite persistence and TOML-based configuration
//! - **Recommendation engine**: keyword classifier feeding three pure
//!   suggesters (due dates, list moves, related cards), orchestrated over a
//!   per-request snapshot
//! - **View**: board materialization with access control
//!
//! ## Key Components
//!
//! - [`RecommendationEngine`]: computes the ordered suggestion list
//! - [`BoardStore`]: the seam between the engine and the data it reads
//! - [`BoardDb`]: SQLite implementation of the store plus CRUD
//! - [`Config`]: keyword vocabulary and engine settings

pub mod error;
pub mod model;
pub mod recommend;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{CoreError, Result};
pub use model::{Board, BoardView, Card, CardPatch, List, ListPatch, ListView, User};
pub use recommend::{
    EngineConfig, KeywordSets, Recommendation, RecommendationEngine, RelatedCardRef,
};
pub use storage::{BoardDb, Config};
pub use store::BoardStore;
pub use view::materialize;
