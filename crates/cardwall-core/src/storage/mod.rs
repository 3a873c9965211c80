pub mod board_db;
pub mod config;
pub mod migrations;

pub use board_db::BoardDb;
pub use config::Config;

use std::path::PathBuf;

use crate::error::Result;

/// Returns the data directory, `~/.config/cardwall/` by default.
///
/// Set CARDWALL_DATA_DIR to relocate it (tests point this at a temp dir).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var("CARDWALL_DATA_DIR") {
        Ok(custom) => PathBuf::from(custom),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("cardwall"),
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
