pub mod board;
pub mod card;
pub mod list;
pub mod recommend;
pub mod user;
