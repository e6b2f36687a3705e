//! Persistence for players and match records.
//!
//! Stores hold raw rows only. Standings are always aggregated in Rust by
//! `compute_standings`, whatever the backend.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::{MatchRecord, Player, PlayerId};

/// Errors raised by a store. Callers must not treat them as "no data".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} cannot be both winner and loser")]
    SamePlayer(PlayerId),
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// The write was rejected by an integrity rule rather than a failing backend.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            StoreError::Sqlite(e) => {
                e.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation)
            }
            StoreError::UnknownPlayer(_) | StoreError::SamePlayer(_) => true,
            StoreError::Poisoned => false,
        }
    }
}

/// Backend holding the `players` and `matches` collections.
pub trait TournamentStore {
    /// All players, ordered by id (registration order).
    fn fetch_players(&self) -> Result<Vec<Player>, StoreError>;

    /// All recorded matches, oldest first.
    fn fetch_matches(&self) -> Result<Vec<MatchRecord>, StoreError>;

    /// Insert a player; the store assigns the id.
    fn register_player(&self, name: &str) -> Result<Player, StoreError>;

    /// Append a match outcome. Both ids must refer to distinct registered players.
    fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchRecord, StoreError>;

    fn delete_matches(&self) -> Result<(), StoreError>;

    /// Remove every player together with the matches that reference them.
    fn delete_players(&self) -> Result<(), StoreError>;

    fn count_players(&self) -> Result<usize, StoreError> {
        Ok(self.fetch_players()?.len())
    }
}
