//! Swiss tournament web app: library with models, standings/pairing logic and storage.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{compute_standings, generate_pairings};
pub use models::{
    MatchRecord, Pairing, Player, PlayerId, StandingRow, Tournament, TournamentError,
};
pub use store::{MemoryStore, SqliteStore, StoreError, TournamentStore};
