//! Data structures for the Swiss tournament: players, matches, derived standings.

mod game;
mod player;
mod standings;
mod tournament;

pub use game::MatchRecord;
pub use player::{Player, PlayerId};
pub use standings::{Pairing, StandingRow};
pub use tournament::{Tournament, TournamentError};
