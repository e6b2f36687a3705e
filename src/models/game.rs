//! Recorded match outcomes.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Outcome of one played match. Append-only; draws are not recorded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }
}
