//! Derived views: standings rows and next-round pairings. Never stored.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// One player's line in the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches played: wins + losses.
    pub matches: u32,
}

impl StandingRow {
    /// A row for a player who has not played yet.
    pub fn unplayed(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            wins: 0,
            matches: 0,
        }
    }

    /// Never underflows, even for a row deserialized with `wins > matches`.
    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}

/// Two players slated to meet in the next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    pub fn between(first: &StandingRow, second: &StandingRow) -> Self {
        Self {
            player1_id: first.id,
            player1_name: first.name.clone(),
            player2_id: second.id,
            player2_name: second.name.clone(),
        }
    }

    /// Both player ids, first seat first.
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.player1_id, self.player2_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn losses_from_an_inconsistent_row_do_not_underflow() {
        let row: StandingRow =
            serde_json::from_str(r#"{"id":1,"name":"A","wins":2,"matches":1}"#).unwrap();
        assert_eq!(row.losses(), 0);
    }

    #[test]
    fn losses_are_matches_minus_wins() {
        let row = StandingRow {
            id: 1,
            name: "A".to_string(),
            wins: 2,
            matches: 5,
        };
        assert_eq!(row.losses(), 3);
    }
}
