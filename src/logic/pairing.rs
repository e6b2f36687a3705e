//! Next-round pairings from ranked standings.

use crate::models::{Pairing, StandingRow, TournamentError};

/// Pair adjacent ranks: 1st with 2nd, 3rd with 4th, and so on.
///
/// `standings` must already be ranked (see `compute_standings`). An odd count
/// fails with `InvalidPlayerCount` and yields no pairs; an empty table yields
/// an empty round.
pub fn generate_pairings(standings: &[StandingRow]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::InvalidPlayerCount {
            count: standings.len(),
        });
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, wins: u32) -> StandingRow {
        StandingRow {
            id,
            name: format!("P{id}"),
            wins,
            matches: wins,
        }
    }

    #[test]
    fn pairs_adjacent_ranks() {
        let standings = vec![row(3, 2), row(1, 1), row(4, 1), row(2, 0)];
        let pairs = generate_pairings(&standings).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].ids(), (3, 1));
        assert_eq!(pairs[1].ids(), (4, 2));
        assert_eq!(pairs[0].player1_name, "P3");
        assert_eq!(pairs[1].player2_name, "P2");
    }

    #[test]
    fn odd_count_is_an_error() {
        let standings = vec![row(1, 0), row(2, 0), row(3, 0)];
        assert!(matches!(
            generate_pairings(&standings),
            Err(TournamentError::InvalidPlayerCount { count: 3 })
        ));
    }

    #[test]
    fn no_players_is_an_empty_round() {
        assert!(generate_pairings(&[]).unwrap().is_empty());
    }
}
