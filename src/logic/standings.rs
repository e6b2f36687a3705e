//! Standings: per-player win and match totals, ranked by wins.

use crate::models::{MatchRecord, Player, PlayerId, StandingRow};
use std::collections::HashMap;

/// Compute standings for `players` from every recorded match.
///
/// 1. One zeroed row per player, in the order given (registration order).
/// 2. Each match adds a win and a match to the winner, a match to the loser.
/// 3. Stable sort by wins, descending; equal records keep input order.
///
/// Matches naming an id outside `players` contribute nothing.
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = players.iter().map(StandingRow::unplayed).collect();
    let index: HashMap<PlayerId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.id, i))
        .collect();

    for m in matches {
        if let Some(&i) = index.get(&m.winner) {
            rows[i].wins += 1;
            rows[i].matches += 1;
        }
        if let Some(&i) = index.get(&m.loser) {
            rows[i].matches += 1;
        }
    }

    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(i as PlayerId + 1, *name))
            .collect()
    }

    #[test]
    fn empty_roster_has_empty_standings() {
        assert!(compute_standings(&[], &[]).is_empty());
    }

    #[test]
    fn unplayed_players_keep_registration_order() {
        let players = roster(&["A", "B", "C"]);
        let rows = compute_standings(&players, &[]);
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(rows.iter().all(|r| r.wins == 0 && r.matches == 0));
    }

    #[test]
    fn winners_rank_above_losers_and_ties_are_stable() {
        let players = roster(&["A", "B", "C", "D"]);
        // D beats A, B beats C
        let matches = [MatchRecord::new(4, 1), MatchRecord::new(2, 3)];
        let rows = compute_standings(&players, &matches);
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        for row in &rows {
            assert_eq!(row.matches, 1);
        }
    }

    #[test]
    fn matches_with_unknown_players_are_ignored() {
        let players = roster(&["A", "B"]);
        let matches = [MatchRecord::new(1, 99)];
        let rows = compute_standings(&players, &matches);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].wins, 1);
        assert_eq!(rows[1].matches, 0);
    }
}
