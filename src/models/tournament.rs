//! Tournament facade over a store, and TournamentError.

use crate::logic::{compute_standings, generate_pairings};
use crate::models::game::MatchRecord;
use crate::models::player::{Player, PlayerId};
use crate::models::standings::{Pairing, StandingRow};
use crate::store::{StoreError, TournamentStore};

/// Errors that can occur during tournament operations.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    /// Pairings need an even number of players; byes are not supported.
    #[error("Cannot pair an odd number of players ({count})")]
    InvalidPlayerCount { count: usize },
    /// Registration with a blank name.
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    /// A match referenced an id that is not registered.
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
    /// Winner and loser were the same player.
    #[error("Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),
    /// The store failed; never replaced with empty data.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl TournamentError {
    /// True when the caller sent bad input, false when the store itself failed.
    pub fn is_client_error(&self) -> bool {
        match self {
            TournamentError::Store(e) => e.is_constraint_violation(),
            _ => true,
        }
    }
}

/// A Swiss tournament backed by `S`. Holds no state of its own: every read
/// recomputes from the store's current snapshot.
#[derive(Clone, Debug)]
pub struct Tournament<S> {
    store: S,
}

impl<S: TournamentStore> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All registered players, in registration order.
    pub fn players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.store.fetch_players()?)
    }

    /// Register a player under a trimmed, non-empty name.
    pub fn register_player(&self, name: impl Into<String>) -> Result<Player, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let player = self.store.register_player(name_trimmed)?;
        log::debug!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Record that `winner` beat `loser`. Both must be registered and distinct.
    pub fn report_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchRecord, TournamentError> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }
        let players = self.store.fetch_players()?;
        for id in [winner, loser] {
            if !players.iter().any(|p| p.id == id) {
                return Err(TournamentError::PlayerNotFound(id));
            }
        }
        let record = self.store.report_match(winner, loser)?;
        log::debug!("Recorded match: {} beat {}", winner, loser);
        Ok(record)
    }

    /// Remove all match records.
    pub fn delete_matches(&self) -> Result<(), TournamentError> {
        self.store.delete_matches()?;
        log::info!("Cleared all matches");
        Ok(())
    }

    /// Remove all players (and with them every match they played).
    pub fn delete_players(&self) -> Result<(), TournamentError> {
        self.store.delete_players()?;
        log::info!("Cleared all players");
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.store.count_players()?)
    }

    /// Current standings, first place first.
    pub fn player_standings(&self) -> Result<Vec<StandingRow>, TournamentError> {
        let players = self.store.fetch_players()?;
        let matches = self.store.fetch_matches()?;
        Ok(compute_standings(&players, &matches))
    }

    /// Pairings for the next round from the current standings.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self.player_standings()?;
        generate_pairings(&standings).inspect_err(|e| log::warn!("No pairings: {}", e))
    }
}
