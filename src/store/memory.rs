//! In-memory store, for tests and throwaway tournaments.

use crate::models::{MatchRecord, Player, PlayerId};
use crate::store::{StoreError, TournamentStore};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    /// Last id handed out; ids are never reused, even after a clear.
    last_id: PlayerId,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl TournamentStore for MemoryStore {
    fn fetch_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.read()?.players.clone())
    }

    fn fetch_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.read()?.matches.clone())
    }

    fn register_player(&self, name: &str) -> Result<Player, StoreError> {
        let mut t = self.write()?;
        t.last_id += 1;
        let player = Player::new(t.last_id, name);
        t.players.push(player.clone());
        Ok(player)
    }

    fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchRecord, StoreError> {
        if winner == loser {
            return Err(StoreError::SamePlayer(winner));
        }
        let mut t = self.write()?;
        for id in [winner, loser] {
            if !t.players.iter().any(|p| p.id == id) {
                return Err(StoreError::UnknownPlayer(id));
            }
        }
        let record = MatchRecord::new(winner, loser);
        t.matches.push(record);
        Ok(record)
    }

    fn delete_matches(&self) -> Result<(), StoreError> {
        self.write()?.matches.clear();
        Ok(())
    }

    fn delete_players(&self) -> Result<(), StoreError> {
        let mut t = self.write()?;
        t.matches.clear();
        t.players.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.players.len())
    }
}
