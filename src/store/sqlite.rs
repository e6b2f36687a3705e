//! SQLite-backed store.

use crate::models::{MatchRecord, Player, PlayerId};
use crate::store::{StoreError, TournamentStore};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS players (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT    NOT NULL
    );

    CREATE TABLE IF NOT EXISTS matches (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        winner INTEGER NOT NULL REFERENCES players (id),
        loser  INTEGER NOT NULL REFERENCES players (id),
        CHECK (winner <> loser)
    );
";

/// Store backed by a SQLite database file.
///
/// Each operation opens its own connection and drops it before returning,
/// on success and on every error path.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.with_connection(|conn| conn.execute_batch(SCHEMA))?;
        log::info!("Opened tournament database at {}", store.path.display());
        Ok(store)
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> Result<T, StoreError> {
        let mut conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(f(&mut conn)?)
    }
}

impl TournamentStore for SqliteStore {
    fn fetch_players(&self) -> Result<Vec<Player>, StoreError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, name FROM players ORDER BY id")?;
            let rows = stmt.query_map([], |row| Ok(Player::new(row.get(0)?, row.get::<_, String>(1)?)))?;
            let players = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(players)
        })
    }

    fn fetch_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT winner, loser FROM matches ORDER BY id")?;
            let rows = stmt.query_map([], |row| Ok(MatchRecord::new(row.get(0)?, row.get(1)?)))?;
            let matches = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(matches)
        })
    }

    fn register_player(&self, name: &str) -> Result<Player, StoreError> {
        self.with_connection(|conn| {
            conn.execute("INSERT INTO players (name) VALUES (?1)", params![name])?;
            Ok(Player::new(conn.last_insert_rowid(), name))
        })
    }

    fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchRecord, StoreError> {
        if winner == loser {
            return Err(StoreError::SamePlayer(winner));
        }
        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO matches (winner, loser) VALUES (?1, ?2)",
                params![winner, loser],
            )?;
            Ok(MatchRecord::new(winner, loser))
        })
    }

    fn delete_matches(&self) -> Result<(), StoreError> {
        self.with_connection(|conn| conn.execute("DELETE FROM matches", []).map(|_| ()))
    }

    fn delete_players(&self) -> Result<(), StoreError> {
        self.with_connection(|conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM matches", [])?;
            tx.execute("DELETE FROM players", [])?;
            tx.commit()
        })
    }

    fn count_players(&self) -> Result<usize, StoreError> {
        let count = self.with_connection(|conn| {
            conn.query_row("SELECT count(*) FROM players", [], |row| row.get::<_, i64>(0))
        })?;
        Ok(count as usize)
    }
}
