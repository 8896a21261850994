//! In-memory `MvpStore` for tests and throwaway runs.

use crate::log_parsing::player_record::PlayerMap;
use crate::storage::mvp_store::MvpStore;
use crate::storage::storage_error::{Result, StoreError};

use std::sync::{Arc, RwLock};

/// Keeps the players in memory.
///
/// Clones share the same underlying map, so a test can keep a handle on the
/// store it moved into a board.
#[derive(Clone, Default)]
pub struct MemoryStore {
    players: Arc<RwLock<Option<PlayerMap>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `players`.
    pub fn with_players(players: PlayerMap) -> Self {
        Self {
            players: Arc::new(RwLock::new(Some(players))),
        }
    }
}

impl MvpStore for MemoryStore {
    fn load(&self) -> Result<PlayerMap> {
        let players = self
            .players
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(players.clone().unwrap_or_default())
    }

    fn save(&mut self, players: &PlayerMap) -> Result<()> {
        let mut stored = self
            .players
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        *stored = Some(players.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut stored = self
            .players
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}
