use crate::log_parsing::player_record::PlayerMap;
use crate::storage::storage_error::Result;

/// Fixed key under which the accumulated players are stored as one blob.
pub const MVP_KEY: &str = "ff_mvp_players";

/// Durable home of the accumulated players.
///
/// The whole `PlayerMap` is read and written as a single blob. A store that
/// was never written, or was cleared, loads as an empty map.
pub trait MvpStore: Send {
    /// Load every accumulated player. Missing data is an empty map.
    fn load(&self) -> Result<PlayerMap>;

    /// Replace the stored players with `players`.
    fn save(&mut self, players: &PlayerMap) -> Result<()>;

    /// Delete every stored player.
    fn clear(&mut self) -> Result<()>;

    /// Whether at least one player is stored.
    fn has_data(&self) -> Result<bool> {
        Ok(!self.load()?.is_empty())
    }
}
