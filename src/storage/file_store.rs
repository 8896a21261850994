//! JSON file backed `MvpStore`.

use crate::log_parsing::player_record::PlayerMap;
use crate::storage::mvp_store::{MvpStore, MVP_KEY};
use crate::storage::storage_error::Result;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the players as `<dir>/ff_mvp_players.json`.
///
/// Saves go through a temporary file and a rename so a crash mid-write never
/// leaves a truncated blob behind.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store in `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{MVP_KEY}.json")),
        })
    }

    /// Path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MvpStore for FileStore {
    fn load(&self) -> Result<PlayerMap> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PlayerMap::new()),
            Err(err) => return Err(err.into()),
        };

        let players: PlayerMap = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            "Loaded {} players from {}",
            players.len(),
            self.path.display()
        );
        Ok(players)
    }

    fn save(&mut self, players: &PlayerMap) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec(players)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved {} players to {}", players.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Deleted {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_parsing::player_record::PlayerRecord;
    use crate::storage::StoreError;

    fn sample_players() -> PlayerMap {
        let mut players = PlayerMap::new();
        players.insert("Ghost".to_owned(), PlayerRecord::new("Ghost", "Red", 2));
        players.get_mut("Ghost").unwrap().kills = 11;
        players
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert!(!store.has_data().unwrap());
    }

    #[test]
    fn test_save_then_load_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested")).unwrap();
        let players = sample_players();

        store.save(&players).unwrap();
        assert_eq!(store.load().unwrap(), players);
        assert!(store.has_data().unwrap());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_empty());
        store.clear().unwrap();
    }

    #[test]
    fn test_blob_uses_name_keyed_object() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();
        store.save(&sample_players()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();

        assert_eq!(raw["Ghost"]["name"], "Ghost");
        assert_eq!(raw["Ghost"]["team"], "Red");
        assert_eq!(raw["Ghost"]["kills"], 11);
        assert_eq!(raw["Ghost"]["bestTeamRank"], 2);
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        fs::write(store.path(), b"{not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }
}
