//! Board configuration and its environment loader.

use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "mvp-board";
const FALLBACK_STORE_DIR: &str = "./mvp_data";
const DEFAULT_PARSE_THREADS: usize = 4;

/// Settings needed to open the store and start the board.
///
/// # Fields
///
/// * `store_dir` - Directory holding the accumulated players blob.
/// * `parse_threads` - Size of the thread pool classifying log lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub store_dir: PathBuf,
    pub parse_threads: usize,
}

impl BoardConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `MVP_STORE_DIR`
    /// - `MVP_PARSE_THREADS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("MVP_STORE_DIR") {
            config.store_dir = dir;
        }

        if let Some(threads) = read_env::<usize>("MVP_PARSE_THREADS") {
            config.parse_threads = threads.max(1);
        }

        config
    }

    /// Applies command line overrides on top of this configuration.
    pub fn with_overrides(mut self, store_dir: Option<PathBuf>, parse_threads: Option<usize>) -> Self {
        if let Some(dir) = store_dir {
            self.store_dir = dir;
        }
        if let Some(threads) = parse_threads {
            self.parse_threads = threads.max(1);
        }
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            parse_threads: DEFAULT_PARSE_THREADS,
        }
    }
}

/// Platform data directory for the board.
///
/// - Linux: `~/.local/share/mvp-board` (or `$XDG_DATA_HOME/mvp-board`)
/// - macOS: `~/Library/Application Support/mvp-board`
/// - Windows: `%APPDATA%\mvp-board`
/// - Fallback: `./mvp_data`
fn default_store_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_DIR))
}

fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_and_threads_stay_positive() {
        let config = BoardConfig {
            store_dir: PathBuf::from("/from/env"),
            parse_threads: 2,
        }
        .with_overrides(Some(PathBuf::from("/from/cli")), Some(0));

        assert_eq!(config.store_dir, PathBuf::from("/from/cli"));
        assert_eq!(config.parse_threads, 1);
    }

    #[test]
    fn test_no_overrides_keep_values() {
        let base = BoardConfig {
            store_dir: PathBuf::from("/data"),
            parse_threads: 3,
        };

        assert_eq!(base.clone().with_overrides(None, None), base);
    }
}
