//! Accumulates per-player kill statistics from match logs and builds the MVP podium.

pub mod board;
pub mod config;
pub mod export;
pub mod leaderboard;
pub mod log_parsing;
pub mod storage;

pub use board::mvp_board::MvpBoard;
pub use leaderboard::leaderboard_builder::build_top3;
pub use leaderboard::podium::Podium;
pub use log_parsing::accumulator::{accumulate, accumulate_with_report, ParseReport};
pub use log_parsing::player_record::{PlayerMap, PlayerRecord};
