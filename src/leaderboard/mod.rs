pub mod leaderboard_builder;
pub mod podium;
pub mod podium_renderer;
