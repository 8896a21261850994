pub mod accumulator;
pub mod line_classifier;
pub mod line_event;
pub mod player_record;
pub mod team_context;
