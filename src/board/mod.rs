pub mod board_error;
pub mod messages;
pub mod mvp_board;
