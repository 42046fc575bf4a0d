pub mod board;

pub use board::{board_page, board_results};
