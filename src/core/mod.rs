pub mod board;
pub mod types;

pub use board::{Board, Cell, BOARD_SIZE};
pub use types::{MoveError, Position, Side};
