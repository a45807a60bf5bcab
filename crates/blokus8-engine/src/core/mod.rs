pub use self::{bit_board::*, piece::*};

pub(crate) mod bit_board;
pub(crate) mod piece;

/// Width of the board in cells.
pub const BOARD_WIDTH: usize = 8;
/// Height of the board in cells.
pub const BOARD_HEIGHT: usize = 8;
