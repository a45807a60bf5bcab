//! Rules, move generation, and match orchestration.
//!
//! This module layers the game logic over the core data structures:
//!
//! - [`verify_move`] / [`apply_move`] - legality checking and atomic move
//!   application
//! - [`legal_moves`] / [`has_legal_move`] - exhaustive move enumeration
//! - [`game_status`] / [`GameSession`] - termination detection and the turn
//!   loop over external [`Player`] implementations
//!
//! # Placement rules
//!
//! A seat's opening placement must cover one of the four board corners. Every
//! later placement must touch at least one of the seat's own tiles diagonally
//! and may not touch any of them along an edge. Opposing tiles only block by
//! overlap; touching them is unrestricted.
//!
//! # Example
//!
//! ```
//! use blokus8_engine::{
//!     BitBoard, GameStatus, Move, Orientation, PieceKind, Seat, apply_move, game_status,
//! };
//!
//! let board = BitBoard::new();
//! let opening = Move::new(PieceKind::Square, Orientation::new(0), 0, 0);
//! let board = apply_move(opening, Seat::One, &board)?;
//!
//! assert_eq!(board.coverage(Seat::One), 4);
//! assert_eq!(game_status(&board), GameStatus::Ongoing);
//! # Ok::<(), blokus8_engine::MoveError>(())
//! ```

pub use self::{game_session::*, move_gen::*, rules::*};

mod game_session;
mod move_gen;
mod rules;
