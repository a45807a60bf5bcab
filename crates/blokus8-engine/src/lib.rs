pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A [`Player`](crate::Player) broke the turn-loop contract by returning a
/// move that fails verification.
///
/// Unlike [`MoveError`](crate::MoveError), which is a routine outcome of
/// probing candidate placements, this error means an external move supplier
/// misbehaved. The match cannot continue past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{seat} returned an illegal move ({mv}): {source}")]
pub struct IllegalMoveError {
    /// The seat whose player returned the move.
    pub seat: Seat,
    /// The offending move.
    pub mv: Move,
    /// Why the move failed verification.
    pub source: MoveError,
}
