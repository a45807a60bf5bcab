use crate::core::{
    BOARD_HEIGHT, BOARD_WIDTH,
    bit_board::{BitBoard, Seat},
    piece::{Orientation, PieceKind},
};

use super::rules::{Move, verify_move};

/// Every candidate placement, in the fixed enumeration order
/// piece × orientation × x × y.
#[expect(clippy::cast_possible_truncation)]
fn candidates() -> impl Iterator<Item = Move> {
    PieceKind::ALL.into_iter().flat_map(|piece| {
        Orientation::ALL.into_iter().flat_map(move |orientation| {
            (0..BOARD_WIDTH as u8).flat_map(move |x| {
                (0..BOARD_HEIGHT as u8).map(move |y| Move::new(piece, orientation, x, y))
            })
        })
    })
}

/// Enumerates all legal moves for `seat`, freshly computed on every call.
///
/// The full candidate space (8 pieces × 4 orientations × 64 origins, up to
/// 2048 placements) is verified one by one and survivors are returned in
/// enumeration order. Brute force is affordable at this board size and
/// serves as the correctness baseline; incremental corner tracking would be
/// faster but has not been needed.
///
/// An exhausted inventory short-circuits to an empty list without scanning.
#[must_use]
pub fn legal_moves(seat: Seat, board: &BitBoard) -> Vec<Move> {
    if board.inventory(seat) == 0 {
        return Vec::new();
    }
    candidates()
        .filter(|&mv| verify_move(mv, seat, board).is_ok())
        .collect()
}

/// Returns whether `seat` has at least one legal move.
///
/// Agrees with `!legal_moves(seat, board).is_empty()` for every input, but
/// stops at the first legal placement.
#[must_use]
pub fn has_legal_move(seat: Seat, board: &BitBoard) -> bool {
    if board.inventory(seat) == 0 {
        return false;
    }
    candidates().any(|mv| verify_move(mv, seat, board).is_ok())
}
