use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::{
    BOARD_HEIGHT, BOARD_WIDTH,
    bit_board::{BitBoard, CORNER_MASK, Seat},
    piece::{Orientation, PieceKind},
};

// Edge columns, used to clip horizontal shifts at the board boundary.
const WEST_EDGE: u64 = 0x0101_0101_0101_0101;
const EAST_EDGE: u64 = 0x8080_8080_8080_8080;

/// A candidate placement: a piece, an orientation, and the board cell that
/// receives the pattern's bottom-left bounding-box corner.
///
/// Constructing a `Move` establishes nothing about legality; only
/// [`verify_move`] does. The origin is confined to the board, but the piece
/// may still hang over the east or north edge; that is one of the things
/// verification rejects.
///
/// Moves have a compact string form `"<piece>#<orientation>@<x>,<y>"`
/// (e.g. `"7#0@0,0"` places the square piece at the bottom-left corner),
/// used by both [`FromStr`] and the serde impls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: PieceKind,
    orientation: Orientation,
    x: u8,
    y: u8,
}

impl Move {
    /// Creates a move placing `piece` with its bounding box's bottom-left
    /// corner at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the board.
    #[must_use]
    pub const fn new(piece: PieceKind, orientation: Orientation, x: u8, y: u8) -> Self {
        assert!((x as usize) < BOARD_WIDTH);
        assert!((y as usize) < BOARD_HEIGHT);
        Self {
            piece,
            orientation,
            x,
            y,
        }
    }

    /// Returns the piece this move places.
    #[must_use]
    pub const fn piece(self) -> PieceKind {
        self.piece
    }

    /// Returns the orientation the piece is placed in.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Returns the x coordinate of the placement origin.
    #[must_use]
    pub fn x(self) -> usize {
        usize::from(self.x)
    }

    /// Returns the y coordinate of the placement origin.
    #[must_use]
    pub fn y(self) -> usize {
        usize::from(self.y)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}@{},{}",
            self.piece.index(),
            self.orientation.index(),
            self.x,
            self.y
        )
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (piece_str, rest) = s
            .split_once('#')
            .ok_or_else(|| ParseMoveError::new("missing '#' in 'piece#orientation@x,y'"))?;
        let (orientation_str, position_str) = rest
            .split_once('@')
            .ok_or_else(|| ParseMoveError::new("missing '@' in 'piece#orientation@x,y'"))?;
        let (x_str, y_str) = position_str
            .split_once(',')
            .ok_or_else(|| ParseMoveError::new("missing ',' in 'piece#orientation@x,y'"))?;

        let piece_index = piece_str
            .parse::<usize>()
            .map_err(|e| ParseMoveError::new(format!("invalid piece: {piece_str} ({e})")))?;
        let piece = PieceKind::from_index(piece_index)
            .ok_or_else(|| ParseMoveError::new(format!("piece must be 0-7, got {piece_index}")))?;

        let turns = orientation_str.parse::<u8>().map_err(|e| {
            ParseMoveError::new(format!("invalid orientation: {orientation_str} ({e})"))
        })?;
        let orientation = Orientation::new(turns);

        let x = x_str
            .parse::<u8>()
            .map_err(|e| ParseMoveError::new(format!("invalid x coordinate: {x_str} ({e})")))?;
        let y = y_str
            .parse::<u8>()
            .map_err(|e| ParseMoveError::new(format!("invalid y coordinate: {y_str} ({e})")))?;
        if usize::from(x) >= BOARD_WIDTH || usize::from(y) >= BOARD_HEIGHT {
            return Err(ParseMoveError::new(format!(
                "origin must lie on the board, got ({x},{y})"
            )));
        }

        Ok(Self::new(piece, orientation, x, y))
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Failure to parse a [`Move`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move string: {message}")]
pub struct ParseMoveError {
    message: String,
}

impl ParseMoveError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ways a candidate move can be illegal.
///
/// The variants are mutually exclusive: verification reports the first check
/// that fails, in the order they are listed here (overlap is checked before
/// the corner rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Each piece can only be used once.
    #[display("piece already used")]
    PieceAlreadyUsed,
    /// The placement would put part of the piece outside the board.
    #[display("placement lies outside the board")]
    OutsideBorder,
    /// The opening placement must cover a corner tile.
    #[display("first piece must cover a corner tile")]
    IllegalStart,
    /// The piece would overlap a tile that is already covered.
    #[display("tile already occupied")]
    TileOccupied,
    /// The piece must touch a friendly piece at a corner, and never along an
    /// edge.
    #[display("piece must touch a friendly corner and no friendly edge")]
    InvalidLocation,
}

/// Returns the cells face-adjacent (sharing an edge) to any cell of `mask`,
/// excluding `mask` itself, clipped to the board.
pub(crate) const fn face_neighbors(mask: u64) -> u64 {
    let east = (mask & !EAST_EDGE) << 1;
    let west = (mask & !WEST_EDGE) >> 1;
    let north = mask << BOARD_WIDTH;
    let south = mask >> BOARD_WIDTH;
    (east | west | north | south) & !mask
}

/// Returns the cells where a new friendly piece may legally attach: cells
/// diagonally adjacent to `friendly`, excluding `friendly` itself and
/// everything face-adjacent to it.
pub(crate) const fn corner_contacts(friendly: u64) -> u64 {
    let east = friendly & !EAST_EDGE;
    let west = friendly & !WEST_EDGE;
    let diagonal = (east << (BOARD_WIDTH + 1))
        | (east >> (BOARD_WIDTH - 1))
        | (west << (BOARD_WIDTH - 1))
        | (west >> (BOARD_WIDTH + 1));
    diagonal & !friendly & !face_neighbors(friendly)
}

/// Checks the legality of a move for `seat` and returns the mask of the cells
/// the piece would cover.
///
/// Checks run in a fixed order and the first failure wins; nothing is
/// mutated on any path. The opening move (empty friendly occupancy) is only
/// required to cover a board corner without overlapping the opponent; the
/// corner-contact rule applies from the second placement on.
pub fn verify_move(mv: Move, seat: Seat, board: &BitBoard) -> Result<u64, MoveError> {
    if !board.has_piece(seat, mv.piece()) {
        return Err(MoveError::PieceAlreadyUsed);
    }

    let (width, height) = mv.piece().dimensions(mv.orientation());
    if mv.x() + width > BOARD_WIDTH || mv.y() + height > BOARD_HEIGHT {
        return Err(MoveError::OutsideBorder);
    }

    let move_mask = mv.piece().pattern(mv.orientation()) << (mv.y() * BOARD_WIDTH + mv.x());

    let friendly = board.occupancy(seat);
    let enemy = board.occupancy(seat.opponent());

    if friendly == 0 {
        // A placement covering a board corner is self-legitimizing; only an
        // overlap with the opponent can still reject it.
        if move_mask & CORNER_MASK == 0 {
            return Err(MoveError::IllegalStart);
        }
        if move_mask & enemy != 0 {
            return Err(MoveError::TileOccupied);
        }
        return Ok(move_mask);
    }

    if move_mask & board.occupied() != 0 {
        return Err(MoveError::TileOccupied);
    }

    if move_mask & corner_contacts(friendly) == 0 || face_neighbors(move_mask) & friendly != 0 {
        return Err(MoveError::InvalidLocation);
    }

    Ok(move_mask)
}

/// Verifies a move and, on success, returns the board with the move applied:
/// the covered cells joined into `seat`'s occupancy and the piece removed
/// from its inventory.
///
/// On failure the error is returned and the input board is untouched:
/// boards are values and nothing is written before verification succeeds.
pub fn apply_move(mv: Move, seat: Seat, board: &BitBoard) -> Result<BitBoard, MoveError> {
    let placed_mask = verify_move(mv, seat, board)?;
    Ok(board.with_move_applied(seat, mv.piece(), placed_mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bit_board::{FULL_INVENTORY, cell_mask};

    fn mono_at(x: u8, y: u8) -> Move {
        Move::new(PieceKind::Mono, Orientation::new(0), x, y)
    }

    #[test]
    fn test_opening_move_in_corner_is_legal() {
        let board = BitBoard::new();
        assert_eq!(
            verify_move(mono_at(0, 0), Seat::One, &board),
            Ok(cell_mask(0, 0)),
        );
    }

    #[test]
    fn test_opening_move_off_corner_is_rejected() {
        let board = BitBoard::new();
        assert_eq!(
            verify_move(mono_at(1, 1), Seat::One, &board),
            Err(MoveError::IllegalStart),
        );
        assert_eq!(
            verify_move(mono_at(7, 6), Seat::One, &board),
            Err(MoveError::IllegalStart),
        );
    }

    #[test]
    fn test_opening_move_accepts_every_corner() {
        let board = BitBoard::new();
        for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
            assert!(verify_move(mono_at(x, y), Seat::One, &board).is_ok());
            assert!(verify_move(mono_at(x, y), Seat::Two, &board).is_ok());
        }
        // The corner cell only has to be covered, not be the origin.
        let line = Move::new(PieceKind::Line, Orientation::new(0), 5, 0);
        assert_eq!(
            verify_move(line, Seat::One, &board),
            Ok(cell_mask(5, 0) | cell_mask(6, 0) | cell_mask(7, 0)),
        );
        let square = Move::new(PieceKind::Square, Orientation::new(0), 6, 6);
        assert!(verify_move(square, Seat::One, &board).is_ok());
    }

    #[test]
    fn test_opening_move_may_not_overlap_opponent() {
        let board = BitBoard::from_ascii(
            "
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            22......
            ",
        );
        assert_eq!(
            verify_move(mono_at(0, 0), Seat::One, &board),
            Err(MoveError::TileOccupied),
        );
        // The other corners stay open.
        assert!(verify_move(mono_at(7, 7), Seat::One, &board).is_ok());
    }

    #[test]
    fn test_used_piece_is_rejected_first() {
        let inventory = FULL_INVENTORY & !PieceKind::Line.inventory_bit();
        let board = BitBoard::from_parts(0, 0, inventory, FULL_INVENTORY).unwrap();
        let line = Move::new(PieceKind::Line, Orientation::new(0), 5, 0);
        assert_eq!(
            verify_move(line, Seat::One, &board),
            Err(MoveError::PieceAlreadyUsed),
        );
        // The same move is still fine for the seat that holds the piece.
        assert!(verify_move(line, Seat::Two, &board).is_ok());
    }

    #[test]
    fn test_piece_may_not_hang_over_the_edge() {
        let board = BitBoard::new();
        let domino = Move::new(PieceKind::Domino, Orientation::new(0), 7, 0);
        assert_eq!(
            verify_move(domino, Seat::One, &board),
            Err(MoveError::OutsideBorder),
        );
        let upright = Move::new(PieceKind::Domino, Orientation::new(1), 7, 7);
        assert_eq!(
            verify_move(upright, Seat::One, &board),
            Err(MoveError::OutsideBorder),
        );
        let line = Move::new(PieceKind::Line, Orientation::new(0), 6, 0);
        assert_eq!(
            verify_move(line, Seat::One, &board),
            Err(MoveError::OutsideBorder),
        );
    }

    #[test]
    fn test_face_contact_with_friendly_piece_is_rejected() {
        let board = BitBoard::from_parts(cell_mask(0, 0), 0, FULL_INVENTORY, FULL_INVENTORY)
            .unwrap();
        assert_eq!(
            verify_move(mono_at(1, 0), Seat::One, &board),
            Err(MoveError::InvalidLocation),
        );
        assert_eq!(
            verify_move(mono_at(0, 1), Seat::One, &board),
            Err(MoveError::InvalidLocation),
        );
    }

    #[test]
    fn test_diagonal_contact_with_friendly_piece_is_legal() {
        let board = BitBoard::from_parts(cell_mask(0, 0), 0, FULL_INVENTORY, FULL_INVENTORY)
            .unwrap();
        assert_eq!(
            verify_move(mono_at(1, 1), Seat::One, &board),
            Ok(cell_mask(1, 1)),
        );
    }

    #[test]
    fn test_detached_placement_is_rejected() {
        let board = BitBoard::from_parts(cell_mask(0, 0), 0, FULL_INVENTORY, FULL_INVENTORY)
            .unwrap();
        assert_eq!(
            verify_move(mono_at(4, 4), Seat::One, &board),
            Err(MoveError::InvalidLocation),
        );
    }

    #[test]
    fn test_larger_piece_corner_and_face_contact() {
        // Seat one holds the square at the bottom-left.
        let board = BitBoard::from_ascii(
            "
            ........
            ........
            ........
            ........
            ........
            ........
            11......
            11......
            ",
        );
        // Sharing an edge with (1, 0) is out.
        let flat = Move::new(PieceKind::Domino, Orientation::new(0), 2, 0);
        assert_eq!(
            verify_move(flat, Seat::One, &board),
            Err(MoveError::InvalidLocation),
        );
        // Touching only the (1, 1) corner diagonally is fine.
        let diagonal = Move::new(PieceKind::Domino, Orientation::new(0), 2, 2);
        assert_eq!(
            verify_move(diagonal, Seat::One, &board),
            Ok(cell_mask(2, 2) | cell_mask(3, 2)),
        );
    }

    #[test]
    fn test_face_contact_with_opponent_is_legal() {
        let board = BitBoard::from_ascii(
            "
            ........
            ........
            ........
            ........
            ........
            ........
            ..2.....
            1.2.....
            ",
        );
        // (1, 1) touches seat one's (0, 0) diagonally and seat two's (2, 1)
        // face to face; only the friendly contact is restricted.
        assert_eq!(
            verify_move(mono_at(1, 1), Seat::One, &board),
            Ok(cell_mask(1, 1)),
        );
    }

    #[test]
    fn test_overlap_is_reported_before_location() {
        let board = BitBoard::from_ascii(
            "
            ........
            ........
            ........
            ........
            ........
            ........
            .2......
            1.......
            ",
        );
        assert_eq!(
            verify_move(mono_at(1, 1), Seat::One, &board),
            Err(MoveError::TileOccupied),
        );
    }

    #[test]
    fn test_apply_move_consumes_the_piece() {
        let board = BitBoard::new();
        let opening = Move::new(PieceKind::Staircase, Orientation::new(0), 0, 0);
        let board = apply_move(opening, Seat::One, &board).unwrap();

        assert_eq!(
            board.occupancy(Seat::One),
            cell_mask(0, 0) | cell_mask(1, 0) | cell_mask(0, 1),
        );
        assert!(!board.has_piece(Seat::One, PieceKind::Staircase));
        assert_eq!(board.inventory(Seat::Two), FULL_INVENTORY);

        // Once consumed, the piece stays consumed.
        let again = Move::new(PieceKind::Staircase, Orientation::new(0), 2, 2);
        assert_eq!(
            apply_move(again, Seat::One, &board),
            Err(MoveError::PieceAlreadyUsed),
        );
    }

    #[test]
    fn test_apply_move_keeps_occupancies_disjoint() {
        let mut board = BitBoard::new();
        board = apply_move(mono_at(0, 0), Seat::One, &board).unwrap();
        board = apply_move(mono_at(7, 7), Seat::Two, &board).unwrap();
        let domino = Move::new(PieceKind::Domino, Orientation::new(1), 1, 1);
        board = apply_move(domino, Seat::One, &board).unwrap();

        assert_eq!(board.occupancy(Seat::One) & board.occupancy(Seat::Two), 0);
        assert_eq!(board.coverage(Seat::One), 3);
        assert_eq!(board.coverage(Seat::Two), 1);
    }

    #[test]
    fn test_face_neighbors_clips_at_the_border() {
        assert_eq!(
            face_neighbors(cell_mask(0, 0)),
            cell_mask(1, 0) | cell_mask(0, 1),
        );
        assert_eq!(
            face_neighbors(cell_mask(7, 7)),
            cell_mask(6, 7) | cell_mask(7, 6),
        );
        // A horizontal domino has six distinct face neighbors.
        let domino = cell_mask(3, 3) | cell_mask(4, 3);
        assert_eq!(face_neighbors(domino).count_ones(), 6);
        assert_eq!(face_neighbors(domino) & domino, 0);
    }

    #[test]
    fn test_corner_contacts_excludes_faces_and_occupied() {
        assert_eq!(corner_contacts(cell_mask(0, 0)), cell_mask(1, 1));
        let square = cell_mask(0, 0) | cell_mask(1, 0) | cell_mask(0, 1) | cell_mask(1, 1);
        assert_eq!(corner_contacts(square), cell_mask(2, 2));
        let center = cell_mask(4, 4);
        assert_eq!(
            corner_contacts(center),
            cell_mask(3, 3) | cell_mask(5, 3) | cell_mask(3, 5) | cell_mask(5, 5),
        );
    }

    #[test]
    fn test_move_display_and_parse_round_trip() {
        let mv = Move::new(PieceKind::Tee, Orientation::new(1), 3, 2);
        assert_eq!(mv.to_string(), "4#1@3,2");
        assert_eq!("4#1@3,2".parse::<Move>(), Ok(mv));
    }

    #[test]
    fn test_move_parse_reduces_orientation() {
        let mv = "0#5@0,0".parse::<Move>().unwrap();
        assert_eq!(mv.orientation(), Orientation::new(1));
    }

    #[test]
    fn test_move_parse_error_cases() {
        assert!("".parse::<Move>().is_err());
        assert!("4#1".parse::<Move>().is_err());
        assert!("4#1@3".parse::<Move>().is_err());
        assert!("9#0@0,0".parse::<Move>().is_err());
        assert!("4#x@0,0".parse::<Move>().is_err());
        assert!("4#0@8,0".parse::<Move>().is_err());
        assert!("4#0@0,8".parse::<Move>().is_err());
    }

    #[test]
    fn test_move_serde_round_trip() {
        let mv = Move::new(PieceKind::Square, Orientation::new(0), 6, 6);
        let serialized = serde_json::to_string(&mv).unwrap();
        assert_eq!(serialized, "\"7#0@6,6\"");
        let deserialized: Move = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, mv);

        assert!(serde_json::from_str::<Move>("\"8#0@0,0\"").is_err());
    }
}
