use std::cmp::Ordering;

use crate::{
    IllegalMoveError,
    core::bit_board::{BitBoard, Seat},
    engine::{
        move_gen::has_legal_move,
        rules::{Move, apply_move},
    },
};

/// Outcome classification of a board, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    /// At least one seat can still move.
    #[display("ongoing")]
    Ongoing,
    /// Neither seat can move and both cover the same number of tiles.
    #[display("draw")]
    Draw,
    /// Neither seat can move and player one covers more tiles.
    #[display("player one wins")]
    PlayerOneWins,
    /// Neither seat can move and player two covers more tiles.
    #[display("player two wins")]
    PlayerTwoWins,
}

/// Classifies a board: the game is over exactly when neither seat has a legal
/// move left, and the winner is the seat covering strictly more tiles.
#[must_use]
pub fn game_status(board: &BitBoard) -> GameStatus {
    if has_legal_move(Seat::One, board) || has_legal_move(Seat::Two, board) {
        return GameStatus::Ongoing;
    }
    match board.coverage(Seat::One).cmp(&board.coverage(Seat::Two)) {
        Ordering::Greater => GameStatus::PlayerOneWins,
        Ordering::Less => GameStatus::PlayerTwoWins,
        Ordering::Equal => GameStatus::Draw,
    }
}

/// A move supplier for one seat: a bot, a human front-end, or anything else
/// that can pick a placement.
///
/// The board handed to [`choose_move`](Self::choose_move) is always
/// *subjective*: the seat about to move is presented as [`Seat::One`], so
/// implementations never need to know which seat they actually occupy.
///
/// Implementations should return a move that passes verification for
/// [`Seat::One`] on that exact board. The turn loop re-checks every returned
/// move and fails the match with [`IllegalMoveError`] if one does not.
pub trait Player {
    /// Chooses the next move on a subjective board.
    ///
    /// Only called when at least one legal move exists.
    fn choose_move(&mut self, board: &BitBoard) -> Move;
}

/// A match in progress: owns the authoritative board and sequences turns.
///
/// # Example
///
/// ```
/// use blokus8_engine::{BitBoard, GameSession, Move, Player, Seat, legal_moves};
///
/// /// Always plays the first enumerated legal move.
/// struct First;
///
/// impl Player for First {
///     fn choose_move(&mut self, board: &BitBoard) -> Move {
///         legal_moves(Seat::One, board)[0]
///     }
/// }
///
/// let mut session = GameSession::new();
/// let status = session.run(&mut First, &mut First)?;
/// assert!(!status.is_ongoing());
/// # Ok::<(), blokus8_engine::IllegalMoveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSession {
    board: BitBoard,
}

impl GameSession {
    /// Starts a session on an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_board(BitBoard::EMPTY)
    }

    /// Starts a session from an existing board, e.g. a loaded record.
    #[must_use]
    pub const fn from_board(board: BitBoard) -> Self {
        Self { board }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> BitBoard {
        self.board
    }

    /// Puts the session back to the starting position.
    pub fn reset(&mut self) {
        self.board = BitBoard::EMPTY;
    }

    /// Classifies the current board.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }

    /// Plays out one turn for `seat`.
    ///
    /// If the seat has no legal move its turn is skipped and `Ok(None)` is
    /// returned without consulting the player. Otherwise the player picks a
    /// move on its subjective board and the move is verified and applied;
    /// a move that fails verification aborts with [`IllegalMoveError`] and
    /// leaves the board unchanged.
    pub fn take_turn(
        &mut self,
        seat: Seat,
        player: &mut dyn Player,
    ) -> Result<Option<Move>, IllegalMoveError> {
        let subjective = match seat {
            Seat::One => self.board,
            Seat::Two => self.board.flipped(),
        };
        if !has_legal_move(Seat::One, &subjective) {
            return Ok(None);
        }
        let mv = player.choose_move(&subjective);
        self.board =
            apply_move(mv, seat, &self.board).map_err(|source| IllegalMoveError {
                seat,
                mv,
                source,
            })?;
        Ok(Some(mv))
    }

    /// Drives the match to completion and returns the final status.
    ///
    /// Seats alternate, starting with seat one; a seat without a legal move
    /// is skipped. The loop ends once neither seat can move.
    pub fn run(
        &mut self,
        one: &mut dyn Player,
        two: &mut dyn Player,
    ) -> Result<GameStatus, IllegalMoveError> {
        while self.status().is_ongoing() {
            self.take_turn(Seat::One, one)?;
            self.take_turn(Seat::Two, two)?;
        }
        Ok(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        bit_board::FULL_INVENTORY,
        piece::{Orientation, PieceKind},
    };
    use crate::engine::move_gen::legal_moves;

    /// Plays the first enumerated legal move.
    struct First;

    impl Player for First {
        fn choose_move(&mut self, board: &BitBoard) -> Move {
            legal_moves(Seat::One, board)[0]
        }
    }

    /// Returns a fixed move regardless of the board.
    struct Scripted(Move);

    impl Player for Scripted {
        fn choose_move(&mut self, _board: &BitBoard) -> Move {
            self.0
        }
    }

    /// Fails the test if the session consults it.
    struct NeverAsked;

    impl Player for NeverAsked {
        fn choose_move(&mut self, _board: &BitBoard) -> Move {
            panic!("player consulted although its seat has no legal move");
        }
    }

    #[test]
    fn test_fresh_board_is_ongoing() {
        assert_eq!(GameSession::new().status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_status_with_one_blocked_seat_is_ongoing() {
        let board = BitBoard::from_parts(0, 0, 0, FULL_INVENTORY).unwrap();
        assert_eq!(game_status(&board), GameStatus::Ongoing);
    }

    #[test]
    fn test_finished_game_is_scored_by_coverage() {
        // Neither seat can move once both inventories are exhausted.
        let three_tiles = 0b111;
        let one_tile = 1 << 63;
        let board = BitBoard::from_parts(three_tiles, one_tile, 0, 0).unwrap();
        assert_eq!(game_status(&board), GameStatus::PlayerOneWins);
        assert_eq!(game_status(&board.flipped()), GameStatus::PlayerTwoWins);

        // Coverage decides, not the numeric value of the masks.
        let low_bits = 0b11;
        let high_bits = (1 << 63) | (1 << 62);
        let board = BitBoard::from_parts(low_bits, high_bits, 0, 0).unwrap();
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_take_turn_skips_a_blocked_seat() {
        let board = BitBoard::from_parts(0, 0, 0, FULL_INVENTORY).unwrap();
        let mut session = GameSession::from_board(board);
        let result = session.take_turn(Seat::One, &mut NeverAsked);
        assert_eq!(result, Ok(None));
        assert_eq!(session.board(), board);
    }

    #[test]
    fn test_take_turn_presents_seat_two_subjectively() {
        let mut session = GameSession::new();
        session.take_turn(Seat::One, &mut First).unwrap();

        // Seat two sees itself as seat one; the engine maps the move back.
        let opening = Move::new(PieceKind::Square, Orientation::new(0), 6, 6);
        let played = session.take_turn(Seat::Two, &mut Scripted(opening)).unwrap();
        assert_eq!(played, Some(opening));
        assert_eq!(session.board().coverage(Seat::Two), 4);
        assert!(!session.board().has_piece(Seat::Two, PieceKind::Square));
    }

    #[test]
    fn test_take_turn_rejects_an_illegal_move() {
        let mut session = GameSession::new();
        let off_corner = Move::new(PieceKind::Mono, Orientation::new(0), 3, 3);
        let before = session.board();

        let result = session.take_turn(Seat::One, &mut Scripted(off_corner));
        assert_eq!(
            result,
            Err(IllegalMoveError {
                seat: Seat::One,
                mv: off_corner,
                source: crate::MoveError::IllegalStart,
            }),
        );
        // A rejected move leaves the board untouched.
        assert_eq!(session.board(), before);
    }

    #[test]
    fn test_run_plays_a_match_to_completion() {
        let mut session = GameSession::new();
        let status = session.run(&mut First, &mut First).unwrap();

        assert!(!status.is_ongoing());
        assert_eq!(status, session.status());
        let board = session.board();
        assert_eq!(board.occupancy(Seat::One) & board.occupancy(Seat::Two), 0);
        assert!(board.coverage(Seat::One) > 0);
        assert!(board.coverage(Seat::Two) > 0);
    }

    #[test]
    fn test_turns_never_regrow_inventories() {
        let mut session = GameSession::new();
        let mut one = First;
        let mut two = First;
        let mut prev = session.board();

        while session.status().is_ongoing() {
            for seat in Seat::ALL {
                let player: &mut dyn Player = if seat == Seat::One {
                    &mut one
                } else {
                    &mut two
                };
                session.take_turn(seat, player).unwrap();
                let board = session.board();
                assert_eq!(board.occupancy(Seat::One) & board.occupancy(Seat::Two), 0);
                for check in Seat::ALL {
                    // Every remaining piece was also remaining before.
                    assert_eq!(board.inventory(check) & !prev.inventory(check), 0);
                    // Covered cells are never given back.
                    assert_eq!(prev.occupancy(check) & !board.occupancy(check), 0);
                }
                prev = board;
            }
        }
    }
}
