use std::fmt::Write as _;

use blokus8_engine::{BOARD_HEIGHT, BOARD_WIDTH, BitBoard, Seat, cell_mask};

/// Which side of the table the board is shown from.
///
/// The objective view labels the seats neutrally; the subjective views mark
/// the viewing seat's tiles `O` and the opponent's `X`, matching the board a
/// [`Player`](blokus8_engine::Player) is handed during its turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, clap::ValueEnum)]
pub(crate) enum Perspective {
    /// Neutral view, seats labeled 1 and 2.
    #[default]
    #[display("objective")]
    Objective,
    /// Seat one's view of the table.
    #[display("seat-one")]
    SeatOne,
    /// Seat two's view of the table.
    #[display("seat-two")]
    SeatTwo,
}

impl Perspective {
    fn symbols(self) -> (char, char) {
        match self {
            Self::Objective => ('1', '2'),
            Self::SeatOne => ('O', 'X'),
            Self::SeatTwo => ('X', 'O'),
        }
    }

    fn possessives(self) -> (&'static str, &'static str) {
        match self {
            Self::Objective => ("Player 1's", "Player 2's"),
            Self::SeatOne => ("Your", "Opponent's"),
            Self::SeatTwo => ("Opponent's", "Your"),
        }
    }
}

/// Renders a board as text, rows from y=7 down to y=0.
///
/// The opponent-side inventory and coverage go above the grid, the own-side
/// ones below, so the output reads like sitting at the table.
pub(crate) fn board_to_string(board: &BitBoard, perspective: Perspective) -> String {
    let (symbol_one, symbol_two) = perspective.symbols();
    let (possessive_one, possessive_two) = perspective.possessives();

    let mut out = String::new();
    writeln!(
        out,
        "{possessive_two} pieces: {}",
        inventory_bits(board.inventory(Seat::Two))
    )
    .unwrap();
    writeln!(
        out,
        "{possessive_two} tile coverage: {}",
        board.coverage(Seat::Two)
    )
    .unwrap();

    writeln!(out, "  +--------+").unwrap();
    for y in (0..BOARD_HEIGHT).rev() {
        write!(out, "{y}-|").unwrap();
        for x in 0..BOARD_WIDTH {
            let mask = cell_mask(x, y);
            let cell = if board.occupancy(Seat::One) & mask != 0 {
                symbol_one
            } else if board.occupancy(Seat::Two) & mask != 0 {
                symbol_two
            } else {
                ' '
            };
            out.push(cell);
        }
        out.push_str("|\n");
    }
    writeln!(out, "  +--------+").unwrap();
    writeln!(out, "   01234567").unwrap();

    writeln!(
        out,
        "{possessive_one} tile coverage: {}",
        board.coverage(Seat::One)
    )
    .unwrap();
    writeln!(
        out,
        "{possessive_one} pieces: {}",
        inventory_bits(board.inventory(Seat::One))
    )
    .unwrap();
    out
}

/// Formats an inventory mask as 8 binary digits, least significant bit first,
/// so the digit positions line up with the piece identifiers 0-7.
fn inventory_bits(inventory: u8) -> String {
    (0..u8::BITS).map(|i| ((inventory >> i) & 1).to_string()).collect()
}
