use std::io::{self, Write as _};

use blokus8_engine::{
    BOARD_WIDTH, BitBoard, Move, Orientation, PieceKind, Player, Seat, verify_move,
};

use crate::render::{self, Perspective};

/// Interactive player driven by stdin prompts.
///
/// Shows the subjective board, asks for piece, orientation and coordinates,
/// and keeps re-prompting until the entered move passes verification. The
/// turn loop therefore never sees an illegal move from a human.
pub(crate) struct Human;

impl Player for Human {
    fn choose_move(&mut self, board: &BitBoard) -> Move {
        println!("It is your turn. Here is the state of the board:");
        print!("{}", render::board_to_string(board, Perspective::SeatOne));

        println!("Pieces still in your inventory:");
        for piece in PieceKind::ALL {
            if board.has_piece(Seat::One, piece) {
                println!(
                    "  {}: {} ({} tiles)",
                    piece.index(),
                    piece.name(),
                    piece.area()
                );
            }
        }

        loop {
            let piece = prompt_piece();
            let orientation = Orientation::new(prompt_number("Enter orientation (0-3): "));
            let x = prompt_coordinate("x");
            let y = prompt_coordinate("y");
            let mv = Move::new(piece, orientation, x, y);

            match verify_move(mv, Seat::One, board) {
                Ok(_) => return mv,
                Err(err) => {
                    println!("You made an illegal move: {err}. Let's try that again.");
                }
            }
        }
    }
}

fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .expect("failed to read from stdin");
    assert_ne!(read, 0, "stdin closed while waiting for input");
    line.trim().to_string()
}

fn prompt_number(label: &str) -> u8 {
    loop {
        let line = prompt(label);
        match line.parse() {
            Ok(number) => return number,
            Err(_) => println!("Please enter a small non-negative number, got '{line}'."),
        }
    }
}

fn prompt_piece() -> PieceKind {
    loop {
        let index = prompt_number("Enter piece identifier: ");
        match PieceKind::from_index(usize::from(index)) {
            Some(piece) => return piece,
            None => println!("Piece identifiers range from 0 to 7."),
        }
    }
}

fn prompt_coordinate(axis: &str) -> u8 {
    loop {
        let coordinate = prompt_number(&format!("Enter {axis} coord: "));
        if usize::from(coordinate) < BOARD_WIDTH {
            return coordinate;
        }
        println!("Coordinates range from 0 to 7.");
    }
}
