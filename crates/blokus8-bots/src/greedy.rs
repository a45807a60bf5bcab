use blokus8_engine::{BitBoard, Move, Player, Seat, legal_moves};
use rand::{Rng as _, SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;

/// A bot that knows one thing: more tiles is good.
///
/// Every turn it plays a piece of the largest area still placeable, choosing
/// uniformly among those moves. No lookahead.
#[derive(Debug, Clone)]
pub struct GreedyBot {
    rng: Pcg32,
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyBot {
    /// Creates a bot with a random tie-break seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible matches.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Player for GreedyBot {
    fn choose_move(&mut self, board: &BitBoard) -> Move {
        let moves = legal_moves(Seat::One, board);
        let largest = moves
            .iter()
            .map(|mv| mv.piece().area())
            .max()
            .expect("bot consulted without a legal move");
        let biggest_pieces: Vec<Move> = moves
            .into_iter()
            .filter(|mv| mv.piece().area() == largest)
            .collect();
        *biggest_pieces
            .choose(&mut self.rng)
            .expect("largest area came from this list")
    }
}
