use blokus8_engine::{BitBoard, Move, Player, Seat, legal_moves};
use rand::{Rng as _, SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;

/// A bot that plays a uniformly random legal move.
///
/// Useful as a baseline opponent and for shaking out rule edge cases in
/// bot-vs-bot matches.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: Pcg32,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBot {
    /// Creates a bot with a random seed.
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

impl Player for RandomBot {
    fn choose_move(&mut self, board: &BitBoard) -> Move {
        *legal_moves(Seat::One, board)
            .choose(&mut self.rng)
            .expect("bot consulted without a legal move")
    }
}
