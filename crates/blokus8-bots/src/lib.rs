//! Bot opponents for the engine's turn loop.
//!
//! Both bots implement [`Player`](blokus8_engine::Player) and select only
//! from the engine's own legal-move enumeration, so they never return an
//! illegal move. Randomness comes from a seedable PCG generator: the same
//! seed reproduces the same match, which keeps bot-vs-bot games replayable.
//!
//! - [`GreedyBot`] - plays a largest-area piece, breaking ties randomly
//! - [`RandomBot`] - plays a uniformly random legal move
//!
//! # Example
//!
//! ```
//! use blokus8_bots::{GreedyBot, RandomBot};
//! use blokus8_engine::GameSession;
//!
//! let mut session = GameSession::new();
//! let status = session.run(
//!     &mut GreedyBot::with_seed(1),
//!     &mut RandomBot::with_seed(2),
//! )?;
//! assert!(!status.is_ongoing());
//! # Ok::<(), blokus8_engine::IllegalMoveError>(())
//! ```

pub use self::{greedy::*, random::*};

mod greedy;
mod random;
