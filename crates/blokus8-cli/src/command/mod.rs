use blokus8_bots::{GreedyBot, RandomBot};
use blokus8_engine::Player;
use clap::{Parser, Subcommand};

use self::{bot_match::BotMatchArg, play::PlayArg, show::ShowArg};

mod bot_match;
mod play;
mod show;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play an interactive match against a bot
    Play(#[clap(flatten)] PlayArg),
    /// Run a bot-vs-bot match
    BotMatch(#[clap(flatten)] BotMatchArg),
    /// Render a saved board record
    Show(#[clap(flatten)] ShowArg),
}

/// Selectable bot opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, clap::ValueEnum)]
pub(crate) enum BotKind {
    /// Plays a largest-area piece, breaking ties randomly
    #[default]
    #[display("greedy")]
    Greedy,
    /// Plays a uniformly random legal move
    #[display("random")]
    Random,
}

impl BotKind {
    pub(crate) fn build(self, seed: Option<u64>) -> Box<dyn Player> {
        match (self, seed) {
            (Self::Greedy, Some(seed)) => Box::new(GreedyBot::with_seed(seed)),
            (Self::Greedy, None) => Box::new(GreedyBot::new()),
            (Self::Random, Some(seed)) => Box::new(RandomBot::with_seed(seed)),
            (Self::Random, None) => Box::new(RandomBot::new()),
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg),
        Mode::BotMatch(arg) => bot_match::run(&arg),
        Mode::Show(arg) => show::run(&arg),
    }
}
