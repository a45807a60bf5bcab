use std::path::PathBuf;

use blokus8_engine::{GameSession, Seat};

use crate::{
    record,
    render::{self, Perspective},
};

use super::BotKind;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BotMatchArg {
    /// Bot playing seat one
    #[clap(long, value_enum, default_value_t = BotKind::Greedy)]
    one: BotKind,
    /// Bot playing seat two
    #[clap(long, value_enum, default_value_t = BotKind::Greedy)]
    two: BotKind,
    /// Seed for seat one's move selection
    #[clap(long)]
    seed_one: Option<u64>,
    /// Seed for seat two's move selection
    #[clap(long)]
    seed_two: Option<u64>,
    /// Only report the final status, not every move and board
    #[clap(long)]
    quiet: bool,
    /// Save the final board record to this path
    #[clap(long)]
    save: Option<PathBuf>,
}

pub(crate) fn run(arg: &BotMatchArg) -> anyhow::Result<()> {
    let BotMatchArg {
        one,
        two,
        seed_one,
        seed_two,
        quiet,
        save,
    } = arg;

    let mut session = GameSession::new();
    let mut player_one = one.build(*seed_one);
    let mut player_two = two.build(*seed_two);

    let mut round = 0_u32;
    while session.status().is_ongoing() {
        round += 1;
        for (seat, player) in [
            (Seat::One, player_one.as_mut()),
            (Seat::Two, player_two.as_mut()),
        ] {
            let played = session.take_turn(seat, player)?;
            if *quiet {
                continue;
            }
            match played {
                Some(mv) => println!("Round {round}: {seat} plays {mv}."),
                None => println!("Round {round}: {seat} has no legal moves. Skipping."),
            }
        }
        if !*quiet {
            print!(
                "{}",
                render::board_to_string(&session.board(), Perspective::Objective)
            );
        }
    }

    println!("Game over after {round} rounds: {}.", session.status());
    if let Some(path) = save {
        record::save(path, &session.board())?;
        println!("Final board written to {}.", path.display());
    }
    Ok(())
}
