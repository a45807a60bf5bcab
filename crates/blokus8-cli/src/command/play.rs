use std::path::PathBuf;

use blokus8_engine::{GameSession, Player, Seat};

use crate::{
    human::Human,
    record,
    render::{self, Perspective},
};

use super::BotKind;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Which bot to play against
    #[clap(long, value_enum, default_value_t = BotKind::Greedy)]
    opponent: BotKind,
    /// Seat taken by the human player
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    seat: u8,
    /// Seed for the bot's move selection
    #[clap(long)]
    seed: Option<u64>,
    /// Resume from a saved board record
    #[clap(long)]
    load: Option<PathBuf>,
    /// Save the final board record to this path
    #[clap(long)]
    save: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        opponent,
        seat,
        seed,
        load,
        save,
    } = arg;

    let mut session = match load {
        Some(path) => GameSession::from_board(record::load(path)?),
        None => GameSession::new(),
    };

    let human_seat = if *seat == 2 { Seat::Two } else { Seat::One };
    let mut human = Human;
    let mut bot = opponent.build(*seed);

    while session.status().is_ongoing() {
        println!("-----------------------------");
        for current in Seat::ALL {
            let player: &mut dyn Player = if current == human_seat {
                &mut human
            } else {
                bot.as_mut()
            };
            match session.take_turn(current, player)? {
                Some(_) => {
                    println!("{current} made a move. Now showing current state of board.");
                    print!(
                        "{}",
                        render::board_to_string(&session.board(), Perspective::Objective)
                    );
                }
                None => println!("{current} has no legal moves. Skipping their turn."),
            }
        }
    }

    println!("Game over: {}.", session.status());
    if let Some(path) = save {
        record::save(path, &session.board())?;
        println!("Final board written to {}.", path.display());
    }
    Ok(())
}
