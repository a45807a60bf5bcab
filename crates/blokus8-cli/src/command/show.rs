use std::path::PathBuf;

use crate::{
    record,
    render::{self, Perspective},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    /// Path to a board record
    path: PathBuf,
    /// Perspective to render from
    #[clap(long, value_enum, default_value_t = Perspective::Objective)]
    perspective: Perspective,
    /// Print the board's serialized form as JSON instead of rendering it
    #[clap(long)]
    json: bool,
}

pub(crate) fn run(arg: &ShowArg) -> anyhow::Result<()> {
    let ShowArg {
        path,
        perspective,
        json,
    } = arg;

    let board = record::load(path)?;
    if *json {
        println!("{}", serde_json::to_string(&board)?);
    } else {
        print!("{}", render::board_to_string(&board, *perspective));
    }
    Ok(())
}
