mod command;
mod human;
mod record;
mod render;

fn main() -> anyhow::Result<()> {
    command::run()
}
