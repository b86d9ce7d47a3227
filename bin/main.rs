use anyhow::Error as Anyhow;
use clap::Parser;

mod cli;
mod game;
mod human;
mod io;
mod session;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
