use anyhow::Result;
use clap::Parser;
use mapline::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    mapline::commands::print_registry()
}
