use clap::Parser;

/// The tool takes no arguments: running it prints the seeded registry.
/// Clap still provides the standard `--help` and `--version` surface.
#[derive(Parser, Debug)]
#[command(name = "mapline")]
#[command(about = "Print an ordered integer registry, one entry per line", long_about = None)]
#[command(version)]
pub struct Cli {}
