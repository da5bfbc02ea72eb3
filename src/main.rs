//! CLI entry point for tileset assembly and retro conversion

use clap::Parser;
use tilecraft::io::cli::{Cli, CommandRunner};
use tilecraft::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> tilecraft::Result<()> {
    let cli = Cli::parse();
    let filter = if cli.quiet { "warn" } else { DEFAULT_LOG_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut runner = CommandRunner::new(cli);
    runner.run()
}
