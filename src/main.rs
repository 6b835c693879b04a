use anyhow::Context;
use clap::Parser;
use moodtunes::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    cli::run(&cli).context("moodtunes failed")
}
