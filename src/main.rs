use anyhow::Result;
use clap::Parser;

mod cli_bin;

use cli_bin::args::Cli;
use cli_bin::commands::mirror_command;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    mirror_command(&cli)?;
    Ok(())
}
