//! CLI command handler bridging arguments to the library

use crate::cli_bin::args::Cli;
use log::debug;
use mdmirror::error::Result;
use mdmirror::{CollisionPolicy, CopyMode, Mirror, MirrorConfig, MirrorReport};

/// Execute a mirror run and print the completion summary
pub fn mirror_command(cli: &Cli) -> Result<MirrorReport> {
    let config = build_config(cli)?;
    debug!("Resolved config: {:?}", config);

    let report = Mirror::new(config.clone()).run()?;
    println!("{}", summary_line(&config, &report));

    Ok(report)
}

/// Layer flags over the config file over built-in defaults
pub fn build_config(cli: &Cli) -> Result<MirrorConfig> {
    let mut config = match &cli.config {
        Some(path) => MirrorConfig::load(path)?,
        None => MirrorConfig::default(),
    };

    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(destination) = &cli.destination {
        config.destination = destination.clone();
    }
    if cli.plain {
        config.mode = CopyMode::Plain;
    }
    if cli.allow_collisions {
        config.on_collision = CollisionPolicy::Overwrite;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    Ok(config)
}

fn summary_line(config: &MirrorConfig, report: &MirrorReport) -> String {
    let verb = if report.dry_run { "would be copied" } else { "copied" };
    format!(
        "{} Markdown file(s) {} from {} to {} to be accessible from the website",
        report.copied_count(),
        verb,
        config.source.display(),
        config.destination.display()
    )
}
