//! Command-line argument definitions and parsing

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "mdmirror",
    version,
    about = "Copy Markdown sources into a site build directory",
    long_about = "mdmirror mirrors every .md file under the source root into the same \
                  relative directory under the destination root. Files whose frontmatter \
                  carries a slug are renamed after its last segment; otherwise underscores \
                  in the filename become dashes. Other files are ignored."
)]
pub struct Cli {
    /// Source root [default: sources]
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination root [default: build]
    #[arg(short, long = "dest", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// YAML config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Legacy mirror copy: keep filenames, never read frontmatter
    #[arg(long)]
    pub plain: bool,

    /// Let a later file overwrite an earlier one with the same destination
    #[arg(long)]
    pub allow_collisions: bool,

    /// Log planned copies without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level implied by --verbose / --quiet
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}
