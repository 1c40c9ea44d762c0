//! mdmirror: mirror Markdown sources into a site build directory
//!
//! Every `.md` file under the source root is copied byte for byte to the
//! same relative directory under the destination root. Its filename is
//! taken from the `slug` in a leading frontmatter block when there is one,
//! otherwise underscores in the original name become dashes. Anything that
//! is not Markdown is left behind.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mdmirror::{Mirror, MirrorConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let report = Mirror::new(MirrorConfig::new("sources", "build")).run()?;
//!     println!("copied {} files", report.copied_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Naming rules on their own
//!
//! ```rust
//! use mdmirror::{destination_file_name, FrontMatter};
//!
//! let fm = FrontMatter::extract("---\nslug: /docs/intro\n---\nHello");
//! assert_eq!(destination_file_name("get_started.md", &fm).unwrap(), "intro.md");
//!
//! let none = FrontMatter::extract("Hello");
//! assert_eq!(destination_file_name("get_started.md", &none).unwrap(), "get-started.md");
//! ```
//!
//! # Architecture
//!
//! - [`core`]: frontmatter extraction and filename rules (pure)
//! - [`io`]: the recursive copier and atomic writes
//! - [`config`]: run configuration, optionally from YAML
//! - [`error`]: the error taxonomy

// Public API exports
pub use error::{MirrorError, Result};

pub use config::{CollisionPolicy, CopyMode, MirrorConfig};
pub use core::{destination_file_name, destination_os_file_name, plain_file_name, FrontMatter};
pub use io::{CopiedFile, Mirror, MirrorReport};

pub mod config;
pub mod core;
pub mod error;
pub mod io;

// CLI components are available only in the binary, not as part of the library API

/// Mirror `source` into `destination` with default settings
pub fn mirror<S, D>(source: S, destination: D) -> Result<MirrorReport>
where
    S: Into<std::path::PathBuf>,
    D: Into<std::path::PathBuf>,
{
    Mirror::new(MirrorConfig::new(source, destination)).run()
}
