//! Run configuration
//!
//! A run is fully described by a [`MirrorConfig`]. It can be built in code,
//! loaded from a YAML file, or assembled by the CLI from flags layered over
//! a file.

use crate::error::{MirrorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default source root, relative to the working directory
pub const DEFAULT_SOURCE: &str = "sources";
/// Default destination root, relative to the working directory
pub const DEFAULT_DESTINATION: &str = "build";

/// How Markdown files are named in the destination tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyMode {
    /// Frontmatter slug or underscore-to-dash renaming
    #[default]
    Rename,
    /// Legacy mirror copy: names kept, frontmatter never read
    Plain,
}

/// What to do when two sources map to one destination path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort the run
    #[default]
    Error,
    /// Last write wins, with a warning
    Overwrite,
}

/// Configuration for a mirror run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MirrorConfig {
    /// Root of the Markdown sources
    pub source: PathBuf,
    /// Root of the build output
    pub destination: PathBuf,
    /// Naming mode
    pub mode: CopyMode,
    /// Collision handling
    pub on_collision: CollisionPolicy,
    /// Plan and log copies without touching the filesystem
    pub dry_run: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            mode: CopyMode::default(),
            on_collision: CollisionPolicy::default(),
            dry_run: false,
        }
    }
}

impl MirrorConfig {
    /// Configuration for the given roots, defaults otherwise
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Load a YAML config file
    ///
    /// Relative roots are resolved against the directory holding the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MirrorError::io(path, e))?;
        let mut config = Self::from_yaml(&content).map_err(|source| MirrorError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.source = resolve_against(base, &config.source);
            config.destination = resolve_against(base, &config.destination);
        }

        Ok(config)
    }

    /// Parse config from YAML text; missing keys take their defaults
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn with_mode(mut self, mode: CopyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
