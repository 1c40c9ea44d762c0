//! Recursive Markdown mirroring
//!
//! Walks the source tree, recreates its directories under the destination
//! and copies every `.md` file across, naming it with the rules in
//! [`crate::core::rename`]. Everything else in the source tree is ignored
//! without a trace beyond the report's counter. Symbolic links are followed,
//! so linked pages and directories are mirrored like any other; a link
//! cycle ends the run with a walk error.
//!
//! The first error ends the run. Files already copied stay where they are;
//! since every output is a pure function of its input, running again after
//! fixing the cause converges on the same tree.

use crate::config::{CollisionPolicy, CopyMode, MirrorConfig};
use crate::core::front_matter::FrontMatter;
use crate::core::rename::{destination_os_file_name, plain_file_name, MARKDOWN_EXTENSION};
use crate::error::{MirrorError, Result};
use crate::io::writer::write_atomic;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One Markdown file mirrored into the destination tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of a mirror run
#[derive(Debug, Clone, Default)]
pub struct MirrorReport {
    /// Copies in walk order (planned copies for a dry run)
    pub copied: Vec<CopiedFile>,
    /// Destination directories ensured, the root included
    pub directories: usize,
    /// Non-Markdown files skipped
    pub ignored: usize,
    /// Whether the filesystem was left untouched
    pub dry_run: bool,
}

impl MirrorReport {
    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }

    /// Destination path a given source file was copied to
    pub fn destination_of(&self, source: &Path) -> Option<&Path> {
        self.copied
            .iter()
            .find(|c| c.source == source)
            .map(|c| c.destination.as_path())
    }
}

/// Whether a file name carries the Markdown extension
pub fn is_markdown<S: AsRef<OsStr>>(file_name: S) -> bool {
    file_name
        .as_ref()
        .as_encoded_bytes()
        .ends_with(MARKDOWN_EXTENSION.as_bytes())
}

/// Markdown mirror copier
pub struct Mirror {
    config: MirrorConfig,
}

impl Mirror {
    pub fn new(config: MirrorConfig) -> Self {
        Self { config }
    }

    /// Mirror the source tree into the destination tree
    pub fn run(&self) -> Result<MirrorReport> {
        let source_root = &self.config.source;
        let destination_root = &self.config.destination;

        if !source_root.is_dir() {
            return Err(MirrorError::source_not_found(source_root));
        }

        debug!(
            "Mirroring {} -> {} (mode: {:?}, dry run: {})",
            source_root.display(),
            destination_root.display(),
            self.config.mode,
            self.config.dry_run
        );

        let mut report = MirrorReport {
            dry_run: self.config.dry_run,
            ..Default::default()
        };
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        let walker = WalkDir::new(source_root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            // a destination nested inside the source must not be re-read
            .filter_entry(|entry| {
                entry.depth() == 0 || entry.path() != destination_root.as_path()
            });

        for entry in walker {
            let entry = entry?;
            let relative = relative_path(source_root, entry.path())?;

            if entry.file_type().is_dir() {
                self.ensure_dir(&destination_root.join(relative))?;
                report.directories += 1;
            } else {
                match self.copy_entry(&entry, relative, &mut claimed)? {
                    Some(copied) => report.copied.push(copied),
                    None => report.ignored += 1,
                }
            }
        }

        Ok(report)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if self.config.dry_run || dir.is_dir() {
            return Ok(());
        }
        debug!("Creating directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| MirrorError::io(dir, e))
    }

    fn copy_entry(
        &self,
        entry: &DirEntry,
        relative: &Path,
        claimed: &mut HashMap<PathBuf, PathBuf>,
    ) -> Result<Option<CopiedFile>> {
        let source = entry.path();
        let file_name = entry.file_name();

        // sockets and fifos are "other files" too, whatever their name
        if !entry.file_type().is_file() || !is_markdown(file_name) {
            return Ok(None);
        }

        let contents = fs::read(source).map_err(|e| MirrorError::io(source, e))?;

        let target_name = match self.config.mode {
            CopyMode::Plain => plain_file_name(file_name),
            CopyMode::Rename => {
                let front_matter = FrontMatter::extract(&String::from_utf8_lossy(&contents));
                if let Some(slug) = &front_matter.slug {
                    debug!("Using slug {:?} for {}", slug, source.display());
                }
                destination_os_file_name(file_name, &front_matter)
                    .map_err(|e| e.with_path(source))?
            }
        };

        let destination_dir = match relative.parent() {
            Some(parent) => self.config.destination.join(parent),
            None => self.config.destination.clone(),
        };
        let destination = destination_dir.join(&target_name);

        if let Some(first) = claimed.get(&destination) {
            match self.config.on_collision {
                CollisionPolicy::Error => {
                    return Err(MirrorError::collision(&destination, first, source));
                }
                CollisionPolicy::Overwrite => warn!(
                    "{} overwrites {} (already copied from {})",
                    source.display(),
                    destination.display(),
                    first.display()
                ),
            }
        }
        claimed.insert(destination.clone(), source.to_path_buf());

        if self.config.dry_run {
            info!(
                "Would copy Markdown file {} to {}",
                source.display(),
                destination.display()
            );
        } else {
            write_atomic(&destination, &contents, Some(source))?;
            info!(
                "Copied Markdown file {} to {}",
                source.display(),
                destination.display()
            );
        }

        Ok(Some(CopiedFile {
            source: source.to_path_buf(),
            destination,
        }))
    }
}

fn relative_path<'a>(root: &Path, path: &'a Path) -> Result<&'a Path> {
    path.strip_prefix(root).map_err(|_| {
        MirrorError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("path is outside source root {}", root.display()),
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, MirrorConfig) {
        let temp_dir = TempDir::new().unwrap();
        let config = MirrorConfig::new(
            temp_dir.path().join("sources"),
            temp_dir.path().join("build"),
        );
        fs::create_dir_all(&config.source).unwrap();
        (temp_dir, config)
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown("a.md"));
        assert!(is_markdown("a_b.md"));
        assert!(!is_markdown("a.markdown"));
        assert!(!is_markdown("a.md.txt"));
        assert!(!is_markdown("README"));
    }

    #[test]
    fn test_copies_and_renames() {
        let (_temp_dir, config) = setup();
        fs::write(config.source.join("get_started.md"), "Hello").unwrap();

        let report = Mirror::new(config.clone()).run().unwrap();

        assert_eq!(report.copied_count(), 1);
        assert_eq!(
            report.destination_of(&config.source.join("get_started.md")),
            Some(config.destination.join("get-started.md").as_path())
        );
        assert_eq!(
            fs::read_to_string(config.destination.join("get-started.md")).unwrap(),
            "Hello"
        );
    }

    #[test]
    fn test_ignores_other_files() {
        let (_temp_dir, config) = setup();
        fs::write(config.source.join("image.png"), [0u8, 1, 2]).unwrap();
        fs::write(config.source.join("notes.txt"), "x").unwrap();

        let report = Mirror::new(config.clone()).run().unwrap();

        assert_eq!(report.copied_count(), 0);
        assert_eq!(report.ignored, 2);
        assert!(!config.destination.join("image.png").exists());
        assert!(!config.destination.join("notes.txt").exists());
    }

    #[test]
    fn test_empty_source_creates_destination_root() {
        let (_temp_dir, config) = setup();
        let report = Mirror::new(config.clone()).run().unwrap();

        assert_eq!(report.directories, 1);
        assert!(config.destination.is_dir());
    }

    #[test]
    fn test_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let config = MirrorConfig::new(temp_dir.path().join("nope"), temp_dir.path().join("build"));

        let err = Mirror::new(config.clone()).run().unwrap_err();
        assert!(matches!(err, MirrorError::SourceNotFound { .. }));
        assert!(!config.destination.exists());
    }

    #[test]
    fn test_source_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("sources");
        fs::write(&file, "x").unwrap();

        let err = Mirror::new(MirrorConfig::new(&file, temp_dir.path().join("build")))
            .run()
            .unwrap_err();
        assert!(matches!(err, MirrorError::SourceNotFound { .. }));
    }

    #[test]
    fn test_invalid_slug_names_the_file() {
        let (_temp_dir, config) = setup();
        let bad = config.source.join("bad.md");
        fs::write(&bad, "---\nslug: /\n---\n").unwrap();

        let err = Mirror::new(config).run().unwrap_err();
        match err {
            MirrorError::InvalidSlug { path, slug } => {
                assert_eq!(path, bad);
                assert_eq!(slug, "/");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_destination_inside_source_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("sources");
        let destination = source.join("build");
        fs::create_dir_all(&destination).unwrap();
        fs::write(source.join("a.md"), "a").unwrap();
        fs::write(destination.join("stale.md"), "old").unwrap();

        let report = Mirror::new(MirrorConfig::new(&source, &destination))
            .run()
            .unwrap();

        assert_eq!(report.copied_count(), 1);
        assert!(destination.join("a.md").exists());
        assert!(!destination.join("build").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_is_a_walk_error() {
        let (_temp_dir, config) = setup();
        fs::create_dir_all(config.source.join("loop")).unwrap();
        std::os::unix::fs::symlink(&config.source, config.source.join("loop/back")).unwrap();

        let err = Mirror::new(config).run().unwrap_err();
        assert!(matches!(err, MirrorError::Walk(_)));
    }

    // macOS filesystems reject names that are not UTF-8
    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_survive_both_modes() {
        use std::os::unix::ffi::OsStrExt;

        let (_temp_dir, config) = setup();
        let name = OsStr::from_bytes(b"caf\xe9_menu.md");
        fs::write(config.source.join(name), "menu").unwrap();

        Mirror::new(config.clone().with_mode(CopyMode::Plain))
            .run()
            .unwrap();
        assert_eq!(
            fs::read_to_string(config.destination.join(name)).unwrap(),
            "menu"
        );

        fs::remove_dir_all(&config.destination).unwrap();
        Mirror::new(config.clone()).run().unwrap();
        let renamed = config
            .destination
            .join(OsStr::from_bytes(b"caf\xe9-menu.md"));
        assert_eq!(fs::read_to_string(renamed).unwrap(), "menu");
        assert_eq!(fs::read_dir(&config.destination).unwrap().count(), 1);
    }
}
