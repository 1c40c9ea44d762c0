//! Destination filename rules
//!
//! The destination directory always mirrors the source directory; only the
//! final path component is decided here.

use crate::core::front_matter::FrontMatter;
use crate::error::{MirrorError, Result};
use std::ffi::{OsStr, OsString};

/// Extension appended to slug-derived filenames
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Compute the destination filename for a Markdown file
///
/// With a slug, the last non-empty `/` segment of the slug (after dropping
/// one leading `/`) becomes the name, plus `.md`. Without one, underscores
/// in the original name become dashes.
///
/// A slug with no non-empty segment, such as `/`, is rejected. The returned
/// error has an empty path; callers attach the source file with
/// [`MirrorError::with_path`].
pub fn destination_file_name(file_name: &str, front_matter: &FrontMatter) -> Result<String> {
    match front_matter.slug.as_deref() {
        Some(slug) => slug_file_name(slug),
        None => Ok(file_name.replace('_', "-")),
    }
}

/// [`destination_file_name`] over a raw directory entry name
///
/// Names that are not valid UTF-8 are never decoded lossily. On Unix their
/// underscore bytes are swapped for dashes; elsewhere they are kept as-is.
pub fn destination_os_file_name(
    file_name: &OsStr,
    front_matter: &FrontMatter,
) -> Result<OsString> {
    if let Some(slug) = front_matter.slug.as_deref() {
        return slug_file_name(slug).map(OsString::from);
    }
    match file_name.to_str() {
        Some(name) => Ok(OsString::from(name.replace('_', "-"))),
        None => Ok(dash_underscores_raw(file_name)),
    }
}

/// Legacy mirror copy: the name is kept as-is
pub fn plain_file_name(file_name: &OsStr) -> OsString {
    file_name.to_os_string()
}

#[cfg(unix)]
fn dash_underscores_raw(file_name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = file_name
        .as_bytes()
        .iter()
        .map(|&b| if b == b'_' { b'-' } else { b })
        .collect();
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn dash_underscores_raw(file_name: &OsStr) -> OsString {
    file_name.to_os_string()
}

fn slug_file_name(slug: &str) -> Result<String> {
    let stripped = slug.strip_prefix('/').unwrap_or(slug);

    stripped
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .map(|segment| format!("{segment}{MARKDOWN_EXTENSION}"))
        .ok_or_else(|| MirrorError::invalid_slug("", slug))
}
