//! Frontmatter detection and slug extraction
//!
//! Only the leading `---` block is inspected, and only its `slug` line is
//! read. The block is never parsed as YAML: a file whose metadata would not
//! survive a YAML parser still gets its slug honoured, and a block that is
//! not closed is simply treated as absent.

use regex::Regex;
use std::sync::OnceLock;

fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A---\n((?s:.*?))\n---\n").expect("valid frontmatter regex"))
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^slug:[ \t]*(.+)$").expect("valid slug regex"))
}

/// Metadata pulled from a Markdown file's leading frontmatter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Trimmed `slug` value; `None` when there is no block or no slug line
    pub slug: Option<String>,
}

impl FrontMatter {
    /// Frontmatter carrying the given slug
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
        }
    }

    /// Inspect file content and extract the frontmatter fields we care about
    ///
    /// Never fails. Content without a well-formed leading block yields
    /// `FrontMatter::default()`.
    pub fn extract(content: &str) -> Self {
        let slug = Self::block(content).and_then(|block| {
            slug_regex()
                .captures(block)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        });

        Self { slug }
    }

    /// The raw text between the opening and closing `---` lines
    pub fn block(content: &str) -> Option<&str> {
        block_regex()
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Whether a slug was found
    pub fn has_slug(&self) -> bool {
        self.slug.is_some()
    }
}
