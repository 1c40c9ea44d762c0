//! File I/O: tree mirroring and atomic writes

pub mod mirror;
pub mod writer;

pub use mirror::{is_markdown, CopiedFile, Mirror, MirrorReport};
pub use writer::write_atomic;
