//! Core naming logic, free of filesystem access
//!
//! - FrontMatter: slug extraction from a leading `---` block
//! - rename: destination filename rules

pub mod front_matter;
pub mod rename;

pub use front_matter::FrontMatter;
pub use rename::{
    destination_file_name, destination_os_file_name, plain_file_name, MARKDOWN_EXTENSION,
};
