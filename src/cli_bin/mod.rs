//! CLI module for the mdmirror command-line interface
//!
//! Argument parsing and the command handler that turns flags into a
//! [`mdmirror::MirrorConfig`] and runs it.

pub mod args;
pub mod commands;
