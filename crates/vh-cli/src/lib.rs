//! Viewing-history statistics CLI library.
//!
//! This crate provides the CLI interface, configuration and output writers
//! around the `vh-core` pipeline.

mod cli;
mod config;
pub mod pipeline;
pub mod render;

pub use cli::{Cli, normalize_legacy_flags};
pub use config::Config;
