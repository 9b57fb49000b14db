//! # CLI Layer
//!
//! This module is **one possible client** of the critterdex library. It is the
//! only place that:
//! - Reads stdin or parses arguments
//! - Writes to stdout/stderr
//! - Decides exit codes
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions and logger initialization
//! - [`commands`]: `run()`, context setup and the batch subcommand handlers
//! - [`session`]: the interactive command loop
//! - [`prompt`]: re-asking field prompts that turn raw lines into valid values
//! - [`render`]: formatting of listings, messages and config

pub mod commands;
pub mod prompt;
pub mod render;
pub mod session;
pub mod setup;

pub use commands::run;
