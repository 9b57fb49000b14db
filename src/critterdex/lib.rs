//! # Critterdex Architecture
//!
//! Critterdex keeps a small collection of creature records in memory and
//! persists it to a plain pipe-delimited text file. The library holds all of
//! the record logic; the `critterdex` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive session, batch subcommands, prompts          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the roster and the storage backend                  │
//! │  - Resolves default database paths                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - Roster: ordered in-memory records                        │
//! │  - Codec: pipe-delimited text <-> records                   │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and Handles
//!
//! A [`model::Creature`] carries a user-facing numeric id, but ids are not
//! required to be unique. The roster therefore hands out an opaque
//! [`model::Handle`] per stored record; edits, caught-status changes and
//! removals all address records by handle.
//!
//! ## Loading Never Destroys Data
//!
//! A load reads and parses the entire file before anything in memory changes.
//! A missing file or a bad line is reported and the current records stay.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Roster and storage backends
//! - [`codec`]: Database file format
//! - [`model`]: Core data types (`Creature`, `CreatureId`, `CaughtStatus`, `SortKey`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
