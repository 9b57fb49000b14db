//! # Storage Layer
//!
//! Two separate concerns live here:
//!
//! - [`roster::Roster`]: the in-memory, ordered record collection every
//!   command operates on. It is the only owner of [`Creature`](crate::model::Creature)
//!   values; everything else refers to records through a [`Handle`](crate::model::Handle).
//! - [`backend::StorageBackend`]: raw whole-file I/O for the database file.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production filesystem storage
//!   - Relative paths resolve against a root directory (the working directory for the CLI)
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! The roster never touches a backend directly. Loading parses a whole file
//! with [`crate::codec`] before calling [`roster::Roster::replace_all`], so a
//! missing or broken file leaves the current records alone.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod roster;

pub use roster::{Entry, Roster};
