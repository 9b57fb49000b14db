//! # API Facade
//!
//! [`DexApi`] is the single entry point for every critterdex operation. It owns
//! the in-memory [`Roster`] and the storage backend, and dispatches to the
//! command modules.
//!
//! The API takes field values that the caller has already collected. It does
//! no prompting and no printing; results come back as [`CmdResult`] values the
//! caller renders however it likes.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `DexApi<FsBackend>`
//! - Testing: `DexApi<MemBackend>`

use crate::commands;
use crate::config::DexConfig;
use crate::error::Result;
use crate::model::{CaughtStatus, CreatureId, Handle, SortKey};
use crate::store::backend::StorageBackend;
use crate::store::{Entry, Roster};
use std::path::Path;

pub struct DexApi<B: StorageBackend> {
    roster: Roster,
    backend: B,
    config: DexConfig,
}

impl<B: StorageBackend> DexApi<B> {
    pub fn new(backend: B, config: DexConfig) -> Self {
        Self {
            roster: Roster::new(),
            backend,
            config,
        }
    }

    pub fn create_record(
        &mut self,
        id: CreatureId,
        name: &str,
        primary_type: &str,
        secondary_type: &str,
        caught: CaughtStatus,
    ) -> Result<commands::CmdResult> {
        commands::create::run(
            &mut self.roster,
            id,
            name,
            primary_type,
            secondary_type,
            caught,
        )
    }

    pub fn update_record(
        &mut self,
        handle: Handle,
        id: CreatureId,
        name: &str,
        primary_type: &str,
        secondary_type: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(
            &mut self.roster,
            handle,
            id,
            name,
            primary_type,
            secondary_type,
        )
    }

    pub fn update_caught_status(
        &mut self,
        handle: Handle,
        caught: CaughtStatus,
    ) -> Result<commands::CmdResult> {
        commands::caught::run(&mut self.roster, handle, caught)
    }

    pub fn delete_record(&mut self, handle: Handle) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.roster, handle)
    }

    /// Finds a record by id (integer queries) or case-insensitive name.
    pub fn query(&self, text: &str) -> Option<&Entry> {
        self.roster.find(text)
    }

    pub fn list_sorted(&self, key: SortKey) -> commands::CmdResult {
        commands::list::run(&self.roster, key)
    }

    /// Loads `path`, or the configured database when `path` is `None` or blank.
    pub fn load_from_path(&mut self, path: Option<&Path>) -> Result<commands::CmdResult> {
        let path = self.config.database_or(path).to_path_buf();
        commands::load::run(&mut self.roster, &self.backend, &path)
    }

    /// Saves to `path`, or the configured database when `path` is `None` or blank.
    pub fn save_to_path(&self, path: Option<&Path>) -> Result<commands::CmdResult> {
        let path = self.config.database_or(path);
        commands::save::run(&self.roster, &self.backend, path)
    }

    /// Whether the file a load of `path` would read exists.
    pub fn database_exists(&self, path: Option<&Path>) -> bool {
        self.backend.exists(self.config.database_or(path))
    }

    pub fn count(&self) -> usize {
        self.roster.len()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &DexConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn api() -> DexApi<MemBackend> {
        DexApi::new(MemBackend::new(), DexConfig::default())
    }

    fn id(n: u64) -> CreatureId {
        CreatureId::new(n).unwrap()
    }

    #[test]
    fn create_query_and_delete() {
        let mut api = api();
        api.create_record(id(25), "Pikachu", "Electric", "", CaughtStatus::Caught)
            .unwrap();
        assert_eq!(api.count(), 1);

        let handle = api.query("PIKACHU").unwrap().handle;
        api.delete_record(handle).unwrap();
        assert_eq!(api.count(), 0);
        assert!(api.query("25").is_none());

        let again = api.delete_record(handle).unwrap();
        assert!(again.has_level(MessageLevel::Warning));
    }

    #[test]
    fn update_and_caught_status_keep_identity() {
        let mut api = api();
        api.create_record(id(4), "Charmander", "Fire", "", CaughtStatus::NotCaught)
            .unwrap();
        let handle = api.query("4").unwrap().handle;

        api.update_record(handle, id(5), "Charmeleon", "Fire", "")
            .unwrap();
        api.update_caught_status(handle, CaughtStatus::Caught)
            .unwrap();

        let entry = api.query("charmeleon").unwrap();
        assert_eq!(entry.handle, handle);
        assert_eq!(entry.creature.id().value(), 5);
        assert_eq!(entry.creature.caught(), CaughtStatus::Caught);
    }

    #[test]
    fn blank_path_uses_configured_database() {
        let mut api = api();
        api.create_record(id(1), "Bulbasaur", "Grass", "Poison", CaughtStatus::NotCaught)
            .unwrap();
        api.save_to_path(Some(Path::new(""))).unwrap();
        assert_eq!(
            api.backend().contents(Path::new("database.txt")).unwrap(),
            "1|Bulbasaur|Grass|Poison|N\n"
        );

        let mut other = DexApi::new(
            MemBackend::new().with_file("database.txt", "7|Squirtle|Water||Y\n"),
            DexConfig::default(),
        );
        let result = other.load_from_path(None).unwrap();
        assert_eq!(result.loaded_count, Some(1));
        assert!(other.query("squirtle").is_some());
    }

    #[test]
    fn failed_load_keeps_roster() {
        let mut api = DexApi::new(
            MemBackend::new().with_file("bad.txt", "1|Bulbasaur|Grass|Poison|N\n5|OnlyTwoFields\n"),
            DexConfig::default(),
        );
        api.create_record(id(150), "Mewtwo", "Psychic", "", CaughtStatus::Caught)
            .unwrap();

        assert!(api.load_from_path(Some(Path::new("bad.txt"))).is_err());
        assert!(api.load_from_path(Some(Path::new("missing.txt"))).is_err());
        assert_eq!(api.count(), 1);
        assert!(api.query("Mewtwo").is_some());
    }

    #[test]
    fn list_sorted_returns_listing() {
        let mut api = api();
        for (n, name) in [(25, "Pikachu"), (1, "Bulbasaur"), (6, "Charizard")] {
            api.create_record(id(n), name, "Normal", "", CaughtStatus::NotCaught)
                .unwrap();
        }
        let result = api.list_sorted(SortKey::Id);
        let ids: Vec<_> = result
            .listed
            .iter()
            .map(|e| e.creature.id().value())
            .collect();
        assert_eq!(ids, vec![1, 6, 25]);
    }
}
