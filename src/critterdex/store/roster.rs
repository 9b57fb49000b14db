use crate::model::{Creature, Handle, SortKey};
use std::cmp::Ordering;

/// A creature together with the handle that identifies it in a [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub handle: Handle,
    pub creature: Creature,
}

/// The in-memory collection.
///
/// Keeps records in insertion order. Ids are not required to be unique;
/// id lookups return the first match.
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, creature: Creature) -> Handle {
        let handle = Handle::new();
        self.entries.push(Entry { handle, creature });
        handle
    }

    /// Removes the record behind `handle`. `None` if it is not in the roster.
    pub fn remove(&mut self, handle: Handle) -> Option<Creature> {
        let pos = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(pos).creature)
    }

    pub fn get(&self, handle: Handle) -> Option<&Entry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Creature> {
        self.entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .map(|e| &mut e.creature)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.creature.id().value() == id)
    }

    /// Case-insensitive exact match on the name.
    pub fn find_by_name(&self, name: &str) -> Option<&Entry> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.creature.name().to_lowercase() == wanted)
    }

    /// Looks up by id when `query` is an integer, by name otherwise.
    pub fn find(&self, query: &str) -> Option<&Entry> {
        let query = query.trim();
        match query.parse::<i64>() {
            Ok(id) if id > 0 => self.find_by_id(id as u64),
            Ok(_) => None,
            Err(_) => self.find_by_name(query),
        }
    }

    /// Entries in ascending `key` order. Ties keep insertion order.
    pub fn list_sorted(&self, key: SortKey) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| compare(&a.creature, &b.creature, key));
        sorted
    }

    /// Swaps in a whole new set of records. Every record gets a fresh handle.
    pub fn replace_all(&mut self, creatures: Vec<Creature>) {
        self.entries = creatures
            .into_iter()
            .map(|creature| Entry {
                handle: Handle::new(),
                creature,
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in insertion order, as written to disk.
    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.entries.iter().map(|e| &e.creature)
    }

    /// Number of records sharing `id`.
    pub fn count_id(&self, id: u64) -> usize {
        self.entries
            .iter()
            .filter(|e| e.creature.id().value() == id)
            .count()
    }
}

fn compare(a: &Creature, b: &Creature, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id().value().cmp(&b.id().value()),
        SortKey::Name => a.name().cmp(b.name()),
        SortKey::PrimaryType => a.primary_type().cmp(b.primary_type()),
        SortKey::SecondaryType => a.secondary_type().cmp(b.secondary_type()),
    }
}
