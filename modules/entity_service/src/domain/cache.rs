//! Read-through cache of stored documents keyed by (collection, id)
//!
//! Each key carries a generation bumped by every invalidation. A reader
//! captures the generation before going to the store and only fills the
//! cache if no write happened in between.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;

type Key = (String, String);

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    document: Option<Value>,
}

#[derive(Debug, Default)]
pub struct RecordCache {
    entries: DashMap<Key, Slot>,
}

fn key(collection: &str, id: &str) -> Key {
    (collection.to_string(), id.to_string())
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, collection: &str, id: &str) -> Option<Value> {
        self.entries
            .get(&key(collection, id))
            .and_then(|slot| slot.document.clone())
    }

    /// Current generation of a key; pass it to [`fill`](Self::fill)
    pub fn generation(&self, collection: &str, id: &str) -> u64 {
        self.entries
            .get(&key(collection, id))
            .map_or(0, |slot| slot.generation)
    }

    /// Store a document read at `generation`; dropped if the key was
    /// invalidated since. Returns whether the document was cached.
    pub fn fill(&self, collection: &str, id: &str, generation: u64, document: Value) -> bool {
        match self.entries.entry(key(collection, id)) {
            Entry::Occupied(mut slot) if slot.get().generation == generation => {
                slot.get_mut().document = Some(document);
                true
            }
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) if generation == 0 => {
                slot.insert(Slot {
                    generation,
                    document: Some(document),
                });
                true
            }
            Entry::Vacant(_) => false,
        }
    }

    pub fn invalidate(&self, collection: &str, id: &str) {
        let mut slot = self.entries.entry(key(collection, id)).or_default();
        slot.generation += 1;
        slot.document = None;
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|slot| slot.document.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
