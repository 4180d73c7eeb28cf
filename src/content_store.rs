use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::content::{ContentEntry, EntryId};
use crate::error::LoadError;
use crate::posts::{PostEntry, POSTS};
use crate::schema::Violations;

#[derive(Default)]
struct CollectionEntries {
    entries: HashMap<EntryId, ContentEntry>,
    // newest first after sort()
    entry_list: Vec<(Option<NaiveDateTime>, EntryId)>,
}

/// Validated entries of every collection.
#[derive(Default)]
pub struct ContentStore {
    collections: HashMap<String, CollectionEntries>,
}

impl ContentStore {
    pub fn new() -> ContentStore {
        ContentStore::default()
    }

    pub fn add(&mut self, entry: ContentEntry, date: Option<NaiveDateTime>) -> Result<(), LoadError> {
        let collection = self.collections.entry(entry.collection.clone()).or_default();
        if collection.entries.contains_key(&entry.id) {
            return Err(LoadError::DuplicateEntry {
                collection: entry.collection,
                id: entry.id.0,
                path: entry.file_path,
            });
        }

        collection.entry_list.push((date, entry.id.clone()));
        collection.entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    /// Orders every collection by date, newest first. Undated entries go last.
    pub fn sort(&mut self) {
        for collection in self.collections.values_mut() {
            collection.entry_list.sort_by(|(da, ida), (db, idb)| {
                db.cmp(da).then_with(|| ida.cmp(idb))
            });
        }
    }

    pub fn get_collection(&self, name: &str) -> Vec<&ContentEntry> {
        match self.collections.get(name) {
            None => vec![],
            Some(collection) => collection.entry_list.iter()
                .filter_map(|(_, id)| collection.entries.get(id))
                .collect(),
        }
    }

    pub fn get_entry(&self, collection: &str, id: &str) -> Option<&ContentEntry> {
        self.collections.get(collection)?
            .entries
            .get(&EntryId(id.to_string()))
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection)
            .map(|c| c.entries.len())
            .unwrap_or(0)
    }

    /// Typed front-matter of every post, newest first.
    pub fn posts(&self) -> Result<Vec<PostEntry>, Violations> {
        self.get_collection(POSTS)
            .into_iter()
            .map(|entry| PostEntry::from_record(&entry.data))
            .collect()
    }
}
