use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{FieldPath, ObjectShape, ViolationKind, Violations};

/// How the entries of a collection are stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    /// Markdown files; the record is the front-matter, the body is kept verbatim
    Content,
    /// JSON or YAML files; the whole file is the record
    Data,
}

#[derive(Debug, Clone)]
pub struct Collection {
    kind: CollectionType,
    schema: ObjectShape,
}

pub fn define_collection(kind: CollectionType, schema: ObjectShape) -> Collection {
    Collection { kind, schema }
}

impl Collection {
    pub fn kind(&self) -> CollectionType {
        self.kind
    }

    pub fn schema(&self) -> &ObjectShape {
        &self.schema
    }

    /// Validates a raw record and returns it holding only the declared fields.
    pub fn parse_entry(&self, record: &Value) -> Result<Value, Violations> {
        self.schema.parse(record)
    }

    pub fn parse_entry_as<T: DeserializeOwned>(&self, record: &Value) -> Result<T, Violations> {
        let data = self.parse_entry(record)?;
        serde_json::from_value(data).map_err(|e| {
            Violations::single(FieldPath::root(), ViolationKind::Rejected { reason: e.to_string() })
        })
    }
}

/// Named collections, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: BTreeMap<String, Collection>,
}

impl CollectionRegistry {
    pub fn new() -> CollectionRegistry {
        CollectionRegistry::default()
    }

    pub fn with(mut self, name: &str, collection: Collection) -> CollectionRegistry {
        self.collections.insert(name.to_string(), collection);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item=&str> {
        self.collections.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item=(&str, &Collection)> {
        self.collections.iter().map(|(name, c)| (name.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
