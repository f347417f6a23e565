//! Room data models
//!
//! Plain string triples as decoded from a room document, the room
//! identifier supplied by the chat command, and the flat attribute map
//! produced by extraction.
//!
//! Author: hephaex@gmail.com

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved key holding the room's display name
pub const NAME_KEY: &str = "name";

/// Reserved key holding the room's seating capacity
pub const CAPACITY_KEY: &str = "capacity";

/// Reserved key holding the image resource depicting the room
pub const DEPICTION_KEY: &str = "depiction";

// ============================================================================
// Triple
// ============================================================================

/// A single RDF statement
///
/// IRIs are held without angle brackets, blank nodes by identifier and
/// literals by lexical value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

// ============================================================================
// Room identifier
// ============================================================================

/// Opaque room code, e.g. `32-3077`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Subject IRI of the room's own statements, e.g.
    /// `http://id.southampton.ac.uk/room/32-3077`
    pub fn subject_iri(&self, id_base: &str) -> String {
        format!("{id_base}{}", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Attribute map
// ============================================================================

/// Flat attribute record built by the extractor
///
/// Holds the reserved `name`, `capacity` and `depiction` keys plus one entry
/// per feature subject. A feature entry's value is empty until a label
/// resolves it. Entries iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove an entry, returning its value
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY)
    }

    pub fn capacity(&self) -> Option<&str> {
        self.get(CAPACITY_KEY)
    }

    pub fn depiction(&self) -> Option<&str> {
        self.get(DEPICTION_KEY)
    }

    /// Append a name fragment, joining onto any existing name with `", "`
    pub fn append_name(&mut self, fragment: &str) {
        match self.entries.get_mut(NAME_KEY) {
            Some(name) => {
                name.push_str(", ");
                name.push_str(fragment);
            }
            None => {
                self.entries.insert(NAME_KEY.to_string(), fragment.to_string());
            }
        }
    }

    /// Overwrite an existing entry; returns false if the key was absent
    pub fn replace(&mut self, key: &str, value: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(slot) => {
                value.clone_into(slot);
                true
            }
            None => false,
        }
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
