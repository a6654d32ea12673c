//! The persisted shape of a store.
//!
//! The store itself performs no serialization; the persistence layer
//! captures a [`Snapshot`] via [`EntityStore::snapshot`], writes it out,
//! and later rebuilds a store from a deserialized snapshot. The shape is
//! the classic `entities` / `topLevelIds` / `childIds` object, wrapped in a
//! versioned envelope so the format can evolve without breaking old files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::store::EntityStore;

/// A detached copy of a store's three collections.
///
/// Snapshots are plain data: producing one never fails, and feeding one
/// back through [`EntityStore::from_parts`] performs no validation. A
/// snapshot taken from a live store always satisfies the store invariants;
/// a snapshot deserialized from external input should be audited with
/// [`EntityStore::check`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Versions<T>",
    into = "Versions<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: DeserializeOwned")
)]
pub struct Snapshot<T> {
    /// Entity values keyed by id.
    pub entities: HashMap<String, T>,
    /// The ordered top-level ids.
    pub top_level_ids: Vec<String>,
    /// Ordered child ids keyed by group id.
    pub child_ids: HashMap<String, Vec<String>>,
}

impl<T> From<Snapshot<T>> for EntityStore<T> {
    fn from(snapshot: Snapshot<T>) -> Self {
        Self::from_parts(
            snapshot.entities,
            snapshot.top_level_ids,
            snapshot.child_ids,
        )
    }
}

impl<T: Clone> From<&EntityStore<T>> for Snapshot<T> {
    fn from(store: &EntityStore<T>) -> Self {
        store.snapshot()
    }
}

/// The serialized versions of the snapshot format.
///
/// This allows future changes to the persisted shape without breaking
/// compatibility with files written by earlier releases.
#[derive(Debug, Serialize, Deserialize)]
#[serde(
    tag = "_version",
    bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned")
)]
enum Versions<T> {
    #[serde(rename = "1", rename_all = "camelCase")]
    V1 {
        #[serde(default)]
        entities: HashMap<String, T>,

        #[serde(default)]
        top_level_ids: Vec<String>,

        #[serde(default)]
        child_ids: HashMap<String, Vec<String>>,
    },
}

impl<T> From<Versions<T>> for Snapshot<T> {
    fn from(versions: Versions<T>) -> Self {
        match versions {
            Versions::V1 {
                entities,
                top_level_ids,
                child_ids,
            } => Self {
                entities,
                top_level_ids,
                child_ids,
            },
        }
    }
}

impl<T> From<Snapshot<T>> for Versions<T> {
    fn from(snapshot: Snapshot<T>) -> Self {
        Self::V1 {
            entities: snapshot.entities,
            top_level_ids: snapshot.top_level_ids,
            child_ids: snapshot.child_ids,
        }
    }
}
