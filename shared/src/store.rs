//! Persistent image collections.
//!
//! An [`ImageList`] is an insertion-ordered sequence of [`ImageRecord`]s,
//! deduplicated by id. The favorites and downloads collections are both
//! instances of it, each persisted wholesale under its own storage key as a
//! JSON array.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{ImageId, ImageRecord};

/// Insertion-ordered, id-deduplicated collection of image records.
///
/// Serializes as a bare JSON array, which is also the stored format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageList {
    records: Vec<ImageRecord>,
}

impl ImageList {
    /// Decodes a stored list. Fails soft: malformed bytes yield an empty
    /// list rather than an error.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Vec<ImageRecord>>(bytes) {
            Ok(records) => {
                let mut list = Self::default();
                for record in records {
                    list.add(record);
                }
                list
            }
            Err(err) => {
                warn!(%err, "discarding malformed stored list");
                Self::default()
            }
        }
    }

    /// Encodes the full list for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.records)
    }

    #[must_use]
    pub fn contains(&self, id: &ImageId) -> bool {
        self.records.iter().any(|record| &record.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Appends `record` unless its id is already present. Returns whether
    /// the list changed.
    pub fn add(&mut self, record: ImageRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Removes the record with `id` if present. Returns whether the list
    /// changed; removing an absent id is a no-op.
    pub fn remove(&mut self, id: &ImageId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| &record.id != id);
        self.records.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }
}
