//! # In-Memory Landmark Store
//!
//! Trait for landmark collection operations plus the in-memory
//! implementation used in production. The collection is an insertion-ordered
//! sequence; every lookup is a linear scan over it.

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::landmark::{seed_landmarks, Landmark, LandmarkDraft};

/// Store trait for landmark collection operations
pub trait LandmarkStore: Send + Sync {
    /// List all landmarks in insertion order
    fn list(&self) -> StoreResult<Vec<Landmark>>;

    /// Get a single landmark by id
    fn get(&self, id: &str) -> StoreResult<Landmark>;

    /// Assign the next id, append the record, and return it
    fn create(&self, draft: LandmarkDraft) -> StoreResult<Landmark>;

    /// Replace every field of the record with the given id (the id itself
    /// is preserved) and return the new record
    fn replace(&self, id: &str, draft: LandmarkDraft) -> StoreResult<Landmark>;

    /// Remove the record with the given id and return it; the order of the
    /// remaining records is preserved
    fn remove(&self, id: &str) -> StoreResult<Landmark>;
}

/// In-memory landmark store
///
/// The `RwLock` serializes mutation under the multi-threaded runtime. There
/// is no transactional isolation beyond per-operation locking; a restart
/// resets the collection to the seed records.
pub struct InMemoryLandmarkStore {
    records: RwLock<Vec<Landmark>>,
}

impl InMemoryLandmarkStore {
    /// Create a store holding the seed records
    pub fn new() -> Self {
        Self::with_records(seed_landmarks())
    }

    /// Create a store holding the given records
    pub fn with_records(records: Vec<Landmark>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Next id: max of the stored ids parsed as integers, plus one
    ///
    /// Fails if any stored id is non-numeric.
    fn next_id(records: &[Landmark]) -> StoreResult<String> {
        let mut max = 0u64;
        for record in records {
            let value: u64 = record
                .id
                .parse()
                .map_err(|_| StoreError::NonNumericId(record.id.clone()))?;
            max = max.max(value);
        }
        Ok((max + 1).to_string())
    }
}

impl Default for InMemoryLandmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkStore for InMemoryLandmarkStore {
    fn list(&self) -> StoreResult<Vec<Landmark>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn get(&self, id: &str) -> StoreResult<Landmark> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        records
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn create(&self, draft: LandmarkDraft) -> StoreResult<Landmark> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = Self::next_id(&records)?;

        let landmark = Landmark {
            id,
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
        };
        records.push(landmark.clone());
        Ok(landmark)
    }

    fn replace(&self, id: &str, draft: LandmarkDraft) -> StoreResult<Landmark> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let slot = records
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::NotFound)?;

        *slot = Landmark {
            id: id.to_string(),
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
        };
        Ok(slot.clone())
    }

    fn remove(&self, id: &str) -> StoreResult<Landmark> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let idx = records
            .iter()
            .position(|l| l.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(records.remove(idx))
    }
}
