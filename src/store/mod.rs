//! # Landmark Store Module
//!
//! The in-memory "database": an ordered collection of landmark records
//! behind a small trait, so a persistent backend can later be swapped in
//! without touching the routing layer.

pub mod errors;
pub mod landmark;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use landmark::{seed_landmarks, Landmark, LandmarkDraft};
pub use memory::{InMemoryLandmarkStore, LandmarkStore};
