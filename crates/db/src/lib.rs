//! Record store for the penalty console.

use std::sync::Arc;

pub mod models;
pub mod repositories;

use repositories::{InMemoryPenaltyStore, PenaltyStore};

/// Shared handle to the record store, injected into the HTTP layer.
pub type StorePool = Arc<dyn PenaltyStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to load seed fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("Record id space exhausted")]
    IdExhausted,
}

/// Create the in-memory store, optionally pre-loaded with the seed records.
pub fn create_store(seed: bool) -> Result<StorePool, StoreError> {
    let store = if seed {
        InMemoryPenaltyStore::seeded()?
    } else {
        InMemoryPenaltyStore::new()
    };
    Ok(Arc::new(store))
}

/// Verify the store answers queries.
pub async fn health_check(store: &StorePool) -> Result<(), StoreError> {
    store.health_check().await
}
