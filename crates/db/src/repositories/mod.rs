//! Store implementations, one module per entity.

pub mod penalty_repo;

pub use penalty_repo::{InMemoryPenaltyStore, PenaltyStore};
