//! Entity models and the DTOs accepted by the record store.

pub mod penalty;
