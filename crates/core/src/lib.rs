//! Domain logic for the penalty records console.
//!
//! Pure logic with no I/O, so the record store, the HTTP layer and any future
//! tooling share one definition of records, filters and form rules.

pub mod error;
pub mod filter;
pub mod filter_bar;
pub mod lookups;
pub mod penalty;
pub mod penalty_form;
pub mod roles;
pub mod types;
