//! Response envelopes for API handlers.
//!
//! Single payloads that are not records go out as `{ "data": ... }`; listings
//! also carry the row count and the filters that were actually applied, so
//! the console can feed them back to the filter bar as its initial state.

use penalty_core::filter::FilterSpecification;
use serde::Serialize;

/// `{ "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for filtered listings.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: usize,
    /// Normalized filters: empty query values removed.
    pub filters: FilterSpecification,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, filters: FilterSpecification) -> Self {
        Self {
            total: data.len(),
            data,
            filters,
        }
    }
}
