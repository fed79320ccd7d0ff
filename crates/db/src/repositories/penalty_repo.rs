//! Record store for penalties.
//!
//! [`PenaltyStore`] is the seam a real backend plugs into; the in-memory
//! implementation keeps records in insertion order with the newest first.

use async_trait::async_trait;
use penalty_core::filter::{query, FilterSpecification};
use penalty_core::lookups::PenaltyType;
use penalty_core::penalty::{add_days, generate_identifier};
use penalty_core::types::{today, DbId};
use tokio::sync::RwLock;

use crate::models::penalty::{CreatePenalty, Penalty, UpdatePenalty};
use crate::StoreError;

/// Seed records for a fresh console.
const FIXTURE: &str = include_str!("../../fixtures/penalties.json");

/// CRUD operations over penalty records.
///
/// Mutations resolve only once the change is visible to `list`, so callers
/// re-query after awaiting them.
#[async_trait]
pub trait PenaltyStore: Send + Sync {
    /// Records matching `filter`, in store order.
    async fn list(&self, filter: &FilterSpecification) -> Result<Vec<Penalty>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Penalty>, StoreError>;

    /// Insert a new record with `id = max existing + 1`.
    async fn create(&self, input: &CreatePenalty) -> Result<Penalty, StoreError>;

    /// Returns `None` if no record with the given `id` exists.
    async fn update(&self, id: DbId, input: &UpdatePenalty) -> Result<Option<Penalty>, StoreError>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Process-lifetime store backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryPenaltyStore {
    records: RwLock<Vec<Penalty>>,
}

impl InMemoryPenaltyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Penalty>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store pre-loaded with the five reference records.
    pub fn seeded() -> Result<Self, StoreError> {
        let records: Vec<Penalty> = serde_json::from_str(FIXTURE)?;
        Ok(Self::with_records(records))
    }
}

fn build_penalty(id: DbId, input: &CreatePenalty) -> Penalty {
    let today = today();
    let penalty_date = input.penalty_date.unwrap_or(today);
    let days_quantity = input.days_quantity.unwrap_or(0);
    let penalty_type_id = input
        .penalty_type_id
        .unwrap_or(PenaltyType::Suspension.code());

    let identifier = input
        .identifier
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| generate_identifier(today, &mut rand::rng()));

    let until_date = input.until_date.or_else(|| {
        PenaltyType::is_suspension(penalty_type_id)
            .then(|| add_days(penalty_date, days_quantity))
            .flatten()
    });

    Penalty {
        id,
        identifier,
        penalty_date,
        ocurrency_date: input.ocurrency_date.unwrap_or(today),
        days_quantity,
        until_date,
        cause: input.cause.clone().unwrap_or_default(),
        employee_discharge: input.employee_discharge.clone().unwrap_or_default(),
        penalty_type_id,
        penalty_reason_id: input.penalty_reason_id.unwrap_or(1),
        project_id: input.project_id.unwrap_or(1),
        employee_id: input.employee_id.unwrap_or(1),
        responsible_id: input.responsible_id.unwrap_or(1),
        document_attachments: input.document_attachments.clone().unwrap_or_default(),
        triggers_temporary_state: input.triggers_temporary_state.unwrap_or(false),
        temporary_state_id: input.temporary_state_id.unwrap_or(0),
    }
}

#[async_trait]
impl PenaltyStore for InMemoryPenaltyStore {
    async fn list(&self, filter: &FilterSpecification) -> Result<Vec<Penalty>, StoreError> {
        let records = self.records.read().await;
        Ok(query(&records, filter))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Penalty>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: &CreatePenalty) -> Result<Penalty, StoreError> {
        let mut records = self.records.write().await;
        let id = match records.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdExhausted)?,
            None => 1,
        };
        let penalty = build_penalty(id, input);
        records.insert(0, penalty.clone());
        tracing::debug!(penalty_id = id, identifier = %penalty.identifier, "Penalty inserted");
        Ok(penalty)
    }

    async fn update(&self, id: DbId, input: &UpdatePenalty) -> Result<Option<Penalty>, StoreError> {
        let mut records = self.records.write().await;
        let Some(penalty) = records.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        input.apply_to(penalty);
        tracing::debug!(penalty_id = id, "Penalty updated");
        Ok(Some(penalty.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        records.remove(index);
        tracing::debug!(penalty_id = id, "Penalty removed");
        Ok(true)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let _ = self.records.read().await;
        Ok(())
    }
}
