//! Penalty entity model and DTOs.

use penalty_core::penalty_form::PenaltyFormValues;
use penalty_core::types::{Code, Date};
use serde::Deserialize;

pub use penalty_core::penalty::{DocumentAttachment, Penalty};

/// DTO for creating a new penalty. Every field is optional; the store fills
/// in defaults for whatever is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePenalty {
    /// Generated as `SAN-<year>-<3 digits>` if omitted or blank.
    pub identifier: Option<String>,
    /// Defaults to today.
    pub penalty_date: Option<Date>,
    /// Defaults to today.
    pub ocurrency_date: Option<Date>,
    pub days_quantity: Option<i32>,
    /// Derived from `penalty_date + days_quantity` for suspensions if omitted.
    pub until_date: Option<Date>,
    pub cause: Option<String>,
    pub employee_discharge: Option<String>,
    /// Defaults to 1 (Suspension).
    pub penalty_type_id: Option<Code>,
    pub penalty_reason_id: Option<Code>,
    pub project_id: Option<Code>,
    pub employee_id: Option<Code>,
    pub responsible_id: Option<Code>,
    pub document_attachments: Option<Vec<DocumentAttachment>>,
    pub triggers_temporary_state: Option<bool>,
    pub temporary_state_id: Option<Code>,
}

/// DTO for updating an existing penalty. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePenalty {
    pub identifier: Option<String>,
    pub penalty_date: Option<Date>,
    pub ocurrency_date: Option<Date>,
    pub days_quantity: Option<i32>,
    pub until_date: Option<Date>,
    pub cause: Option<String>,
    pub employee_discharge: Option<String>,
    pub penalty_type_id: Option<Code>,
    pub penalty_reason_id: Option<Code>,
    pub project_id: Option<Code>,
    pub employee_id: Option<Code>,
    pub responsible_id: Option<Code>,
    pub document_attachments: Option<Vec<DocumentAttachment>>,
    pub triggers_temporary_state: Option<bool>,
    pub temporary_state_id: Option<Code>,
    /// Write `until_date` even when it is `None`. Set by full-form submits,
    /// where a cleared end date must reach the store.
    #[serde(skip)]
    pub replace_until_date: bool,
}

impl UpdatePenalty {
    /// Merge the set fields into `penalty`. `id` is never touched.
    pub fn apply_to(&self, penalty: &mut Penalty) {
        fn merge<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        merge(&mut penalty.identifier, &self.identifier);
        merge(&mut penalty.penalty_date, &self.penalty_date);
        merge(&mut penalty.ocurrency_date, &self.ocurrency_date);
        merge(&mut penalty.days_quantity, &self.days_quantity);
        if self.replace_until_date || self.until_date.is_some() {
            penalty.until_date = self.until_date;
        }
        merge(&mut penalty.cause, &self.cause);
        merge(&mut penalty.employee_discharge, &self.employee_discharge);
        merge(&mut penalty.penalty_type_id, &self.penalty_type_id);
        merge(&mut penalty.penalty_reason_id, &self.penalty_reason_id);
        merge(&mut penalty.project_id, &self.project_id);
        merge(&mut penalty.employee_id, &self.employee_id);
        merge(&mut penalty.responsible_id, &self.responsible_id);
        merge(&mut penalty.document_attachments, &self.document_attachments);
        merge(
            &mut penalty.triggers_temporary_state,
            &self.triggers_temporary_state,
        );
        merge(&mut penalty.temporary_state_id, &self.temporary_state_id);
    }
}

impl From<PenaltyFormValues> for CreatePenalty {
    fn from(v: PenaltyFormValues) -> Self {
        Self {
            identifier: Some(v.identifier),
            penalty_date: Some(v.penalty_date),
            ocurrency_date: Some(v.ocurrency_date),
            days_quantity: Some(v.days_quantity),
            until_date: v.until_date,
            cause: Some(v.cause),
            employee_discharge: Some(v.employee_discharge),
            penalty_type_id: Some(v.penalty_type_id),
            penalty_reason_id: Some(v.penalty_reason_id),
            project_id: Some(v.project_id),
            employee_id: Some(v.employee_id),
            responsible_id: None,
            document_attachments: Some(v.document_attachments),
            triggers_temporary_state: Some(v.triggers_temporary_state),
            temporary_state_id: v.temporary_state_id,
        }
    }
}

impl From<PenaltyFormValues> for UpdatePenalty {
    fn from(v: PenaltyFormValues) -> Self {
        Self {
            identifier: Some(v.identifier),
            penalty_date: Some(v.penalty_date),
            ocurrency_date: Some(v.ocurrency_date),
            days_quantity: Some(v.days_quantity),
            until_date: v.until_date,
            cause: Some(v.cause),
            employee_discharge: Some(v.employee_discharge),
            penalty_type_id: Some(v.penalty_type_id),
            penalty_reason_id: Some(v.penalty_reason_id),
            project_id: Some(v.project_id),
            employee_id: Some(v.employee_id),
            responsible_id: None,
            document_attachments: Some(v.document_attachments),
            triggers_temporary_state: Some(v.triggers_temporary_state),
            temporary_state_id: v.temporary_state_id,
            replace_until_date: true,
        }
    }
}
