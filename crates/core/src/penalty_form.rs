//! Create/edit form state for a penalty record.
//!
//! `until_date` is derived: it always equals `penalty_date + days_quantity`
//! and has no setter. Switching away from a suspension zeroes the duration
//! and drops the derived date.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::lookups::PenaltyType;
use crate::penalty::{add_days, DocumentAttachment, Penalty};
use crate::types::{Code, Date};

/// Validated form payload, ready to be handed to the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PenaltyFormValues {
    #[validate(length(min = 1, message = "El identificador es obligatorio"))]
    pub identifier: String,
    pub penalty_date: Date,
    pub ocurrency_date: Date,
    #[validate(range(min = 0, message = "Los días deben ser un número positivo"))]
    pub days_quantity: i32,
    pub until_date: Option<Date>,
    #[validate(length(min = 1, message = "La causa es obligatoria"))]
    pub cause: String,
    #[serde(default)]
    pub employee_discharge: String,
    pub penalty_type_id: Code,
    pub penalty_reason_id: Code,
    pub project_id: Code,
    pub employee_id: Code,
    #[serde(default)]
    pub document_attachments: Vec<DocumentAttachment>,
    #[serde(default)]
    pub triggers_temporary_state: bool,
    #[serde(default)]
    pub temporary_state_id: Option<Code>,
}

impl PenaltyFormValues {
    /// Run the field validators, flattening violations into one message.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(describe(&errors)))
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Editable form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyForm {
    pub identifier: String,
    pub ocurrency_date: Date,
    pub cause: String,
    pub employee_discharge: String,
    pub penalty_reason_id: Option<Code>,
    pub project_id: Option<Code>,
    pub employee_id: Option<Code>,
    pub document_attachments: Vec<DocumentAttachment>,
    pub triggers_temporary_state: bool,
    pub temporary_state_id: Option<Code>,
    penalty_date: Date,
    days_quantity: Option<i32>,
    until_date: Option<Date>,
    penalty_type_id: Option<Code>,
}

impl PenaltyForm {
    /// Empty create form dated `today`.
    pub fn blank(today: Date) -> Self {
        Self {
            identifier: String::new(),
            ocurrency_date: today,
            cause: String::new(),
            employee_discharge: String::new(),
            penalty_reason_id: None,
            project_id: None,
            employee_id: None,
            document_attachments: Vec::new(),
            triggers_temporary_state: false,
            temporary_state_id: None,
            penalty_date: today,
            days_quantity: Some(0),
            until_date: None,
            penalty_type_id: None,
        }
    }

    /// Edit form seeded from a stored record.
    pub fn from_penalty(penalty: &Penalty) -> Self {
        Self {
            identifier: penalty.identifier.clone(),
            ocurrency_date: penalty.ocurrency_date,
            cause: penalty.cause.clone(),
            employee_discharge: penalty.employee_discharge.clone(),
            penalty_reason_id: Some(penalty.penalty_reason_id),
            project_id: Some(penalty.project_id),
            employee_id: Some(penalty.employee_id),
            document_attachments: penalty.document_attachments.clone(),
            triggers_temporary_state: penalty.triggers_temporary_state,
            temporary_state_id: Some(penalty.temporary_state_id),
            penalty_date: penalty.penalty_date,
            days_quantity: Some(penalty.days_quantity),
            until_date: penalty.until_date,
            penalty_type_id: Some(penalty.penalty_type_id),
        }
    }

    pub fn penalty_date(&self) -> Date {
        self.penalty_date
    }

    pub fn days_quantity(&self) -> Option<i32> {
        self.days_quantity
    }

    pub fn until_date(&self) -> Option<Date> {
        self.until_date
    }

    pub fn penalty_type_id(&self) -> Option<Code> {
        self.penalty_type_id
    }

    /// Whether the duration fields apply (shown) for the current type.
    pub fn shows_duration(&self) -> bool {
        self.penalty_type_id.is_some_and(PenaltyType::is_suspension)
    }

    pub fn set_penalty_date(&mut self, date: Date) {
        self.penalty_date = date;
        self.until_date = add_days(date, self.days_quantity.unwrap_or(0));
    }

    pub fn set_days_quantity(&mut self, days: i32) {
        self.days_quantity = Some(days);
        self.until_date = add_days(self.penalty_date, days);
    }

    /// Switching to anything but a suspension resets the duration. Switching
    /// back does not restore it.
    pub fn set_penalty_type(&mut self, code: Code) {
        self.penalty_type_id = Some(code);
        if !PenaltyType::is_suspension(code) {
            self.days_quantity = Some(0);
            self.until_date = None;
        }
    }

    /// Check required fields and validators, producing the store payload.
    pub fn submit(&self) -> Result<PenaltyFormValues, CoreError> {
        let mut missing = Vec::new();
        let penalty_type_id = require(self.penalty_type_id, "El tipo de sanción es obligatorio", &mut missing);
        let penalty_reason_id =
            require(self.penalty_reason_id, "El motivo de sanción es obligatorio", &mut missing);
        let project_id = require(self.project_id, "El proyecto es obligatorio", &mut missing);
        let employee_id = require(self.employee_id, "El operario es obligatorio", &mut missing);
        if !missing.is_empty() {
            return Err(CoreError::Validation(missing.join("; ")));
        }

        let values = PenaltyFormValues {
            identifier: self.identifier.trim().to_string(),
            penalty_date: self.penalty_date,
            ocurrency_date: self.ocurrency_date,
            days_quantity: self.days_quantity.unwrap_or(0),
            until_date: self.until_date,
            cause: self.cause.trim().to_string(),
            employee_discharge: self.employee_discharge.clone(),
            penalty_type_id,
            penalty_reason_id,
            project_id,
            employee_id,
            document_attachments: self.document_attachments.clone(),
            triggers_temporary_state: self.triggers_temporary_state,
            temporary_state_id: self.temporary_state_id,
        };
        values.check()?;
        Ok(values)
    }
}

fn require(value: Option<Code>, message: &str, missing: &mut Vec<String>) -> Code {
    value.unwrap_or_else(|| {
        missing.push(message.to_string());
        0
    })
}
