//! Filter specification and the query engine that evaluates it.
//!
//! A [`FilterSpecification`] is a fixed-shape record of optional predicates.
//! `None` always means "no constraint"; an explicitly set code (including `0`)
//! always constrains. Evaluation is conjunctive and preserves record order.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::penalty::Penalty;
use crate::types::{today, Code, Date};

/// Value chosen in a select input.
///
/// Option values are numeric codes; a non-numeric raw value is kept as text
/// and places no constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Code(Code),
    Text(String),
}

impl SelectValue {
    /// Coerce a raw option value: numeric strings become codes.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().parse::<Code>() {
            Ok(code) => SelectValue::Code(code),
            Err(_) => SelectValue::Text(raw.to_string()),
        }
    }

    /// Malformed text matches every code.
    pub fn matches(&self, code: Code) -> bool {
        match self {
            SelectValue::Code(c) => *c == code,
            SelectValue::Text(_) => true,
        }
    }

    pub fn as_code(&self) -> Option<Code> {
        match self {
            SelectValue::Code(c) => Some(*c),
            SelectValue::Text(_) => None,
        }
    }
}

impl From<Code> for SelectValue {
    fn from(code: Code) -> Self {
        SelectValue::Code(code)
    }
}

impl fmt::Display for SelectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectValue::Code(c) => write!(f, "{c}"),
            SelectValue::Text(t) => f.write_str(t),
        }
    }
}

impl Serialize for SelectValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectValue::Code(c) => serializer.serialize_i64(*c),
            SelectValue::Text(t) => serializer.serialize_str(t),
        }
    }
}

// Query strings deliver every value as text, so numbers are recovered here
// rather than through an untagged enum.
impl<'de> Deserialize<'de> for SelectValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectValueVisitor;

        impl<'de> Visitor<'de> for SelectValueVisitor {
            type Value = SelectValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer code or a string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<SelectValue, E> {
                Ok(SelectValue::Code(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<SelectValue, E> {
                Code::try_from(v)
                    .map(SelectValue::Code)
                    .map_err(|_| E::custom("code out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<SelectValue, E> {
                Ok(SelectValue::from_raw(v))
            }
        }

        deserializer.deserialize_any(SelectValueVisitor)
    }
}

/// Keys of a [`FilterSpecification`] that count as filters (pagination excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Search,
    ProjectId,
    PenaltyTypeId,
    PenaltyReasonId,
    PenaltyEmployeeId,
    DateStart,
    DateEnd,
}

impl FilterKey {
    pub const ALL: [FilterKey; 7] = [
        FilterKey::Search,
        FilterKey::ProjectId,
        FilterKey::PenaltyTypeId,
        FilterKey::PenaltyReasonId,
        FilterKey::PenaltyEmployeeId,
        FilterKey::DateStart,
        FilterKey::DateEnd,
    ];

    pub fn is_date(self) -> bool {
        matches!(self, FilterKey::DateStart | FilterKey::DateEnd)
    }
}

/// Partial predicate set over penalty records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpecification {
    /// Case-insensitive substring over identifier and cause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<SelectValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_type_id: Option<SelectValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_reason_id: Option<SelectValue>,
    /// Matched against the record's `employee_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_employee_id: Option<SelectValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<Date>,
    /// Pagination cursor; never counted as a filter and never applied here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl FilterSpecification {
    /// Drop empty search text and non-numeric select values so that only real
    /// constraints remain.
    pub fn normalized(mut self) -> Self {
        if self.search.as_deref() == Some("") {
            self.search = None;
        }
        for slot in [
            &mut self.project_id,
            &mut self.penalty_type_id,
            &mut self.penalty_reason_id,
            &mut self.penalty_employee_id,
        ] {
            if slot.as_ref().is_some_and(|v| v.as_code().is_none()) {
                *slot = None;
            }
        }
        self
    }

    /// The listing view's merge policy: any filter change restarts at page 1.
    pub fn with_first_page(mut self) -> Self {
        self.page = Some(1);
        self
    }

    /// Whether `key` holds a value that constrains the query.
    pub fn is_active(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::Search => self.search.as_deref().is_some_and(|s| !s.is_empty()),
            FilterKey::ProjectId => is_set(&self.project_id),
            FilterKey::PenaltyTypeId => is_set(&self.penalty_type_id),
            FilterKey::PenaltyReasonId => is_set(&self.penalty_reason_id),
            FilterKey::PenaltyEmployeeId => is_set(&self.penalty_employee_id),
            FilterKey::DateStart => self.date_start.is_some(),
            FilterKey::DateEnd => self.date_end.is_some(),
        }
    }

    /// Active filter keys in declaration order.
    pub fn active_keys(&self) -> Vec<FilterKey> {
        FilterKey::ALL
            .into_iter()
            .filter(|k| self.is_active(*k))
            .collect()
    }

    /// Unset one key.
    pub fn unset(&mut self, key: FilterKey) {
        match key {
            FilterKey::Search => self.search = None,
            FilterKey::ProjectId => self.project_id = None,
            FilterKey::PenaltyTypeId => self.penalty_type_id = None,
            FilterKey::PenaltyReasonId => self.penalty_reason_id = None,
            FilterKey::PenaltyEmployeeId => self.penalty_employee_id = None,
            FilterKey::DateStart => self.date_start = None,
            FilterKey::DateEnd => self.date_end = None,
        }
    }

    /// Whether a record satisfies every set predicate, with `today` as the
    /// default upper date bound.
    pub fn matches(&self, record: &Penalty, today: Date) -> bool {
        code_matches(&self.project_id, record.project_id)
            && code_matches(&self.penalty_type_id, record.penalty_type_id)
            && code_matches(&self.penalty_employee_id, record.employee_id)
            && code_matches(&self.penalty_reason_id, record.penalty_reason_id)
            && self.search_matches(record)
            && self.date_matches(record.penalty_date, today)
    }

    fn search_matches(&self, record: &Penalty) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        record.identifier.to_lowercase().contains(&term)
            || record.cause.to_lowercase().contains(&term)
    }

    // The range only applies once a bound is set; the missing bound then
    // defaults to the epoch (lower) or today (upper).
    fn date_matches(&self, penalty_date: Date, today: Date) -> bool {
        if self.date_start.is_none() && self.date_end.is_none() {
            return true;
        }
        let lower = self.date_start.unwrap_or_else(epoch);
        let upper = self.date_end.unwrap_or(today);
        penalty_date >= lower && penalty_date <= upper
    }
}

fn is_set(value: &Option<SelectValue>) -> bool {
    value.as_ref().and_then(SelectValue::as_code).is_some()
}

fn code_matches(filter: &Option<SelectValue>, code: Code) -> bool {
    filter.as_ref().map_or(true, |v| v.matches(code))
}

fn epoch() -> Date {
    Date::from_ymd_opt(1970, 1, 1).unwrap_or(Date::MIN)
}

/// Evaluate `filter` against `records`, using the current date as the default
/// upper bound of the date range.
pub fn query(records: &[Penalty], filter: &FilterSpecification) -> Vec<Penalty> {
    query_at(records, filter, today())
}

/// Evaluate `filter` against `records` with an explicit "today".
///
/// Returns the matching records in their original order. Never fails: an
/// empty result is a valid answer.
pub fn query_at(records: &[Penalty], filter: &FilterSpecification, today: Date) -> Vec<Penalty> {
    records
        .iter()
        .filter(|r| filter.matches(r, today))
        .cloned()
        .collect()
}
