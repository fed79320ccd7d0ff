//! Filter bar state machine.
//!
//! Translates raw widget events into a normalized [`FilterSpecification`] and
//! reports which filters are active. Every transition returns the emission
//! destined for the listing view; the only silent transition is the first
//! render ([`FilterBar::mount`]), so a parent that feeds the emitted value
//! back as initial filters does not loop.

use serde::Serialize;

use crate::filter::{FilterKey, FilterSpecification, SelectValue};
use crate::lookups::LookupTable;
use crate::types::Date;

/// Sentinel option value meaning "no constraint" in select inputs.
pub const ALL_OPTION: &str = "all";

/// Display format for dates in badges.
const BADGE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Initialization phase of a [`FilterBar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not yet rendered; the first render emits nothing.
    Uninitialized,
    /// Rendered; every state transition emits.
    Ready,
}

/// Select inputs offered by the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectField {
    Project,
    PenaltyType,
    PenaltyReason,
    Employee,
}

impl SelectField {
    pub fn key(self) -> FilterKey {
        match self {
            SelectField::Project => FilterKey::ProjectId,
            SelectField::PenaltyType => FilterKey::PenaltyTypeId,
            SelectField::PenaltyReason => FilterKey::PenaltyReasonId,
            SelectField::Employee => FilterKey::PenaltyEmployeeId,
        }
    }
}

/// A date range picked in the calendar; the end may still be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Date,
    pub to: Option<Date>,
}

/// Human-readable chip for one active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBadge {
    pub key: FilterKey,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct FilterBar {
    filters: FilterSpecification,
    phase: Phase,
}

impl FilterBar {
    /// Seed the bar from caller-supplied filters, stripping empty values.
    pub fn new(initial: FilterSpecification) -> Self {
        Self {
            filters: initial.normalized(),
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn filters(&self) -> &FilterSpecification {
        &self.filters
    }

    /// First render. Moves to [`Phase::Ready`] without emitting.
    pub fn mount(&mut self) -> Option<FilterSpecification> {
        self.phase = Phase::Ready;
        None
    }

    /// Text search edit. An empty string unsets the search.
    pub fn set_search(&mut self, text: &str) -> Option<FilterSpecification> {
        self.filters.search = (!text.is_empty()).then(|| text.to_string());
        self.emit()
    }

    /// Select edit. Numeric values become codes; [`ALL_OPTION`], blank and any
    /// other non-numeric value unset the field.
    pub fn select(&mut self, field: SelectField, raw: &str) -> Option<FilterSpecification> {
        let value = match SelectValue::from_raw(raw) {
            code @ SelectValue::Code(_) => Some(code),
            SelectValue::Text(_) => None,
        };
        let slot = match field {
            SelectField::Project => &mut self.filters.project_id,
            SelectField::PenaltyType => &mut self.filters.penalty_type_id,
            SelectField::PenaltyReason => &mut self.filters.penalty_reason_id,
            SelectField::Employee => &mut self.filters.penalty_employee_id,
        };
        *slot = value;
        self.emit()
    }

    /// Date-range edit. Both bounds are written together; `None` clears both.
    pub fn set_date_range(&mut self, range: Option<DateRange>) -> Option<FilterSpecification> {
        match range {
            Some(range) => {
                self.filters.date_start = Some(range.from);
                self.filters.date_end = range.to;
            }
            None => {
                self.filters.date_start = None;
                self.filters.date_end = None;
            }
        }
        self.emit()
    }

    /// Clear one badge. The date range clears as a unit.
    pub fn clear(&mut self, key: FilterKey) -> Option<FilterSpecification> {
        if key.is_date() {
            self.filters.unset(FilterKey::DateStart);
            self.filters.unset(FilterKey::DateEnd);
        } else {
            self.filters.unset(key);
        }
        self.emit()
    }

    /// Clear every filter, keeping the current page if one was set.
    pub fn clear_all(&mut self) -> Option<FilterSpecification> {
        self.filters = FilterSpecification {
            page: self.filters.page,
            ..Default::default()
        };
        self.emit()
    }

    /// The parent pushed new initial filters.
    ///
    /// Emits only when the normalized value differs from the current state,
    /// which is what stops an emit → reload → emit cycle.
    pub fn load_initial(&mut self, initial: FilterSpecification) -> Option<FilterSpecification> {
        let initial = initial.normalized();
        if initial == self.filters {
            return None;
        }
        self.filters = initial;
        match self.phase {
            Phase::Uninitialized => None,
            Phase::Ready => Some(self.filters.clone()),
        }
    }

    /// Keys holding a non-empty value, pagination excluded.
    pub fn active_filters(&self) -> Vec<FilterKey> {
        self.filters.active_keys()
    }

    pub fn active_filter_count(&self) -> usize {
        self.active_filters().len()
    }

    /// Badges for the active filters. A code without a known label gets no badge.
    pub fn badges(&self) -> Vec<FilterBadge> {
        badges_for(&self.filters)
    }

    // A user can only interact with a rendered bar, so an edit arriving
    // before `mount` completes the first render implicitly.
    fn emit(&mut self) -> Option<FilterSpecification> {
        self.phase = Phase::Ready;
        Some(self.filters.clone())
    }
}

/// Badges for any filter specification, in declaration order.
pub fn badges_for(filters: &FilterSpecification) -> Vec<FilterBadge> {
    filters
        .active_keys()
        .into_iter()
        .filter_map(|key| {
            let (label, value) = match key {
                FilterKey::Search => ("Búsqueda", filters.search.clone()),
                FilterKey::ProjectId => (
                    "Proyecto",
                    code_label(&filters.project_id, LookupTable::Projects),
                ),
                FilterKey::PenaltyTypeId => (
                    "Tipo",
                    code_label(&filters.penalty_type_id, LookupTable::PenaltyTypes),
                ),
                FilterKey::PenaltyReasonId => (
                    "Motivo",
                    code_label(&filters.penalty_reason_id, LookupTable::PenaltyReasons),
                ),
                FilterKey::PenaltyEmployeeId => (
                    "Operario",
                    code_label(&filters.penalty_employee_id, LookupTable::Employees),
                ),
                FilterKey::DateStart => ("Desde", filters.date_start.map(format_date)),
                FilterKey::DateEnd => ("Hasta", filters.date_end.map(format_date)),
            };
            let value = value.filter(|v| !v.is_empty())?;
            Some(FilterBadge { key, label, value })
        })
        .collect()
}

fn code_label(value: &Option<SelectValue>, table: LookupTable) -> Option<String> {
    let code = value.as_ref()?.as_code()?;
    table.label(code).map(str::to_string)
}

fn format_date(date: Date) -> String {
    date.format(BADGE_DATE_FORMAT).to_string()
}
