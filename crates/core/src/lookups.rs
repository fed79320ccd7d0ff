//! Static code → label tables for the categorical penalty fields.
//!
//! The record store and the query engine only ever deal in raw codes; labels
//! are resolved here for select options, list rows and filter badges.

use serde::Serialize;

use crate::types::Code;

/// Label returned for codes missing from a table.
pub const UNKNOWN_LABEL: &str = "Desconocido";

/// Kinds of disciplinary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyType {
    Suspension = 1,
    OralObservation = 2,
    WrittenObservation = 3,
    Dismissal = 4,
}

impl PenaltyType {
    pub const ALL: [PenaltyType; 4] = [
        PenaltyType::Suspension,
        PenaltyType::OralObservation,
        PenaltyType::WrittenObservation,
        PenaltyType::Dismissal,
    ];

    pub fn code(self) -> Code {
        self as Code
    }

    pub fn from_code(code: Code) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            PenaltyType::Suspension => "Suspensión",
            PenaltyType::OralObservation => "Observación oral",
            PenaltyType::WrittenObservation => "Observación escrita",
            PenaltyType::Dismissal => "Despido",
        }
    }

    /// Whether `code` denotes a suspension, the only type with a duration.
    pub fn is_suspension(code: Code) -> bool {
        code == PenaltyType::Suspension.code()
    }
}

const PROJECTS: &[(Code, &str)] = &[
    (1, "Proyecto Alpha"),
    (2, "Proyecto Beta"),
    (3, "Proyecto Gamma"),
];

const EMPLOYEES: &[(Code, &str)] = &[
    (101, "Juan Pérez"),
    (118, "María Rodríguez"),
    (143, "Carlos Gómez"),
    (195, "Ana Martínez"),
    (205, "Roberto Sánchez"),
];

const PENALTY_REASONS: &[(Code, &str)] = &[
    (1, "Retraso"),
    (2, "Ausencia injustificada"),
    (3, "Incumplimiento de horario"),
    (4, "Daño a equipamiento"),
    (5, "Incumplimiento normativo"),
    (6, "Conducta inapropiada"),
    (7, "Comportamiento inadecuado"),
    (8, "Uso indebido de recursos"),
];

/// One entry of a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: Code,
    pub label: String,
}

/// The four read-only lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    PenaltyTypes,
    Projects,
    Employees,
    PenaltyReasons,
}

impl LookupTable {
    /// Resolve a code, returning `None` when the table has no such entry.
    pub fn label(self, code: Code) -> Option<&'static str> {
        match self {
            LookupTable::PenaltyTypes => PenaltyType::from_code(code).map(PenaltyType::label),
            other => other
                .static_entries()
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, label)| *label),
        }
    }

    /// Resolve a code for display, falling back to [`UNKNOWN_LABEL`].
    pub fn name(self, code: Code) -> &'static str {
        self.label(code).unwrap_or(UNKNOWN_LABEL)
    }

    /// All entries as select options, in code order.
    pub fn options(self) -> Vec<FilterOption> {
        match self {
            LookupTable::PenaltyTypes => PenaltyType::ALL
                .into_iter()
                .map(|t| FilterOption {
                    value: t.code(),
                    label: t.label().to_string(),
                })
                .collect(),
            other => other
                .static_entries()
                .iter()
                .map(|(value, label)| FilterOption {
                    value: *value,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    fn static_entries(self) -> &'static [(Code, &'static str)] {
        match self {
            LookupTable::PenaltyTypes => &[],
            LookupTable::Projects => PROJECTS,
            LookupTable::Employees => EMPLOYEES,
            LookupTable::PenaltyReasons => PENALTY_REASONS,
        }
    }
}

/// Option lists for every select input, as served to the console.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOptions {
    pub penalty_types: Vec<FilterOption>,
    pub projects: Vec<FilterOption>,
    pub employees: Vec<FilterOption>,
    pub penalty_reasons: Vec<FilterOption>,
}

impl LookupOptions {
    pub fn all() -> Self {
        Self {
            penalty_types: LookupTable::PenaltyTypes.options(),
            projects: LookupTable::Projects.options(),
            employees: LookupTable::Employees.options(),
            penalty_reasons: LookupTable::PenaltyReasons.options(),
        }
    }
}
