//! The penalty record and its identifier scheme.

use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lookups::PenaltyType;
use crate::types::{Code, Date, DbId};

/// Prefix of every human-readable penalty identifier.
pub const IDENTIFIER_PREFIX: &str = "SAN";

/// A document attached to a penalty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAttachment {
    pub id: DbId,
    pub file_url: String,
    pub name: String,
}

/// One disciplinary action against an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    pub id: DbId,
    pub identifier: String,
    pub penalty_date: Date,
    /// Date the sanctioned conduct happened.
    pub ocurrency_date: Date,
    /// Suspension length; only meaningful for [`PenaltyType::Suspension`].
    pub days_quantity: i32,
    /// `penalty_date + days_quantity`, absent for non-suspensions.
    pub until_date: Option<Date>,
    pub cause: String,
    /// The employee's response to the charge.
    pub employee_discharge: String,
    pub penalty_type_id: Code,
    pub penalty_reason_id: Code,
    pub project_id: Code,
    pub employee_id: Code,
    pub responsible_id: Code,
    #[serde(default)]
    pub document_attachments: Vec<DocumentAttachment>,
    pub triggers_temporary_state: bool,
    /// Only meaningful when `triggers_temporary_state` is set.
    pub temporary_state_id: Code,
}

impl Penalty {
    pub fn is_suspension(&self) -> bool {
        PenaltyType::is_suspension(self.penalty_type_id)
    }

    /// Suspension days for display; `None` for every other penalty type.
    pub fn suspension_days(&self) -> Option<i32> {
        self.is_suspension().then_some(self.days_quantity)
    }
}

/// Add calendar days to a date.
///
/// Negative durations count as zero. Returns `None` only when the result
/// falls outside the representable date range.
pub fn add_days(date: Date, days: i32) -> Option<Date> {
    let days = u64::try_from(days.max(0)).unwrap_or(0);
    date.checked_add_days(chrono::Days::new(days))
}

/// Generate an identifier of the form `SAN-<year>-<3 digits>`.
///
/// The numeric suffix is drawn uniformly from `100..=999`.
pub fn generate_identifier<R: Rng + ?Sized>(today: Date, rng: &mut R) -> String {
    let suffix: u16 = rng.random_range(100..=999);
    format!("{IDENTIFIER_PREFIX}-{}-{suffix}", today.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_days_rolls_over_month_and_year() {
        assert_eq!(add_days(date(2025, 4, 10), 3), Some(date(2025, 4, 13)));
        assert_eq!(add_days(date(2025, 4, 29), 3), Some(date(2025, 5, 2)));
        assert_eq!(add_days(date(2024, 12, 30), 5), Some(date(2025, 1, 4)));
        assert_eq!(add_days(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
    }

    #[test]
    fn add_days_treats_negative_as_zero() {
        assert_eq!(add_days(date(2025, 4, 10), -4), Some(date(2025, 4, 10)));
    }

    #[test]
    fn generated_identifier_matches_pattern() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let id = generate_identifier(date(2026, 10, 19), &mut rng);
            let parts: Vec<&str> = id.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "SAN");
            assert_eq!(parts[1], "2026");
            assert_eq!(parts[2].len(), 3);
            let n: u16 = parts[2].parse().unwrap();
            assert!((100..=999).contains(&n));
        }
    }

    #[test]
    fn suspension_days_hidden_for_other_types() {
        let mut penalty = Penalty {
            id: 1,
            identifier: "SAN-2025-001".into(),
            penalty_date: date(2025, 4, 10),
            ocurrency_date: date(2025, 4, 8),
            days_quantity: 3,
            until_date: Some(date(2025, 4, 13)),
            cause: String::new(),
            employee_discharge: String::new(),
            penalty_type_id: PenaltyType::Suspension.code(),
            penalty_reason_id: 3,
            project_id: 2,
            employee_id: 101,
            responsible_id: 45,
            document_attachments: vec![],
            triggers_temporary_state: false,
            temporary_state_id: 0,
        };
        assert_eq!(penalty.suspension_days(), Some(3));

        penalty.penalty_type_id = PenaltyType::Dismissal.code();
        assert_eq!(penalty.suspension_days(), None);
    }
}
