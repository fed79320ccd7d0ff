/// Record identifiers are sequential integers (max existing + 1).
pub type DbId = i64;

/// Categorical codes (penalty type, reason, project, employee, ...).
pub type Code = i64;

/// All calendar fields are plain dates without a time component.
pub type Date = chrono::NaiveDate;

/// Today's date in UTC.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
