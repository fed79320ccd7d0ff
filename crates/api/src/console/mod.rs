//! Page controllers of the console.
//!
//! These own the per-page session state the HTTP handlers do not keep: the
//! listing's filter state and rows, and an edit page's form. They talk to the
//! record store directly and report outcomes as [`Notification`]s.

pub mod edit;
pub mod list;

pub use edit::{EditPage, PenaltyEditor};
pub use list::PenaltyListController;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: String,
}

impl Notification {
    pub fn success(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error",
            message: message.into(),
        }
    }
}
