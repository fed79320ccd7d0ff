//! Create/edit page controller.

use penalty_core::error::CoreError;
use penalty_core::penalty_form::PenaltyForm;
use penalty_core::types::{Date, DbId};
use penalty_db::models::penalty::{CreatePenalty, Penalty, UpdatePenalty};
use penalty_db::StorePool;

use super::Notification;
use crate::error::{AppError, AppResult};

/// Page-level message when the requested record does not exist.
pub const NOT_FOUND_MESSAGE: &str = "No se encontró la sanción solicitada";
/// Page-level message when the record could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Ocurrió un error al cargar la sanción";

const SAVE_ERROR_MESSAGE: &str = "Ocurrió un error al guardar la sanción";

/// Result of opening the edit page for a record.
#[derive(Debug)]
pub enum EditPage {
    Ready(PenaltyEditor),
    /// Shown instead of the form. Not retried.
    Failed { message: &'static str },
}

/// Form state bound to either a new record or an existing one.
#[derive(Debug)]
pub struct PenaltyEditor {
    id: Option<DbId>,
    pub form: PenaltyForm,
    notifications: Vec<Notification>,
}

impl PenaltyEditor {
    /// Editor for a new record, dated `today`.
    pub fn create(today: Date) -> Self {
        Self {
            id: None,
            form: PenaltyForm::blank(today),
            notifications: Vec::new(),
        }
    }

    /// Load record `id` into an edit form.
    pub async fn open(store: &StorePool, id: DbId) -> EditPage {
        match store.find_by_id(id).await {
            Ok(Some(penalty)) => EditPage::Ready(Self {
                id: Some(id),
                form: PenaltyForm::from_penalty(&penalty),
                notifications: Vec::new(),
            }),
            Ok(None) => {
                tracing::debug!(penalty_id = id, "Penalty to edit not found");
                EditPage::Failed {
                    message: NOT_FOUND_MESSAGE,
                }
            }
            Err(e) => {
                tracing::error!(penalty_id = id, error = %e, "Failed to load penalty");
                EditPage::Failed {
                    message: LOAD_ERROR_MESSAGE,
                }
            }
        }
    }

    /// The record being edited; `None` until a new record is first saved.
    pub fn id(&self) -> Option<DbId> {
        self.id
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Drain pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Validate the form and write it to the store.
    ///
    /// Validation failures are returned without a notification; the form shows
    /// them next to the fields. Store failures notify.
    pub async fn save(&mut self, store: &StorePool) -> AppResult<Penalty> {
        let values = self.form.submit()?;

        let result = match self.id {
            Some(id) => store
                .update(id, &UpdatePenalty::from(values))
                .await
                .map_err(AppError::from)
                .and_then(|found| {
                    found.ok_or(AppError::Core(CoreError::NotFound {
                        entity: "Penalty",
                        id,
                    }))
                }),
            None => store
                .create(&CreatePenalty::from(values))
                .await
                .map_err(AppError::from),
        };

        match result {
            Ok(penalty) => {
                let notification = if self.is_edit() {
                    Notification::success(
                        "Sanción actualizada",
                        "La sanción ha sido actualizada correctamente",
                    )
                } else {
                    Notification::success("Sanción creada", "La sanción ha sido creada correctamente")
                };
                tracing::info!(penalty_id = penalty.id, "Penalty saved");
                self.notifications.push(notification);
                self.id = Some(penalty.id);
                Ok(penalty)
            }
            Err(e) => {
                tracing::error!(penalty_id = ?self.id, error = %e, "Failed to save penalty");
                self.notifications.push(Notification::error(SAVE_ERROR_MESSAGE));
                Err(e)
            }
        }
    }
}
