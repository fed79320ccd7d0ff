//! Listing page controller.
//!
//! Holds the filter state fed by the filter bar and the rows currently shown.
//! Rows only change after a query completes; a failed mutation leaves them as
//! they were.

use penalty_core::filter::FilterSpecification;
use penalty_core::types::DbId;
use penalty_db::models::penalty::Penalty;
use penalty_db::StorePool;

use super::Notification;
use crate::error::AppResult;

pub struct PenaltyListController {
    store: StorePool,
    filters: FilterSpecification,
    rows: Vec<Penalty>,
    notifications: Vec<Notification>,
}

impl PenaltyListController {
    pub fn new(store: StorePool) -> Self {
        Self {
            store,
            filters: FilterSpecification::default().with_first_page(),
            rows: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// The filter state passed back to the filter bar as its initial filters.
    pub fn filters(&self) -> &FilterSpecification {
        &self.filters
    }

    pub fn rows(&self) -> &[Penalty] {
        &self.rows
    }

    /// Drain pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Re-run the current filters against the store.
    pub async fn refresh(&mut self) -> AppResult<&[Penalty]> {
        self.reload().await?;
        Ok(&self.rows)
    }

    async fn reload(&mut self) -> AppResult<()> {
        self.rows = self.store.list(&self.filters).await?;
        tracing::debug!(count = self.rows.len(), "Penalty list refreshed");
        Ok(())
    }

    /// Take a filter bar emission. The emitted filters replace the current
    /// ones and pagination restarts at page 1.
    pub async fn on_filters_change(
        &mut self,
        emitted: FilterSpecification,
    ) -> AppResult<&[Penalty]> {
        self.filters = emitted.normalized().with_first_page();
        self.refresh().await
    }

    /// Delete a record, then refresh. Returns whether the record was removed.
    pub async fn delete(&mut self, id: DbId) -> bool {
        let identifier = self
            .rows
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.identifier.clone());

        match self.store.delete(id).await {
            Ok(true) => {
                let label = identifier.unwrap_or_else(|| id.to_string());
                tracing::info!(penalty_id = id, "Penalty deleted");
                self.notifications.push(Notification::success(
                    "¡Sanción eliminada!",
                    format!("La sanción {label} ha sido eliminada correctamente."),
                ));
                if let Err(e) = self.reload().await {
                    tracing::error!(error = %e, "Failed to refresh penalty list");
                    self.notifications
                        .push(Notification::error("Ocurrió un error al cargar las sanciones."));
                }
                true
            }
            Ok(false) => {
                tracing::warn!(penalty_id = id, "Delete found no penalty");
                self.notifications
                    .push(Notification::error("No se pudo eliminar la sanción."));
                false
            }
            Err(e) => {
                tracing::error!(penalty_id = id, error = %e, "Failed to delete penalty");
                self.notifications.push(Notification::error(
                    "Ocurrió un error al eliminar la sanción.",
                ));
                false
            }
        }
    }
}
