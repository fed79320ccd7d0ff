//! Handlers for the `/penalties` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use penalty_core::error::CoreError;
use penalty_core::filter::{FilterKey, FilterSpecification};
use penalty_core::filter_bar::{badges_for, FilterBadge};
use penalty_core::lookups::LookupTable;
use penalty_core::penalty_form::{PenaltyForm, PenaltyFormValues};
use penalty_core::types::{Code, Date, DbId};
use penalty_db::models::penalty::{CreatePenalty, Penalty, UpdatePenalty};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, RequireAdmin};
use crate::response::ListResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A record as shown in the listing table, with its codes resolved.
#[derive(Debug, Serialize)]
pub struct PenaltyRow {
    #[serde(flatten)]
    pub penalty: Penalty,
    pub employee_name: &'static str,
    pub project_name: &'static str,
    pub penalty_type_name: &'static str,
    pub penalty_reason_name: &'static str,
    /// Only present for suspensions.
    pub suspension_days: Option<i32>,
}

impl From<Penalty> for PenaltyRow {
    fn from(penalty: Penalty) -> Self {
        Self {
            employee_name: LookupTable::Employees.name(penalty.employee_id),
            project_name: LookupTable::Projects.name(penalty.project_id),
            penalty_type_name: LookupTable::PenaltyTypes.name(penalty.penalty_type_id),
            penalty_reason_name: LookupTable::PenaltyReasons.name(penalty.penalty_reason_id),
            suspension_days: penalty.suspension_days(),
            penalty,
        }
    }
}

/// Active filter summary for the filter bar.
#[derive(Debug, Serialize)]
pub struct ActiveFilters {
    pub count: usize,
    pub keys: Vec<FilterKey>,
    pub badges: Vec<FilterBadge>,
}

/// Request body for `POST /penalties/derive-until`.
#[derive(Debug, Deserialize)]
pub struct DeriveUntilRequest {
    pub penalty_date: Date,
    pub days_quantity: Option<i32>,
    pub penalty_type_id: Option<Code>,
}

/// Duration fields as the form would show them.
#[derive(Debug, Serialize)]
pub struct DerivedDuration {
    pub penalty_date: Date,
    pub days_quantity: Option<i32>,
    pub until_date: Option<Date>,
    pub shows_duration: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Penalty",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/penalties
///
/// Query parameters are the filter specification fields; empty values are
/// ignored.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<FilterSpecification>,
) -> AppResult<Json<ListResponse<PenaltyRow>>> {
    let filter = filter.normalized();
    let penalties = state.store.list(&filter).await?;
    tracing::debug!(count = penalties.len(), "Listed penalties");
    let rows = penalties.into_iter().map(PenaltyRow::from).collect();
    Ok(Json(ListResponse::new(rows, filter)))
}

/// GET /api/v1/penalties/active-filters
pub async fn active_filters(
    _user: AuthUser,
    Query(filter): Query<FilterSpecification>,
) -> Json<ActiveFilters> {
    let filter = filter.normalized();
    let keys = filter.active_keys();
    Json(ActiveFilters {
        count: keys.len(),
        badges: badges_for(&filter),
        keys,
    })
}

/// POST /api/v1/penalties/derive-until
///
/// Preview of the form's derived end date for a start date, duration and type.
pub async fn derive_until(
    _user: AuthUser,
    Json(input): Json<DeriveUntilRequest>,
) -> Json<DerivedDuration> {
    let mut form = PenaltyForm::blank(input.penalty_date);
    form.set_penalty_date(input.penalty_date);
    if let Some(days) = input.days_quantity {
        form.set_days_quantity(days);
    }
    if let Some(code) = input.penalty_type_id {
        form.set_penalty_type(code);
    }

    Json(DerivedDuration {
        penalty_date: form.penalty_date(),
        days_quantity: form.days_quantity(),
        until_date: form.until_date(),
        shows_duration: input.penalty_type_id.is_none() || form.shows_duration(),
    })
}

/// POST /api/v1/penalties
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Json(input): Json<PenaltyFormValues>,
) -> AppResult<(StatusCode, Json<Penalty>)> {
    input.check()?;
    let penalty = state.store.create(&CreatePenalty::from(input)).await?;
    tracing::info!(
        penalty_id = penalty.id,
        identifier = %penalty.identifier,
        user = %user.username,
        "Penalty created",
    );
    Ok((StatusCode::CREATED, Json(penalty)))
}

/// GET /api/v1/penalties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Penalty>> {
    let penalty = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(penalty))
}

/// PUT /api/v1/penalties/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePenalty>,
) -> AppResult<Json<Penalty>> {
    let penalty = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(penalty_id = id, user = %user.username, "Penalty updated");
    Ok(Json(penalty))
}

/// DELETE /api/v1/penalties/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if state.store.delete(id).await? {
        tracing::info!(penalty_id = id, user = %user.username, "Penalty deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
