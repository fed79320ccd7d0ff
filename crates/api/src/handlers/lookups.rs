//! Handler for the read-only lookup tables.

use axum::Json;
use penalty_core::lookups::LookupOptions;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// GET /api/v1/lookups
///
/// Option lists for the penalty type, project, employee and reason pickers.
pub async fn list(_user: AuthUser) -> Json<DataResponse<LookupOptions>> {
    Json(DataResponse {
        data: LookupOptions::all(),
    })
}
