//! Route definitions for the `/penalties` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::penalty;
use crate::state::AppState;

/// Routes mounted at `/penalties`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create (admin)
/// GET    /active-filters    -> active_filters
/// POST   /derive-until      -> derive_until
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update (admin)
/// DELETE /{id}              -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(penalty::list).post(penalty::create))
        .route("/active-filters", get(penalty::active_filters))
        .route("/derive-until", post(penalty::derive_until))
        .route(
            "/{id}",
            get(penalty::get_by_id)
                .put(penalty::update)
                .delete(penalty::delete),
        )
}
