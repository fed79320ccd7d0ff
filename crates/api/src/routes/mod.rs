pub mod auth;
pub mod health;
pub mod lookups;
pub mod penalty;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         current user
///
/// /lookups                                         option lists
///
/// /penalties                                       list, create
/// /penalties/active-filters                        active filter count + badges
/// /penalties/derive-until                          derived end date preview
/// /penalties/{id}                                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/lookups", lookups::router())
        .nest("/penalties", penalty::router())
}
