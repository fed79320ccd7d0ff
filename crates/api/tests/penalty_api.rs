//! HTTP-level tests for the penalty and lookup endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, login, post_json_auth, put_json_auth};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ids of the rows returned by `GET /api/v1/penalties{query}`.
async fn listed_ids(app: axum::Router, token: &str, query: &str) -> Vec<i64> {
    let response = get_auth(app, &format!("/api/v1/penalties{query}"), token).await;
    assert_eq!(response.status(), StatusCode::OK, "query {query}");
    let json = body_json(response).await;
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}

fn valid_form() -> Value {
    json!({
        "identifier": "SAN-2025-042",
        "penalty_date": "2025-05-02",
        "ocurrency_date": "2025-05-01",
        "days_quantity": 2,
        "until_date": "2025-05-04",
        "cause": "Llegada tarde reiterada",
        "employee_discharge": "",
        "penalty_type_id": 1,
        "penalty_reason_id": 1,
        "project_id": 3,
        "employee_id": 118
    })
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookups_return_all_option_lists() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = get_auth(app, "/api/v1/lookups", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["penalty_types"].as_array().unwrap().len(), 4);
    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"]["penalty_types"][0]["label"], "Suspensión");
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_rows_carry_resolved_labels() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = get_auth(app, "/api/v1/penalties", &token).await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 5);

    assert_eq!(rows[0]["identifier"], "SAN-2025-001");
    assert_eq!(rows[0]["employee_name"], "Juan Pérez");
    assert_eq!(rows[0]["project_name"], "Proyecto Beta");
    assert_eq!(rows[0]["penalty_type_name"], "Suspensión");
    assert_eq!(rows[0]["suspension_days"], 3);

    // Non-suspensions keep their stored duration but do not display it.
    assert_eq!(rows[1]["days_quantity"], 1);
    assert!(rows[1]["suspension_days"].is_null());
}

#[tokio::test]
async fn list_filters_by_codes() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    assert_eq!(listed_ids(app.clone(), &token, "?project_id=2").await, vec![1, 4]);
    assert_eq!(listed_ids(app.clone(), &token, "?penalty_type_id=1").await, vec![1, 3]);
    assert_eq!(listed_ids(app.clone(), &token, "?penalty_reason_id=2").await, vec![3]);
    assert_eq!(
        listed_ids(app.clone(), &token, "?penalty_employee_id=195").await,
        vec![5]
    );
    assert_eq!(
        listed_ids(app, &token, "?project_id=1&penalty_type_id=2").await,
        vec![2, 5]
    );
}

#[tokio::test]
async fn list_search_is_case_insensitive_over_identifier_and_cause() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    assert_eq!(listed_ids(app.clone(), &token, "?search=san-2025-003").await, vec![3]);
    assert_eq!(listed_ids(app, &token, "?search=HORARIO").await, vec![1]);
}

#[tokio::test]
async fn list_filters_by_date_range() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    assert_eq!(
        listed_ids(app.clone(), &token, "?date_start=2025-04-05&date_end=2025-04-10").await,
        vec![1, 2]
    );
    // Open end runs up to today.
    assert_eq!(
        listed_ids(app, &token, "?date_start=2025-04-11").await,
        vec![3, 5]
    );
}

#[tokio::test]
async fn empty_query_values_do_not_filter() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    assert_eq!(
        listed_ids(app.clone(), &token, "?search=&project_id=&page=3").await,
        vec![1, 2, 3, 4, 5]
    );

    // The applied filters come back normalized.
    let response = get_auth(app, "/api/v1/penalties?search=&project_id=2&page=3", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["filters"], json!({ "project_id": 2, "page": 3 }));
}

#[tokio::test]
async fn non_numeric_codes_place_no_constraint() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    assert_eq!(
        listed_ids(app.clone(), &token, "?project_id=abc").await,
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(
        listed_ids(app.clone(), &token, "?project_id=abc&penalty_type_id=1").await,
        vec![1, 3]
    );

    let response = get_auth(app, "/api/v1/penalties?penalty_reason_id=x", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["filters"], json!({}));
}

#[tokio::test]
async fn explicit_zero_code_still_filters() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    assert!(listed_ids(app, &token, "?project_id=0").await.is_empty());
}

#[tokio::test]
async fn active_filters_ignore_empty_values_and_page() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = get_auth(
        app.clone(),
        "/api/v1/penalties/active-filters?search=&page=1",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["badges"], json!([]));

    let response = get_auth(
        app,
        "/api/v1/penalties/active-filters?project_id=2&date_start=2025-04-01&page=2",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["keys"], json!(["project_id", "date_start"]));
    assert_eq!(json["badges"][0]["label"], "Proyecto");
    assert_eq!(json["badges"][0]["value"], "Proyecto Beta");
    assert_eq!(json["badges"][1]["label"], "Desde");
    assert_eq!(json["badges"][1]["value"], "01/04/2025");
}

// ---------------------------------------------------------------------------
// Derived end date
// ---------------------------------------------------------------------------

#[tokio::test]
async fn derive_until_adds_days_for_suspensions() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let body = json!({ "penalty_date": "2025-04-10", "days_quantity": 3, "penalty_type_id": 1 });
    let response = post_json_auth(app, "/api/v1/penalties/derive-until", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["until_date"], "2025-04-13");
    assert_eq!(json["days_quantity"], 3);
    assert_eq!(json["shows_duration"], true);
}

#[tokio::test]
async fn derive_until_clears_duration_for_other_types() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let body = json!({ "penalty_date": "2025-04-10", "days_quantity": 3, "penalty_type_id": 2 });
    let response = post_json_auth(app, "/api/v1/penalties/derive-until", body, &token).await;
    let json = body_json(response).await;
    assert!(json["until_date"].is_null());
    assert_eq!(json["days_quantity"], 0);
    assert_eq!(json["shows_duration"], false);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_inserts_record_first_with_next_id() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = post_json_auth(app.clone(), "/api/v1/penalties", valid_form(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 6);
    assert_eq!(json["identifier"], "SAN-2025-042");
    assert_eq!(json["until_date"], "2025-05-04");

    assert_eq!(listed_ids(app, &token, "").await, vec![6, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn create_rejects_invalid_form() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let mut form = valid_form();
    form["cause"] = json!("");
    form["days_quantity"] = json!(-1);
    let response = post_json_auth(app.clone(), "/api/v1/penalties", form, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("La causa es obligatoria"));
    assert!(message.contains("Los días deben ser un número positivo"));

    assert_eq!(listed_ids(app, &token, "").await.len(), 5);
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/penalties/4", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["identifier"], "SAN-2025-004");

    let response = get_auth(app, "/api/v1/penalties/404", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Penalty with id 404 not found");
}

#[tokio::test]
async fn update_merges_partial_payload() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let body = json!({ "cause": "Causa revisada", "project_id": 1 });
    let response = put_json_auth(app.clone(), "/api/v1/penalties/3", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 3);
    assert_eq!(json["cause"], "Causa revisada");
    assert_eq!(json["project_id"], 1);
    assert_eq!(json["identifier"], "SAN-2025-003");

    assert_eq!(listed_ids(app, &token, "?project_id=1").await, vec![2, 3, 5]);
}

#[tokio::test]
async fn update_missing_record_returns_404() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = put_json_auth(app, "/api/v1/penalties/77", json!({ "cause": "x" }), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = delete_auth(app.clone(), "/api/v1/penalties/3", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(listed_ids(app.clone(), &token, "").await, vec![1, 2, 4, 5]);

    let response = get_auth(app.clone(), "/api/v1/penalties/3", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, "/api/v1/penalties/3", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
