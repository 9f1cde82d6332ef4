use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{json_body, offline_state, request};
use http::Method;
use serde_json::json;

#[test]
fn patch_seeded_complaint_to_resolved() {
    let state = offline_state();
    let before = state.store.find_by_id("c-101").unwrap().unwrap();

    let req = request(
        Method::PATCH,
        "/api/complaints/c-101",
        Some(json!({ "status": "Resolved" })),
    );
    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = json_body(resp);
    assert_eq!(body["status"], "Resolved");
    assert_eq!(body["createdAt"], before.created_at);

    // Everything except status is untouched.
    let after = state.store.find_by_id("c-101").unwrap().unwrap();
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.user_id, before.user_id);
    assert_eq!(after.location, before.location);
    assert_eq!(after.ai_analysis, before.ai_analysis);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn patch_unknown_id_is_404_and_store_unchanged() {
    let state = offline_state();
    let snapshot = state.store.list().unwrap();

    let req = request(
        Method::PATCH,
        "/api/complaints/does-not-exist",
        Some(json!({ "status": "Resolved" })),
    );

    match handle(req, &state) {
        Err(err @ ServerError::NotFound(_)) => assert_eq!(error_to_response(err).status(), 404),
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
    assert_eq!(state.store.list().unwrap(), snapshot);
}

#[test]
fn patch_accepts_any_transition() {
    let state = offline_state();

    for status in ["Resolved", "Pending", "Rejected", "In Progress"] {
        let req = request(
            Method::PATCH,
            "/api/complaints/c-102",
            Some(json!({ "status": status })),
        );
        let body = json_body(handle(req, &state).unwrap());
        assert_eq!(body["status"], status);
    }
}

#[test]
fn patch_with_unknown_status_is_bad_request() {
    let state = offline_state();

    let req = request(
        Method::PATCH,
        "/api/complaints/c-101",
        Some(json!({ "status": "Closed" })),
    );
    assert!(matches!(handle(req, &state), Err(ServerError::BadRequest(_))));

    let c = state.store.find_by_id("c-101").unwrap().unwrap();
    assert_eq!(c.status.to_string(), "Pending");
}

#[test]
fn patch_unknown_id_with_empty_body_is_still_404() {
    let state = offline_state();

    for body in [Some(json!({})), None] {
        let req = request(Method::PATCH, "/api/complaints/does-not-exist", body);
        match handle(req, &state) {
            Err(ServerError::NotFound(_)) => {}
            other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn patch_known_id_with_empty_body_is_bad_request() {
    let state = offline_state();

    let req = request(Method::PATCH, "/api/complaints/c-101", Some(json!({})));
    assert!(matches!(handle(req, &state), Err(ServerError::BadRequest(_))));
}
