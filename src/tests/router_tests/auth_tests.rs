use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{json_body, offline_state, request};
use http::Method;
use serde_json::json;

#[test]
fn otp_request_then_verify_as_citizen() {
    let state = offline_state();

    let req = request(
        Method::POST,
        "/api/auth/otp",
        Some(json!({ "mobile": "9876543210" })),
    );
    let body = json_body(handle(req, &state).expect("Handler failed"));
    assert_eq!(body["otpLength"], 4);

    let req = request(
        Method::POST,
        "/api/auth/verify",
        Some(json!({ "mobile": "9876543210", "otp": "1234", "role": "citizen" })),
    );
    let user = json_body(handle(req, &state).expect("Handler failed"));
    assert_eq!(user["id"], "u-9876543210");
    assert_eq!(user["role"], "citizen");
}

#[test]
fn verify_as_admin() {
    let state = offline_state();

    let req = request(
        Method::POST,
        "/api/auth/verify",
        Some(json!({ "mobile": "9876543210", "otp": "4321", "role": "admin" })),
    );
    let user = json_body(handle(req, &state).unwrap());
    assert_eq!(user["id"], "admin-1");
    assert_eq!(user["name"], "Municipal Officer");
}

#[test]
fn short_mobile_and_bad_otp_are_rejected() {
    let state = offline_state();

    let req = request(Method::POST, "/api/auth/otp", Some(json!({ "mobile": "12345" })));
    assert!(matches!(handle(req, &state), Err(ServerError::BadRequest(_))));

    let req = request(
        Method::POST,
        "/api/auth/verify",
        Some(json!({ "mobile": "9876543210", "otp": "12" })),
    );
    assert!(matches!(handle(req, &state), Err(ServerError::Unauthorized(_))));
}
