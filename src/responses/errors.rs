use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into a JSON error response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status_code();
    match err {
        // Internal details stay in the log.
        ServerError::DuplicateId(_) | ServerError::InternalError => {
            json_error_response(status, "Server error processing request")
        }
        other => json_error_response(status, &other.to_string()),
    }
}

/// Build a `{"error": "..."}` body
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
