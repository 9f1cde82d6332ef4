use crate::errors::ServerError;
use crate::handlers::{auth, complaints};
use crate::responses::{no_content_response, ResultResp};
use crate::state::AppState;
use astra::Request;

const COMPLAINTS: &str = "/api/complaints";

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().trim_end_matches('/').to_string();

    tracing::info!("{method} {path}");

    if method == "OPTIONS" {
        return no_content_response();
    }

    match (method.as_str(), path.as_str()) {
        ("GET", COMPLAINTS) => complaints::list_complaints(state),
        ("POST", COMPLAINTS) => complaints::submit_complaint(req, state),
        (_, COMPLAINTS) => Err(ServerError::MethodNotAllowed),

        ("GET", "/api/complaints/stats") => complaints::complaint_stats(state),
        (_, "/api/complaints/stats") => Err(ServerError::MethodNotAllowed),

        ("POST", "/api/auth/otp") => auth::request_otp(req, state),
        ("POST", "/api/auth/verify") => auth::verify_otp(req, state),
        (_, "/api/auth/otp" | "/api/auth/verify") => Err(ServerError::MethodNotAllowed),

        (m, p) => match complaint_id(p) {
            Some(id) => match m {
                "GET" => complaints::get_complaint(state, id),
                "PATCH" => complaints::update_status(req, state, id),
                _ => Err(ServerError::MethodNotAllowed),
            },
            None => Err(ServerError::NotFound("Route".into())),
        },
    }
}

/// `/api/complaints/<id>` -> `<id>`; anything deeper is not a complaint route.
fn complaint_id(path: &str) -> Option<&str> {
    path.strip_prefix(COMPLAINTS)?
        .strip_prefix('/')
        .filter(|id| !id.is_empty() && !id.contains('/'))
}
