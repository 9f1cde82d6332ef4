// src/handlers/auth.rs
use crate::auth::Role;
use crate::handlers::body::read_json;
use crate::responses::{json_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use serde::Deserialize;

#[derive(Deserialize)]
struct OtpRequest {
    mobile: String,
}

#[derive(Deserialize)]
struct VerifyRequest {
    mobile: String,
    otp: String,
    #[serde(default = "default_role")]
    role: Role,
}

fn default_role() -> Role {
    Role::Citizen
}

pub fn request_otp(req: Request, state: &AppState) -> ResultResp {
    let body: OtpRequest = read_json(req, state.max_body_bytes)?;
    let challenge = state.authenticator.request_otp(&body.mobile)?;
    json_response(200, &challenge)
}

pub fn verify_otp(req: Request, state: &AppState) -> ResultResp {
    let body: VerifyRequest = read_json(req, state.max_body_bytes)?;
    let user = state
        .authenticator
        .verify_otp(&body.mobile, &body.otp, body.role)?;
    tracing::info!("signed in {} as {:?}", user.id, user.role);
    json_response(200, &user)
}
