// src/handlers/complaints.rs
use crate::domain::ids::generate_complaint_id_default;
use crate::domain::{Complaint, ComplaintStats, NewComplaint, StatusUpdate};
use crate::errors::ServerError;
use crate::handlers::body::read_json;
use crate::responses::{json_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use chrono::Utc;

/// Validate, classify, stamp and store a new complaint.
///
/// Validation runs before the classifier so a rejected submission costs no
/// remote call. The classifier runs outside the store lock; the record only
/// becomes visible once it is complete.
pub fn submit(state: &AppState, submission: NewComplaint) -> Result<Complaint, ServerError> {
    let submission = submission.normalize()?;

    tracing::info!("Processing complaint from user {}", submission.user_id);

    let classification = state
        .classifier
        .classify(&submission.description, submission.image_base64.as_deref());
    if classification.is_fallback() {
        tracing::warn!("using fallback classification for user {}", submission.user_id);
    }

    let now_ms = Utc::now().timestamp_millis();
    let complaint = Complaint::from_submission(
        generate_complaint_id_default(now_ms),
        submission,
        classification.into_analysis(),
        now_ms,
    );

    let stored = state.store.insert(complaint)?;
    tracing::info!(
        "stored complaint {} ({}, {:?})",
        stored.id,
        stored.ai_analysis.category,
        stored.ai_analysis.priority
    );
    Ok(stored)
}

pub fn submit_complaint(req: Request, state: &AppState) -> ResultResp {
    let submission: NewComplaint = read_json(req, state.max_body_bytes)?;
    let complaint = submit(state, submission)?;
    json_response(201, &complaint)
}

pub fn list_complaints(state: &AppState) -> ResultResp {
    let complaints = state.store.list()?;
    json_response(200, &complaints)
}

pub fn get_complaint(state: &AppState, id: &str) -> ResultResp {
    let complaint = state
        .store
        .find_by_id(id)?
        .ok_or_else(|| ServerError::NotFound("Complaint".into()))?;
    json_response(200, &complaint)
}

pub fn update_status(req: Request, state: &AppState, id: &str) -> ResultResp {
    // Unknown ids are 404 whatever the body says.
    if state.store.find_by_id(id)?.is_none() {
        return Err(ServerError::NotFound("Complaint".into()));
    }

    let update: StatusUpdate = read_json(req, state.max_body_bytes)?;
    let complaint = state.store.update_status(id, update.status)?;
    tracing::info!("complaint {} moved to {}", complaint.id, complaint.status);
    json_response(200, &complaint)
}

pub fn complaint_stats(state: &AppState) -> ResultResp {
    let complaints = state.store.list()?;
    json_response(200, &ComplaintStats::from_complaints(&complaints))
}
