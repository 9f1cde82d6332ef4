// src/handlers/body.rs
use crate::errors::ServerError;
use astra::Request;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Read at most `limit` bytes of the request body and decode it as JSON.
pub fn read_json<T: DeserializeOwned>(req: Request, limit: usize) -> Result<T, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();

    body.reader()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::PayloadTooLarge);
    }
    if buf.is_empty() {
        return Err(ServerError::BadRequest("request body is required".into()));
    }

    serde_json::from_slice(&buf)
        .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))
}
