use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from the request pipeline
/// (routing, validation, missing complaints) or the store.
#[derive(Debug)]
pub enum ServerError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    MethodNotAllowed,
    PayloadTooLarge,
    DuplicateId(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::MethodNotAllowed => 405,
            ServerError::PayloadTooLarge => 413,
            ServerError::DuplicateId(_) | ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound(what) => write!(f, "{what} not found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ServerError::MethodNotAllowed => write!(f, "Method not allowed"),
            ServerError::PayloadTooLarge => write!(f, "Payload too large"),
            ServerError::DuplicateId(id) => write!(f, "Duplicate complaint id: {id}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
