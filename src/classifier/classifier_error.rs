use std::error::Error;
use std::fmt;

/// Why a live classification could not be produced.
/// Never leaves the gateway; it only decides what gets logged.
#[derive(Debug)]
pub enum ClassifierError {
    MissingCredential,
    InvalidImage(String),
    Network(String),
    Api { status: u16, body: String },
    EmptyResponse,
    JsonParse(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::MissingCredential => write!(f, "No API key configured"),
            ClassifierError::InvalidImage(msg) => write!(f, "Invalid image payload: {msg}"),
            ClassifierError::Network(msg) => write!(f, "Network error: {msg}"),
            ClassifierError::Api { status, body } => write!(f, "API error: {status} - {body}"),
            ClassifierError::EmptyResponse => write!(f, "Empty response from model"),
            ClassifierError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for ClassifierError {}
