// src/state.rs
use crate::auth::Authenticator;
use crate::classifier::Classifier;
use crate::store::ComplaintStore;

/// Everything a request handler may touch. Built once in `main`.
pub struct AppState {
    pub store: Box<dyn ComplaintStore>,
    pub classifier: Box<dyn Classifier>,
    pub authenticator: Box<dyn Authenticator>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(
        store: impl ComplaintStore + 'static,
        classifier: impl Classifier + 'static,
        authenticator: impl Authenticator + 'static,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            store: Box::new(store),
            classifier: Box::new(classifier),
            authenticator: Box::new(authenticator),
            max_body_bytes,
        }
    }
}
