use crate::auth::SimulatedOtpAuthenticator;
use crate::classifier::{Classification, Classifier, GeminiClassifier, GeminiConfig};
use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::domain::{AiAnalysis, Priority};
use crate::state::AppState;
use crate::store::{seed::demo_complaints, InMemoryStore};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const NOW_MS: i64 = 1_700_000_000_000;

/// Returns a fixed model answer and counts how often it was asked.
pub struct StubClassifier {
    pub calls: Arc<AtomicUsize>,
}

impl Classifier for StubClassifier {
    fn classify(&self, _description: &str, _image: Option<&str>) -> Classification {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Classification::Model(AiAnalysis {
            category: "Electricity".into(),
            priority: Priority::High,
            summary: "Streetlight failure reported.".into(),
            suggested_action: "Send the electrical crew.".into(),
        })
    }
}

/// Seeded store + the real gateway with no API key configured.
pub fn offline_state() -> AppState {
    let classifier = GeminiClassifier::new(&GeminiConfig::default())
        .unwrap_or_else(|e| panic!("classifier setup failed: {e}"));
    AppState::new(
        InMemoryStore::with_records(demo_complaints(NOW_MS)),
        classifier,
        SimulatedOtpAuthenticator,
        DEFAULT_MAX_BODY_BYTES,
    )
}

/// Empty store + stub classifier; the counter tracks classifier calls.
pub fn stub_state() -> (AppState, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let state = AppState::new(
        InMemoryStore::new(),
        StubClassifier {
            calls: Arc::clone(&calls),
        },
        SimulatedOtpAuthenticator,
        DEFAULT_MAX_BODY_BYTES,
    );
    (state, calls)
}

pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap()
}

pub fn json_body(resp: Response) -> Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("not JSON ({e}): {body}"))
}
