use crate::auth::SimulatedOtpAuthenticator;
use crate::classifier::GeminiClassifier;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use crate::store::{seed::demo_complaints, InMemoryStore};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod auth;
mod classifier;
mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod state;
mod store;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Classification gateway
    let classifier = match GeminiClassifier::new(&config.gemini) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("❌ Classifier setup failed: {e}");
            std::process::exit(1);
        }
    };
    if classifier.is_live() {
        tracing::info!("Live classification via {}", classifier.endpoint());
    } else {
        tracing::warn!("API key is missing. AI features will use fallback responses.");
    }

    // 3️⃣ In-memory store, optionally with the demo records
    let store = if config.seed_demo_data {
        InMemoryStore::with_records(demo_complaints(chrono::Utc::now().timestamp_millis()))
    } else {
        InMemoryStore::new()
    };

    let state = Arc::new(AppState::new(
        store,
        classifier,
        SimulatedOtpAuthenticator,
        config.max_body_bytes,
    ));

    // 4️⃣ Start the server
    let addr = config.bind_addr;
    tracing::info!("Backend server running on http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status_code() >= 500 {
                tracing::error!("Server error: {err}");
            } else {
                tracing::debug!("request rejected: {err}");
            }
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
