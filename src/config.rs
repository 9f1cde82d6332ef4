// src/config.rs
use crate::classifier::GeminiConfig;
use crate::classifier::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
pub const DEFAULT_MAX_WORKERS: usize = 8;
/// Photos travel inline as base64, so bodies get large.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub max_body_bytes: usize,
    pub seed_demo_data: bool,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, String> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(format!("failed to read .env: {e}"));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = non_empty("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| format!("BIND_ADDR: {e}"))?;

        let max_workers = match non_empty("MAX_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("MAX_WORKERS must be a positive integer, got '{v}'"))?,
            None => DEFAULT_MAX_WORKERS,
        };

        let max_body_bytes = match non_empty("MAX_BODY_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("MAX_BODY_BYTES must be a positive integer, got '{v}'"))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let seed_demo_data = match non_empty("SEED_DEMO_DATA").map(|v| v.to_lowercase()) {
            None => true,
            Some(v) => match v.as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(format!("SEED_DEMO_DATA must be a boolean, got '{v}'")),
            },
        };

        let gemini = GeminiConfig {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        Ok(Self {
            bind_addr,
            max_workers,
            max_body_bytes,
            seed_demo_data,
            gemini,
        })
    }
}
