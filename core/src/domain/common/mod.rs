use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod normalize;
pub mod ports;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone, Debug)]
pub struct LeafdocConfig {
    pub llm: LLMConfig,
    pub service: ServiceConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
}

/// Tunables shared by every service operation.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Upper bound for the paired identification + disease calls of a diagnosis.
    pub diagnose_timeout: Duration,
    pub max_suggestions: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            diagnose_timeout: Duration::from_secs(15),
            max_suggestions: 5,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
