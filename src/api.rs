//! Backend wire contract and HTTP transport.
//!
//! `TriageBackend` is the seam the session core is tested through; the
//! production implementation is a thin blocking HTTP client. The backend
//! owns ranking — responses are rendered in the order supplied, never
//! re-sorted here.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::recovery::RecoveryTable;

// ═══════════════════════════════════════════════════════════
// Wire types
// ═══════════════════════════════════════════════════════════

/// One ranked disease candidate as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    /// Percentage in [0, 100] as supplied; not validated client-side.
    pub probability: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Severity label, case-insensitive. Absent means mild.
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub remedies: Vec<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
    /// Backend-attached annotation; carried through, unused by the core.
    #[serde(default)]
    pub age_group: Option<String>,
}

impl Prediction {
    /// Lowercased severity key with the documented default. Used for care
    /// guidance gating and recovery lookups — unknown labels pass through
    /// as-is (an unknown key simply never matches a lookup).
    pub fn severity_key(&self) -> String {
        self.severity
            .as_deref()
            .unwrap_or("mild")
            .to_lowercase()
    }
}

/// Response of `GET /get_symptoms?age=<int>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymptomsResponse {
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Application-level error; the backend replies 200 with this set.
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub age: u8,
    pub symptoms: &'a [String],
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub top_prediction: Option<Prediction>,
    #[serde(default)]
    pub other_predictions: Vec<Prediction>,
    /// Application-level error; when set, nothing else is rendered.
    #[serde(default)]
    pub error: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

/// Transport and decode failures. Application-level errors travel inside
/// the response types instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach triage backend at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed backend response: {0}")]
    Decode(String),
    #[error("HTTP client error: {0}")]
    Transport(String),
}

// ═══════════════════════════════════════════════════════════
// Backend seam
// ═══════════════════════════════════════════════════════════

/// The three backend operations the session core depends on.
pub trait TriageBackend {
    fn fetch_symptoms(&self, age: u8) -> Result<SymptomsResponse, ApiError>;
    fn predict(&self, age: u8, symptoms: &[String]) -> Result<PredictResponse, ApiError>;
    fn fetch_recovery(&self) -> Result<RecoveryTable, ApiError>;
}

// ═══════════════════════════════════════════════════════════
// HTTP implementation
// ═══════════════════════════════════════════════════════════

/// Blocking HTTP client for the triage backend.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Backend from `SYMPTA_BASE_URL` (default localhost) with the
    /// standard request timeout.
    pub fn from_env() -> Self {
        Self::new(&config::base_url(), config::REQUEST_TIMEOUT_SECS)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl TriageBackend for HttpBackend {
    fn fetch_symptoms(&self, age: u8) -> Result<SymptomsResponse, ApiError> {
        let url = format!("{}/get_symptoms?age={}", self.base_url, age);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.send_error(e))?;
        Self::decode(response)
    }

    fn predict(&self, age: u8, symptoms: &[String]) -> Result<PredictResponse, ApiError> {
        let url = format!("{}/predict", self.base_url);
        let body = PredictRequest { age, symptoms };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| self.send_error(e))?;
        Self::decode(response)
    }

    fn fetch_recovery(&self) -> Result<RecoveryTable, ApiError> {
        let url = format!("{}/get_recovery", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.send_error(e))?;
        Self::decode(response)
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
