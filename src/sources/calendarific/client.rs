//! Calendarific API client
//!
//! Thin typed HTTP client for the Calendarific holidays endpoint. Owns
//! request construction, HTTP failure handling, and response decoding;
//! normalization lives in `source.rs`.

use reqwest::Client;

use super::types::{ApiEnvelope, ApiHoliday};
use crate::error::SourceError;

const CALENDARIFIC_API_BASE: &str = "https://calendarific.com";
const API_KEY_ENV: &str = "CALENDARIFIC_API_KEY";

/// Calendarific API client.
///
/// One request per call, no retry: any failure is reported to the caller,
/// which degrades it to an empty result. No client-side timeout is imposed
/// beyond the transport default; bounded latency is the embedder's job.
pub struct CalendarificClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl CalendarificClient {
    /// Create a client reading the API key from `CALENDARIFIC_API_KEY`.
    ///
    /// A missing or empty key is not an error here: it surfaces as
    /// [`SourceError::Config`] on the first fetch and the affected country
    /// degrades to an empty list.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::new(api_key)
    }

    /// Create a client with an explicit (possibly absent) API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: CALENDARIFIC_API_BASE.to_string(),
        }
    }

    /// Point the client at a different base URL. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch national-level holidays for `country` and `year`.
    ///
    /// Issues a single GET filtered server-side to national entries.
    pub async fn national_holidays(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<ApiHoliday>, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SourceError::Config(format!("{} not set", API_KEY_ENV)))?;

        let url = format!("{}/api/v2/holidays", self.base_url);
        let year = year.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("country", country),
                ("year", year.as_str()),
                ("type", "national"),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Upstream {
                status: status.as_u16(),
                detail: body.chars().take(200).collect(),
            });
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(envelope.response.holidays)
    }
}
