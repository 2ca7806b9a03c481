//! Typed failure model for source integrations.
//!
//! Every failure mode at a source boundary maps to exactly one `SourceError`
//! variant. None of them escape the aggregation service: the service catches,
//! logs, and degrades to an empty or partial result (see `service.rs`), and
//! records what happened as a [`SourceDiagnostic`] for callers that opt into
//! the report variants.
//!
//! Rules:
//! - `thiserror` for enum derivation — no manual `Display` impls.
//! - No `.unwrap()` in this module.

use crate::model::CountryInfo;

/// A failure while talking to or interpreting a holiday source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Required credential is absent or empty. Soft: the affected country
    /// degrades to an empty holiday list.
    #[error("source not configured: {0}")]
    Config(String),

    /// Transport-level failure (DNS, timeout, connection reset).
    #[error("network failure: {0}")]
    Network(String),

    /// The remote source answered with a non-success HTTP status.
    #[error("upstream returned status {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// The payload could not be decoded at all. Malformed *individual*
    /// records are not an error: they are dropped during normalization and
    /// their siblings survive.
    #[error("malformed source payload: {0}")]
    Parse(String),

    /// The rule tables hold no data for the requested country.
    #[error("no holiday data for country {0}")]
    UnknownCountry(String),
}

/// Structured record of a degraded fetch.
///
/// The aggregation service never raises source failures; this is the optional
/// observability channel that says which source failed for which query, so
/// downstream code can distinguish "no holidays exist" from "a fetch failed"
/// when it cares to.
#[derive(Debug)]
pub struct SourceDiagnostic {
    /// Identifier of the source that failed (e.g. `"calendarific"`).
    pub source_id: &'static str,
    /// Year the query was for.
    pub year: i32,
    /// Scope the query was for.
    pub scope: CountryInfo,
    /// What went wrong.
    pub error: SourceError,
}
