//! Calendarific HolidaySource implementation
//!
//! Adapts [`CalendarificClient`] to the `HolidaySource` trait and normalizes
//! the remote record shape into the canonical model.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::client::CalendarificClient;
use super::types::ApiHoliday;
use crate::error::SourceError;
use crate::model::{CountryEntry, CountryInfo, Holiday, HolidayKind, Subdivision};
use crate::sources::HolidaySource;

/// Country this source answers for.
const COUNTRY_CODE: &str = "IN";
const COUNTRY_NAME: &str = "India";

/// Indian states and union territories.
///
/// The remote source has no subdivision concept, so this static table is the
/// subdivision listing for India. Insertion order is the exposed order.
const INDIA_STATES: &[(&str, &str)] = &[
    ("AN", "Andaman and Nicobar Islands"),
    ("AP", "Andhra Pradesh"),
    ("AR", "Arunachal Pradesh"),
    ("AS", "Assam"),
    ("BR", "Bihar"),
    ("CH", "Chandigarh"),
    ("CT", "Chhattisgarh"),
    ("DL", "Delhi"),
    ("GA", "Goa"),
    ("GJ", "Gujarat"),
    ("HP", "Himachal Pradesh"),
    ("HR", "Haryana"),
    ("JH", "Jharkhand"),
    ("JK", "Jammu and Kashmir"),
    ("KA", "Karnataka"),
    ("KL", "Kerala"),
    ("MP", "Madhya Pradesh"),
    ("MH", "Maharashtra"),
    ("MN", "Manipur"),
    ("ML", "Meghalaya"),
    ("MZ", "Mizoram"),
    ("NL", "Nagaland"),
    ("OR", "Odisha"),
    ("PB", "Punjab"),
    ("PY", "Puducherry"),
    ("RJ", "Rajasthan"),
    ("SK", "Sikkim"),
    ("TN", "Tamil Nadu"),
    ("TS", "Telangana"),
    ("TR", "Tripura"),
    ("UP", "Uttar Pradesh"),
    ("UT", "Uttarakhand"),
    ("WB", "West Bengal"),
];

/// Calendarific-backed holiday source for India.
pub struct CalendarificSource {
    client: CalendarificClient,
}

impl CalendarificSource {
    /// Create a source reading the API key from the environment.
    pub fn from_env() -> Self {
        Self::with_client(CalendarificClient::from_env())
    }

    /// Create with an existing client.
    pub fn with_client(client: CalendarificClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HolidaySource for CalendarificSource {
    fn source_id(&self) -> &'static str {
        "calendarific"
    }

    fn countries(&self) -> Vec<CountryEntry> {
        vec![CountryEntry::new(COUNTRY_CODE, COUNTRY_NAME)]
    }

    /// Fetch the national holiday list.
    ///
    /// The remote source is queried in national/public mode only, so the
    /// `all_types` flag and any `scope.state` / `scope.region` are accepted
    /// and ignored: callers always receive the same national, public-only
    /// list. This discrepancy is deliberate, not hidden.
    async fn list_holidays(
        &self,
        year: i32,
        scope: &CountryInfo,
        _all_types: bool,
    ) -> Result<Vec<Holiday>, SourceError> {
        let records = self
            .client
            .national_holidays(&scope.country.to_ascii_uppercase(), year)
            .await?;

        Ok(records.iter().filter_map(normalize_remote).collect())
    }

    fn states(&self, country: &str) -> Vec<Subdivision> {
        if !country.eq_ignore_ascii_case(COUNTRY_CODE) {
            return vec![];
        }
        INDIA_STATES
            .iter()
            .map(|(code, name)| Subdivision::new(*code, *name))
            .collect()
    }

    fn regions(&self, _country: &str, _state: &str) -> Vec<Subdivision> {
        // No region data from this source
        vec![]
    }
}

/// Normalize one remote record.
///
/// Remote records always map to `kind = Public` and `substitute = false`.
/// A record with an unparseable date is dropped (logged, never propagated);
/// its siblings survive.
fn normalize_remote(record: &ApiHoliday) -> Option<Holiday> {
    let Some(date) = parse_iso_date(&record.date.iso) else {
        tracing::warn!(
            name = %record.name,
            raw_date = %record.date.iso,
            "dropping remote holiday record with unparseable date"
        );
        return None;
    };

    Some(Holiday {
        name: record.name.clone(),
        date,
        kind: HolidayKind::Public,
        substitute: false,
        description: record
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from),
    })
}

/// Parse an ISO-8601 date string to a date-only value.
///
/// The API usually sends plain `YYYY-MM-DD` but appends a time component for
/// some entries; only the date part is significant.
fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    let date_part = iso.get(..10).unwrap_or(iso);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
