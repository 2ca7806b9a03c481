//! Aggregation service
//!
//! The public surface of the crate: unified holiday and subdivision queries
//! over every registered source. The contract is total — given well-formed
//! input these operations always return a sequence and never raise; source
//! failures are logged, recorded as diagnostics, and degraded to empty
//! results. Callers that need to distinguish "no holidays exist" from "a
//! fetch failed" use the `_report` variants.
//!
//! No caching, no request deduplication, no retry: every call performs its
//! own work, including its own outbound network call for remote-routed
//! countries.

use std::sync::Arc;

use crate::error::SourceDiagnostic;
use crate::model::{CountryEntry, CountryInfo, Holiday, Subdivision};
use crate::sources::calendarific::CalendarificSource;
use crate::sources::rules::RuleBasedSource;
use crate::sources::SourceRegistry;

/// Country routed to the Calendarific source. The registry built in
/// [`HolidayService::new`] is the only place this is consulted.
const CALENDARIFIC_COUNTRY: &str = "IN";

/// Holiday list plus the failure diagnostics accumulated while building it.
#[derive(Debug, Default)]
pub struct HolidayReport {
    pub holidays: Vec<Holiday>,
    pub diagnostics: Vec<SourceDiagnostic>,
}

/// Unified holiday aggregation service.
pub struct HolidayService {
    registry: Arc<SourceRegistry>,
}

impl Default for HolidayService {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayService {
    /// Service with the production source wiring: rule tables for every
    /// country, Calendarific for India (API key from the environment).
    pub fn new() -> Self {
        let mut registry = SourceRegistry::new(Arc::new(RuleBasedSource::new()));
        registry.register(
            CALENDARIFIC_COUNTRY,
            Arc::new(CalendarificSource::from_env()),
        );
        Self::with_registry(registry)
    }

    /// Service over a caller-assembled registry. Used by tests and by
    /// embedders that wire their own sources.
    pub fn with_registry(registry: SourceRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub(crate) fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Public holidays for the scope and year.
    pub async fn get_public_holidays(&self, year: i32, scope: &CountryInfo) -> Vec<Holiday> {
        self.fetch(year, scope, false).await.holidays
    }

    /// Holidays of every kind for the scope and year.
    pub async fn get_all_holidays(&self, year: i32, scope: &CountryInfo) -> Vec<Holiday> {
        self.fetch(year, scope, true).await.holidays
    }

    /// Like [`Self::get_public_holidays`], with failure diagnostics attached.
    pub async fn get_public_holidays_report(
        &self,
        year: i32,
        scope: &CountryInfo,
    ) -> HolidayReport {
        self.fetch(year, scope, false).await
    }

    /// Like [`Self::get_all_holidays`], with failure diagnostics attached.
    pub async fn get_all_holidays_report(&self, year: i32, scope: &CountryInfo) -> HolidayReport {
        self.fetch(year, scope, true).await
    }

    /// All available countries, merged across sources, deduplicated by code
    /// and sorted by name ascending (case-insensitive).
    pub async fn list_available_countries(&self) -> Vec<CountryEntry> {
        let mut countries: Vec<CountryEntry> = Vec::new();
        for source in self.registry.sources() {
            for entry in source.countries() {
                if !countries
                    .iter()
                    .any(|c| c.code.eq_ignore_ascii_case(&entry.code))
                {
                    countries.push(entry);
                }
            }
        }
        countries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        countries
    }

    /// First-level subdivisions of a country. Empty when none are modeled.
    pub async fn list_states(&self, country: &str) -> Vec<Subdivision> {
        self.registry.select(country).states(country)
    }

    /// Second-level subdivisions of a state. Empty when none are modeled.
    pub async fn list_regions(&self, country: &str, state: &str) -> Vec<Subdivision> {
        self.registry.select(country).regions(country, state)
    }

    async fn fetch(&self, year: i32, scope: &CountryInfo, all_types: bool) -> HolidayReport {
        let source = self.registry.select(&scope.country);
        match source.list_holidays(year, scope, all_types).await {
            Ok(holidays) => HolidayReport {
                holidays,
                diagnostics: Vec::new(),
            },
            Err(error) => {
                tracing::warn!(
                    source = source.source_id(),
                    country = %scope.country,
                    year,
                    error = %error,
                    "holiday source failed; returning empty list"
                );
                HolidayReport {
                    holidays: Vec::new(),
                    diagnostics: vec![SourceDiagnostic {
                        source_id: source.source_id(),
                        year,
                        scope: scope.clone(),
                        error,
                    }],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HolidayKind;

    #[tokio::test]
    async fn test_rule_backed_country_round_trip() {
        let service = HolidayService::new();
        let holidays = service
            .get_public_holidays(2024, &CountryInfo::new("FR"))
            .await;
        assert!(!holidays.is_empty());
        assert!(holidays.iter().all(|h| h.kind == HolidayKind::Public));
    }

    #[tokio::test]
    async fn test_unknown_country_degrades_with_diagnostic() {
        let service = HolidayService::new();
        let report = service
            .get_public_holidays_report(2024, &CountryInfo::new("ZZ"))
            .await;
        assert!(report.holidays.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].source_id, "rule-tables");
    }

    #[tokio::test]
    async fn test_plain_operations_never_error() {
        // Same query as above through the plain operation: empty, no panic
        let service = HolidayService::new();
        let holidays = service
            .get_all_holidays(2024, &CountryInfo::new("ZZ"))
            .await;
        assert!(holidays.is_empty());
    }
}
