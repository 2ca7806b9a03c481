//! HolidaySource trait and the source registry.
//!
//! The core abstraction for pluggable holiday sources. Each source provides a
//! consistent interface — holidays for a (scope, year) plus subdivision
//! listings — normalized to the canonical model in `model.rs`.
//!
//! # Implementation Notes
//!
//! - Return an empty Vec rather than an error for "no subdivisions modeled".
//! - Drop individual malformed records during normalization; never fail the
//!   whole batch for one bad entry.
//! - `countries()` carries no ordering guarantee; the aggregation service
//!   merges and sorts across sources.

pub mod calendarific;
pub mod rules;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::{CountryEntry, CountryInfo, Holiday, Subdivision};

/// Trait for pluggable holiday sources.
///
/// One implementation wraps the embedded rule tables
/// ([`rules::RuleBasedSource`]); another wraps the Calendarific REST API
/// ([`calendarific::CalendarificSource`]). The aggregation service only ever
/// talks to this trait.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Unique identifier for this source (e.g. `"rule-tables"`).
    fn source_id(&self) -> &'static str;

    /// Countries this source can answer for, as (code, name) entries.
    /// No ordering guarantee.
    fn countries(&self) -> Vec<CountryEntry>;

    /// Holidays for the given scope and year.
    ///
    /// `all_types = false` restricts the result to public holidays;
    /// `all_types = true` returns every kind the source defines. Sources
    /// without subdivision data accept and ignore `scope.state` /
    /// `scope.region`.
    async fn list_holidays(
        &self,
        year: i32,
        scope: &CountryInfo,
        all_types: bool,
    ) -> Result<Vec<Holiday>, SourceError>;

    /// First-level subdivisions of a country. Empty when none are modeled.
    fn states(&self, country: &str) -> Vec<Subdivision>;

    /// Second-level subdivisions of a state. Empty when none are modeled.
    fn regions(&self, country: &str, state: &str) -> Vec<Subdivision>;
}

/// Registry mapping country codes to source handlers.
///
/// This is the single, centralized source-selection point: every country
/// resolves to the default (rule-based) source unless an override was
/// registered for it. Adding another specially-sourced country is one
/// [`SourceRegistry::register`] call — no branching logic anywhere else.
pub struct SourceRegistry {
    default: Arc<dyn HolidaySource>,
    overrides: HashMap<String, Arc<dyn HolidaySource>>,
}

impl SourceRegistry {
    /// Create a registry with the given default source.
    pub fn new(default: Arc<dyn HolidaySource>) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Route `country` to `source` instead of the default.
    pub fn register(&mut self, country: impl Into<String>, source: Arc<dyn HolidaySource>) {
        self.overrides
            .insert(country.into().to_ascii_uppercase(), source);
    }

    /// Resolve the source handling `country`. Country codes compare
    /// case-insensitively.
    pub fn select(&self, country: &str) -> &Arc<dyn HolidaySource> {
        self.overrides
            .get(&country.to_ascii_uppercase())
            .unwrap_or(&self.default)
    }

    /// The default source plus every override, for cross-source merges
    /// (country listing). The default comes first; override order is
    /// unspecified.
    pub fn sources(&self) -> impl Iterator<Item = &Arc<dyn HolidaySource>> {
        std::iter::once(&self.default).chain(self.overrides.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(&'static str);

    #[async_trait]
    impl HolidaySource for Stub {
        fn source_id(&self) -> &'static str {
            self.0
        }
        fn countries(&self) -> Vec<CountryEntry> {
            vec![]
        }
        async fn list_holidays(
            &self,
            _year: i32,
            _scope: &CountryInfo,
            _all_types: bool,
        ) -> Result<Vec<Holiday>, SourceError> {
            Ok(vec![])
        }
        fn states(&self, _country: &str) -> Vec<Subdivision> {
            vec![]
        }
        fn regions(&self, _country: &str, _state: &str) -> Vec<Subdivision> {
            vec![]
        }
    }

    #[test]
    fn test_select_falls_back_to_default() {
        let registry = SourceRegistry::new(Arc::new(Stub("default")));
        assert_eq!(registry.select("US").source_id(), "default");
        assert_eq!(registry.select("zz").source_id(), "default");
    }

    #[test]
    fn test_register_overrides_one_country() {
        let mut registry = SourceRegistry::new(Arc::new(Stub("default")));
        registry.register("IN", Arc::new(Stub("special")));

        assert_eq!(registry.select("IN").source_id(), "special");
        // Case-insensitive code match
        assert_eq!(registry.select("in").source_id(), "special");
        // Everything else stays on the default
        assert_eq!(registry.select("US").source_id(), "default");
    }

    #[test]
    fn test_sources_yields_default_first() {
        let mut registry = SourceRegistry::new(Arc::new(Stub("default")));
        registry.register("IN", Arc::new(Stub("special")));

        let ids: Vec<_> = registry.sources().map(|s| s.source_id()).collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], "default");
    }
}
