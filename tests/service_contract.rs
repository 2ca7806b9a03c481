//! End-to-end contract tests for the aggregation service.
//!
//! Everything here goes through the public `HolidayService` surface; sources
//! are swapped via the registry where a test needs a failing or scripted
//! source.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use holiday_aggregator::sources::calendarific::{CalendarificClient, CalendarificSource};
use holiday_aggregator::sources::rules::RuleBasedSource;
use holiday_aggregator::{
    CountryEntry, CountryInfo, Holiday, HolidayKind, HolidayService, HolidaySource, SourceError,
    SourceRegistry, Subdivision,
};

/// Scripted source: either a fixed holiday list or a fixed error.
struct ScriptedSource {
    id: &'static str,
    outcome: Result<Vec<Holiday>, fn() -> SourceError>,
}

#[async_trait]
impl HolidaySource for ScriptedSource {
    fn source_id(&self) -> &'static str {
        self.id
    }

    fn countries(&self) -> Vec<CountryEntry> {
        vec![CountryEntry::new("XX", "Testland")]
    }

    async fn list_holidays(
        &self,
        _year: i32,
        _scope: &CountryInfo,
        _all_types: bool,
    ) -> Result<Vec<Holiday>, SourceError> {
        match &self.outcome {
            Ok(holidays) => Ok(holidays.clone()),
            Err(make) => Err(make()),
        }
    }

    fn states(&self, _country: &str) -> Vec<Subdivision> {
        vec![]
    }

    fn regions(&self, _country: &str, _state: &str) -> Vec<Subdivision> {
        vec![]
    }
}

fn service_without_api_key() -> HolidayService {
    // Explicitly key-less Calendarific wiring, independent of the test
    // environment
    let mut registry = SourceRegistry::new(Arc::new(RuleBasedSource::new()));
    registry.register(
        "IN",
        Arc::new(CalendarificSource::with_client(CalendarificClient::new(
            None,
        ))),
    );
    HolidayService::with_registry(registry)
}

#[tokio::test]
async fn public_holidays_are_public_only() {
    let service = HolidayService::new();
    for country in ["US", "GB", "DE", "FR", "CA", "AU", "JP"] {
        let holidays = service
            .get_public_holidays(2024, &CountryInfo::new(country))
            .await;
        assert!(!holidays.is_empty(), "no holidays for {}", country);
        assert!(
            holidays.iter().all(|h| h.kind == HolidayKind::Public),
            "non-public entry leaked for {}",
            country
        );
    }
}

#[tokio::test]
async fn all_holidays_is_a_superset_of_public() {
    let service = HolidayService::new();
    let scope = CountryInfo::new("DE");
    let public = service.get_public_holidays(2024, &scope).await;
    let all = service.get_all_holidays(2024, &scope).await;

    assert!(all.len() > public.len());
    for h in &public {
        assert!(all.contains(h), "{} missing from all-types list", h.name);
    }
}

#[tokio::test]
async fn country_list_sorted_with_india_once() {
    let service = service_without_api_key();
    let countries = service.list_available_countries().await;

    let india_count = countries.iter().filter(|c| c.code == "IN").count();
    assert_eq!(india_count, 1);

    let names: Vec<_> = countries.iter().map(|c| c.name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "country list not sorted by name");

    // India sits in sorted position, not appended at the end
    let india_pos = countries.iter().position(|c| c.code == "IN").unwrap();
    assert!(india_pos < countries.len() - 1);
}

#[tokio::test]
async fn india_states_come_from_the_static_table() {
    let service = service_without_api_key();

    let states = service.list_states("IN").await;
    assert_eq!(states.len(), 33);
    assert!(states.iter().any(|s| s.code == "DL" && s.name == "Delhi"));

    // Unmodeled country: empty, not an error
    assert!(service.list_states("ZZ").await.is_empty());

    // Remote source has no regions
    assert!(service.list_regions("IN", "DL").await.is_empty());
}

#[tokio::test]
async fn subdivision_codes_unique_among_siblings() {
    let service = service_without_api_key();
    for country in service.list_available_countries().await {
        let states = service.list_states(&country.code).await;
        let mut codes: Vec<_> = states.iter().map(|s| s.code.clone()).collect();
        codes.sort();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before, "duplicate state in {}", country.code);

        for state in &states {
            let regions = service.list_regions(&country.code, &state.code).await;
            let mut codes: Vec<_> = regions.iter().map(|r| r.code.clone()).collect();
            codes.sort();
            let before = codes.len();
            codes.dedup();
            assert_eq!(
                codes.len(),
                before,
                "duplicate region in {}.{}",
                country.code,
                state.code
            );
        }
    }
}

#[tokio::test]
async fn read_operations_are_idempotent() {
    let service = HolidayService::new();
    let scope = CountryInfo::new("GB").with_state("SCT");

    let mut first = service.get_all_holidays(2025, &scope).await;
    let mut second = service.get_all_holidays(2025, &scope).await;

    // Value equality, ignoring order
    first.sort_by(|a, b| (a.date, &a.name).cmp(&(b.date, &b.name)));
    second.sort_by(|a, b| (a.date, &a.name).cmp(&(b.date, &b.name)));
    assert_eq!(first, second);

    let states_a = service.list_states("GB").await;
    let states_b = service.list_states("GB").await;
    assert_eq!(states_a, states_b);
}

#[tokio::test]
async fn missing_credential_degrades_to_empty() {
    let service = service_without_api_key();

    let holidays = service
        .get_public_holidays(2024, &CountryInfo::new("IN"))
        .await;
    assert!(holidays.is_empty());

    let report = service
        .get_public_holidays_report(2024, &CountryInfo::new("IN"))
        .await;
    assert!(report.holidays.is_empty());
    assert_eq!(report.diagnostics.len(), 1);
    let diag = &report.diagnostics[0];
    assert_eq!(diag.source_id, "calendarific");
    assert!(matches!(diag.error, SourceError::Config(_)));
}

#[tokio::test]
async fn registered_stub_source_handles_its_country_only() {
    let stub_holiday = Holiday {
        name: "Testland Day".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        kind: HolidayKind::Public,
        substitute: false,
        description: None,
    };

    let mut registry = SourceRegistry::new(Arc::new(RuleBasedSource::new()));
    registry.register(
        "XX",
        Arc::new(ScriptedSource {
            id: "scripted",
            outcome: Ok(vec![stub_holiday.clone()]),
        }),
    );
    let service = HolidayService::with_registry(registry);

    let xx = service
        .get_public_holidays(2024, &CountryInfo::new("XX"))
        .await;
    assert_eq!(xx, vec![stub_holiday]);

    // Other countries still route to the rule tables
    let fr = service
        .get_public_holidays(2024, &CountryInfo::new("FR"))
        .await;
    assert!(fr.iter().any(|h| h.name == "Fête nationale"));
}

#[tokio::test]
async fn failing_source_yields_empty_list_and_one_diagnostic() {
    let mut registry = SourceRegistry::new(Arc::new(RuleBasedSource::new()));
    registry.register(
        "XX",
        Arc::new(ScriptedSource {
            id: "scripted",
            outcome: Err(|| SourceError::Network("connection reset".into())),
        }),
    );
    let service = HolidayService::with_registry(registry);

    let report = service
        .get_all_holidays_report(2024, &CountryInfo::new("XX"))
        .await;
    assert!(report.holidays.is_empty());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].source_id, "scripted");
    assert!(matches!(
        report.diagnostics[0].error,
        SourceError::Network(_)
    ));

    // A failing special-cased country never disturbs the others
    let de = service
        .get_public_holidays(2024, &CountryInfo::new("DE"))
        .await;
    assert!(!de.is_empty());
}
