//! Rule-based source
//!
//! The embedded holiday calendar: derives holiday dates from country-specific
//! rules (fixed dates, Easter arithmetic, nth-weekday rules, observed-day
//! substitution) without network access.
//!
//! # Coverage
//!
//! - **Countries:** everything in `table::COUNTRIES`
//! - **Provides:** all holiday kinds, state and region subdivisions,
//!   substitute days
//! - **Side effects:** none; purely derives from the static rule tables

mod engine;
mod table;

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use self::engine::HolidayRule;
use crate::error::SourceError;
use crate::model::{CountryEntry, CountryInfo, Holiday, HolidayKind, Subdivision};
use crate::sources::HolidaySource;

/// Holiday source backed by the static rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSource;

impl RuleBasedSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HolidaySource for RuleBasedSource {
    fn source_id(&self) -> &'static str {
        "rule-tables"
    }

    fn countries(&self) -> Vec<CountryEntry> {
        table::COUNTRIES
            .iter()
            .map(|c| CountryEntry::new(c.code, c.name))
            .collect()
    }

    /// Generate the holiday list for `scope` and `year`.
    ///
    /// Applicable rules are the country's own plus those of the matching
    /// state and region. Unknown state or region codes are silently ignored
    /// (the country-level list is returned); an unknown country is an error,
    /// which the aggregation service degrades to an empty list.
    async fn list_holidays(
        &self,
        year: i32,
        scope: &CountryInfo,
        all_types: bool,
    ) -> Result<Vec<Holiday>, SourceError> {
        let country = table::country(&scope.country)
            .ok_or_else(|| SourceError::UnknownCountry(scope.country.to_ascii_uppercase()))?;

        let mut rules: Vec<&HolidayRule> = country.rules.iter().collect();
        if let Some(state) = scope.state.as_deref().and_then(|s| country.state(s)) {
            rules.extend(state.rules.iter());
            if let Some(region) = scope.region.as_deref().and_then(|r| state.region(r)) {
                rules.extend(region.rules.iter());
            }
        }

        let mut holidays = materialize(&rules, year);
        if !all_types {
            holidays.retain(|h| h.kind == HolidayKind::Public);
        }
        Ok(holidays)
    }

    fn states(&self, country: &str) -> Vec<Subdivision> {
        table::country(country)
            .map(|c| {
                c.states
                    .iter()
                    .map(|s| Subdivision::new(s.code, s.name))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn regions(&self, country: &str, state: &str) -> Vec<Subdivision> {
        table::country(country)
            .and_then(|c| c.state(state))
            .map(|s| {
                s.regions
                    .iter()
                    .map(|r| Subdivision::new(r.code, r.name))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Evaluate rules for a year, emitting substitute companions where a shifted
/// rule lands on a weekend.
///
/// Substitute dates that collide with an already-occupied date roll forward
/// to the next free weekday, so chained weekend holidays (GB Christmas +
/// Boxing Day) produce distinct compensatory days.
fn materialize(rules: &[&HolidayRule], year: i32) -> Vec<Holiday> {
    let mut holidays = Vec::with_capacity(rules.len());
    let mut substitutes = Vec::new();

    for rule in rules {
        let Some(date) = rule.rule.resolve(year) else {
            continue;
        };
        holidays.push(Holiday {
            name: rule.name.to_string(),
            date,
            kind: rule.kind,
            substitute: false,
            description: None,
        });
        if let Some(observed) = rule.shift.observed(date) {
            substitutes.push((rule, observed));
        }
    }

    let mut occupied: Vec<NaiveDate> = holidays.iter().map(|h| h.date).collect();
    for (rule, mut date) in substitutes {
        while occupied.contains(&date) || is_weekend(date) {
            date += Duration::days(1);
        }
        occupied.push(date);
        holidays.push(Holiday {
            name: format!("{} (substitute day)", rule.name),
            date,
            kind: rule.kind,
            substitute: true,
            description: None,
        });
    }

    holidays
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
