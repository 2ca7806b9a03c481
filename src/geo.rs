//! Geographic hierarchy resolver.
//!
//! Builds the country → state → region lookup tree from the source registry
//! and exposes the bidirectional code/name lookups that navigation and
//! breadcrumb logic need. Subdivision ordering is whatever the owning source
//! exposes (insertion order for the hard-coded India list, table order for
//! the rule tables); nothing here re-sorts.

use crate::model::{CountryInfo, Subdivision};
use crate::service::HolidayService;

struct RegionNode {
    code: String,
    name: String,
}

struct StateNode {
    code: String,
    name: String,
    regions: Vec<RegionNode>,
}

struct CountryNode {
    code: String,
    name: String,
    states: Vec<StateNode>,
}

/// Snapshot of the geographic hierarchy across all registered sources.
pub struct GeoResolver {
    countries: Vec<CountryNode>,
}

impl GeoResolver {
    /// Walk the registry's subdivision listings once and build the tree.
    pub async fn build(service: &HolidayService) -> Self {
        let mut countries = Vec::new();
        for entry in service.list_available_countries().await {
            let source = service.registry().select(&entry.code);
            let states = source
                .states(&entry.code)
                .into_iter()
                .map(|s| StateNode {
                    regions: source
                        .regions(&entry.code, &s.code)
                        .into_iter()
                        .map(|r| RegionNode {
                            code: r.code,
                            name: r.name,
                        })
                        .collect(),
                    code: s.code,
                    name: s.name,
                })
                .collect();
            countries.push(CountryNode {
                code: entry.code,
                name: entry.name,
                states,
            });
        }
        Self { countries }
    }

    fn country(&self, code: &str) -> Option<&CountryNode> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Display name for a country code.
    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.country(code).map(|c| c.name.as_str())
    }

    /// Country code for a display name, case-insensitively.
    pub fn country_code(&self, name: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.code.as_str())
    }

    /// Display name for a state code within a country.
    pub fn state_name(&self, country: &str, state: &str) -> Option<&str> {
        self.country(country)?
            .states
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(state))
            .map(|s| s.name.as_str())
    }

    /// Display name for a region code within a state.
    pub fn region_name(&self, country: &str, state: &str, region: &str) -> Option<&str> {
        self.country(country)?
            .states
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(state))?
            .regions
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(region))
            .map(|r| r.name.as_str())
    }

    /// States of a country, in hierarchy order.
    pub fn states(&self, country: &str) -> Vec<Subdivision> {
        self.country(country)
            .map(|c| {
                c.states
                    .iter()
                    .map(|s| Subdivision::new(s.code.clone(), s.name.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Regions of a state, in hierarchy order.
    pub fn regions(&self, country: &str, state: &str) -> Vec<Subdivision> {
        self.country(country)
            .and_then(|c| {
                c.states
                    .iter()
                    .find(|s| s.code.eq_ignore_ascii_case(state))
            })
            .map(|s| {
                s.regions
                    .iter()
                    .map(|r| Subdivision::new(r.code.clone(), r.name.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Breadcrumb labels for a scope: country name, then state and region
    /// names where present and resolvable.
    pub fn scope_labels(&self, scope: &CountryInfo) -> Vec<String> {
        let mut labels = Vec::with_capacity(3);
        if let Some(country) = self.country_name(&scope.country) {
            labels.push(country.to_string());
        }
        if let Some(state) = scope.state.as_deref() {
            if let Some(name) = self.state_name(&scope.country, state) {
                labels.push(name.to_string());
                if let Some(region) = scope.region.as_deref() {
                    if let Some(name) = self.region_name(&scope.country, state, region) {
                        labels.push(name.to_string());
                    }
                }
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_bidirectional_country_lookup() {
        let service = HolidayService::new();
        let geo = GeoResolver::build(&service).await;

        assert_eq!(geo.country_name("DE"), Some("Germany"));
        assert_eq!(geo.country_name("de"), Some("Germany"));
        assert_eq!(geo.country_code("germany"), Some("DE"));
        assert_eq!(geo.country_name("IN"), Some("India"));
        assert_eq!(geo.country_code("India"), Some("IN"));
        assert_eq!(geo.country_name("ZZ"), None);
    }

    #[tokio::test]
    async fn test_state_and_region_names() {
        let service = HolidayService::new();
        let geo = GeoResolver::build(&service).await;

        assert_eq!(geo.state_name("DE", "BY"), Some("Bayern"));
        assert_eq!(geo.region_name("DE", "BY", "A"), Some("Stadt Augsburg"));
        assert_eq!(geo.state_name("IN", "DL"), Some("Delhi"));
        assert_eq!(geo.state_name("FR", "XX"), None);
    }

    #[tokio::test]
    async fn test_scope_labels() {
        let service = HolidayService::new();
        let geo = GeoResolver::build(&service).await;

        let scope = CountryInfo::new("DE").with_state("BY").with_region("A");
        assert_eq!(
            geo.scope_labels(&scope),
            vec!["Germany", "Bayern", "Stadt Augsburg"]
        );

        // Unresolvable tail segments drop off the breadcrumb
        let scope = CountryInfo::new("DE").with_state("XX").with_region("A");
        assert_eq!(geo.scope_labels(&scope), vec!["Germany"]);
    }

    #[tokio::test]
    async fn test_sibling_codes_unique_at_every_level() {
        let service = HolidayService::new();
        let geo = GeoResolver::build(&service).await;

        let mut country_codes = HashSet::new();
        for c in &geo.countries {
            assert!(
                country_codes.insert(c.code.clone()),
                "duplicate country {}",
                c.code
            );
            let mut state_codes = HashSet::new();
            for s in &c.states {
                assert!(
                    state_codes.insert(s.code.clone()),
                    "duplicate state {} in {}",
                    s.code,
                    c.code
                );
                let mut region_codes = HashSet::new();
                for r in &s.regions {
                    assert!(
                        region_codes.insert(r.code.clone()),
                        "duplicate region {} in {}.{}",
                        r.code,
                        c.code,
                        s.code
                    );
                }
            }
        }
    }
}
