//! Canonical, source-independent holiday model.
//!
//! Every source adapter normalizes its own record shape into these types so
//! that downstream code never sees where the data came from. All of them are
//! request-scoped value objects: constructed per call, never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a holiday entry.
///
/// Source tags outside this set coerce to [`HolidayKind::Observance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Statutory public holiday.
    Public,
    /// Bank holiday (banks and offices closed, shops may open).
    Bank,
    /// School holiday only.
    School,
    /// Optional / restricted holiday (employees may choose to take it).
    Optional,
    /// Observance without a day off. Unknown tags deserialize here too.
    #[serde(other)]
    Observance,
}

impl HolidayKind {
    /// Parse a source-supplied tag, coercing anything unrecognized to
    /// `Observance`.
    pub fn from_source_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "public" => Self::Public,
            "bank" => Self::Bank,
            "school" => Self::School,
            "optional" => Self::Optional,
            _ => Self::Observance,
        }
    }

    /// Stable lowercase tag, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Bank => "bank",
            Self::School => "school",
            Self::Optional => "optional",
            Self::Observance => "observance",
        }
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized holiday entry.
///
/// `date` is a calendar date with no time-of-day significance; it is stored as
/// a date-only value to avoid timezone drift. Within one query result the list
/// is conceptually a set: dates need not be unique (several named holidays may
/// share a day) and no ordering is guaranteed until the caller sorts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Human-readable name, non-empty.
    pub name: String,
    /// Calendar date, no timezone.
    pub date: NaiveDate,
    /// Classification.
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    /// True when this entry is a compensatory day for a holiday that fell on
    /// a weekend. Always false for remote-sourced entries unless the source
    /// signals it.
    #[serde(default)]
    pub substitute: bool,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Geographic scope of a holiday query.
///
/// Invariant: `region` set implies `state` set; `state` set implies `country`
/// set (the latter holds by construction).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Subdivision code within the country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Sub-subdivision code within the state. Only meaningful when `state`
    /// is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CountryInfo {
    /// Country-level scope.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            state: None,
            region: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// A state or region entry: short code plus display name.
///
/// `code` is unique among siblings under the same parent scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    pub code: String,
    pub name: String,
}

impl Subdivision {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// An available country: ISO code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}

impl CountryEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_source_tag() {
        assert_eq!(HolidayKind::from_source_tag("public"), HolidayKind::Public);
        assert_eq!(HolidayKind::from_source_tag("Bank"), HolidayKind::Bank);
        assert_eq!(HolidayKind::from_source_tag(" school "), HolidayKind::School);
        assert_eq!(
            HolidayKind::from_source_tag("optional"),
            HolidayKind::Optional
        );
        // Unknown tags coerce to observance rather than failing
        assert_eq!(
            HolidayKind::from_source_tag("religious"),
            HolidayKind::Observance
        );
        assert_eq!(HolidayKind::from_source_tag(""), HolidayKind::Observance);
    }

    #[test]
    fn test_scope_builders() {
        let scope = CountryInfo::new("DE").with_state("BY").with_region("A");
        assert_eq!(scope.country, "DE");
        assert_eq!(scope.state.as_deref(), Some("BY"));
        assert_eq!(scope.region.as_deref(), Some("A"));
    }

    #[test]
    fn test_holiday_serde_shape() {
        let h = Holiday {
            name: "May Day".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            kind: HolidayKind::Public,
            substitute: false,
            description: None,
        };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["type"], "public");
        assert_eq!(json["date"], "2024-05-01");
        assert!(json.get("description").is_none());
    }
}
