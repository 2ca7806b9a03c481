//! Calendarific API wire types.
//!
//! The API answers `GET /api/v2/holidays` with an envelope of the shape
//! `{ "response": { "holidays": [ ... ] } }`.

use serde::Deserialize;

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub response: ApiResponseBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponseBody {
    #[serde(default)]
    pub holidays: Vec<ApiHoliday>,
}

/// One holiday record as the API returns it.
#[derive(Debug, Deserialize)]
pub struct ApiHoliday {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: ApiDate,
    /// Source-side classification tags. The gateway only ever queries in
    /// national mode, so these are not projected onto the normalized model.
    #[serde(rename = "type", default)]
    pub kinds: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiDate {
    /// ISO-8601 date, sometimes with a time component appended.
    pub iso: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes() {
        let json = r#"{
            "response": {
                "holidays": [
                    {
                        "name": "Republic Day",
                        "description": "Republic Day is a national holiday in India.",
                        "date": { "iso": "2024-01-26" },
                        "type": ["National holiday"]
                    }
                ]
            }
        }"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.response.holidays.len(), 1);
        let h = &envelope.response.holidays[0];
        assert_eq!(h.name, "Republic Day");
        assert_eq!(h.date.iso, "2024-01-26");
        assert_eq!(h.kinds, vec!["National holiday".to_string()]);
    }

    #[test]
    fn test_missing_optional_fields_tolerated() {
        let json = r#"{
            "response": {
                "holidays": [
                    { "name": "Diwali", "date": { "iso": "2024-11-01" } }
                ]
            }
        }"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        let h = &envelope.response.holidays[0];
        assert!(h.description.is_none());
        assert!(h.kinds.is_empty());
    }
}
