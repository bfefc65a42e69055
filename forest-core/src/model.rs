//! Typed model for the upstream forest-statistics payloads.
//!
//! All numeric fields arrive with both a raw `value` and a pre-formatted
//! `formatted` display string. The display string is opaque: it is rendered
//! verbatim and never recomputed client-side, so the upstream service stays
//! the single source of truth for units and rounding.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which catalog a selection is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    State,
    District,
    India,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::State => "state",
            LocationType::District => "district",
            LocationType::India => "india",
        }
    }

    /// Parse the value of the location-type `<select>` control.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "state" => Some(LocationType::State),
            "district" => Some(LocationType::District),
            "india" => Some(LocationType::India),
            _ => None,
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw value paired with its upstream-formatted display string.
///
/// `value` is nullable because the upstream emits `null` for years with no
/// observation. `percent` is only present on `net_forest_change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    #[serde(default)]
    pub value: Option<f64>,
    pub formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

/// A `year -> Measure` mapping that preserves the upstream JSON key order.
///
/// Chart labels must follow the order the service emitted, not a re-sort,
/// so this is backed by a `Vec` of entries rather than a map type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearSeries(Vec<(String, Measure)>);

impl YearSeries {
    pub fn iter(&self) -> impl Iterator<Item = &(String, Measure)> {
        self.0.iter()
    }

    pub fn get(&self, year: &str) -> Option<&Measure> {
        self.0.iter().find(|(y, _)| y == year).map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Measure)> for YearSeries {
    fn from_iter<I: IntoIterator<Item = (String, Measure)>>(iter: I) -> Self {
        YearSeries(iter.into_iter().collect())
    }
}

impl Serialize for YearSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (year, measure) in &self.0 {
            map.serialize_entry(year, measure)?;
        }
        map.end()
    }
}

struct YearSeriesVisitor;

impl<'de> Visitor<'de> for YearSeriesVisitor {
    type Value = YearSeries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of year to measure")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((year, measure)) = access.next_entry::<String, Measure>()? {
            entries.push((year, measure));
        }
        Ok(YearSeries(entries))
    }
}

impl<'de> Deserialize<'de> for YearSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(YearSeriesVisitor)
    }
}

/// Snapshot statistics for one location at one density threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestStats {
    pub carbon_density: Measure,
    pub carbon_stocks: Measure,
    pub tree_cover_area: Measure,
    pub tree_cover_extent: YearSeries,
    pub tree_cover_gain_2000_2020: Measure,
}

/// Yearly time series (2001 onward) for the two charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyData {
    pub emissions: YearSeries,
    pub tree_loss: YearSeries,
}

/// Derived analysis computed upstream and consumed as-is.
///
/// `forest_health_status` is a categorical label (`Decline`, `Stable`, or
/// `Expansion` for positive net change); it is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestAnalysis {
    pub forest_health_status: String,
    pub net_forest_change: Measure,
    pub total_emissions: Measure,
    pub total_loss: Measure,
}

/// The full response payload for one location/density selection.
///
/// Created by a successful fetch, replaced wholesale by the next one, and
/// discarded when the user switches location type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestRecord {
    pub location: String,
    pub location_type: String,
    pub density_threshold: u8,
    pub stats: ForestStats,
    pub yearly_data: YearlyData,
    pub analysis: ForestAnalysis,
}

/// Response of `GET /data/available-locations`.
///
/// The upstream returns lowercase name strings for both lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub districts: Vec<String>,
}

/// Response of `GET /data/densities?location=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensitiesResponse {
    #[serde(default)]
    pub densities: Vec<u8>,
}


#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ForestRecord {
        serde_json::from_str(fixtures::RECORD_JSON).unwrap()
    }

    #[test]
    fn record_decodes_with_source_year_order() {
        let record = record();
        let years: Vec<&str> = record
            .yearly_data
            .emissions
            .iter()
            .map(|(y, _)| y.as_str())
            .collect();
        // Upstream order, not a numeric re-sort.
        assert_eq!(years, vec!["2003", "2001", "2002"]);
    }

    #[test]
    fn null_values_survive_decoding() {
        let record = record();
        let missing = record.yearly_data.emissions.get("2002").unwrap();
        assert_eq!(missing.value, None);
        assert_eq!(missing.formatted, "N/A");
    }

    #[test]
    fn analysis_fields_pass_through() {
        let record = record();
        assert_eq!(record.analysis.forest_health_status, "Decline");
        assert_eq!(record.analysis.net_forest_change.percent, Some(-0.55));
        assert_eq!(record.stats.tree_cover_extent.get("2010").unwrap().formatted, "2.28M hectares");
    }

    #[test]
    fn year_series_round_trips_in_order() {
        let record = record();
        let json = serde_json::to_string(&record.yearly_data.tree_loss).unwrap();
        let keys: Vec<usize> = ["2003", "2001", "2002"]
            .iter()
            .map(|y| json.find(&format!("\"{y}\"")).unwrap())
            .collect();
        assert!(keys[0] < keys[1] && keys[1] < keys[2]);
    }

    #[test]
    fn location_type_parses_select_values() {
        assert_eq!(LocationType::parse("state"), Some(LocationType::State));
        assert_eq!(LocationType::parse("district"), Some(LocationType::District));
        assert_eq!(LocationType::parse("india"), Some(LocationType::India));
        assert_eq!(LocationType::parse("country"), None);
        assert_eq!(LocationType::District.to_string(), "district");
    }

    #[test]
    fn locations_response_tolerates_missing_lists() {
        let parsed: LocationsResponse = serde_json::from_str(r#"{"states": ["kerala"]}"#).unwrap();
        assert_eq!(parsed.states, vec!["kerala"]);
        assert!(parsed.districts.is_empty());
    }
}
