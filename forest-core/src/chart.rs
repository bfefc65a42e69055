//! Structural reshape of yearly series into chart-ready label/value arrays.
//!
//! The adapter performs no aggregation, interpolation or unit conversion:
//! labels are the years exactly as the upstream emitted them, values the
//! parallel raw numbers (with `null` gaps preserved for the chart to skip).

use crate::model::YearSeries;
use serde::Serialize;

/// Parallel label/value arrays handed to the D3 bridge as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn from_year_series(series: &YearSeries) -> Self {
        let mut labels = Vec::with_capacity(series.len());
        let mut values = Vec::with_capacity(series.len());
        for (year, measure) in series.iter() {
            labels.push(year.clone());
            values.push(measure.value);
        }
        ChartSeries { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::RECORD_JSON;
    use crate::model::ForestRecord;

    #[test]
    fn labels_follow_source_order_and_values_are_parallel() {
        let record: ForestRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let series = ChartSeries::from_year_series(&record.yearly_data.emissions);

        assert_eq!(series.labels, vec!["2003", "2001", "2002"]);
        assert_eq!(series.values, vec![Some(151000.0), Some(120000.0), None]);
    }

    #[test]
    fn tree_loss_series_reshapes_without_transformation() {
        let record: ForestRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let series = ChartSeries::from_year_series(&record.yearly_data.tree_loss);

        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.values[0], Some(410.0));
    }

    #[test]
    fn empty_series_yields_empty_chart() {
        let series = ChartSeries::from_year_series(&YearSeries::default());
        assert!(series.is_empty());
    }

    #[test]
    fn serializes_nulls_for_missing_years() {
        let record: ForestRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let series = ChartSeries::from_year_series(&record.yearly_data.emissions);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("null"));
    }
}
