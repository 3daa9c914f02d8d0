use serde::{Deserialize, Serialize};

use crate::core::LineDataSet;

/// All series of one chart, sharing a common index domain.
///
/// Aggregate min/max only consider non-empty series; an empty collection
/// reports `0.0` for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineDataRepr")]
pub struct LineData {
    data_sets: Vec<LineDataSet>,
    #[serde(skip_serializing)]
    y_min: f64,
    #[serde(skip_serializing)]
    y_max: f64,
}

#[derive(Deserialize)]
struct LineDataRepr {
    #[serde(default)]
    data_sets: Vec<LineDataSet>,
}

impl From<LineDataRepr> for LineData {
    fn from(repr: LineDataRepr) -> Self {
        Self::new(repr.data_sets)
    }
}

impl LineData {
    #[must_use]
    pub fn new(data_sets: Vec<LineDataSet>) -> Self {
        let mut data = Self {
            data_sets,
            y_min: 0.0,
            y_max: 0.0,
        };
        data.calc_min_max();
        data
    }

    pub fn add_data_set(&mut self, data_set: LineDataSet) {
        self.data_sets.push(data_set);
        self.calc_min_max();
    }

    fn calc_min_max(&mut self) {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for data_set in self.data_sets.iter().filter(|set| !set.is_empty()) {
            y_min = y_min.min(data_set.y_min());
            y_max = y_max.max(data_set.y_max());
        }
        if y_min.is_finite() && y_max.is_finite() {
            self.y_min = y_min;
            self.y_max = y_max;
        } else {
            self.y_min = 0.0;
            self.y_max = 0.0;
        }
    }

    #[must_use]
    pub fn data_sets(&self) -> &[LineDataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set(&self, index: usize) -> Option<&LineDataSet> {
        self.data_sets.get(index)
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Total entry count across all series.
    #[must_use]
    pub fn y_val_count(&self) -> usize {
        self.data_sets.iter().map(LineDataSet::entry_count).sum()
    }

    #[must_use]
    pub fn x_max_index(&self) -> Option<usize> {
        self.data_sets
            .iter()
            .filter_map(LineDataSet::x_max_index)
            .max()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_val_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::LineData;
    use crate::core::LineDataSet;

    #[test]
    fn aggregates_skip_empty_series() {
        let data = LineData::new(vec![
            LineDataSet::from_values("a", &[1.0, 4.0]),
            LineDataSet::from_values("empty", &[]),
            LineDataSet::from_values("b", &[-2.0, 3.0, 0.5]),
        ]);
        assert_eq!(data.y_min(), -2.0);
        assert_eq!(data.y_max(), 4.0);
        assert_eq!(data.y_val_count(), 5);
        assert_eq!(data.x_max_index(), Some(2));
    }

    #[test]
    fn deserialize_recomputes_aggregate_range() {
        let json = r#"{
            "data_sets": [{
                "label": "loaded",
                "entries": [
                    { "x_index": 5, "value": 3.0 },
                    { "x_index": 1, "value": -7.0 }
                ],
                "y_min": 100.0,
                "y_max": 200.0
            }],
            "y_min": 100.0,
            "y_max": 200.0
        }"#;
        let data: LineData = serde_json::from_str(json).expect("deserialize");

        assert_eq!(data.y_min(), -7.0);
        assert_eq!(data.y_max(), 3.0);
        assert_eq!(data.x_max_index(), Some(5));
        let indices: Vec<usize> = data.data_sets()[0]
            .entries()
            .iter()
            .map(|e| e.x_index)
            .collect();
        assert_eq!(indices, vec![1, 5]);
    }

    #[test]
    fn empty_collection_reports_zero_range() {
        let data = LineData::default();
        assert!(data.is_empty());
        assert_eq!(data.y_min(), 0.0);
        assert_eq!(data.y_max(), 0.0);
        assert_eq!(data.x_max_index(), None);
    }
}
