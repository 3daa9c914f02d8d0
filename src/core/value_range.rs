use serde::{Deserialize, Serialize};

use crate::core::LineData;

/// Visible value window of the chart.
///
/// The x domain always starts at index `0` and spans `delta_x` indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub y_chart_min: f64,
    pub y_chart_max: f64,
    pub delta_x: f64,
}

impl ValueRange {
    #[must_use]
    pub fn new(y_chart_min: f64, y_chart_max: f64, delta_x: f64) -> Self {
        Self {
            y_chart_min,
            y_chart_max,
            delta_x,
        }
    }

    /// Derives the chart window from data.
    ///
    /// With `start_at_zero` the y window is stretched to include `0`. A flat
    /// window is widened by one unit upward, and a single-index domain gets
    /// `delta_x = 1` so the transform stays invertible.
    #[must_use]
    pub fn from_data(data: &LineData, start_at_zero: bool) -> Self {
        if data.is_empty() {
            return Self::default();
        }

        let mut y_chart_min = data.y_min();
        let mut y_chart_max = data.y_max();
        if start_at_zero {
            y_chart_min = y_chart_min.min(0.0);
            y_chart_max = y_chart_max.max(0.0);
        }
        if y_chart_max == y_chart_min {
            y_chart_max += 1.0;
        }

        let mut delta_x = data.x_max_index().unwrap_or(0) as f64;
        if delta_x == 0.0 {
            delta_x = 1.0;
        }

        Self {
            y_chart_min,
            y_chart_max,
            delta_x,
        }
    }

    #[must_use]
    pub fn delta_y(self) -> f64 {
        (self.y_chart_max - self.y_chart_min).abs()
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0)
    }
}
