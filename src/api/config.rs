use serde::{Deserialize, Serialize};

use crate::core::{ContentOffsets, Viewport};
use crate::error::{ChartError, ChartResult};

pub const LINE_CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Chart setup shared by the engine and the line renderer.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub content_offsets: ContentOffsets,
    /// Forces the y window to include zero; also pins fill baselines to zero.
    #[serde(default = "default_true")]
    pub start_at_zero: bool,
    #[serde(default)]
    pub use_morph: bool,
    #[serde(default = "default_true")]
    pub draw_values: bool,
    #[serde(default)]
    pub draw_unit_in_chart: bool,
    #[serde(default)]
    pub unit: String,
    /// Value labels are drawn only while the total entry count stays below
    /// this many times the horizontal zoom.
    #[serde(default = "default_max_visible_count")]
    pub max_visible_count: usize,
    #[serde(default = "default_highlight_line_width")]
    pub highlight_line_width: f64,
    #[serde(default = "default_value_digits")]
    pub value_digits: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LineChartConfigJsonContractV1 {
    schema_version: u32,
    config: LineChartConfig,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            content_offsets: ContentOffsets::default(),
            start_at_zero: true,
            use_morph: false,
            draw_values: true,
            draw_unit_in_chart: false,
            unit: String::new(),
            max_visible_count: default_max_visible_count(),
            highlight_line_width: default_highlight_line_width(),
            value_digits: default_value_digits(),
        }
    }

    #[must_use]
    pub fn with_content_offsets(mut self, content_offsets: ContentOffsets) -> Self {
        self.content_offsets = content_offsets;
        self
    }

    #[must_use]
    pub fn with_start_at_zero(mut self, start_at_zero: bool) -> Self {
        self.start_at_zero = start_at_zero;
        self
    }

    #[must_use]
    pub fn with_use_morph(mut self, use_morph: bool) -> Self {
        self.use_morph = use_morph;
        self
    }

    #[must_use]
    pub fn with_draw_values(mut self, draw_values: bool) -> Self {
        self.draw_values = draw_values;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self.draw_unit_in_chart = true;
        self
    }

    #[must_use]
    pub fn with_max_visible_count(mut self, max_visible_count: usize) -> Self {
        self.max_visible_count = max_visible_count;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.highlight_line_width.is_finite() || self.highlight_line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "highlight line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = LineChartConfigJsonContractV1 {
            schema_version: LINE_CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Accepts either a bare config object or the versioned contract.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config = if let Ok(config) = serde_json::from_str::<Self>(input) {
            config
        } else {
            let payload: LineChartConfigJsonContractV1 =
                serde_json::from_str(input).map_err(|e| {
                    ChartError::InvalidConfig(format!("failed to parse config json: {e}"))
                })?;
            if payload.schema_version != LINE_CHART_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

fn default_max_visible_count() -> usize {
    100
}

fn default_highlight_line_width() -> f64 {
    3.0
}

fn default_value_digits() -> u8 {
    1
}
