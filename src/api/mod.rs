mod config;
mod data_renderer;
mod engine;
mod highlight_renderer;
mod line_chart_renderer;
mod paint;
mod point_renderer;
mod value_formatter;
mod value_renderer;

pub use config::{LINE_CHART_CONFIG_JSON_SCHEMA_V1, LineChartConfig};
pub use engine::LineChartEngine;
pub use line_chart_renderer::{DrawContext, LineChartRenderer, SelectedPointDrawnListener};
pub use paint::{Paint, PaintRole, PaintSet, PointStyle};
pub use value_formatter::{DefaultValueFormatter, ValueFormatter};
