//! line-chart-rs: line chart geometry and draw-command generation.
//!
//! Series are turned into backend-agnostic draw commands (paths, segments,
//! circles, labels) under a two-axis reveal animation, with optional
//! morphing from the previous frame's points. Backends implement
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineChartConfig, LineChartEngine, LineChartRenderer};
pub use error::{ChartError, ChartResult};
