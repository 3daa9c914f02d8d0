use crate::core::{LineData, LineDataSet};

/// Inputs available to a [`FillFormatter`] when it places a fill baseline.
#[derive(Debug, Clone, Copy)]
pub struct FillLineContext<'a> {
    pub data_set: &'a LineDataSet,
    pub data: &'a LineData,
    pub chart_max_y: f64,
    pub chart_min_y: f64,
    pub start_at_zero: bool,
}

/// Policy deciding the y-value a filled series is closed against.
pub trait FillFormatter {
    fn fill_line_position(&self, ctx: &FillLineContext<'_>) -> f64;
}

/// Default baseline policy, see [`resolve_fill_baseline`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFillFormatter;

impl FillFormatter for DefaultFillFormatter {
    fn fill_line_position(&self, ctx: &FillLineContext<'_>) -> f64 {
        resolve_fill_baseline(
            ctx.data_set.y_min(),
            ctx.data_set.y_max(),
            ctx.data.y_min(),
            ctx.data.y_max(),
            ctx.chart_max_y,
            ctx.chart_min_y,
            ctx.start_at_zero,
        )
    }
}

impl<F> FillFormatter for F
where
    F: Fn(&FillLineContext<'_>) -> f64,
{
    fn fill_line_position(&self, ctx: &FillLineContext<'_>) -> f64 {
        self(ctx)
    }
}

/// Baseline y for closing a fill polygon.
///
/// A series crossing zero is anchored at zero. Otherwise, unless the axis is
/// forced to start at zero, a non-negative series fills toward `0` when the
/// collection has negative values and toward `chart_min_y` otherwise; a
/// series with negative values fills toward `0` when the collection has
/// positive values and toward `chart_max_y` otherwise.
#[must_use]
pub fn resolve_fill_baseline(
    series_min: f64,
    series_max: f64,
    collection_min: f64,
    collection_max: f64,
    chart_max_y: f64,
    chart_min_y: f64,
    start_at_zero: bool,
) -> f64 {
    if series_max > 0.0 && series_min < 0.0 {
        return 0.0;
    }
    if start_at_zero {
        return 0.0;
    }

    let max = if collection_max > 0.0 { 0.0 } else { chart_max_y };
    let min = if collection_min < 0.0 { 0.0 } else { chart_min_y };
    if series_min >= 0.0 { min } else { max }
}
