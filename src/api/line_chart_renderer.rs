use std::fmt;

use tracing::debug;

use crate::core::{
    AnimationPhase, ContentBounds, CoordinateTransformer, DefaultFillFormatter, FillFormatter,
    Highlight, LineData, SnapshotStore, ValueRange,
};
use crate::render::RenderFrame;

use super::{DefaultValueFormatter, LineChartConfig, Paint, PaintRole, PaintSet, ValueFormatter};

/// Receives the pixel position of the selected point each time it is drawn.
pub trait SelectedPointDrawnListener {
    fn on_point_drawn(&mut self, x: f64, y: f64);
}

impl<F> SelectedPointDrawnListener for F
where
    F: FnMut(f64, f64),
{
    fn on_point_drawn(&mut self, x: f64, y: f64) {
        self(x, y)
    }
}

/// Everything a draw phase reads but does not own.
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub data: &'a LineData,
    pub transformer: &'a dyn CoordinateTransformer,
    pub bounds: ContentBounds,
    pub range: ValueRange,
    pub phase: AnimationPhase,
}

/// Per-chart line renderer state and the four draw phases.
///
/// The host calls [`Self::draw_highlights`], [`Self::draw_data`],
/// [`Self::draw_values`] and [`Self::draw_additional`] once per frame in that
/// order, or [`Self::draw_frame`] to run all four.
pub struct LineChartRenderer {
    pub(super) paints: PaintSet,
    pub(super) highlight_line_width: f64,
    pub(super) use_morph: bool,
    pub(super) start_at_zero: bool,
    pub(super) draw_values: bool,
    pub(super) draw_unit_in_chart: bool,
    pub(super) unit: String,
    pub(super) max_visible_count: usize,
    pub(super) selected_value_index: Option<usize>,
    pub(super) fill_formatter: Box<dyn FillFormatter>,
    pub(super) value_formatter: Box<dyn ValueFormatter>,
    pub(super) selected_point_listener: Option<Box<dyn SelectedPointDrawnListener>>,
    pub(super) snapshots: SnapshotStore,
}

impl LineChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            paints: PaintSet::default(),
            highlight_line_width: 3.0,
            use_morph: false,
            start_at_zero: true,
            draw_values: true,
            draw_unit_in_chart: false,
            unit: String::new(),
            max_visible_count: 100,
            selected_value_index: None,
            fill_formatter: Box::new(DefaultFillFormatter),
            value_formatter: Box::new(DefaultValueFormatter::default()),
            selected_point_listener: None,
            snapshots: SnapshotStore::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &LineChartConfig) -> Self {
        Self {
            highlight_line_width: config.highlight_line_width,
            use_morph: config.use_morph,
            start_at_zero: config.start_at_zero,
            draw_values: config.draw_values,
            draw_unit_in_chart: config.draw_unit_in_chart,
            unit: config.unit.clone(),
            max_visible_count: config.max_visible_count,
            value_formatter: Box::new(DefaultValueFormatter::new(config.value_digits)),
            ..Self::new()
        }
    }

    /// Runs the four draw phases in host order into a fresh frame.
    pub fn draw_frame(&mut self, ctx: &DrawContext<'_>, highlights: &[Highlight]) -> RenderFrame {
        let mut frame = RenderFrame::new(ctx.bounds.viewport());
        self.draw_highlights(ctx, highlights, &mut frame);
        self.draw_data(ctx, &mut frame);
        self.draw_values(ctx, &mut frame);
        self.draw_additional(ctx, &mut frame);
        frame
    }

    pub fn set_use_morph(&mut self, use_morph: bool) {
        if self.use_morph != use_morph {
            debug!(use_morph, "morph mode changed");
        }
        self.use_morph = use_morph;
    }

    #[must_use]
    pub fn use_morph(&self) -> bool {
        self.use_morph
    }

    /// Width of highlight crosshair lines, default `3.0`. Not validated.
    pub fn set_highlight_line_width(&mut self, width: f64) {
        self.highlight_line_width = width;
    }

    #[must_use]
    pub fn highlight_line_width(&self) -> f64 {
        self.highlight_line_width
    }

    #[must_use]
    pub fn paint(&self, role: PaintRole) -> Paint {
        self.paints.get(role)
    }

    pub fn set_paint(&mut self, role: PaintRole, paint: Paint) {
        self.paints.set(role, paint);
    }

    /// Installs a fill baseline policy; `None` restores the default.
    pub fn set_fill_formatter(&mut self, formatter: Option<Box<dyn FillFormatter>>) {
        self.fill_formatter = formatter.unwrap_or_else(|| Box::new(DefaultFillFormatter));
    }

    /// Installs a value label formatter; `None` restores the default.
    pub fn set_value_formatter(&mut self, formatter: Option<Box<dyn ValueFormatter>>) {
        self.value_formatter =
            formatter.unwrap_or_else(|| Box::new(DefaultValueFormatter::default()));
    }

    pub fn set_on_selected_point_drawn_listener(
        &mut self,
        listener: Option<Box<dyn SelectedPointDrawnListener>>,
    ) {
        self.selected_point_listener = listener;
    }

    /// Entry index emphasized by the point renderer; `None` clears it.
    pub fn set_selected_value_index(&mut self, index: Option<usize>) {
        self.selected_value_index = index;
    }

    #[must_use]
    pub fn selected_value_index(&self) -> Option<usize> {
        self.selected_value_index
    }

    pub fn set_start_at_zero(&mut self, start_at_zero: bool) {
        self.start_at_zero = start_at_zero;
    }

    #[must_use]
    pub fn start_at_zero(&self) -> bool {
        self.start_at_zero
    }

    pub fn set_draw_values(&mut self, draw_values: bool) {
        self.draw_values = draw_values;
    }

    /// Appends `unit` to every value label; an empty unit disables it.
    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
        self.draw_unit_in_chart = !self.unit.is_empty();
    }

    pub fn set_max_visible_count(&mut self, max_visible_count: usize) {
        self.max_visible_count = max_visible_count;
    }

    #[must_use]
    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    /// Forgets all previous-frame points; the next transition grows from zero.
    pub fn reset_snapshots(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for LineChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineChartRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineChartRenderer")
            .field("paints", &self.paints)
            .field("highlight_line_width", &self.highlight_line_width)
            .field("use_morph", &self.use_morph)
            .field("start_at_zero", &self.start_at_zero)
            .field("draw_values", &self.draw_values)
            .field("selected_value_index", &self.selected_value_index)
            .field("has_listener", &self.selected_point_listener.is_some())
            .field("snapshots", &self.snapshots.len())
            .finish_non_exhaustive()
    }
}
