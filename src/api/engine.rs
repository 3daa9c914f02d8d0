use tracing::{debug, trace};

use crate::core::{
    AffineTransformer, AnimationPhase, ContentBounds, Highlight, LineData, ValueRange,
};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{DrawContext, LineChartConfig, LineChartRenderer};

/// Host-side driver: owns data, coordinate mapping, animation phase and a
/// backend, and renders one frame per call.
pub struct LineChartEngine<R: Renderer> {
    renderer: R,
    bounds: ContentBounds,
    data: LineData,
    range: ValueRange,
    transformer: AffineTransformer,
    zoom: (f64, f64),
    phase: AnimationPhase,
    highlights: Vec<Highlight>,
    chart: LineChartRenderer,
}

impl<R: Renderer> LineChartEngine<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let bounds = ContentBounds::new(config.viewport, config.content_offsets)?;
        let range = ValueRange::default();
        let transformer = AffineTransformer::prepare(range, bounds)?;

        Ok(Self {
            renderer,
            bounds,
            data: LineData::default(),
            range,
            transformer,
            zoom: (1.0, 1.0),
            phase: AnimationPhase::REVEALED,
            highlights: Vec::new(),
            chart: LineChartRenderer::from_config(&config),
        })
    }

    /// Replaces all series and recomputes the value window and transform.
    pub fn set_data(&mut self, data: LineData) -> ChartResult<()> {
        let (range, transformer) = self.fit(&data, self.chart.start_at_zero())?;
        debug!(
            series = data.data_set_count(),
            entries = data.y_val_count(),
            y_min = range.y_chart_min,
            y_max = range.y_chart_max,
            delta_x = range.delta_x,
            "set line data"
        );
        self.data = data;
        self.range = range;
        self.transformer = transformer;
        Ok(())
    }

    /// Toggles zero anchoring of the value axis and refits the current data.
    ///
    /// Prefer this over `chart_mut().set_start_at_zero(..)`, which leaves the
    /// value window stale until the next [`Self::set_data`].
    pub fn set_start_at_zero(&mut self, start_at_zero: bool) -> ChartResult<()> {
        let (range, transformer) = self.fit(&self.data, start_at_zero)?;
        debug!(
            start_at_zero,
            y_min = range.y_chart_min,
            y_max = range.y_chart_max,
            "refit value range"
        );
        self.chart.set_start_at_zero(start_at_zero);
        self.range = range;
        self.transformer = transformer;
        Ok(())
    }

    fn fit(
        &self,
        data: &LineData,
        start_at_zero: bool,
    ) -> ChartResult<(ValueRange, AffineTransformer)> {
        let range = ValueRange::from_data(data, start_at_zero);
        let transformer = AffineTransformer::prepare(range, self.bounds)?
            .with_zoom(self.bounds, self.zoom.0, self.zoom.1)?;
        Ok((range, transformer))
    }

    #[must_use]
    pub fn data(&self) -> &LineData {
        &self.data
    }

    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn bounds(&self) -> ContentBounds {
        self.bounds
    }

    #[must_use]
    pub fn transformer(&self) -> &AffineTransformer {
        &self.transformer
    }

    /// Zooms about the content's bottom-left corner.
    pub fn zoom(&mut self, scale_x: f64, scale_y: f64) -> ChartResult<()> {
        self.transformer = self.transformer.with_zoom(self.bounds, scale_x, scale_y)?;
        self.zoom = (scale_x, scale_y);
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Advances the animation; values are clamped into `[0, 1]`.
    pub fn set_phase(&mut self, phase_x: f64, phase_y: f64) {
        self.phase = AnimationPhase::new(phase_x, phase_y);
    }

    pub fn highlight_values(&mut self, highlights: Vec<Highlight>) {
        self.highlights = highlights;
    }

    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn set_selected_value_index(&mut self, index: Option<usize>) {
        self.chart.set_selected_value_index(index);
    }

    #[must_use]
    pub fn chart(&self) -> &LineChartRenderer {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut LineChartRenderer {
        &mut self.chart
    }

    /// Runs all draw phases for the current state.
    pub fn build_frame(&mut self) -> RenderFrame {
        let ctx = DrawContext {
            data: &self.data,
            transformer: &self.transformer,
            bounds: self.bounds,
            range: self.range,
            phase: self.phase,
        };
        let frame = self.chart.draw_frame(&ctx, &self.highlights);
        trace!(
            commands = frame.len(),
            phase_x = self.phase.phase_x(),
            phase_y = self.phase.phase_y(),
            "built line chart frame"
        );
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
