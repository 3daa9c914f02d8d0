use tracing::trace;

use crate::core::Highlight;
use crate::render::{LinePrimitive, RenderFrame};

use super::{DrawContext, LineChartRenderer};

impl LineChartRenderer {
    /// Crosshair through each highlighted entry: a vertical line over the full
    /// value height and a horizontal line over the full index domain.
    pub fn draw_highlights(
        &self,
        ctx: &DrawContext<'_>,
        highlights: &[Highlight],
        frame: &mut RenderFrame,
    ) {
        let paint = self.paints.highlight;
        let range = ctx.range;

        for highlight in highlights {
            let Some(data_set) = ctx.data.data_set(highlight.data_set_index) else {
                trace!(
                    data_set_index = highlight.data_set_index,
                    "skipping highlight for missing series"
                );
                continue;
            };

            let x = highlight.x_index as f64;
            if x > range.delta_x * ctx.phase.phase_x() {
                continue;
            }
            let Some(value) = data_set.value_for_x_index(highlight.x_index) else {
                continue;
            };
            let y = value * ctx.phase.phase_y();

            let mut points = [
                x,
                range.y_chart_max,
                x,
                range.y_chart_min,
                0.0,
                y,
                range.delta_x,
                y,
            ];
            ctx.transformer.point_values_to_pixel(&mut points);

            let color = data_set.highlight_color();
            for segment in points.chunks_exact(4) {
                frame.push_line(
                    LinePrimitive::new(
                        segment[0],
                        segment[1],
                        segment[2],
                        segment[3],
                        self.highlight_line_width,
                        color,
                    )
                    .with_stroke_style(paint.stroke_style),
                );
            }
        }
    }
}
