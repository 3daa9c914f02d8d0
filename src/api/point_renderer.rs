use tracing::trace;

use crate::core::{SeriesKey, sample_y};
use crate::render::{CirclePrimitive, LinePrimitive, RenderFrame, ShapePaint};

use super::{DrawContext, LineChartRenderer, PointStyle};

impl LineChartRenderer {
    /// Point indicators: a dashed stem from the bottom edge, a filled inner
    /// circle and a stroked outer circle per revealed entry.
    ///
    /// The selected entry is drawn with [`PointStyle::selected`] and reported
    /// to the listener before culling. A fully revealed frame captures every
    /// series' points as the next morph origin.
    pub fn draw_additional(&mut self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) {
        let bounds = ctx.bounds;
        let bottom = bounds.content_bottom();
        let phase_y = ctx.phase.phase_y();

        for (index, data_set) in ctx.data.data_sets().iter().enumerate() {
            if !data_set.is_draw_circles_enabled() || data_set.is_empty() {
                continue;
            }

            let positions = ctx
                .transformer
                .generate_transformed_values_line_scatter(data_set.entries(), 1.0);
            let previous = if self.use_morph {
                self.snapshots
                    .get(SeriesKey(index))
                    .and_then(|snapshot| snapshot.morph_origin_pixels(ctx.transformer))
            } else {
                None
            };
            let revealed = ctx.phase.revealed_count(data_set.entry_count());
            let radius = data_set.circle_size();

            for k in 0..revealed {
                let x = positions[k * 2];
                let y = positions[k * 2 + 1];
                let y = match previous.as_deref().and_then(|buffer| sample_y(buffer, k)) {
                    Some(previous_y) => previous_y + (y - previous_y) * phase_y,
                    None => y + (bottom - y) * (1.0 - phase_y),
                };

                let mut style = PointStyle::from_paints(&self.paints, data_set.circle_color_at(k));
                if self.selected_value_index == Some(k) {
                    style = style.selected();
                    if let Some(listener) = self.selected_point_listener.as_mut() {
                        listener.on_point_drawn(x, y);
                    }
                }

                if bounds.is_off_content_right(x) {
                    break;
                }
                if bounds.is_off_content_left(x)
                    || bounds.is_off_content_top(y)
                    || bounds.is_off_content_bottom(y)
                {
                    continue;
                }

                frame.push_line(
                    LinePrimitive::new(x, bottom, x, y, style.stem_width, style.stem_color)
                        .with_stroke_style(style.stem_style),
                );
                frame.push_circle(CirclePrimitive::new(
                    x,
                    y,
                    radius,
                    style.inner_color,
                    ShapePaint::Fill,
                ));
                frame.push_circle(CirclePrimitive::new(
                    x,
                    y,
                    radius,
                    style.outer_color,
                    ShapePaint::stroke(style.outer_width),
                ));
            }
            trace!(series = index, revealed, "drew point indicators");
        }

        if ctx.phase.is_fully_revealed() {
            self.capture_snapshots(ctx);
        }
    }

    fn capture_snapshots(&mut self, ctx: &DrawContext<'_>) {
        let series_count = ctx.data.data_set_count();
        self.snapshots.retain_series(series_count);
        for (index, data_set) in ctx.data.data_sets().iter().enumerate() {
            let pixels = ctx
                .transformer
                .generate_transformed_values_line_scatter(data_set.entries(), 1.0);
            self.snapshots.capture(SeriesKey(index), &pixels);
        }
        trace!(series = series_count, "captured previous-frame snapshots");
    }
}
