use crate::render::{RenderFrame, TextHAlign, TextPrimitive};

use super::{DrawContext, LineChartRenderer};

/// Label lift above the point, as a multiple of the circle size.
const VALUE_OFFSET_FACTOR: f64 = 1.75;

impl LineChartRenderer {
    /// Formatted value text above each revealed, on-screen entry.
    ///
    /// Skipped entirely while the total entry count reaches
    /// `max_visible_count * scale_x`.
    pub fn draw_values(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) {
        if !self.draw_values {
            return;
        }
        let threshold = self.max_visible_count as f64 * ctx.transformer.scale_x();
        if ctx.data.y_val_count() as f64 >= threshold {
            return;
        }

        let paint = self.paints.values;
        let bounds = ctx.bounds;

        for data_set in ctx.data.data_sets() {
            let mut value_offset = (data_set.circle_size() * VALUE_OFFSET_FACTOR).floor();
            if !data_set.is_draw_circles_enabled() {
                value_offset = (value_offset / 2.0).floor();
            }

            let entries = data_set.entries();
            let positions = ctx
                .transformer
                .generate_transformed_values_line_scatter(entries, ctx.phase.phase_y());
            let revealed = ctx.phase.revealed_count(entries.len());

            for (index, entry) in entries.iter().enumerate().take(revealed) {
                let x = positions[index * 2];
                let y = positions[index * 2 + 1];

                if bounds.is_off_content_right(x) {
                    break;
                }
                if bounds.is_off_content_left(x)
                    || bounds.is_off_content_top(y)
                    || bounds.is_off_content_bottom(y)
                {
                    continue;
                }

                let mut text = self.value_formatter.format_value(entry.value);
                if self.draw_unit_in_chart {
                    text.push_str(&self.unit);
                }
                frame.push_text(TextPrimitive::new(
                    text,
                    x,
                    y - value_offset,
                    paint.text_size,
                    paint.color,
                    TextHAlign::Center,
                ));
            }
        }
    }
}
