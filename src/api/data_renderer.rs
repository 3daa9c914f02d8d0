use tracing::trace;

use crate::core::{ChartPath, FillLineContext, LineDataSet, LinePathBuilder, SeriesKey};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, PathPrimitive, RenderFrame, ShapePaint,
};

use super::{DrawContext, LineChartRenderer};

impl LineChartRenderer {
    /// Series lines and fills.
    ///
    /// At the first frame of a vertical transition the captured snapshots are
    /// mapped back to value space and become the morph origin.
    pub fn draw_data(&mut self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) {
        if ctx.phase.is_transition_start() && !self.snapshots.is_empty() {
            self.snapshots.prepare_morph_origins(ctx.transformer);
        }

        for (index, data_set) in ctx.data.data_sets().iter().enumerate() {
            if data_set.is_empty() {
                trace!(series = index, "skipping empty series");
                continue;
            }

            let previous = if self.use_morph {
                self.snapshots.get(SeriesKey(index))
            } else {
                None
            };
            let builder = LinePathBuilder::new(data_set.entries(), ctx.phase, previous);
            let stroke = ShapePaint::Stroke {
                width: data_set.line_width(),
                style: LineStrokeStyle::from_dash(data_set.dash()),
            };

            if data_set.is_draw_cubic_enabled() {
                // A filled spline is drawn once, as its closed fill path.
                if !data_set.is_draw_filled_enabled() {
                    let path = builder.cubic(data_set.cubic_intensity());
                    push_path(ctx, frame, path, data_set.color(), stroke);
                }
            } else if data_set.uses_segment_palette() {
                append_segmented_lines(ctx, data_set, frame);
            } else {
                push_path(ctx, frame, builder.linear(), data_set.color(), stroke);
            }

            if data_set.is_draw_filled_enabled() {
                let baseline = self.fill_formatter.fill_line_position(&FillLineContext {
                    data_set,
                    data: ctx.data,
                    chart_max_y: ctx.range.y_chart_max,
                    chart_min_y: ctx.range.y_chart_min,
                    start_at_zero: self.start_at_zero,
                });
                let filled = if data_set.is_draw_cubic_enabled() {
                    builder.cubic_filled(data_set.cubic_intensity(), baseline)
                } else {
                    builder.linear_filled(baseline)
                };
                push_path(
                    ctx,
                    frame,
                    filled,
                    data_set.effective_fill_color(),
                    ShapePaint::Fill,
                );
            }
        }
    }
}

fn push_path(
    ctx: &DrawContext<'_>,
    frame: &mut RenderFrame,
    mut path: ChartPath,
    color: Color,
    paint: ShapePaint,
) {
    if path.is_empty() {
        return;
    }
    ctx.transformer.path_value_to_pixel(&mut path);
    frame.push_path(PathPrimitive::new(path, color, paint));
}

/// One independently colored line per segment of a multi-color series.
///
/// Points are index-ordered, so the first start point past the right edge
/// ends the series. A segment is skipped only when its start point is left
/// of the content and its y is both above and below it.
pub(super) fn append_segmented_lines(
    ctx: &DrawContext<'_>,
    data_set: &LineDataSet,
    frame: &mut RenderFrame,
) {
    let points = ctx
        .transformer
        .generate_transformed_values_line_scatter(data_set.entries(), ctx.phase.phase_y());
    let point_count = points.len() / 2;
    let segment_count = ctx.phase.revealed_count(point_count.saturating_sub(1));
    let bounds = ctx.bounds;
    let style = LineStrokeStyle::from_dash(data_set.dash());

    for segment in 0..segment_count {
        let j = segment * 2;
        let (x1, y1, x2, y2) = (points[j], points[j + 1], points[j + 2], points[j + 3]);

        if bounds.is_off_content_right(x1) {
            break;
        }
        if segment != 0
            && bounds.is_off_content_left(x1)
            && bounds.is_off_content_top(y1)
            && bounds.is_off_content_bottom(y1)
        {
            continue;
        }

        frame.push_line(
            LinePrimitive::new(
                x1,
                y1,
                x2,
                y2,
                data_set.line_width(),
                data_set.color_at(segment),
            )
            .with_stroke_style(style),
        );
    }
}
