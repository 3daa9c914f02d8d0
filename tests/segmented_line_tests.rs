use line_chart_rs::api::{DrawContext, LineChartRenderer};
use line_chart_rs::core::{
    AffineTransformer, AnimationPhase, ContentBounds, ContentOffsets, CoordinateTransformer,
    Entry, LineData, LineDataSet, PathCommand, ValueRange, Viewport,
};
use line_chart_rs::render::{Color, DashPattern, LineStrokeStyle, RenderFrame};

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn bounds() -> ContentBounds {
    ContentBounds::new(
        Viewport::new(100, 100),
        ContentOffsets::new(0.0, 0.0, 0.0, 0.0),
    )
    .expect("bounds")
}

/// Maps each x index through a fixed pixel table and flips y.
struct TableTransformer {
    x_pixels: Vec<f64>,
}

impl CoordinateTransformer for TableTransformer {
    fn point_values_to_pixel(&self, points: &mut [f64]) {
        for pair in points.chunks_exact_mut(2) {
            pair[0] = self.x_pixels[pair[0] as usize];
            pair[1] = 100.0 - pair[1];
        }
    }

    fn pixels_to_value(&self, points: &mut [f64]) {
        for pair in points.chunks_exact_mut(2) {
            pair[1] = 100.0 - pair[1];
        }
    }

    fn scale_x(&self) -> f64 {
        1.0
    }
}

fn draw_lines(
    data: &LineData,
    transformer: &dyn CoordinateTransformer,
    phase: AnimationPhase,
) -> RenderFrame {
    let bounds = bounds();
    let ctx = DrawContext {
        data,
        transformer,
        bounds,
        range: ValueRange::new(0.0, 100.0, 100.0),
        phase,
    };
    let mut frame = RenderFrame::new(bounds.viewport());
    LineChartRenderer::new().draw_data(&ctx, &mut frame);
    frame
}

fn two_color_series(count: usize) -> LineDataSet {
    let entries = (0..count).map(|i| Entry::new(i * 10, 50.0)).collect();
    LineDataSet::new("multi", entries).with_colors([RED, BLUE])
}

fn affine() -> AffineTransformer {
    AffineTransformer::prepare(ValueRange::new(0.0, 100.0, 100.0), bounds()).expect("transformer")
}

#[test]
fn segment_colors_cycle_through_palette() {
    let data = LineData::new(vec![two_color_series(6)]);
    let frame = draw_lines(&data, &affine(), AnimationPhase::REVEALED);

    let colors: Vec<Color> = frame.lines().map(|line| line.color).collect();
    assert_eq!(colors, vec![RED, BLUE, RED, BLUE, RED]);
    assert_eq!(frame.paths().count(), 0);

    let first = frame.lines().next().expect("first segment");
    assert_eq!((first.x1, first.y1, first.x2, first.y2), (0.0, 50.0, 10.0, 50.0));
}

#[test]
fn first_start_point_past_right_edge_ends_the_series() {
    let entries = (0..5).map(|i| Entry::new(i, 50.0)).collect();
    let data = LineData::new(vec![LineDataSet::new("multi", entries).with_colors([RED, BLUE])]);
    // Index 2 is off the right edge, index 3 is back inside.
    let transformer = TableTransformer {
        x_pixels: vec![10.0, 20.0, 150.0, 30.0, 40.0],
    };
    let frame = draw_lines(&data, &transformer, AnimationPhase::REVEALED);

    assert_eq!(frame.lines().count(), 2);
}

#[test]
fn horizontal_phase_limits_segment_count() {
    let data = LineData::new(vec![two_color_series(5)]);
    let frame = draw_lines(&data, &affine(), AnimationPhase::new(0.5, 1.0));
    assert_eq!(frame.lines().count(), 2);

    let frame = draw_lines(&data, &affine(), AnimationPhase::new(0.0, 1.0));
    assert_eq!(frame.lines().count(), 0);
}

#[test]
fn vertical_phase_scales_segment_endpoints() {
    let data = LineData::new(vec![two_color_series(3)]);
    let frame = draw_lines(&data, &affine(), AnimationPhase::new(1.0, 0.5));
    for line in frame.lines() {
        assert_eq!(line.y1, 75.0);
        assert_eq!(line.y2, 75.0);
    }
}

#[test]
fn segment_starting_left_of_content_is_still_drawn() {
    let entries = vec![Entry::new(0, 50.0), Entry::new(1, 50.0), Entry::new(2, 50.0)];
    let data = LineData::new(vec![LineDataSet::new("multi", entries).with_colors([RED, BLUE])]);
    let transformer = TableTransformer {
        x_pixels: vec![-30.0, -10.0, 20.0],
    };
    let frame = draw_lines(&data, &transformer, AnimationPhase::REVEALED);
    assert_eq!(frame.lines().count(), 2);
}

#[test]
fn segments_carry_series_width_and_dash() {
    let dash = DashPattern::new(4.0, 2.0, 0.0);
    let data = LineData::new(vec![
        two_color_series(3)
            .with_line_width(2.5)
            .with_dash(Some(dash)),
    ]);
    let frame = draw_lines(&data, &affine(), AnimationPhase::REVEALED);
    for line in frame.lines() {
        assert_eq!(line.stroke_width, 2.5);
        assert_eq!(line.stroke_style, LineStrokeStyle::Dashed(dash));
    }
}

#[test]
fn cubic_mode_takes_precedence_over_palette() {
    let data = LineData::new(vec![two_color_series(4).with_cubic(0.2)]);
    let frame = draw_lines(&data, &affine(), AnimationPhase::REVEALED);

    assert_eq!(frame.lines().count(), 0);
    let path = frame.paths().next().expect("cubic path");
    assert_eq!(path.color, RED);
    assert!(matches!(path.path.commands()[1], PathCommand::CubicTo { .. }));
}

#[test]
fn single_color_series_is_one_path() {
    let entries = (0..4).map(|i| Entry::new(i * 10, 20.0)).collect();
    let data = LineData::new(vec![LineDataSet::new("single", entries).with_color(BLUE)]);
    let frame = draw_lines(&data, &affine(), AnimationPhase::REVEALED);

    assert_eq!(frame.lines().count(), 0);
    assert_eq!(frame.paths().count(), 1);
}
