use line_chart_rs::api::{DrawContext, LineChartRenderer, PaintRole};
use line_chart_rs::core::{
    AffineTransformer, AnimationPhase, ContentBounds, ContentOffsets, Entry, Highlight, LineData,
    LineDataSet, ValueRange, Viewport,
};
use line_chart_rs::render::{Color, LinePrimitive, RenderFrame};

const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);

fn highlight_lines(
    chart: &LineChartRenderer,
    highlights: &[Highlight],
    phase: AnimationPhase,
) -> Vec<LinePrimitive> {
    let bounds = ContentBounds::new(
        Viewport::new(100, 100),
        ContentOffsets::new(0.0, 0.0, 0.0, 0.0),
    )
    .expect("bounds");
    let range = ValueRange::new(0.0, 100.0, 100.0);
    let transformer = AffineTransformer::prepare(range, bounds).expect("transformer");
    let entries = vec![Entry::new(10, 40.0), Entry::new(20, 60.0), Entry::new(30, 80.0)];
    let data = LineData::new(vec![
        LineDataSet::new("series", entries).with_highlight_color(PURPLE),
    ]);
    let ctx = DrawContext {
        data: &data,
        transformer: &transformer,
        bounds,
        range,
        phase,
    };
    let mut frame = RenderFrame::new(bounds.viewport());
    chart.draw_highlights(&ctx, highlights, &mut frame);
    frame.lines().copied().collect()
}

#[test]
fn highlight_draws_full_height_and_full_width_lines() {
    let chart = LineChartRenderer::new();
    let lines = highlight_lines(&chart, &[Highlight::new(0, 20)], AnimationPhase::REVEALED);

    assert_eq!(lines.len(), 2);
    let (vertical, horizontal) = (lines[0], lines[1]);
    assert_eq!(
        (vertical.x1, vertical.y1, vertical.x2, vertical.y2),
        (20.0, 0.0, 20.0, 100.0)
    );
    assert_eq!(
        (horizontal.x1, horizontal.y1, horizontal.x2, horizontal.y2),
        (0.0, 40.0, 100.0, 40.0)
    );
    for line in &lines {
        assert_eq!(line.color, PURPLE);
        assert_eq!(line.stroke_width, 3.0);
        assert_eq!(line.stroke_style, chart.paint(PaintRole::Highlight).stroke_style);
    }
}

#[test]
fn highlight_width_is_configurable() {
    let mut chart = LineChartRenderer::new();
    chart.set_highlight_line_width(5.0);
    let lines = highlight_lines(&chart, &[Highlight::new(0, 10)], AnimationPhase::REVEALED);
    assert!(lines.iter().all(|line| line.stroke_width == 5.0));
}

#[test]
fn highlight_beyond_revealed_domain_is_skipped() {
    let chart = LineChartRenderer::new();
    let lines = highlight_lines(&chart, &[Highlight::new(0, 20)], AnimationPhase::new(0.1, 1.0));
    assert!(lines.is_empty());

    let lines = highlight_lines(&chart, &[Highlight::new(0, 10)], AnimationPhase::new(0.1, 1.0));
    assert_eq!(lines.len(), 2);
}

#[test]
fn horizontal_line_follows_vertical_phase() {
    let chart = LineChartRenderer::new();
    let lines = highlight_lines(&chart, &[Highlight::new(0, 20)], AnimationPhase::new(1.0, 0.5));
    assert_eq!(lines[1].y1, 70.0);
    assert_eq!(lines[1].y2, 70.0);
}

#[test]
fn unresolvable_highlights_are_ignored() {
    let chart = LineChartRenderer::new();
    let highlights = [
        Highlight::new(3, 20),
        Highlight::new(0, 15),
        Highlight::new(0, 30),
    ];
    let lines = highlight_lines(&chart, &highlights, AnimationPhase::REVEALED);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].x1, 30.0);
}
