use line_chart_rs::core::{
    CoordinateTransformer, Highlight, LineData, LineDataSet, ValueRange, Viewport,
};
use line_chart_rs::render::{Color, NullRenderer, ShapePaint};
use line_chart_rs::{ChartError, LineChartConfig, LineChartEngine};

fn engine() -> LineChartEngine<NullRenderer> {
    let config = LineChartConfig::new(Viewport::new(200, 150));
    LineChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn two_series() -> LineData {
    LineData::new(vec![
        LineDataSet::from_values("multi", &[1.0, 2.0, 3.0])
            .with_colors([Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)]),
        LineDataSet::from_values("smooth", &[3.0, 1.0, 2.0])
            .with_cubic(0.2)
            .with_draw_filled(true),
    ])
}

#[test]
fn empty_chart_renders_an_empty_frame() {
    let mut engine = engine();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.last_path_count, 0);
    assert_eq!(engine.value_range(), ValueRange::default());
}

#[test]
fn full_frame_contains_every_draw_phase() {
    let mut engine = engine();
    engine.set_data(two_series()).expect("set data");
    assert_eq!(engine.value_range(), ValueRange::new(0.0, 3.0, 2.0));

    engine.render().expect("render");
    let renderer = engine.renderer();
    // Two segments plus one stem per point.
    assert_eq!(renderer.last_line_count, 8);
    // The filled spline is a single closed fill path.
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_circle_count, 12);
    assert_eq!(renderer.last_text_count, 6);

    engine.highlight_values(vec![Highlight::new(0, 1)]);
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_line_count, 10);
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn filled_cubic_series_emits_only_its_fill() {
    let mut engine = engine();
    engine
        .set_data(LineData::new(vec![
            LineDataSet::from_values("smooth", &[3.0, 1.0, 2.0])
                .with_cubic(0.2)
                .with_draw_filled(true),
        ]))
        .expect("set data");

    let frame = engine.build_frame();
    let paths: Vec<_> = frame.paths().collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].paint, ShapePaint::Fill);

    engine
        .set_data(LineData::new(vec![
            LineDataSet::from_values("smooth", &[3.0, 1.0, 2.0]).with_cubic(0.2),
        ]))
        .expect("set data");
    let frame = engine.build_frame();
    let paths: Vec<_> = frame.paths().collect();
    assert_eq!(paths.len(), 1);
    assert!(matches!(paths[0].paint, ShapePaint::Stroke { .. }));
}

#[test]
fn set_start_at_zero_refits_current_data() {
    let config = LineChartConfig::new(Viewport::new(200, 150)).with_start_at_zero(false);
    let mut engine = LineChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine
        .set_data(LineData::new(vec![LineDataSet::from_values("s", &[5.0, 10.0])]))
        .expect("set data");
    assert_eq!(engine.value_range().y_chart_min, 5.0);
    let mut before = [0.0, 5.0];
    engine.transformer().point_values_to_pixel(&mut before);

    engine.set_start_at_zero(true).expect("refit");
    assert!(engine.chart().start_at_zero());
    assert_eq!(engine.value_range().y_chart_min, 0.0);
    assert_eq!(engine.value_range().y_chart_max, 10.0);
    let mut after = [0.0, 5.0];
    engine.transformer().point_values_to_pixel(&mut after);
    assert!(after[1] < before[1]);

    engine.set_start_at_zero(false).expect("refit");
    assert_eq!(engine.value_range().y_chart_min, 5.0);
}

#[test]
fn animation_start_reveals_nothing() {
    let mut engine = engine();
    engine.set_data(two_series()).expect("set data");
    engine.set_phase(0.0, 0.0);

    let frame = engine.build_frame();
    assert!(frame.is_empty());
}

#[test]
fn phase_is_clamped() {
    let mut engine = engine();
    engine.set_phase(2.0, -1.0);
    assert_eq!(engine.phase().phase_x(), 1.0);
    assert_eq!(engine.phase().phase_y(), 0.0);
}

#[test]
fn zoom_scales_label_threshold() {
    let mut engine = engine();
    engine.chart_mut().set_max_visible_count(3);
    engine.set_data(two_series()).expect("set data");

    assert_eq!(engine.build_frame().texts().count(), 0);

    engine.zoom(5.0, 1.0).expect("zoom");
    assert_eq!(engine.transformer().scale_x(), 5.0);
    assert!(engine.build_frame().texts().count() > 0);
}

#[test]
fn invalid_zoom_and_config_are_rejected() {
    let mut engine = engine();
    assert!(matches!(engine.zoom(0.0, 1.0), Err(ChartError::InvalidData(_))));

    let config = LineChartConfig::new(Viewport::new(0, 10));
    assert!(matches!(
        LineChartEngine::new(NullRenderer::default(), config),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn full_reveal_captures_snapshots_for_morph() {
    let config = LineChartConfig::new(Viewport::new(200, 150)).with_use_morph(true);
    let mut engine = LineChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_data(two_series()).expect("set data");
    engine.render().expect("render");
    assert_eq!(engine.chart().snapshots().len(), 2);

    engine
        .set_data(LineData::new(vec![LineDataSet::from_values("only", &[1.0, 1.0])]))
        .expect("set data");
    engine.render().expect("render");
    assert_eq!(engine.chart().snapshots().len(), 1);
}
