use line_chart_rs::core::{Highlight, LineData, LineDataSet, Viewport};
use line_chart_rs::render::NullRenderer;
use line_chart_rs::{LineChartConfig, LineChartEngine};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_phase_renders_a_valid_frame(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..48),
        phase_x in 0.0f64..=1.0,
        phase_y in 0.0f64..=1.0,
        cubic in any::<bool>(),
        filled in any::<bool>(),
        start_at_zero in any::<bool>()
    ) {
        let config = LineChartConfig::new(Viewport::new(640, 360))
            .with_start_at_zero(start_at_zero)
            .with_use_morph(true);
        let mut engine =
            LineChartEngine::new(NullRenderer::default(), config).expect("engine init");

        let mut series = LineDataSet::from_values("series", &values).with_draw_filled(filled);
        if cubic {
            series = series.with_cubic(0.2);
        }
        engine.set_data(LineData::new(vec![series])).expect("set data");
        engine.highlight_values(vec![Highlight::new(0, values.len() / 2)]);
        engine.render().expect("full render");

        engine.set_phase(phase_x, phase_y);
        engine.render().expect("animated render");
        prop_assert_eq!(engine.renderer().frames_rendered, 2);
    }
}
