use line_chart_rs::core::resolve_fill_baseline;
use proptest::prelude::*;

proptest! {
    #[test]
    fn start_at_zero_always_yields_zero(
        series_min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        collection_min in -1_000.0f64..1_000.0,
        chart_min in -2_000.0f64..0.0,
        chart_max in 0.0f64..2_000.0
    ) {
        let baseline = resolve_fill_baseline(
            series_min,
            series_min + span,
            collection_min.min(series_min),
            collection_min.max(series_min + span),
            chart_max,
            chart_min,
            true,
        );
        prop_assert_eq!(baseline, 0.0);
    }

    #[test]
    fn baseline_is_zero_or_a_chart_bound(
        series_min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        collection_min in -1_000.0f64..1_000.0,
        collection_max in -1_000.0f64..1_000.0,
        chart_min in -2_000.0f64..2_000.0,
        chart_max in -2_000.0f64..2_000.0
    ) {
        let series_max = series_min + span;
        let baseline = resolve_fill_baseline(
            series_min,
            series_max,
            collection_min.min(series_min),
            collection_max.max(series_max),
            chart_max,
            chart_min,
            false,
        );
        prop_assert!(baseline == 0.0 || baseline == chart_min || baseline == chart_max);
        if series_min < 0.0 && series_max > 0.0 {
            prop_assert_eq!(baseline, 0.0);
        }
    }
}
