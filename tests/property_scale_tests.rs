use proptest::prelude::*;
use tracklane_rs::core::{TimeScale, Viewport};

proptest! {
    #[test]
    fn time_round_trip_property(
        time_start in -1_000_000.0f64..1_000_000.0,
        time_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let time_end = time_start + time_span;
        let value = time_start + value_factor * time_span;

        let viewport = Viewport::new(2048, 64);
        let scale = TimeScale::new(time_start, time_end).expect("valid scale");

        let px = scale.time_to_pixel(value, viewport).expect("to pixel");
        let recovered = scale.pixel_to_time(px, viewport).expect("from pixel");

        prop_assert!((recovered - value).abs() <= time_span * 1e-9);
    }

    #[test]
    fn one_pixel_delta_times_width_recovers_the_span(
        time_start in -1_000_000.0f64..1_000_000.0,
        time_span in 0.001f64..1_000_000.0,
        width in 16u32..8192
    ) {
        let scale = TimeScale::new(time_start, time_start + time_span).expect("valid scale");
        let viewport = Viewport::new(width, 64);

        let per_pixel = scale
            .pixel_delta_to_duration(1.0, viewport)
            .expect("pixel delta");
        let recovered_span = per_pixel * f64::from(width);
        prop_assert!((recovered_span - time_span).abs() <= time_span * 1e-9);
    }
}
