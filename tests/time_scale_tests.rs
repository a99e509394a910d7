use approx::assert_relative_eq;
use tracklane_rs::core::{TimeScale, Viewport};

#[test]
fn scale_round_trip_within_tolerance() {
    let viewport = Viewport::new(1000, 40);
    let scale = TimeScale::new(10.0, 110.0).expect("valid scale");

    let original = 42.5;
    let px = scale.time_to_pixel(original, viewport).expect("to pixel");
    let recovered = scale.pixel_to_time(px, viewport).expect("from pixel");

    assert_relative_eq!(recovered, original, max_relative = 1e-9);
}

#[test]
fn visible_range_controls_the_mapping() {
    let viewport = Viewport::new(1000, 40);
    let mut scale = TimeScale::new(0.0, 10.0).expect("valid scale");
    scale.set_visible_range(2.0, 6.0).expect("set visible range");

    let left = scale.time_to_pixel(2.0, viewport).expect("left");
    let right = scale.time_to_pixel(6.0, viewport).expect("right");
    assert_eq!(left, 0.0);
    assert_eq!(right, 1000.0);
}

#[test]
fn pixel_delta_scales_with_the_visible_span() {
    let viewport = Viewport::new(1000, 40);
    let scale = TimeScale::new(0.0, 100.0).expect("valid scale");

    let one_px = scale
        .pixel_delta_to_duration(1.0, viewport)
        .expect("pixel delta");
    assert_relative_eq!(one_px, 0.1, max_relative = 1e-12);

    let full = scale
        .pixel_delta_to_duration(1000.0, viewport)
        .expect("pixel delta");
    assert_relative_eq!(full, 100.0, max_relative = 1e-12);
}

#[test]
fn pan_shifts_both_edges() {
    let mut scale = TimeScale::new(0.0, 10.0).expect("valid scale");
    scale.pan_visible_by_delta(5.0).expect("pan");
    assert_eq!(scale.visible_range(), (5.0, 15.0));
}

#[test]
fn zoom_clamps_to_the_minimum_span() {
    let mut scale = TimeScale::new(0.0, 10.0).expect("valid scale");
    scale
        .zoom_visible_by_factor(1000.0, 5.0, 1.0)
        .expect("zoom");

    let (start, end) = scale.visible_range();
    assert_relative_eq!(end - start, 1.0, max_relative = 1e-9);
    assert_relative_eq!((start + end) / 2.0, 5.0, max_relative = 1e-9);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(TimeScale::new(5.0, 5.0).is_err());
    assert!(TimeScale::new(10.0, 0.0).is_err());
    assert!(TimeScale::new(f64::NAN, 1.0).is_err());

    let scale = TimeScale::new(0.0, 10.0).expect("valid scale");
    let degenerate = Viewport::new(0, 0);
    assert!(scale.time_to_pixel(5.0, degenerate).is_err());
    assert!(scale.pixel_to_time(5.0, degenerate).is_err());
    assert!(
        scale
            .pixel_delta_to_duration(0.0, Viewport::new(100, 40))
            .is_err()
    );
}
