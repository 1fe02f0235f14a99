mod common;

use approx::assert_relative_eq;
use scale_chart::ScaleChartError;
use scale_chart::core::LineSegment;

#[test]
fn sample_event_maps_to_expected_screen_offset() {
    let mut engine = common::build_engine();
    engine.set_segments(common::sample_day());
    engine.set_resolution(0.01).expect("valid resolution");

    let first = &engine.segments()[0];
    assert_eq!((first.start_point(), first.end_point()), (1800, 2700));
    assert_eq!(engine.current_unit(), 0.0);
    assert_relative_eq!(engine.map_point_to_screen(1800), 18.0, epsilon = 1e-12);
}

#[test]
fn screen_mapping_inverts_point_mapping() {
    let mut engine = common::build_engine();
    engine.scroll_to(43_200.5).expect("scroll");
    engine.set_resolution(0.37).expect("valid resolution");

    for point in [0, 1, 1800, 43_200, 86_399] {
        let screen = engine.map_point_to_screen(point);
        assert_relative_eq!(
            engine.map_screen_to_point(screen),
            point as f64,
            epsilon = 1e-9
        );
    }
}

#[test]
fn current_unit_sits_at_inner_area_centre() {
    let engine = common::build_engine();

    // Default padding: 4px left, 0px right.
    assert_relative_eq!(engine.inner_width(), 996.0);
    assert_relative_eq!(engine.screen_anchor_x(), 502.0);
    assert_relative_eq!(engine.map_point_to_pixel(0), 502.0);
    assert_relative_eq!(engine.map_pixel_to_point(502.0), 0.0);
    assert_relative_eq!(engine.map_point_to_pixel(400), 512.0, epsilon = 1e-9);
}

#[test]
fn default_state_matches_initial_contract() {
    let engine = common::build_engine();

    assert_eq!(engine.current_unit(), 0.0);
    assert!(engine.is_scrollable());
    assert!(engine.segments().is_empty());
    assert_relative_eq!(engine.resolution(), 0.025);
    assert_relative_eq!(engine.units_per_inch(), 6400.0);
}

#[test]
fn non_positive_resolution_is_rejected() {
    let mut engine = common::build_engine();

    for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = engine
            .set_resolution(value)
            .expect_err("invalid resolution must fail");
        assert!(matches!(err, ScaleChartError::InvalidConfiguration(_)));
    }
    assert_relative_eq!(engine.resolution(), 0.025);
}

#[test]
fn units_per_inch_is_reciprocal_to_resolution() {
    let mut engine = common::build_engine();

    engine.set_units_per_inch(1500.0).expect("zoom in");
    assert_relative_eq!(engine.resolution(), 160.0 / 1500.0);
    assert_eq!(engine.active_scale().map(|s| s.unit_size()), Some(300));

    let err = engine.set_units_per_inch(0.0).expect_err("zero upi");
    assert!(matches!(err, ScaleChartError::InvalidConfiguration(_)));
}
