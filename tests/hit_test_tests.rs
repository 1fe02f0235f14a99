mod common;

use scale_chart::core::Segment;

#[test]
fn overlapping_segments_resolve_to_top_drawn_segment() {
    let mut engine = common::build_engine();
    engine.set_segments(vec![
        Segment::new(7200, 7320, "A"),
        Segment::new(7200, 7260, "B"),
    ]);
    engine.set_resolution(1.0).expect("resolution");
    engine.scroll_to(7200.0).expect("scroll");

    // Screen offset 10 maps to point 7210, covered by both; B is drawn last.
    assert_eq!(engine.hit_test(10.0), Some(1));
    // Point 7290 is only inside A.
    assert_eq!(engine.hit_test(90.0), Some(0));
}

#[test]
fn uncovered_points_return_none() {
    let mut engine = common::build_engine();
    engine.set_segments(common::sample_day());
    engine.set_resolution(1.0).expect("resolution");

    // Between event1 (1800..2700) and event2 (7260..7320).
    assert_eq!(engine.hit_test(5000.0), None);
    // Before any segment and past the last.
    assert_eq!(engine.hit_test(10.0), None);
    assert_eq!(engine.hit_test(85_000.0), None);
    assert_eq!(engine.hit_test(f64::NAN), None);
}

#[test]
fn point_strictly_inside_single_segment_returns_its_index() {
    let mut engine = common::build_engine();
    engine.set_segments(common::sample_day());
    engine.set_resolution(1.0).expect("resolution");

    assert_eq!(engine.hit_test(2000.0), Some(0));
    assert_eq!(engine.hit_test(7290.0), Some(1));
    assert_eq!(engine.hit_test(80_000.0), Some(11));
}

#[test]
fn interval_is_half_open() {
    let mut engine = common::build_engine();
    engine.set_segments(vec![Segment::new(100, 200, "only")]);
    engine.set_resolution(1.0).expect("resolution");

    assert_eq!(engine.hit_test(100.0), Some(0));
    assert_eq!(engine.hit_test(199.5), Some(0));
    assert_eq!(engine.hit_test(200.0), None);
}

#[test]
fn degenerate_segments_are_never_matched() {
    let mut engine = common::build_engine();
    engine.set_segments(vec![
        Segment::new(100, 100, "empty"),
        Segment::new(300, 150, "reversed"),
    ]);
    engine.set_resolution(1.0).expect("resolution");

    assert_eq!(engine.hit_test(100.0), None);
    assert_eq!(engine.hit_test(200.0), None);
    assert_eq!(engine.hit_test(299.0), None);
}

#[test]
fn pixel_hit_test_requires_event_band() {
    let mut engine = common::build_engine();
    engine.set_segments(vec![Segment::new(7200, 7320, "A")]);
    engine.set_resolution(1.0).expect("resolution");
    engine.scroll_to(7200.0).expect("scroll");

    // Anchor is 502px; event band spans 100..=325 on a 500px tall viewport.
    assert_eq!(engine.hit_test_pixel(512.0, 200.0), Some(0));
    assert_eq!(engine.hit_test_pixel(512.0, 99.0), None);
    assert_eq!(engine.hit_test_pixel(512.0, 400.0), None);
    assert_eq!(engine.hit_test_pixel(400.0, 200.0), None);
}

#[test]
fn tap_returns_index_usable_with_segments() {
    let mut engine = common::build_engine();
    engine.set_segments(common::sample_day());
    engine.set_resolution(1.0).expect("resolution");
    engine.scroll_to(2000.0).expect("scroll");

    let index = engine.tap(502.0, 200.0).expect("tap hits event1");
    assert_eq!(engine.segments()[index].label(), "event1");
    assert_eq!(engine.tap(502.0, 10.0), None);
}
