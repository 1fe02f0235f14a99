mod common;

use proptest::prelude::*;
use scale_chart::core::LineSegment;

proptest! {
    #[test]
    fn screen_mapping_round_trips_points(
        point in 0i64..86_400,
        current in 0.0f64..86_400.0,
        resolution in 1e-4f64..100.0
    ) {
        let mut engine = common::build_engine();
        engine.set_resolution(resolution).expect("resolution");
        engine.scroll_to(current).expect("scroll");

        let screen = engine.map_point_to_screen(point);
        let back = engine.map_screen_to_point(screen);
        prop_assert!((back - point as f64).abs() <= 1e-6);

        let pixel = engine.map_point_to_pixel(point);
        prop_assert!((engine.map_pixel_to_point(pixel) - point as f64).abs() <= 1e-6);
    }

    #[test]
    fn hit_test_matches_a_segment_containing_the_point(
        offset_px in -400.0f64..400.0,
        current in 0.0f64..86_400.0
    ) {
        let mut engine = common::build_engine();
        engine.set_segments(common::sample_day());
        engine.set_resolution(0.1).expect("resolution");
        engine.scroll_to(current).expect("scroll");

        let point = engine.map_screen_to_point(offset_px);
        match engine.hit_test(offset_px) {
            Some(index) => {
                let segment = engine.segment(index).expect("hit segment");
                prop_assert!(segment.contains(point));
                prop_assert!(engine.segments()[index + 1..]
                    .iter()
                    .all(|later| !later.contains(point)));
            }
            None => prop_assert!(engine.segments().iter().all(|s| !s.contains(point))),
        }
    }
}
