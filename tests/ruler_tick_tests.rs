use scale_chart::core::{ScaleDefinition, ScaleLadder, tick_marks};

#[test]
fn coarsest_dividing_scale_owns_each_tick() {
    let ladder = ScaleLadder::clock_default();
    let ticks = tick_marks(&ladder, 6400.0, 0.0, 7200.0);

    let points: Vec<i64> = ticks.iter().map(|tick| tick.point).collect();
    assert_eq!(points, vec![0, 1800, 3600, 5400, 7200]);

    let owners: Vec<i64> = ticks.iter().map(|tick| tick.scale.unit_size()).collect();
    assert_eq!(owners, vec![14_400, 1_800, 3_600, 1_800, 7_200]);
}

#[test]
fn labels_follow_text_density() {
    let ladder = ScaleLadder::clock_default();
    let ticks = tick_marks(&ladder, 6400.0, 0.0, 3600.0);

    let labels: Vec<Option<String>> = ticks.iter().map(|tick| tick.label()).collect();
    assert_eq!(
        labels,
        vec![Some("00:00".to_owned()), None, Some("01:00".to_owned())]
    );
}

#[test]
fn fractional_range_only_covers_whole_points_inside_it() {
    let ladder = ScaleLadder::new(vec![
        ScaleDefinition::new(10, 100.0, 100.0, 0.5).expect("valid scale"),
    ])
    .expect("valid ladder");

    let ticks = tick_marks(&ladder, 50.0, 0.5, 30.5);
    let points: Vec<i64> = ticks.iter().map(|tick| tick.point).collect();
    assert_eq!(points, vec![10, 20, 30]);
    assert!(ticks.iter().all(|tick| tick.labeled));
}

#[test]
fn empty_or_invalid_ranges_produce_no_ticks() {
    let ladder = ScaleLadder::clock_default();

    assert!(tick_marks(&ladder, 6400.0, 100.0, 50.0).is_empty());
    assert!(tick_marks(&ladder, 6400.0, f64::NAN, 50.0).is_empty());
    assert!(tick_marks(&ladder, 6400.0, 1.0, 1700.0).is_empty());
}
