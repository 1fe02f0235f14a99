use scale_chart::ScaleChartError;
use scale_chart::core::{ScaleDefinition, ScaleLabelFormat, ScaleLadder};

fn minute_scale() -> ScaleDefinition {
    ScaleDefinition::new(60, 130.0, 724.6, 0.5).expect("valid scale")
}

#[test]
fn quotient_label_groups_by_unit() {
    let scale = minute_scale();

    assert_eq!(scale.label(0), "0");
    assert_eq!(scale.label(59), "0");
    assert_eq!(scale.label(60), "1");
    assert_eq!(scale.label(7260), "121");
}

#[test]
fn quotient_label_truncates_negative_values_toward_zero() {
    let scale = minute_scale();

    assert_eq!(scale.label(-1), "0");
    assert_eq!(scale.label(-59), "0");
    assert_eq!(scale.label(-60), "-1");
}

#[test]
fn clock_formats_render_padded_time_of_day() {
    let minutes = minute_scale().with_label_format(ScaleLabelFormat::HourMinute);
    let seconds = ScaleDefinition::new(5, 5.5, 11.1, 0.2)
        .expect("valid scale")
        .with_label_format(ScaleLabelFormat::HourMinuteSecond);

    assert_eq!(minutes.label(7260), "02:01");
    assert_eq!(minutes.label(45_296), "12:34");
    assert_eq!(seconds.label(45_296), "12:34:56");
    assert_eq!(seconds.label(0), "00:00:00");
}

#[test]
fn malformed_definitions_are_rejected() {
    for result in [
        ScaleDefinition::new(0, 1.0, 1.0, 0.5),
        ScaleDefinition::new(-10, 1.0, 1.0, 0.5),
        ScaleDefinition::new(10, 0.0, 1.0, 0.5),
        ScaleDefinition::new(10, 1.0, f64::NAN, 0.5),
        ScaleDefinition::new(10, 1.0, 1.0, 1.5),
    ] {
        let err = result.expect_err("malformed scale must fail");
        assert!(matches!(err, ScaleChartError::InvalidConfiguration(_)));
    }
}

#[test]
fn first_tick_rounds_up_to_unit_multiple() {
    let scale = minute_scale();

    assert_eq!(scale.first_tick_at_or_after(0), 0);
    assert_eq!(scale.first_tick_at_or_after(1), 60);
    assert_eq!(scale.first_tick_at_or_after(120), 120);
    assert_eq!(scale.first_tick_at_or_after(-61), -60);
}

#[test]
fn default_ladder_is_descending_and_selects_by_zoom() {
    let ladder = ScaleLadder::clock_default();
    assert_eq!(ladder.len(), 11);
    assert_eq!(ladder.scales()[0].unit_size(), 4 * 60 * 60);
    assert_eq!(ladder.scales()[10].unit_size(), 1);

    // 6400 points per inch: only the hour scales and the 30 minute scale draw.
    let visible: Vec<i64> = ladder
        .visible_scales(6400.0)
        .iter()
        .map(|scale| scale.unit_size())
        .collect();
    assert_eq!(visible, vec![14_400, 7_200, 3_600, 1_800]);
    assert_eq!(
        ladder.active_scale(6400.0).map(|scale| scale.unit_size()),
        Some(1_800)
    );

    assert_eq!(ladder.active_scale(2.0).map(|s| s.unit_size()), Some(1));
    assert!(ladder.active_scale(2_000_000.0).is_none());
}

#[test]
fn ladder_rejects_empty_or_unordered_scales() {
    let err = ScaleLadder::new(Vec::new()).expect_err("empty ladder");
    assert!(matches!(err, ScaleChartError::InvalidConfiguration(_)));

    let unordered = vec![
        ScaleDefinition::new(60, 1.0, 1.0, 0.5).expect("valid"),
        ScaleDefinition::new(3600, 1.0, 1.0, 0.5).expect("valid"),
    ];
    let err = ScaleLadder::new(unordered).expect_err("ascending ladder");
    assert!(matches!(err, ScaleChartError::InvalidConfiguration(_)));
}
