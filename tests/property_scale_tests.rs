use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use scale_chart::core::{POINTS_PER_DAY, ScaleDefinition, TimeNormalizer};

proptest! {
    #[test]
    fn labels_are_constant_within_one_unit(unit in 1i64..100_000, k in 0i64..10_000) {
        let scale = ScaleDefinition::new(unit, 1.0, 1.0, 0.5).expect("scale");
        let first = k * unit;
        let last = first + unit - 1;
        prop_assert_eq!(scale.label(first), scale.label(last));
        prop_assert_eq!(scale.label(first), k.to_string());
    }

    #[test]
    fn labels_are_monotonic(unit in 1i64..100_000, a in 0i64..1_000_000, b in 0i64..1_000_000) {
        let scale = ScaleDefinition::new(unit, 1.0, 1.0, 0.5).expect("scale");
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_label: i64 = scale.label(lo).parse().expect("numeric label");
        let hi_label: i64 = scale.label(hi).parse().expect("numeric label");
        prop_assert!(lo_label <= hi_label);
    }

    #[test]
    fn normalized_points_stay_within_one_day(
        day in 1u32..28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
        millis in 0i64..1000
    ) {
        let timestamp = Utc
            .with_ymd_and_hms(2024, 2, day, hour, minute, second)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::milliseconds(millis);
        let point = TimeNormalizer::new(Utc).to_point(&timestamp);

        prop_assert!((0..POINTS_PER_DAY).contains(&point));
        prop_assert_eq!(point, i64::from(hour * 3600 + minute * 60 + second));
    }
}
