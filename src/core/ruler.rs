use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Point, ScaleDefinition, ScaleLadder};

/// Upper bound of ticks one scale may contribute to a single pass.
pub const MAX_TICKS_PER_SCALE: usize = 10_000;

/// One ruler tick, owned by the coarsest visible scale dividing its point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub point: Point,
    pub scale: ScaleDefinition,
    pub labeled: bool,
}

impl TickMark {
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.labeled.then(|| self.scale.label(self.point))
    }
}

/// Ticks covering `[start_unit, end_unit]` at the given zoom.
pub fn tick_marks(
    ladder: &ScaleLadder,
    units_per_inch: f64,
    start_unit: f64,
    end_unit: f64,
) -> Vec<TickMark> {
    if !start_unit.is_finite() || !end_unit.is_finite() || start_unit > end_unit {
        return Vec::new();
    }

    let first = start_unit.ceil() as Point;
    let last = end_unit.floor() as Point;
    let mut owners: BTreeMap<Point, ScaleDefinition> = BTreeMap::new();

    // Finest first so coarser scales overwrite shared positions.
    for scale in ladder.visible_scales(units_per_inch).into_iter().rev() {
        let unit = scale.unit_size();
        let divisible_start = scale.first_tick_at_or_after(first);
        if divisible_start > last {
            continue;
        }
        let count = ((last - divisible_start) / unit) as usize + 1;
        if count > MAX_TICKS_PER_SCALE {
            warn!(
                unit,
                count, "skipping scale producing too many ticks for one pass"
            );
            continue;
        }
        let mut point = divisible_start;
        while point <= last {
            owners.insert(point, *scale);
            point += unit;
        }
    }

    owners
        .into_iter()
        .map(|(point, scale)| TickMark {
            point,
            scale,
            labeled: scale.shows_text_at(units_per_inch),
        })
        .collect()
}
