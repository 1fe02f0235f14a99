use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Read-only contract for anything drawn as a labeled interval on the ruler.
///
/// The engine only depends on this trait, so segment sources that are not
/// time based can be plugged in without changes to layout or hit-testing.
pub trait LineSegment {
    fn start_point(&self) -> Point;
    fn end_point(&self) -> Point;
    fn text(&self) -> &str;

    /// `true` when the interval `[start, end)` covers nothing.
    fn is_degenerate(&self) -> bool {
        self.start_point() >= self.end_point()
    }

    /// Half-open containment test. Degenerate intervals never contain a point.
    fn contains(&self, point: f64) -> bool {
        !self.is_degenerate()
            && point >= self.start_point() as f64
            && point < self.end_point() as f64
    }
}

/// Immutable labeled interval with precomputed points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    start_point: Point,
    end_point: Point,
    label: String,
}

impl Segment {
    #[must_use]
    pub fn new(start_point: Point, end_point: Point, label: impl Into<String>) -> Self {
        Self {
            start_point,
            end_point,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl LineSegment for Segment {
    fn start_point(&self) -> Point {
        self.start_point
    }

    fn end_point(&self) -> Point {
        self.end_point
    }

    fn text(&self) -> &str {
        &self.label
    }
}
