use serde::{Deserialize, Serialize};

use crate::error::{ScaleChartError, ScaleChartResult};

/// Integer ruler coordinate: elapsed seconds since local midnight.
pub type Point = i64;

/// Number of points in one calendar day.
pub const POINTS_PER_DAY: Point = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ScaleChartResult<Self> {
        if !self.is_valid() {
            return Err(ScaleChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Inner padding of the chart area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 4.0,
            top: 4.0,
            right: 0.0,
            bottom: 0.0,
        }
    }
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> ScaleChartResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScaleChartError::InvalidConfiguration(format!(
                    "padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Scrollable point domain `[start, start + length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub start: Point,
    pub length: Point,
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self {
            start: 0,
            length: POINTS_PER_DAY,
        }
    }
}

impl ChartBounds {
    pub fn new(start: Point, length: Point) -> ScaleChartResult<Self> {
        Self { start, length }.validate()
    }

    pub fn validate(self) -> ScaleChartResult<Self> {
        if self.length <= 0 {
            return Err(ScaleChartError::InvalidConfiguration(
                "bounds length must be > 0".to_owned(),
            ));
        }
        if self.start.checked_add(self.length).is_none() {
            return Err(ScaleChartError::InvalidConfiguration(
                "bounds end overflows the point domain".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn end(self) -> Point {
        self.start + self.length
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.start as f64 + self.length as f64 / 2.0
    }

    #[must_use]
    pub fn clamp_unit(self, unit: f64) -> f64 {
        unit.clamp(self.start as f64, self.end() as f64)
    }
}
