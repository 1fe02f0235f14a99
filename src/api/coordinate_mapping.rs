use crate::core::{LineSegment, Point};
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    /// Screen offset of `point` relative to the current unit.
    #[must_use]
    pub fn map_point_to_screen(&self, point: Point) -> f64 {
        self.map_unit_to_screen(point as f64)
    }

    /// `(unit - current_unit) * resolution`.
    #[must_use]
    pub fn map_unit_to_screen(&self, unit: f64) -> f64 {
        (unit - self.current_unit) * self.resolution
    }

    /// Inverse of [`Self::map_unit_to_screen`].
    #[must_use]
    pub fn map_screen_to_point(&self, screen_x: f64) -> f64 {
        screen_x / self.resolution + self.current_unit
    }

    /// Width between left and right padding.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        f64::from(self.viewport.width) - self.padding.left - self.padding.right
    }

    /// Pixel x where the current unit is drawn: the centre of the inner area.
    #[must_use]
    pub fn screen_anchor_x(&self) -> f64 {
        self.padding.left + self.inner_width() / 2.0
    }

    #[must_use]
    pub fn map_point_to_pixel(&self, point: Point) -> f64 {
        self.map_unit_to_pixel(point as f64)
    }

    #[must_use]
    pub fn map_unit_to_pixel(&self, unit: f64) -> f64 {
        self.screen_anchor_x() + self.map_unit_to_screen(unit)
    }

    #[must_use]
    pub fn map_pixel_to_point(&self, pixel_x: f64) -> f64 {
        self.map_screen_to_point(pixel_x - self.screen_anchor_x())
    }

    /// Converts a pixel distance into a point distance at the current zoom.
    #[must_use]
    pub fn pixels_to_units(&self, pixels: f64) -> f64 {
        pixels / self.resolution
    }

    #[must_use]
    pub fn units_to_pixels(&self, units: f64) -> f64 {
        units * self.resolution
    }
}
