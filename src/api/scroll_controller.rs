use tracing::{debug, trace};

use crate::core::{ChartBounds, LineSegment, Point};
use crate::error::{ScaleChartError, ScaleChartResult};
use crate::extensions::ScaleChartEvent;
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    #[must_use]
    pub fn current_unit(&self) -> f64 {
        self.current_unit
    }

    /// Moves the chart centre to an absolute unit, clamped into the bounds.
    ///
    /// Programmatic scrolling ignores the scrollable flag. Returns `true` when
    /// the current unit changed.
    pub fn scroll_to(&mut self, unit: f64) -> ScaleChartResult<bool> {
        if !unit.is_finite() {
            return Err(ScaleChartError::InvalidData(
                "scroll target must be finite".to_owned(),
            ));
        }

        let clamped = self.bounds.clamp_unit(unit);
        if clamped == self.current_unit {
            return Ok(false);
        }

        trace!(requested = unit, current_unit = clamped, "scroll to unit");
        self.current_unit = clamped;
        self.emit_plugin_event(ScaleChartEvent::Scrolled {
            current_unit: clamped,
        });
        Ok(true)
    }

    /// Relative form of [`Self::scroll_to`], used for paging.
    pub fn scroll_by(&mut self, delta_units: f64) -> ScaleChartResult<bool> {
        if !delta_units.is_finite() {
            return Err(ScaleChartError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }
        self.scroll_to(self.current_unit + delta_units)
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// Enables or disables drag and fling scrolling.
    pub fn set_scrollable(&mut self, enabled: bool) {
        if self.scrollable == enabled {
            return;
        }
        debug!(enabled, "set scrollable");
        self.scrollable = enabled;
        if !enabled {
            self.interaction.stop_kinetic_scroll();
        }
        self.emit_plugin_event(ScaleChartEvent::ScrollableChanged { enabled });
    }

    #[must_use]
    pub fn bounds(&self) -> ChartBounds {
        self.bounds
    }

    /// Replaces the scrollable domain with `[start, start + length]` and
    /// clamps the current unit into it.
    pub fn set_bounds(&mut self, start: Point, length: Point) -> ScaleChartResult<()> {
        let bounds = ChartBounds::new(start, length)?;
        debug!(start, length, "set chart bounds");
        self.bounds = bounds;
        self.scroll_to(self.current_unit)?;
        Ok(())
    }

    /// Unit range currently covered by the viewport, ignoring bounds.
    #[must_use]
    pub fn visible_unit_range(&self) -> (f64, f64) {
        let width = f64::from(self.viewport.width);
        let half_left = self.pixels_to_units(width - self.padding.left) / 2.0;
        let half_right = self.pixels_to_units(width - self.padding.right) / 2.0;
        (self.current_unit - half_left, self.current_unit + half_right)
    }
}
