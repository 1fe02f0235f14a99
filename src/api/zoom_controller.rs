use tracing::debug;

use crate::core::{LineSegment, ScaleDefinition, ScaleLadder};
use crate::error::{ScaleChartError, ScaleChartResult};
use crate::extensions::ScaleChartEvent;
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    /// Pixels per point.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Sets the zoom level in pixels per point.
    pub fn set_resolution(&mut self, resolution: f64) -> ScaleChartResult<()> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(ScaleChartError::InvalidConfiguration(format!(
                "resolution must be finite and > 0, got {resolution}"
            )));
        }
        if resolution == self.resolution {
            return Ok(());
        }

        debug!(
            resolution,
            units_per_inch = self.pixels_per_inch / resolution,
            "set resolution"
        );
        self.resolution = resolution;
        self.emit_plugin_event(ScaleChartEvent::ResolutionChanged { resolution });
        Ok(())
    }

    #[must_use]
    pub fn pixels_per_inch(&self) -> f64 {
        self.pixels_per_inch
    }

    /// Zoom expressed as points per physical inch.
    #[must_use]
    pub fn units_per_inch(&self) -> f64 {
        self.pixels_per_inch / self.resolution
    }

    pub fn set_units_per_inch(&mut self, units_per_inch: f64) -> ScaleChartResult<()> {
        if !units_per_inch.is_finite() || units_per_inch <= 0.0 {
            return Err(ScaleChartError::InvalidConfiguration(format!(
                "units per inch must be finite and > 0, got {units_per_inch}"
            )));
        }
        self.set_resolution(self.pixels_per_inch / units_per_inch)
    }

    #[must_use]
    pub fn units_per_inch_limits(&self) -> (f64, f64) {
        (self.min_units_per_inch, self.max_units_per_inch)
    }

    /// Sets the clamp range applied to pinch zoom.
    pub fn set_units_per_inch_limits(&mut self, min: f64, max: f64) -> ScaleChartResult<()> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ScaleChartError::InvalidConfiguration(
                "units per inch limits must be finite, > 0 and ordered".to_owned(),
            ));
        }
        self.min_units_per_inch = min;
        self.max_units_per_inch = max;
        Ok(())
    }

    /// Centres the bounds and zooms so the whole bound span fits the inner
    /// width minus `margin_px`, then disables gesture scrolling.
    pub fn fit_to_bounds(&mut self, margin_px: f64) -> ScaleChartResult<()> {
        if !margin_px.is_finite() || margin_px < 0.0 {
            return Err(ScaleChartError::InvalidData(
                "fit margin must be finite and >= 0".to_owned(),
            ));
        }
        let available_px = self.inner_width() - margin_px;
        if available_px <= 0.0 {
            return Err(ScaleChartError::InvalidConfiguration(format!(
                "no room to fit bounds: {available_px}px available"
            )));
        }

        self.scroll_to(self.bounds.midpoint())?;
        self.set_resolution(available_px / self.bounds.length as f64)?;
        self.set_scrollable(false);
        Ok(())
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleLadder {
        &self.scales
    }

    pub fn set_scales(&mut self, scales: ScaleLadder) -> ScaleChartResult<()> {
        self.scales = scales.validate()?;
        debug!(count = self.scales.len(), "set scale ladder");
        Ok(())
    }

    /// Finest scale whose ticks are drawn at the current zoom.
    #[must_use]
    pub fn active_scale(&self) -> Option<&ScaleDefinition> {
        self.scales.active_scale(self.units_per_inch())
    }
}
