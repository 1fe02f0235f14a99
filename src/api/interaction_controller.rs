use tracing::{trace, warn};

use crate::core::LineSegment;
use crate::error::{ScaleChartError, ScaleChartResult};
use crate::interaction::{InteractionMode, KineticScrollConfig, KineticScrollState};
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn kinetic_scroll_state(&self) -> KineticScrollState {
        self.interaction.kinetic_state()
    }

    #[must_use]
    pub fn kinetic_scroll_config(&self) -> KineticScrollConfig {
        self.interaction.kinetic_config()
    }

    pub fn set_kinetic_scroll_config(&mut self, config: KineticScrollConfig) -> ScaleChartResult<()> {
        if !config.decay_per_second.is_finite()
            || config.decay_per_second <= 0.0
            || config.decay_per_second >= 1.0
        {
            return Err(ScaleChartError::InvalidConfiguration(
                "kinetic scroll decay must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !config.stop_velocity_abs.is_finite() || config.stop_velocity_abs <= 0.0 {
            return Err(ScaleChartError::InvalidConfiguration(
                "kinetic scroll stop velocity must be finite and > 0".to_owned(),
            ));
        }
        self.interaction.set_kinetic_config(config);
        Ok(())
    }

    /// Starts a gesture: stops any kinetic scroll and anchors drags at `x`.
    pub fn pointer_down(&mut self, x: f64) {
        self.interaction.on_pointer_down(x, self.current_unit);
    }

    /// Drags the ruler so the unit under the down position follows `x`.
    ///
    /// Returns `false` without moving when scrolling is disabled.
    pub fn drag_to(&mut self, x: f64) -> ScaleChartResult<bool> {
        if !x.is_finite() {
            return Err(ScaleChartError::InvalidData(
                "drag position must be finite".to_owned(),
            ));
        }
        if !self.scrollable {
            trace!(x, "drag ignored: scrolling disabled");
            return Ok(false);
        }
        if self.interaction.mode() != InteractionMode::Dragging {
            warn!(x, "drag without pointer down; anchoring at current unit");
            self.interaction.on_pointer_down(x, self.current_unit);
        }
        let delta_px = self.interaction.down_x() - x;
        self.scroll_to(self.interaction.down_unit() + self.pixels_to_units(delta_px))
    }

    pub fn pointer_up(&mut self) {
        self.interaction.on_pointer_up();
    }

    /// Converts a release velocity into kinetic scrolling.
    ///
    /// Positive velocity (finger moving right) scrolls toward earlier units.
    pub fn fling(&mut self, velocity_px_per_sec: f64) -> ScaleChartResult<()> {
        if !velocity_px_per_sec.is_finite() {
            return Err(ScaleChartError::InvalidData(
                "fling velocity must be finite".to_owned(),
            ));
        }
        if !self.scrollable {
            trace!(velocity_px_per_sec, "fling ignored: scrolling disabled");
            return Ok(());
        }
        let velocity_units_per_sec = -self.pixels_to_units(velocity_px_per_sec);
        self.interaction.start_kinetic_scroll(velocity_units_per_sec);
        Ok(())
    }

    /// Advances kinetic scroll by one timer tick.
    ///
    /// Returns `true` when the current unit moved. Reaching a bound ends the
    /// kinetic scroll.
    pub fn step_kinetic_scroll(&mut self, delta_seconds: f64) -> ScaleChartResult<bool> {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return Err(ScaleChartError::InvalidData(
                "kinetic step delta must be finite and >= 0".to_owned(),
            ));
        }
        let Some(displacement) = self.interaction.step_kinetic_scroll(delta_seconds) else {
            return Ok(false);
        };
        let moved = self.scroll_to(self.current_unit + displacement)?;
        if !moved {
            self.interaction.stop_kinetic_scroll();
        }
        Ok(moved)
    }

    pub fn stop_kinetic_scroll(&mut self) {
        self.interaction.stop_kinetic_scroll();
    }

    /// Begins a pinch with the horizontal distance between the two pointers.
    pub fn pinch_start(&mut self, span_px: f64) -> ScaleChartResult<()> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ScaleChartError::InvalidData(
                "pinch span must be finite and > 0".to_owned(),
            ));
        }
        self.interaction.on_pinch_start(self.units_per_inch(), span_px);
        Ok(())
    }

    /// Rescales zoom so the pinch keeps its content under the fingers,
    /// clamped to the configured units-per-inch limits.
    pub fn pinch_update(&mut self, span_px: f64) -> ScaleChartResult<bool> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ScaleChartError::InvalidData(
                "pinch span must be finite and > 0".to_owned(),
            ));
        }
        let Some(units_per_inch) = self.interaction.pinch_units_per_inch(span_px) else {
            warn!(span_px, "pinch update without pinch start");
            return Ok(false);
        };
        let clamped = units_per_inch.clamp(self.min_units_per_inch, self.max_units_per_inch);
        let before = self.resolution;
        self.set_units_per_inch(clamped)?;
        Ok(self.resolution != before)
    }

    pub fn pinch_end(&mut self) {
        self.interaction.on_pinch_end();
    }
}
