use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
    Pinching,
}

/// Tuning for deterministic kinetic scroll stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticScrollConfig {
    /// Multiplicative velocity decay per second.
    pub decay_per_second: f64,
    /// Kinetic scroll stops when `abs(velocity)` drops below this threshold.
    pub stop_velocity_abs: f64,
}

impl Default for KineticScrollConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.85,
            stop_velocity_abs: 0.01,
        }
    }
}

/// Public kinetic scroll runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KineticScrollState {
    pub active: bool,
    pub velocity_units_per_sec: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    kinetic_config: KineticScrollConfig,
    kinetic: KineticScrollState,
    down_x: f64,
    down_unit: f64,
    pinch_reference: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            kinetic_config: KineticScrollConfig::default(),
            kinetic: KineticScrollState::default(),
            down_x: 0.0,
            down_unit: 0.0,
            pinch_reference: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn with_kinetic_config(config: KineticScrollConfig) -> Self {
        Self {
            kinetic_config: config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn kinetic_config(self) -> KineticScrollConfig {
        self.kinetic_config
    }

    pub fn set_kinetic_config(&mut self, config: KineticScrollConfig) {
        self.kinetic_config = config;
    }

    #[must_use]
    pub fn kinetic_state(self) -> KineticScrollState {
        self.kinetic
    }

    /// Pixel x where the current gesture went down.
    #[must_use]
    pub fn down_x(self) -> f64 {
        self.down_x
    }

    /// Unit under the chart centre when the current gesture went down.
    #[must_use]
    pub fn down_unit(self) -> f64 {
        self.down_unit
    }

    pub fn on_pointer_down(&mut self, x: f64, current_unit: f64) {
        self.stop_kinetic_scroll();
        self.down_x = x;
        self.down_unit = current_unit;
        self.mode = InteractionMode::Dragging;
    }

    pub fn on_pointer_up(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    /// Records `units_per_inch * span` so later spans rescale against it.
    pub fn on_pinch_start(&mut self, units_per_inch: f64, span_px: f64) {
        self.stop_kinetic_scroll();
        self.pinch_reference = units_per_inch * span_px;
        self.mode = InteractionMode::Pinching;
    }

    /// Unclamped units per inch for a pinch span, `None` outside a pinch.
    #[must_use]
    pub fn pinch_units_per_inch(self, span_px: f64) -> Option<f64> {
        if self.mode != InteractionMode::Pinching || span_px <= 0.0 {
            return None;
        }
        Some(self.pinch_reference / span_px)
    }

    pub fn on_pinch_end(&mut self) {
        self.pinch_reference = 0.0;
        self.mode = InteractionMode::Idle;
    }

    pub fn start_kinetic_scroll(&mut self, velocity_units_per_sec: f64) {
        self.kinetic.active = true;
        self.kinetic.velocity_units_per_sec = velocity_units_per_sec;
        self.mode = InteractionMode::Idle;
    }

    pub fn stop_kinetic_scroll(&mut self) {
        self.kinetic.active = false;
        self.kinetic.velocity_units_per_sec = 0.0;
    }

    /// Advances kinetic scroll and returns the unit displacement to apply.
    ///
    /// Returns `None` when kinetic scroll is not active.
    pub fn step_kinetic_scroll(&mut self, delta_seconds: f64) -> Option<f64> {
        if !self.kinetic.active {
            return None;
        }

        let displacement = self.kinetic.velocity_units_per_sec * delta_seconds;
        let decay = self.kinetic_config.decay_per_second.powf(delta_seconds);
        self.kinetic.velocity_units_per_sec *= decay;

        if self.kinetic.velocity_units_per_sec.abs() < self.kinetic_config.stop_velocity_abs {
            self.stop_kinetic_scroll();
        }

        Some(displacement)
    }
}
