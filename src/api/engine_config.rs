use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, Padding, ScaleLadder, Viewport};
use crate::error::{ScaleChartError, ScaleChartResult};
use crate::interaction::KineticScrollConfig;

use super::{ChartLayout, RenderStyle};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a config file instead of
/// wiring every knob in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleChartConfig {
    pub viewport: Viewport,
    /// Physical pixel density of the target surface along x.
    #[serde(default = "default_pixels_per_inch")]
    pub pixels_per_inch: f64,
    /// Initial zoom in points per inch.
    #[serde(default = "default_units_per_inch")]
    pub units_per_inch: f64,
    /// Lower pinch-zoom clamp in points per inch.
    #[serde(default = "default_min_units_per_inch")]
    pub min_units_per_inch: f64,
    /// Upper pinch-zoom clamp in points per inch.
    #[serde(default = "default_max_units_per_inch")]
    pub max_units_per_inch: f64,
    #[serde(default)]
    pub bounds: ChartBounds,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub scales: ScaleLadder,
    #[serde(default = "default_scrollable")]
    pub scrollable: bool,
    #[serde(default)]
    pub kinetic_scroll: KineticScrollConfig,
}

impl ScaleChartConfig {
    /// Creates a config for one viewport with every other knob at default.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pixels_per_inch: default_pixels_per_inch(),
            units_per_inch: default_units_per_inch(),
            min_units_per_inch: default_min_units_per_inch(),
            max_units_per_inch: default_max_units_per_inch(),
            bounds: ChartBounds::default(),
            padding: Padding::default(),
            layout: ChartLayout::default(),
            style: RenderStyle::default(),
            scales: ScaleLadder::default(),
            scrollable: default_scrollable(),
            kinetic_scroll: KineticScrollConfig::default(),
        }
    }

    #[must_use]
    pub fn with_pixels_per_inch(mut self, pixels_per_inch: f64) -> Self {
        self.pixels_per_inch = pixels_per_inch;
        self
    }

    #[must_use]
    pub fn with_units_per_inch(mut self, units_per_inch: f64) -> Self {
        self.units_per_inch = units_per_inch;
        self
    }

    /// Sets the pinch-zoom clamp range.
    #[must_use]
    pub fn with_units_per_inch_limits(mut self, min: f64, max: f64) -> Self {
        self.min_units_per_inch = min;
        self.max_units_per_inch = max;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: ChartBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_scales(mut self, scales: ScaleLadder) -> Self {
        self.scales = scales;
        self
    }

    #[must_use]
    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    #[must_use]
    pub fn with_kinetic_scroll(mut self, config: KineticScrollConfig) -> Self {
        self.kinetic_scroll = config;
        self
    }

    pub fn validate(&self) -> ScaleChartResult<()> {
        self.viewport.validate()?;
        for (name, value) in [
            ("pixels per inch", self.pixels_per_inch),
            ("units per inch", self.units_per_inch),
            ("min units per inch", self.min_units_per_inch),
            ("max units per inch", self.max_units_per_inch),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScaleChartError::InvalidConfiguration(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.min_units_per_inch > self.max_units_per_inch {
            return Err(ScaleChartError::InvalidConfiguration(
                "min units per inch must be <= max units per inch".to_owned(),
            ));
        }
        let kinetic = self.kinetic_scroll;
        if !kinetic.decay_per_second.is_finite()
            || kinetic.decay_per_second <= 0.0
            || kinetic.decay_per_second >= 1.0
        {
            return Err(ScaleChartError::InvalidConfiguration(
                "kinetic scroll decay must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !kinetic.stop_velocity_abs.is_finite() || kinetic.stop_velocity_abs <= 0.0 {
            return Err(ScaleChartError::InvalidConfiguration(
                "kinetic scroll stop velocity must be finite and > 0".to_owned(),
            ));
        }
        self.bounds.validate()?;
        self.padding.validate()?;
        self.layout.validate()?;
        self.style.validate()?;
        self.scales.clone().validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ScaleChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScaleChartError::InvalidConfigJson(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. The result is not validated until it is
    /// handed to an engine.
    pub fn from_json_str(input: &str) -> ScaleChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScaleChartError::InvalidConfigJson(format!("failed to parse config: {e}")))
    }
}

fn default_pixels_per_inch() -> f64 {
    160.0
}

fn default_units_per_inch() -> f64 {
    6400.0
}

fn default_min_units_per_inch() -> f64 {
    1.0
}

fn default_max_units_per_inch() -> f64 {
    8000.0
}

fn default_scrollable() -> bool {
    true
}
