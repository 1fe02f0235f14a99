use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ScaleChartError, ScaleChartResult};

/// Text rendering used for tick labels of one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleLabelFormat {
    /// `value / unit_size` as a base-10 integer.
    UnitQuotient,
    /// `HH:MM` clock text.
    HourMinute,
    /// `HH:MM:SS` clock text.
    HourMinuteSecond,
}

/// Tick granularity of the ruler.
///
/// Densities are thresholds in points per inch: ticks of this scale are drawn
/// while the chart shows at most `line_density` points per inch, and their
/// labels while it shows at most `text_density`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDefinition {
    unit_size: Point,
    text_density: f64,
    line_density: f64,
    length_ratio: f64,
    label_format: ScaleLabelFormat,
}

impl ScaleDefinition {
    pub fn new(
        unit_size: Point,
        text_density: f64,
        line_density: f64,
        length_ratio: f64,
    ) -> ScaleChartResult<Self> {
        Self {
            unit_size,
            text_density,
            line_density,
            length_ratio,
            label_format: ScaleLabelFormat::UnitQuotient,
        }
        .validate()
    }

    #[must_use]
    pub fn with_label_format(mut self, label_format: ScaleLabelFormat) -> Self {
        self.label_format = label_format;
        self
    }

    pub fn validate(self) -> ScaleChartResult<Self> {
        if self.unit_size <= 0 {
            return Err(ScaleChartError::InvalidConfiguration(format!(
                "scale unit size must be > 0, got {}",
                self.unit_size
            )));
        }
        for (name, value) in [
            ("text density", self.text_density),
            ("line density", self.line_density),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScaleChartError::InvalidConfiguration(format!(
                    "scale {name} must be finite and > 0"
                )));
            }
        }
        if !self.length_ratio.is_finite() || !(0.0..=1.0).contains(&self.length_ratio) {
            return Err(ScaleChartError::InvalidConfiguration(
                "scale length ratio must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn unit_size(&self) -> Point {
        self.unit_size
    }

    #[must_use]
    pub fn text_density(&self) -> f64 {
        self.text_density
    }

    #[must_use]
    pub fn line_density(&self) -> f64 {
        self.line_density
    }

    #[must_use]
    pub fn length_ratio(&self) -> f64 {
        self.length_ratio
    }

    #[must_use]
    pub fn label_format(&self) -> ScaleLabelFormat {
        self.label_format
    }

    /// Tick label for a raw point value.
    ///
    /// Integer division truncates toward zero, so `-1` at unit 60 is `"0"`.
    #[must_use]
    pub fn label(&self, value: Point) -> String {
        match self.label_format {
            ScaleLabelFormat::UnitQuotient => (value / self.unit_size).to_string(),
            ScaleLabelFormat::HourMinute => {
                format!("{:02}:{:02}", value / 3600, (value % 3600) / 60)
            }
            ScaleLabelFormat::HourMinuteSecond => format!(
                "{:02}:{:02}:{:02}",
                value / 3600,
                (value % 3600) / 60,
                value % 60
            ),
        }
    }

    #[must_use]
    pub fn shows_lines_at(&self, units_per_inch: f64) -> bool {
        self.line_density >= units_per_inch
    }

    #[must_use]
    pub fn shows_text_at(&self, units_per_inch: f64) -> bool {
        self.text_density >= units_per_inch
    }

    /// First multiple of `unit_size` that is `>= value`.
    #[must_use]
    pub fn first_tick_at_or_after(&self, value: Point) -> Point {
        let rem = value.rem_euclid(self.unit_size);
        if rem == 0 {
            value
        } else {
            value - rem + self.unit_size
        }
    }
}

/// Ordered set of scale definitions, coarsest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLadder {
    scales: Vec<ScaleDefinition>,
}

impl Default for ScaleLadder {
    fn default() -> Self {
        Self::clock_default()
    }
}

impl ScaleLadder {
    /// Builds a ladder from scales sorted in strictly descending unit size.
    pub fn new(scales: Vec<ScaleDefinition>) -> ScaleChartResult<Self> {
        Self { scales }.validate()
    }

    pub fn validate(self) -> ScaleChartResult<Self> {
        if self.scales.is_empty() {
            return Err(ScaleChartError::InvalidConfiguration(
                "scale ladder must contain at least one scale".to_owned(),
            ));
        }
        for scale in &self.scales {
            scale.validate()?;
        }
        if self
            .scales
            .windows(2)
            .any(|pair| pair[0].unit_size <= pair[1].unit_size)
        {
            return Err(ScaleChartError::InvalidConfiguration(
                "scale ladder must be ordered by strictly descending unit size".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Eleven-step day ruler from four hours down to one second.
    #[must_use]
    pub fn clock_default() -> Self {
        use ScaleLabelFormat::{HourMinute, HourMinuteSecond};

        let steps: [(Point, f64, f64, f64, ScaleLabelFormat); 11] = [
            (4 * 60 * 60, 1_000_000.0, 1_000_000.0, 0.95, HourMinute),
            (2 * 60 * 60, 1_000_000.0, 1_000_000.0, 0.95, HourMinute),
            (60 * 60, 1_000_000.0, 1_000_000.0, 0.95, HourMinute),
            (30 * 60, 4_761.9, 6_666.6, 0.8, HourMinute),
            (10 * 60, 1_600.0, 4_761.9, 0.7, HourMinute),
            (5 * 60, 724.6, 1_600.0, 0.6, HourMinute),
            (60, 130.0, 724.6, 0.5, HourMinute),
            (30, 58.8, 130.0, 0.4, HourMinuteSecond),
            (10, 11.1, 58.8, 0.3, HourMinuteSecond),
            (5, 5.5, 11.1, 0.2, HourMinuteSecond),
            (1, 1.67, 5.5, 0.1, HourMinuteSecond),
        ];

        let scales = steps
            .into_iter()
            .map(
                |(unit_size, text_density, line_density, length_ratio, label_format)| {
                    ScaleDefinition {
                        unit_size,
                        text_density,
                        line_density,
                        length_ratio,
                        label_format,
                    }
                },
            )
            .collect();
        Self { scales }
    }

    #[must_use]
    pub fn scales(&self) -> &[ScaleDefinition] {
        &self.scales
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Scales whose ticks are drawn at `units_per_inch`, coarsest first.
    #[must_use]
    pub fn visible_scales(&self, units_per_inch: f64) -> SmallVec<[&ScaleDefinition; 12]> {
        self.scales
            .iter()
            .filter(|scale| scale.shows_lines_at(units_per_inch))
            .collect()
    }

    /// Finest scale still drawn at `units_per_inch`.
    #[must_use]
    pub fn active_scale(&self, units_per_inch: f64) -> Option<&ScaleDefinition> {
        self.scales
            .iter()
            .rev()
            .find(|scale| scale.shows_lines_at(units_per_inch))
    }
}
