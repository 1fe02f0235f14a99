use serde::{Deserialize, Serialize};

use crate::error::{ScaleChartError, ScaleChartResult};
use crate::render::Color;

/// Vertical bands of the chart as fractions of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub event_top_ratio: f64,
    pub event_bottom_ratio: f64,
    pub ruler_top_ratio: f64,
    pub tick_text_top_ratio: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            event_top_ratio: 0.2,
            event_bottom_ratio: 0.65,
            ruler_top_ratio: 0.7,
            tick_text_top_ratio: 0.9,
        }
    }
}

impl ChartLayout {
    pub fn validate(self) -> ScaleChartResult<Self> {
        for (name, value) in [
            ("event top", self.event_top_ratio),
            ("event bottom", self.event_bottom_ratio),
            ("ruler top", self.ruler_top_ratio),
            ("tick text top", self.tick_text_top_ratio),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScaleChartError::InvalidConfiguration(format!(
                    "layout {name} ratio must be finite and in [0, 1]"
                )));
            }
        }
        if self.event_top_ratio > self.event_bottom_ratio {
            return Err(ScaleChartError::InvalidConfiguration(
                "layout event band top must not be below its bottom".to_owned(),
            ));
        }
        if self.ruler_top_ratio > self.tick_text_top_ratio {
            return Err(ScaleChartError::InvalidConfiguration(
                "layout ruler must not be below tick text".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Colors, strokes and fonts used when building render frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub ruler_color: Color,
    pub ruler_thickness_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    /// Added below the tick text band so glyphs sit under the tick marks.
    pub tick_label_offset_px: f64,
    pub segment_fill_color: Color,
    pub segment_label_color: Color,
    pub segment_label_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            ruler_color: Color::BLACK,
            ruler_thickness_px: 4.0,
            tick_label_color: Color::BLACK,
            tick_label_font_size_px: 32.0,
            tick_label_offset_px: 20.0,
            segment_fill_color: Color::BLUE,
            segment_label_color: Color::BLACK,
            segment_label_font_size_px: 32.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ScaleChartResult<Self> {
        for color in [
            self.ruler_color,
            self.tick_label_color,
            self.segment_fill_color,
            self.segment_label_color,
        ] {
            color
                .validate()
                .map_err(|err| ScaleChartError::InvalidConfiguration(err.to_string()))?;
        }
        for (name, value) in [
            ("ruler thickness", self.ruler_thickness_px),
            ("tick label font size", self.tick_label_font_size_px),
            ("segment label font size", self.segment_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScaleChartError::InvalidConfiguration(format!(
                    "render style {name} must be finite and > 0"
                )));
            }
        }
        if !self.tick_label_offset_px.is_finite() {
            return Err(ScaleChartError::InvalidConfiguration(
                "render style tick label offset must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}
