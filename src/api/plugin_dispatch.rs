use crate::core::LineSegment;
use crate::extensions::{ScaleChartContext, ScaleChartEvent};
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    #[must_use]
    pub fn plugin_context(&self) -> ScaleChartContext {
        ScaleChartContext {
            viewport: self.viewport,
            current_unit: self.current_unit,
            resolution: self.resolution,
            units_per_inch: self.units_per_inch(),
            segments_len: self.segments.len(),
            scrollable: self.scrollable,
            interaction_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ScaleChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
