use tracing::{trace, warn};

use crate::core::{LineSegment, TickMark, tick_marks};
use crate::error::ScaleChartResult;
use crate::extensions::ScaleChartEvent;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    /// Visible part of the bounds as `(start, end, underflow, overflow)`.
    fn clipped_visible_range(&self) -> (f64, f64, bool, bool) {
        let (view_start, view_end) = self.visible_unit_range();
        let bound_start = self.bounds.start as f64;
        let bound_end = self.bounds.end() as f64;
        (
            view_start.max(bound_start),
            view_end.min(bound_end),
            view_start < bound_start,
            view_end > bound_end,
        )
    }

    /// Ruler ticks inside the visible part of the bounds.
    #[must_use]
    pub fn tick_marks(&self) -> Vec<TickMark> {
        let (start, end, _, _) = self.clipped_visible_range();
        tick_marks(&self.scales, self.units_per_inch(), start, end)
    }

    /// Materializes the scene for the current state.
    pub fn build_render_frame(&self) -> ScaleChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        let style = self.style;
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);

        let event_top = height * self.layout.event_top_ratio;
        let event_bottom = height * self.layout.event_bottom_ratio;
        let ruler_top = height * self.layout.ruler_top_ratio;
        let tick_text_top = height * self.layout.tick_text_top_ratio;
        let tick_band_height = tick_text_top - ruler_top;

        let (mid_start, mid_end, underflow, overflow) = self.clipped_visible_range();

        for index in self.visible_segment_indices() {
            let segment = &self.segments[index];
            let left = self.map_point_to_pixel(segment.start_point());
            if !segment.is_degenerate() {
                let right = self.map_point_to_pixel(segment.end_point());
                frame = frame.with_rect(RectPrimitive::from_edges(
                    left,
                    event_top,
                    right,
                    event_bottom,
                    style.segment_fill_color,
                ));
            }
            if !segment.text().is_empty() {
                frame = frame.with_text(TextPrimitive::new(
                    segment.text(),
                    left,
                    event_top,
                    style.segment_label_font_size_px,
                    style.segment_label_color,
                    TextHAlign::Left,
                ));
            }
        }

        let ticks = tick_marks(&self.scales, self.units_per_inch(), mid_start, mid_end);
        trace!(count = ticks.len(), "build ruler ticks");
        for tick in &ticks {
            let x = self.map_point_to_pixel(tick.point);
            if let Some(label) = tick.label() {
                frame = frame.with_text(TextPrimitive::new(
                    label,
                    x,
                    tick_text_top + style.tick_label_offset_px,
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Center,
                ));
            }
            frame = frame.with_line(LinePrimitive::new(
                x,
                ruler_top,
                x,
                ruler_top + tick_band_height * tick.scale.length_ratio(),
                style.ruler_thickness_px,
                style.ruler_color,
            ));
        }

        let half_thickness = style.ruler_thickness_px / 2.0;
        let baseline_left = if underflow {
            self.map_unit_to_pixel(mid_start) - half_thickness
        } else {
            self.padding.left
        };
        let baseline_right = if overflow {
            self.map_unit_to_pixel(mid_end) + half_thickness
        } else {
            width - self.padding.right
        };
        frame = frame.with_line(LinePrimitive::new(
            baseline_left,
            ruler_top,
            baseline_right,
            ruler_top,
            style.ruler_thickness_px,
            style.ruler_color,
        ));

        Ok(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ScaleChartResult<()> {
        let frame = self.build_render_frame()?;
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "renderer rejected frame");
            return Err(err);
        }
        self.emit_plugin_event(ScaleChartEvent::Rendered);
        Ok(())
    }
}
