use tracing::{debug, warn};

use crate::core::LineSegment;
use crate::extensions::ScaleChartEvent;
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    /// Replaces the full segment list.
    ///
    /// Segments must already be sorted by start point; the engine keeps the
    /// given order for drawing and hit-testing and never re-sorts.
    pub fn set_segments(&mut self, segments: Vec<S>) {
        let degenerate_count = segments.iter().filter(|s| s.is_degenerate()).count();
        debug!(
            count = segments.len(),
            degenerate_count, "set segments"
        );
        if segments
            .windows(2)
            .any(|pair| pair[0].start_point() > pair[1].start_point())
        {
            warn!("segments are not sorted by start point; hit-testing may skip matches");
        }
        self.segments = segments;
        self.emit_plugin_event(ScaleChartEvent::SegmentsReplaced {
            segments_len: self.segments.len(),
        });
    }

    #[must_use]
    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&S> {
        self.segments.get(index)
    }

    /// Indices of segments intersecting the visible unit range, in draw order.
    #[must_use]
    pub fn visible_segment_indices(&self) -> Vec<usize> {
        let (start, end) = self.visible_unit_range();
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| {
                let lo = segment.start_point().min(segment.end_point()) as f64;
                let hi = segment.start_point().max(segment.end_point()) as f64;
                hi >= start && lo <= end
            })
            .map(|(index, _)| index)
            .collect()
    }
}
