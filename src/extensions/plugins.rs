use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleChartContext {
    pub viewport: Viewport,
    pub current_unit: f64,
    pub resolution: f64,
    pub units_per_inch: f64,
    pub segments_len: usize,
    pub scrollable: bool,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScaleChartEvent {
    SegmentsReplaced { segments_len: usize },
    SegmentClicked { index: usize },
    DoubleTapped { x: f64, y: f64 },
    Scrolled { current_unit: f64 },
    ResolutionChanged { resolution: f64 },
    ScrollableChanged { enabled: bool },
    ViewportResized { width: u32, height: u32 },
    Rendered,
}

/// Observer hook for host-side reactions such as showing a clicked segment.
///
/// Plugins observe events and read engine context without mutating engine
/// internals directly.
pub trait ScaleChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ScaleChartEvent, context: ScaleChartContext);
}
