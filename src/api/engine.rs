use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartBounds, LineSegment, Padding, ScaleLadder, Segment, Viewport};
use crate::error::ScaleChartResult;
use crate::extensions::{ScaleChartEvent, ScaleChartPlugin};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartLayout, RenderStyle, ScaleChartConfig};

/// Main orchestration facade consumed by host applications.
///
/// `ScaleChartEngine` owns the scroll position, zoom, segment list and ruler
/// scales of one chart instance, produces render frames and resolves taps.
/// All calls are synchronous and expected from a single UI thread.
pub struct ScaleChartEngine<R: Renderer, S: LineSegment = Segment> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) pixels_per_inch: f64,
    pub(super) min_units_per_inch: f64,
    pub(super) max_units_per_inch: f64,
    pub(super) bounds: ChartBounds,
    pub(super) padding: Padding,
    pub(super) layout: ChartLayout,
    pub(super) style: RenderStyle,
    pub(super) scales: ScaleLadder,
    pub(super) current_unit: f64,
    /// Pixels per point.
    pub(super) resolution: f64,
    pub(super) scrollable: bool,
    pub(super) segments: Vec<S>,
    pub(super) interaction: InteractionState,
    pub(super) plugins: IndexMap<String, Box<dyn ScaleChartPlugin>>,
}

impl<R: Renderer> ScaleChartEngine<R> {
    /// Creates an engine drawing plain [`Segment`] values.
    pub fn new(renderer: R, config: ScaleChartConfig) -> ScaleChartResult<Self> {
        Self::new_generic(renderer, config)
    }
}

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    /// Creates an engine for any segment source implementing [`LineSegment`].
    pub fn new_generic(renderer: R, config: ScaleChartConfig) -> ScaleChartResult<Self> {
        config.validate()?;

        let resolution = config.pixels_per_inch / config.units_per_inch;
        let current_unit = config.bounds.clamp_unit(0.0);
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            resolution,
            current_unit,
            "init scale chart engine"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            pixels_per_inch: config.pixels_per_inch,
            min_units_per_inch: config.min_units_per_inch,
            max_units_per_inch: config.max_units_per_inch,
            bounds: config.bounds,
            padding: config.padding,
            layout: config.layout,
            style: config.style,
            scales: config.scales,
            current_unit,
            resolution,
            scrollable: config.scrollable,
            segments: Vec::new(),
            interaction: InteractionState::with_kinetic_config(config.kinetic_scroll),
            plugins: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the chart surface.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ScaleChartResult<()> {
        let viewport = viewport.validate()?;
        if viewport == self.viewport {
            return Ok(());
        }
        self.viewport = viewport;
        self.emit_plugin_event(ScaleChartEvent::ViewportResized {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) -> ScaleChartResult<()> {
        self.padding = padding.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ChartLayout) -> ScaleChartResult<()> {
        self.layout = layout.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ScaleChartResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
