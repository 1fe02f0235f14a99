//! scale-chart: coordinate, layout and hit-test core for a horizontal
//! scrollable/zoomable time ruler carrying labeled segments.
//!
//! Hosts normalize timestamps into [`core::Segment`]s, hand them to a
//! [`ScaleChartEngine`], drive it through scroll/zoom commands and draw the
//! backend-agnostic [`render::RenderFrame`] it produces.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScaleChartConfig, ScaleChartEngine};
pub use error::{ScaleChartError, ScaleChartResult};
