//! Host-facing extension hooks.

pub mod plugins;

pub use plugins::{ScaleChartContext, ScaleChartEvent, ScaleChartPlugin};
