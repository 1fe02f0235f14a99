mod coordinate_mapping;
mod engine;
mod engine_config;
mod interaction_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod scroll_controller;
mod segment_controller;
mod zoom_controller;

pub use engine::ScaleChartEngine;
pub use engine_config::ScaleChartConfig;
pub use render_style::{ChartLayout, RenderStyle};
