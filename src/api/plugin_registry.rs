use crate::core::LineSegment;
use crate::error::{ScaleChartError, ScaleChartResult};
use crate::extensions::ScaleChartPlugin;
use crate::render::Renderer;

use super::ScaleChartEngine;

impl<R: Renderer, S: LineSegment> ScaleChartEngine<R, S> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn ScaleChartPlugin>) -> ScaleChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ScaleChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugins.contains_key(&plugin_id) {
            return Err(ScaleChartError::DuplicatePluginId(plugin_id));
        }
        self.plugins.insert(plugin_id, plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }
}
