//! Shell layout constants loaded from the `[shell]` table of `panels.toml`.

use serde::{Deserialize, Serialize};

use crate::model::{Size, Viewport, DEFAULT_BASE_Z_INDEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Height of the fixed menu bar; maximized windows start below it.
    pub menu_bar_height: i32,
    /// Space kept free for the dock under maximized windows on narrow viewports.
    pub dock_reservation: i32,
    /// Per-open-window cascade offset applied to centered placements.
    pub cascade_step: i32,
    /// Viewport widths at or below this value use the mobile layout.
    pub narrow_breakpoint: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub base_z_index: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: 48,
            dock_reservation: 80,
            cascade_step: 25,
            narrow_breakpoint: 640,
            min_width: 300,
            min_height: 200,
            base_z_index: DEFAULT_BASE_Z_INDEX,
        }
    }
}

impl ShellConfig {
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn is_narrow(&self, viewport: Viewport) -> bool {
        viewport.is_narrow(self.narrow_breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{ "cascade_step": 40 }"#).expect("parse shell config");

        assert_eq!(config.cascade_step, 40);
        assert_eq!(config.menu_bar_height, 48);
        assert_eq!(config.min_size(), Size::new(300, 200));
        assert_eq!(config.base_z_index, 1000);
    }
}
