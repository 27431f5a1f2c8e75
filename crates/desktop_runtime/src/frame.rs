//! Framework-free layout for one window frame: geometry, chrome controls, and resize handles.

use crate::config::ShellConfig;
use crate::model::{Rect, ResizeDirection, Viewport, WindowState};
use crate::window_manager::maximized_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
    Restore,
}

impl WindowControl {
    /// Value for the `data-ui-control` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize | Self::Restore => "maximize",
        }
    }

    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::Close => "Close window",
            Self::Minimize => "Minimize window",
            Self::Maximize => "Maximize window",
            Self::Restore => "Restore window",
        }
    }
}

/// Everything the window component needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    pub rect: Rect,
    pub z_index: u32,
    pub active: bool,
    pub maximized: bool,
    pub resize_handles: Vec<ResizeDirection>,
    pub controls: [WindowControl; 3],
}

impl FrameLayout {
    /// Inline CSS placing the frame.
    pub fn style(&self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.rect.x, self.rect.y, self.rect.width, self.rect.height, self.z_index
        )
    }
}

/// Computes the frame for `window`, or `None` when it should not be rendered.
///
/// `live` is the uncommitted rectangle of an in-progress gesture and takes precedence over
/// the stored geometry. Maximized windows ignore both and fill the usable viewport.
pub fn frame_layout(
    window: &WindowState,
    live: Option<Rect>,
    is_active: bool,
    viewport: Viewport,
    config: &ShellConfig,
) -> Option<FrameLayout> {
    if !window.is_visible() {
        return None;
    }

    let rect = if window.is_maximized {
        maximized_rect(viewport, config)
    } else {
        live.unwrap_or_else(|| window.rect())
    };
    let resize_handles = if window.is_maximized || config.is_narrow(viewport) {
        Vec::new()
    } else {
        ResizeDirection::ALL.to_vec()
    };
    let toggle = if window.is_maximized {
        WindowControl::Restore
    } else {
        WindowControl::Maximize
    };

    Some(FrameLayout {
        rect,
        z_index: window.z_index,
        active: is_active,
        maximized: window.is_maximized,
        resize_handles,
        controls: [WindowControl::Close, WindowControl::Minimize, toggle],
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Position, Size};

    fn projects() -> WindowState {
        WindowState {
            is_open: true,
            is_minimized: false,
            is_maximized: false,
            position: Position::new(200, 100),
            size: Size::new(800, 600),
            z_index: 1003,
        }
    }

    #[test]
    fn closed_and_minimized_windows_are_not_rendered() {
        let config = ShellConfig::default();
        let viewport = Viewport::default();

        let closed = WindowState {
            is_open: false,
            ..projects()
        };
        let minimized = WindowState {
            is_minimized: true,
            is_maximized: true,
            ..projects()
        };

        assert_eq!(frame_layout(&closed, None, false, viewport, &config), None);
        assert_eq!(frame_layout(&minimized, None, false, viewport, &config), None);
    }

    #[test]
    fn normal_window_uses_stored_geometry_and_all_handles() {
        let layout = frame_layout(
            &projects(),
            None,
            true,
            Viewport::default(),
            &ShellConfig::default(),
        )
        .expect("visible");

        assert_eq!(layout.rect, projects().rect());
        assert_eq!(layout.resize_handles.len(), 8);
        assert_eq!(
            layout.controls,
            [
                WindowControl::Close,
                WindowControl::Minimize,
                WindowControl::Maximize
            ]
        );
        assert_eq!(
            layout.style(),
            "left:200px;top:100px;width:800px;height:600px;z-index:1003;"
        );
    }

    #[test]
    fn live_gesture_rect_overrides_stored_geometry() {
        let live = Rect {
            x: 400,
            y: 200,
            width: 800,
            height: 600,
        };
        let layout = frame_layout(
            &projects(),
            Some(live),
            false,
            Viewport::default(),
            &ShellConfig::default(),
        )
        .expect("visible");

        assert_eq!(layout.rect, live);
        assert!(!layout.active);
    }

    #[test]
    fn maximized_window_fills_viewport_below_menu_bar_without_handles() {
        let window = WindowState {
            is_maximized: true,
            ..projects()
        };
        let live = Rect {
            x: 5,
            y: 5,
            width: 400,
            height: 300,
        };
        let layout = frame_layout(
            &window,
            Some(live),
            true,
            Viewport::new(1200, 800),
            &ShellConfig::default(),
        )
        .expect("visible");

        assert_eq!(
            layout.rect,
            Rect {
                x: 0,
                y: 48,
                width: 1200,
                height: 752,
            }
        );
        assert!(layout.resize_handles.is_empty());
        assert_eq!(layout.controls[2], WindowControl::Restore);
        assert_eq!(layout.controls[2].aria_label(), "Restore window");
    }

    #[test]
    fn narrow_viewport_hides_resize_handles() {
        let layout = frame_layout(
            &projects(),
            None,
            true,
            Viewport::new(600, 900),
            &ShellConfig::default(),
        )
        .expect("visible");

        assert!(layout.resize_handles.is_empty());
        assert!(!layout.maximized);
    }
}
