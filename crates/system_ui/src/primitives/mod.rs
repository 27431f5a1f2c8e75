//! Shell chrome, navigation, and content primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod content;
mod navigation;
mod shell;

pub use content::{Heading, Panel, TerminalLine, TerminalSurface, Text};
pub use navigation::{Dock, DockButton, MenuBar, MenuBarItem, MenuBarSection};
pub use shell::{
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, ResizeHandle, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Traffic-light colour slot of a window control button.
pub enum TrafficLight {
    /// Red close control.
    Close,
    /// Yellow minimize control.
    Minimize,
    /// Green maximize/restore control.
    Maximize,
}

impl TrafficLight {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Typography roles for text primitives.
pub enum TextRole {
    /// Body copy.
    #[default]
    Body,
    /// Secondary label text.
    Label,
    /// Section or panel title.
    Title,
    /// Monospace terminal or code text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic colour tones for text primitives.
pub enum TextTone {
    /// Default foreground.
    #[default]
    Primary,
    /// Muted foreground.
    Secondary,
    /// Accent foreground, used for prompts and links.
    Accent,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn call_optional<T: 'static>(callback: Option<Callback<T>>, ev: T) {
    if let Some(callback) = callback.as_ref() {
        callback.call(ev);
    }
}

fn stop_mouse_event(ev: &MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-dock", None), "ui-dock");
        assert_eq!(merge_layout_class("ui-dock", Some("")), "ui-dock");
        assert_eq!(
            merge_layout_class("ui-dock", Some("is-narrow")),
            "ui-dock is-narrow"
        );
    }

    #[test]
    fn tokens_match_dom_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
        assert_eq!(TrafficLight::Maximize.token(), "maximize");
        assert_eq!(TextRole::default().token(), "body");
        assert_eq!(TextTone::Accent.token(), "accent");
    }
}
