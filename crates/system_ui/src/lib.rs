//! Stateless Leptos primitives for the portfolio desktop chrome.
//!
//! The crate owns the menu bar, dock, window frame, traffic-light controls, resize handles,
//! and the small content surfaces used by placeholder panels, together with the stable
//! `data-ui-*` DOM contract the shell stylesheet targets. The window manager in
//! `folio_desktop` composes these primitives and supplies all state through props.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Dock, DockButton, Heading, MenuBar,
    MenuBarItem, MenuBarSection, Panel, ResizeHandle, TerminalLine, TerminalSurface, Text,
    TextRole, TextTone, TrafficLight, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates composing the shell chrome.
pub mod prelude {
    pub use crate::{
        DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Dock, DockButton, Heading, MenuBar,
        MenuBarItem, MenuBarSection, Panel, ResizeHandle, TerminalLine, TerminalSurface, Text,
        TextRole, TextTone, TrafficLight, WindowBody, WindowControlButton, WindowControls,
        WindowFrame, WindowTitle, WindowTitleBar,
    };
}
