//! Window manager for the portfolio desktop.
//!
//! The pure modules ([`model`], [`reducer`], [`interaction`], [`frame`], [`placement`],
//! [`window_manager`], [`shortcuts`], [`catalog`], [`config`]) hold every window-management
//! rule and build natively. The Leptos layer ([`DesktopProvider`], [`DesktopShell`]) binds
//! them to the browser.

pub mod catalog;
pub mod components;
pub mod config;
mod effect_executor;
pub mod frame;
pub mod host;
pub mod interaction;
pub mod model;
pub mod panels;
pub mod placement;
pub mod reducer;
mod runtime_context;
pub mod shortcuts;
pub mod window_manager;

pub use catalog::{CatalogError, PanelCatalog, PanelDescriptor, PlacementTable};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::ShellConfig;
pub use interaction::{GestureCommit, GestureError, InteractionState};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, PanelLifecycleEvent, ReducerError, RuntimeEffect};
