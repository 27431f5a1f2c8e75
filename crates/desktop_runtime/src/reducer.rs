//! Reducer actions, side-effect intents, and transition logic for the window store.

use thiserror::Error;

use crate::catalog::PlacementTable;
use crate::model::{
    DesktopState, OpenWindowRequest, Position, Size, Viewport, WindowKey, WindowState,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or focus it if it is already open.
    OpenWindow(OpenWindowRequest),
    /// Raise a window, restoring it if minimized.
    FocusWindow {
        /// Window to focus.
        key: WindowKey,
    },
    /// Close a window; its geometry stays cached in the store.
    CloseWindow {
        /// Window to close.
        key: WindowKey,
    },
    /// Hide a window while keeping its geometry and z-index.
    MinimizeWindow {
        /// Window to minimize.
        key: WindowKey,
    },
    /// Focus a window and flip its maximized flag.
    ToggleMaximize {
        /// Window to maximize or restore.
        key: WindowKey,
    },
    /// Overwrite a window's top-left corner.
    MoveWindow {
        /// Window to move.
        key: WindowKey,
        /// Already-clamped position.
        position: Position,
    },
    /// Overwrite a window's size.
    ResizeWindow {
        /// Window to resize.
        key: WindowKey,
        /// Already-clamped size.
        size: Size,
    },
    /// Close whichever window is active, if any.
    CloseActiveWindow,
    /// Close every open window.
    CloseAllWindows,
    /// Record the current viewport so narrow/wide transitions can be handled.
    ViewportChanged {
        /// New viewport dimensions.
        viewport: Viewport,
        /// Width at or below which the viewport counts as narrow.
        narrow_breakpoint: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mount/visibility transitions reported to hosted panels.
pub enum PanelLifecycleEvent {
    /// Panel content was mounted into a newly opened window.
    Mounted,
    /// Window was raised to the front.
    Focused,
    /// Window was hidden; panel content is unmounted.
    Minimized,
    /// Window was shown again after being minimized.
    Restored,
    /// Window now fills the viewport.
    Maximized,
    /// Window returned to its stored geometry.
    Unmaximized,
    /// Window was closed.
    Closed,
}

impl PanelLifecycleEvent {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Focused => "focused",
            Self::Minimized => "minimized",
            Self::Restored => "restored",
            Self::Maximized => "maximized",
            Self::Unmaximized => "unmaximized",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the frame of the given window.
    FocusWindowElement(WindowKey),
    /// Notify the hosted panel of a lifecycle transition.
    PanelLifecycle {
        /// Window whose panel changed state.
        key: WindowKey,
        /// Transition the panel went through.
        event: PanelLifecycleEvent,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action was rejected. The state is left untouched in every case.
pub enum ReducerError {
    /// The target window has never been opened.
    #[error("window `{0}` is unknown")]
    UnknownWindow(WindowKey),
    /// The target window exists but is closed.
    #[error("window `{0}` is not open")]
    WindowNotOpen(WindowKey),
    /// Opened without placement and the default table has no entry for it.
    #[error("window `{0}` has no default placement")]
    NoDefaultPlacement(WindowKey),
}

/// Applies a [`DesktopAction`] to the window store and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action targets an unknown or closed window. The runtime
/// dispatcher logs these at debug level and otherwise ignores them.
pub fn reduce_desktop(
    state: &mut DesktopState,
    defaults: &PlacementTable,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            if state.is_open(&req.key) {
                focus_window_internal(state, &req.key, &mut effects)?;
                return Ok(effects);
            }
            let placement = req
                .placement
                .or_else(|| defaults.get(&req.key))
                .ok_or_else(|| ReducerError::NoDefaultPlacement(req.key.clone()))?;
            let window = WindowState {
                is_open: true,
                is_minimized: false,
                is_maximized: req.maximized,
                position: placement.position,
                size: placement.size,
                z_index: take_z_index(state),
            };
            state.windows.insert(req.key.clone(), window);
            raise_in_stack(state, &req.key);
            state.active_window = Some(req.key.clone());
            effects.push(lifecycle(&req.key, PanelLifecycleEvent::Mounted));
            effects.push(RuntimeEffect::FocusWindowElement(req.key));
        }
        DesktopAction::FocusWindow { key } => {
            focus_window_internal(state, &key, &mut effects)?;
        }
        DesktopAction::CloseWindow { key } => {
            close_window_internal(state, &key)?;
            effects.push(lifecycle(&key, PanelLifecycleEvent::Closed));
        }
        DesktopAction::MinimizeWindow { key } => {
            let window = open_window_mut(state, &key)?;
            window.is_minimized = true;
            if state.is_active(&key) {
                state.active_window = state.next_active_candidate(&key);
            }
            effects.push(lifecycle(&key, PanelLifecycleEvent::Minimized));
        }
        DesktopAction::ToggleMaximize { key } => {
            focus_window_internal(state, &key, &mut effects)?;
            let window = open_window_mut(state, &key)?;
            window.is_maximized = !window.is_maximized;
            let event = if window.is_maximized {
                PanelLifecycleEvent::Maximized
            } else {
                PanelLifecycleEvent::Unmaximized
            };
            effects.push(lifecycle(&key, event));
        }
        DesktopAction::MoveWindow { key, position } => {
            open_window_mut(state, &key)?.position = position;
        }
        DesktopAction::ResizeWindow { key, size } => {
            open_window_mut(state, &key)?.size = size;
        }
        DesktopAction::CloseActiveWindow => {
            if let Some(key) = state.active_window.clone() {
                close_window_internal(state, &key)?;
                effects.push(lifecycle(&key, PanelLifecycleEvent::Closed));
            }
        }
        DesktopAction::CloseAllWindows => {
            let open: Vec<WindowKey> = state
                .windows
                .iter()
                .filter(|(_, w)| w.is_open)
                .map(|(key, _)| key.clone())
                .collect();
            for key in open {
                close_window_internal(state, &key)?;
                effects.push(lifecycle(&key, PanelLifecycleEvent::Closed));
            }
            state.active_window = None;
        }
        DesktopAction::ViewportChanged {
            viewport,
            narrow_breakpoint,
        } => {
            let narrow = viewport.is_narrow(narrow_breakpoint);
            let entered_narrow = narrow && !state.narrow_viewport;
            state.narrow_viewport = narrow;
            if entered_narrow {
                if let Some(key) = state.active_window.clone() {
                    let window = open_window_mut(state, &key)?;
                    if !window.is_maximized {
                        window.is_maximized = true;
                        effects.push(lifecycle(&key, PanelLifecycleEvent::Maximized));
                    }
                }
            }
        }
    }

    Ok(effects)
}

fn lifecycle(key: &WindowKey, event: PanelLifecycleEvent) -> RuntimeEffect {
    RuntimeEffect::PanelLifecycle {
        key: key.clone(),
        event,
    }
}

fn take_z_index(state: &mut DesktopState) -> u32 {
    let z_index = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    z_index
}

fn raise_in_stack(state: &mut DesktopState, key: &WindowKey) {
    state.stack_order.retain(|k| k != key);
    state.stack_order.push(key.clone());
}

fn open_window_mut<'a>(
    state: &'a mut DesktopState,
    key: &WindowKey,
) -> Result<&'a mut WindowState, ReducerError> {
    match state.windows.get_mut(key) {
        Some(window) if window.is_open => Ok(window),
        Some(_) => Err(ReducerError::WindowNotOpen(key.clone())),
        None => Err(ReducerError::UnknownWindow(key.clone())),
    }
}

fn focus_window_internal(
    state: &mut DesktopState,
    key: &WindowKey,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let z_index = state.next_z_index;
    let window = open_window_mut(state, key)?;
    let was_minimized = window.is_minimized;
    window.is_minimized = false;
    window.z_index = z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    raise_in_stack(state, key);
    state.active_window = Some(key.clone());

    if was_minimized {
        effects.push(lifecycle(key, PanelLifecycleEvent::Restored));
    }
    effects.push(lifecycle(key, PanelLifecycleEvent::Focused));
    effects.push(RuntimeEffect::FocusWindowElement(key.clone()));
    Ok(())
}

fn close_window_internal(state: &mut DesktopState, key: &WindowKey) -> Result<(), ReducerError> {
    open_window_mut(state, key)?.is_open = false;
    if state.is_active(key) {
        state.active_window = state.next_active_candidate(key);
    }
    Ok(())
}
