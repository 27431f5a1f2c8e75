//! Pointer-driven drag and resize gestures.
//!
//! A gesture is captured on pointer-down, tracks a live rectangle while the pointer moves,
//! and hands the final geometry back to the store on pointer-up. At most one gesture runs
//! at a time.

use thiserror::Error;

use crate::config::ShellConfig;
use crate::model::{
    DesktopState, PointerPosition, Position, Rect, ResizeDirection, Size, Viewport, WindowKey,
};
use crate::reducer::DesktopAction;
use crate::window_manager::{clamp_position, resize_rect};

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress title-bar drag.
pub struct DragSession {
    pub window: WindowKey,
    /// Pointer position minus the window's top-left corner at grab time.
    pub grab_offset: PointerPosition,
    pub size: Size,
    pub current: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress edge or corner resize.
pub struct ResizeSession {
    pub window: WindowKey,
    pub direction: ResizeDirection,
    pub pointer_start: PointerPosition,
    pub rect_start: Rect,
    pub current: Rect,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GestureError {
    #[error("window `{0}` is not open")]
    NotOpen(WindowKey),
    #[error("window `{0}` is minimized")]
    Minimized(WindowKey),
    #[error("window `{0}` is maximized")]
    Maximized(WindowKey),
    #[error("another drag or resize is already in progress")]
    GestureInProgress,
}

/// Final geometry produced by a finished gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureCommit {
    Move {
        key: WindowKey,
        position: Position,
    },
    Resize {
        key: WindowKey,
        position: Position,
        size: Size,
    },
}

impl GestureCommit {
    /// Store actions that persist this commit.
    pub fn into_actions(self) -> Vec<DesktopAction> {
        match self {
            Self::Move { key, position } => vec![DesktopAction::MoveWindow { key, position }],
            Self::Resize {
                key,
                position,
                size,
            } => vec![
                DesktopAction::MoveWindow {
                    key: key.clone(),
                    position,
                },
                DesktopAction::ResizeWindow { key, size },
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient pointer-interaction state kept outside the window store.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }

    /// Live rectangle for `key` while it is being dragged or resized.
    pub fn live_rect(&self, key: &WindowKey) -> Option<Rect> {
        if let Some(drag) = self.dragging.as_ref().filter(|d| d.window == *key) {
            return Some(Rect::from_parts(drag.current, drag.size));
        }
        self.resizing
            .as_ref()
            .filter(|r| r.window == *key)
            .map(|r| r.current)
    }

    /// Starts dragging `key` from its title bar.
    ///
    /// # Errors
    ///
    /// Fails when the window is closed, minimized, or maximized, or another gesture is active.
    pub fn begin_drag(
        &mut self,
        state: &DesktopState,
        key: &WindowKey,
        pointer: PointerPosition,
    ) -> Result<(), GestureError> {
        let rect = self.gesture_target(state, key)?;
        self.dragging = Some(DragSession {
            window: key.clone(),
            grab_offset: PointerPosition::new(pointer.x - rect.x, pointer.y - rect.y),
            size: rect.size(),
            current: rect.position(),
        });
        Ok(())
    }

    /// Follows the pointer, keeping the dragged window fully inside the viewport.
    ///
    /// Returns the new live position, or `None` when no drag is active.
    pub fn update_drag(&mut self, pointer: PointerPosition, viewport: Viewport) -> Option<Position> {
        let drag = self.dragging.as_mut()?;
        let wanted = Position::new(pointer.x - drag.grab_offset.x, pointer.y - drag.grab_offset.y);
        drag.current = clamp_position(wanted, drag.size, viewport);
        Some(drag.current)
    }

    /// Ends the drag and returns the position to store.
    pub fn end_drag(&mut self) -> Option<GestureCommit> {
        self.dragging.take().map(|drag| GestureCommit::Move {
            key: drag.window,
            position: drag.current,
        })
    }

    /// Starts resizing `key` from one of its eight handles.
    ///
    /// # Errors
    ///
    /// Fails when the window is closed, minimized, or maximized, or another gesture is active.
    pub fn begin_resize(
        &mut self,
        state: &DesktopState,
        key: &WindowKey,
        direction: ResizeDirection,
        pointer: PointerPosition,
    ) -> Result<(), GestureError> {
        let rect = self.gesture_target(state, key)?;
        self.resizing = Some(ResizeSession {
            window: key.clone(),
            direction,
            pointer_start: pointer,
            rect_start: rect,
            current: rect,
        });
        Ok(())
    }

    /// Recomputes the live rectangle from the total pointer delta since the gesture began.
    pub fn update_resize(
        &mut self,
        pointer: PointerPosition,
        viewport: Viewport,
        config: &ShellConfig,
    ) -> Option<Rect> {
        let resize = self.resizing.as_mut()?;
        resize.current = resize_rect(
            resize.rect_start,
            resize.direction,
            pointer.x - resize.pointer_start.x,
            pointer.y - resize.pointer_start.y,
            viewport,
            config.min_size(),
        );
        Some(resize.current)
    }

    /// Ends the resize and returns the geometry to store.
    pub fn end_resize(&mut self) -> Option<GestureCommit> {
        self.resizing.take().map(|resize| GestureCommit::Resize {
            key: resize.window,
            position: resize.current.position(),
            size: resize.current.size(),
        })
    }

    /// Ends whichever gesture is active.
    pub fn end_gesture(&mut self) -> Option<GestureCommit> {
        self.end_drag().or_else(|| self.end_resize())
    }

    /// Drops any gesture on `key` without committing it, used when the window closes mid-gesture.
    pub fn cancel_for(&mut self, key: &WindowKey) {
        if self.dragging.as_ref().is_some_and(|d| d.window == *key) {
            self.dragging = None;
        }
        if self.resizing.as_ref().is_some_and(|r| r.window == *key) {
            self.resizing = None;
        }
    }

    fn gesture_target(&self, state: &DesktopState, key: &WindowKey) -> Result<Rect, GestureError> {
        if !self.is_idle() {
            return Err(GestureError::GestureInProgress);
        }
        let window = state
            .window(key)
            .filter(|w| w.is_open)
            .ok_or_else(|| GestureError::NotOpen(key.clone()))?;
        if window.is_minimized {
            return Err(GestureError::Minimized(key.clone()));
        }
        if window.is_maximized {
            return Err(GestureError::Maximized(key.clone()));
        }
        Ok(window.rect())
    }
}
