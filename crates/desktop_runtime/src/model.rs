use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First z-index handed out by a fresh [`DesktopState`].
pub const DEFAULT_BASE_Z_INDEX: u32 = 1000;

/// Stable identifier for a managed window (for example `"projects"` or `"resume"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowKey(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejection reasons for [`WindowKey::new`].
pub enum WindowKeyError {
    /// The identifier was empty.
    #[error("window key must not be empty")]
    Empty,
    /// The identifier contained whitespace.
    #[error("window key `{0}` must not contain whitespace")]
    Whitespace(String),
}

impl WindowKey {
    /// Returns a key when `raw` is non-empty and free of whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, WindowKeyError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(WindowKeyError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(WindowKeyError::Whitespace(raw));
        }
        Ok(Self(raw))
    }

    /// Creates a key without validation for catalog constants and tests.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the rendered frame for this window.
    pub fn dom_id(&self) -> String {
        format!("window-{}", self.0)
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Position and size of a window, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn position(self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height
    }
}

/// Live browser viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns whether this viewport is at or below the narrow (mobile) breakpoint.
    pub fn is_narrow(self, breakpoint: i32) -> bool {
        self.width <= breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

/// Caller-supplied or catalog-default geometry for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPlacement {
    pub position: Position,
    pub size: Size,
}

impl WindowPlacement {
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }
}

/// Per-window state tracked by the store.
///
/// `is_minimized` and `is_maximized` are independent: a maximized window can be minimized
/// and comes back maximized when restored. `position`/`size` are preserved underneath a
/// maximized window so toggling maximize twice restores them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub position: Position,
    pub size: Size,
    pub z_index: u32,
}

impl WindowState {
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub key: WindowKey,
    pub placement: Option<WindowPlacement>,
    pub maximized: bool,
}

impl OpenWindowRequest {
    pub fn new(key: WindowKey) -> Self {
        Self {
            key,
            placement: None,
            maximized: false,
        }
    }

    pub fn with_placement(mut self, placement: WindowPlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn maximized(mut self) -> Self {
        self.maximized = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown resize direction `{0}`")]
pub struct ResizeDirectionParseError(pub String);

impl ResizeDirection {
    /// All eight handles, corners first so they stack above edges.
    pub const ALL: [ResizeDirection; 8] = [
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthEast,
        Self::NorthWest,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub const fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

impl FromStr for ResizeDirection {
    type Err = ResizeDirectionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "n" => Ok(Self::North),
            "s" => Ok(Self::South),
            "e" => Ok(Self::East),
            "w" => Ok(Self::West),
            "ne" => Ok(Self::NorthEast),
            "nw" => Ok(Self::NorthWest),
            "se" => Ok(Self::SouthEast),
            "sw" => Ok(Self::SouthWest),
            other => Err(ResizeDirectionParseError(other.to_string())),
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Window-manager state: the window map, stacking order, focus, and z-index counter.
///
/// Entries are never removed from `windows`; closing only clears `is_open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: BTreeMap<WindowKey, WindowState>,
    pub stack_order: Vec<WindowKey>,
    pub active_window: Option<WindowKey>,
    pub next_z_index: u32,
    pub narrow_viewport: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_Z_INDEX)
    }
}

impl DesktopState {
    pub fn new(base_z_index: u32) -> Self {
        Self {
            windows: BTreeMap::new(),
            stack_order: Vec::new(),
            active_window: None,
            next_z_index: base_z_index,
            narrow_viewport: false,
        }
    }

    pub fn window(&self, key: &WindowKey) -> Option<&WindowState> {
        self.windows.get(key)
    }

    pub fn is_open(&self, key: &WindowKey) -> bool {
        self.windows.get(key).map(|w| w.is_open).unwrap_or(false)
    }

    pub fn is_active(&self, key: &WindowKey) -> bool {
        self.active_window.as_ref() == Some(key)
    }

    pub fn active_window(&self) -> Option<&WindowKey> {
        self.active_window.as_ref()
    }

    /// Stacking history, least recently raised first. May include closed windows.
    pub fn stack_order(&self) -> &[WindowKey] {
        &self.stack_order
    }

    pub fn open_window_count(&self) -> usize {
        self.windows.values().filter(|w| w.is_open).count()
    }

    /// Most recently stacked window, other than `excluding`, that is open and not minimized.
    pub fn next_active_candidate(&self, excluding: &WindowKey) -> Option<WindowKey> {
        self.stack_order
            .iter()
            .rev()
            .filter(|key| *key != excluding)
            .find(|key| self.windows.get(*key).map(WindowState::is_visible).unwrap_or(false))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_key_rejects_empty_and_whitespace() {
        assert_eq!(WindowKey::new(""), Err(WindowKeyError::Empty));
        assert_eq!(
            WindowKey::new("about me"),
            Err(WindowKeyError::Whitespace("about me".to_string()))
        );
        assert_eq!(WindowKey::new("aboutMe").unwrap().as_str(), "aboutMe");
        assert_eq!(WindowKey::trusted("resume").dom_id(), "window-resume");
    }

    #[test]
    fn resize_direction_tokens_parse_back() {
        for direction in ResizeDirection::ALL {
            assert_eq!(direction.token().parse::<ResizeDirection>(), Ok(direction));
        }
        assert!("north".parse::<ResizeDirection>().is_err());
    }

    #[test]
    fn resize_direction_axes_match_tokens() {
        for direction in ResizeDirection::ALL {
            let token = direction.token();
            assert_eq!(direction.has_north(), token.contains('n'));
            assert_eq!(direction.has_south(), token.contains('s'));
            assert_eq!(direction.has_east(), token.contains('e'));
            assert_eq!(direction.has_west(), token.contains('w'));
        }
    }

    #[test]
    fn narrow_breakpoint_is_inclusive() {
        assert!(Viewport::new(640, 900).is_narrow(640));
        assert!(!Viewport::new(641, 900).is_narrow(640));
    }
}
