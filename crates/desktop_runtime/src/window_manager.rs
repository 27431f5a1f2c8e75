//! Geometry helpers shared by the store, the interaction controller, and the frame renderer.

use crate::config::ShellConfig;
use crate::model::{Position, Rect, ResizeDirection, Size, Viewport};

/// Clamps a window's top-left corner so the whole rectangle stays inside the viewport.
///
/// Windows larger than the viewport are pinned to the origin.
pub fn clamp_position(position: Position, size: Size, viewport: Viewport) -> Position {
    Position {
        x: position.x.min(viewport.width - size.width).max(0),
        y: position.y.min(viewport.height - size.height).max(0),
    }
}

/// Applies a pointer delta to `start` for the given resize handle.
///
/// Each axis named by `direction` is resized independently and floored at `min_size`. For
/// `n`/`w` handles the top/left edge follows the pointer but stops at the viewport origin,
/// so the bottom/right edge stays anchored. For `s`/`e` handles the size may not run past
/// the bottom/right edge of the viewport.
pub fn resize_rect(
    start: Rect,
    direction: ResizeDirection,
    dx: i32,
    dy: i32,
    viewport: Viewport,
    min_size: Size,
) -> Rect {
    let mut rect = start;

    if direction.has_east() {
        rect.width = (start.width + dx)
            .max(min_size.width)
            .min(viewport.width - start.x);
    }
    if direction.has_west() {
        let left = (start.x + dx).min(start.right() - min_size.width).max(0);
        rect.x = left;
        rect.width = start.right() - left;
    }
    if direction.has_south() {
        rect.height = (start.height + dy)
            .max(min_size.height)
            .min(viewport.height - start.y);
    }
    if direction.has_north() {
        let top = (start.y + dy).min(start.bottom() - min_size.height).max(0);
        rect.y = top;
        rect.height = start.bottom() - top;
    }

    rect
}

/// Geometry of a maximized window: full width, from the menu bar down.
///
/// Narrow viewports also keep the dock reservation free so the dock stays clickable.
pub fn maximized_rect(viewport: Viewport, config: &ShellConfig) -> Rect {
    let reserved = if config.is_narrow(viewport) {
        config.menu_bar_height + config.dock_reservation
    } else {
        config.menu_bar_height
    };
    Rect {
        x: 0,
        y: config.menu_bar_height,
        width: viewport.width,
        height: (viewport.height - reserved).max(0),
    }
}

/// Top-left corner that centers `size` in the viewport, rounding toward negative infinity.
pub fn centered_position(size: Size, viewport: Viewport) -> Position {
    Position {
        x: (viewport.width - size.width).div_euclid(2),
        y: (viewport.height - size.height).div_euclid(2),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1200, 800);
    const MIN: Size = Size::new(300, 200);

    fn projects_rect() -> Rect {
        Rect {
            x: 200,
            y: 100,
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn clamp_position_limits_to_viewport_minus_size() {
        let size = Size::new(800, 600);
        assert_eq!(
            clamp_position(Position::new(700, 600), size, VIEWPORT),
            Position::new(400, 200)
        );
        assert_eq!(
            clamp_position(Position::new(-40, -10), size, VIEWPORT),
            Position::new(0, 0)
        );
        assert_eq!(
            clamp_position(Position::new(120, 80), size, VIEWPORT),
            Position::new(120, 80)
        );
    }

    #[test]
    fn clamp_position_pins_oversized_windows_to_origin() {
        let size = Size::new(1500, 900);
        assert_eq!(
            clamp_position(Position::new(50, 50), size, VIEWPORT),
            Position::new(0, 0)
        );
    }

    #[test]
    fn north_resize_moves_top_edge_and_keeps_bottom() {
        let rect = resize_rect(projects_rect(), ResizeDirection::North, 0, -50, VIEWPORT, MIN);
        assert_eq!(
            rect,
            Rect {
                x: 200,
                y: 50,
                width: 800,
                height: 650,
            }
        );
    }

    #[test]
    fn south_east_resize_keeps_top_left() {
        let rect = resize_rect(
            projects_rect(),
            ResizeDirection::SouthEast,
            -120,
            40,
            VIEWPORT,
            MIN,
        );
        assert_eq!(rect.position(), projects_rect().position());
        assert_eq!(rect.size(), Size::new(680, 640));
    }

    #[test]
    fn north_west_resize_keeps_bottom_right_even_at_the_floor() {
        let start = projects_rect();
        for (dx, dy) in [(-80, -60), (30, 45), (700, 550), (-200, -100)] {
            let rect = resize_rect(start, ResizeDirection::NorthWest, dx, dy, VIEWPORT, MIN);
            assert_eq!(rect.right(), start.right(), "dx={dx} dy={dy}");
            assert_eq!(rect.bottom(), start.bottom(), "dx={dx} dy={dy}");
            assert!(rect.width >= MIN.width && rect.height >= MIN.height);
        }
    }

    #[test]
    fn top_and_left_edges_stop_at_the_origin_without_moving_the_anchor() {
        let start = projects_rect();
        let cases = [
            (ResizeDirection::North, 0, -300),
            (ResizeDirection::NorthWest, -300, -300),
            (ResizeDirection::West, -500, 0),
            (ResizeDirection::SouthWest, -500, 40),
            (ResizeDirection::NorthEast, 40, -400),
        ];
        for (direction, dx, dy) in cases {
            let rect = resize_rect(start, direction, dx, dy, VIEWPORT, MIN);
            let label = format!("{direction} dx={dx} dy={dy}");
            assert!(rect.x >= 0 && rect.y >= 0, "{label}");
            assert!(rect.right() <= VIEWPORT.width, "{label}");
            assert!(rect.bottom() <= VIEWPORT.height, "{label}");
            if direction.has_north() {
                assert_eq!(rect.bottom(), start.bottom(), "{label}");
            }
            if direction.has_west() {
                assert_eq!(rect.right(), start.right(), "{label}");
            }
        }

        assert_eq!(
            resize_rect(start, ResizeDirection::North, 0, -300, VIEWPORT, MIN),
            Rect {
                x: 200,
                y: 0,
                width: 800,
                height: 700,
            }
        );
    }

    #[test]
    fn resize_is_floored_and_limited_by_viewport() {
        let shrunk = resize_rect(
            projects_rect(),
            ResizeDirection::East,
            -900,
            0,
            VIEWPORT,
            MIN,
        );
        assert_eq!(shrunk.width, 300);

        let grown = resize_rect(
            projects_rect(),
            ResizeDirection::SouthEast,
            900,
            900,
            VIEWPORT,
            MIN,
        );
        assert_eq!(grown.size(), Size::new(1000, 700));
    }

    #[test]
    fn maximized_rect_reserves_dock_only_on_narrow_viewports() {
        let config = ShellConfig::default();
        assert_eq!(
            maximized_rect(VIEWPORT, &config),
            Rect {
                x: 0,
                y: 48,
                width: 1200,
                height: 752,
            }
        );
        assert_eq!(
            maximized_rect(Viewport::new(390, 844), &config),
            Rect {
                x: 0,
                y: 48,
                width: 390,
                height: 716,
            }
        );
    }

    #[test]
    fn centered_position_floors_odd_remainders() {
        assert_eq!(
            centered_position(Size::new(800, 600), VIEWPORT),
            Position::new(200, 100)
        );
        assert_eq!(
            centered_position(Size::new(701, 600), Viewport::new(1200, 801)),
            Position::new(249, 100)
        );
        assert_eq!(
            centered_position(Size::new(700, 800), Viewport::new(390, 844)),
            Position::new(-155, 22)
        );
    }
}
