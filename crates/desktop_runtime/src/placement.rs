//! Initial placement for windows opened from the dock or menu bar.

use crate::catalog::PanelCatalog;
use crate::config::ShellConfig;
use crate::model::{OpenWindowRequest, Position, Size, Viewport, WindowKey, WindowPlacement};
use crate::window_manager::{centered_position, clamp_position};

/// Builds the open request for `key`.
///
/// Wide viewports center the panel's default size, cascade it by `cascade_step` per
/// already-open window, and keep it inside the viewport with the title bar below the menu bar. Narrow viewports open full width below the menu bar, leaving the
/// dock reservation free, and start maximized. Returns `None` for ids the catalog does not know.
pub fn open_request_for(
    key: &WindowKey,
    catalog: &PanelCatalog,
    viewport: Viewport,
    open_count: usize,
    config: &ShellConfig,
) -> Option<OpenWindowRequest> {
    let panel = catalog.panel(key)?;

    if config.is_narrow(viewport) {
        let placement = WindowPlacement::new(
            Position::new(0, config.menu_bar_height),
            Size::new(
                viewport.width,
                viewport.height - config.menu_bar_height - config.dock_reservation,
            ),
        );
        return Some(
            OpenWindowRequest::new(key.clone())
                .with_placement(placement)
                .maximized(),
        );
    }

    let cascade = config
        .cascade_step
        .saturating_mul(i32::try_from(open_count).unwrap_or(i32::MAX));
    let cascaded = centered_position(panel.size, viewport).offset(cascade, cascade);
    let clamped = clamp_position(cascaded, panel.size, viewport);
    let position = Position::new(clamped.x, clamped.y.max(config.menu_bar_height));
    Some(
        OpenWindowRequest::new(key.clone())
            .with_placement(WindowPlacement::new(position, panel.size)),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::PlacementTable;
    use crate::model::DesktopState;
    use crate::reducer::{reduce_desktop, DesktopAction};

    fn catalog() -> PanelCatalog {
        PanelCatalog::builtin().expect("builtin catalog")
    }

    fn key(raw: &str) -> WindowKey {
        WindowKey::trusted(raw)
    }

    #[test]
    fn first_window_opens_centered_at_initial_z() {
        let catalog = catalog();
        let config = catalog.shell_config();
        let mut state = DesktopState::new(config.base_z_index);

        let req = open_request_for(&key("projects"), &catalog, Viewport::new(1200, 800), 0, &config)
            .expect("known panel");
        reduce_desktop(
            &mut state,
            &catalog.placement_table(),
            DesktopAction::OpenWindow(req),
        )
        .expect("open");

        let projects = state.window(&key("projects")).expect("projects");
        assert_eq!(projects.position, Position::new(200, 100));
        assert_eq!(projects.z_index, 1000);
        assert_eq!(state.active_window(), Some(&key("projects")));
    }

    #[test]
    fn additional_windows_cascade_by_open_count() {
        let catalog = catalog();
        let config = catalog.shell_config();

        let req = open_request_for(&key("blog"), &catalog, Viewport::new(1200, 800), 2, &config)
            .expect("known panel");

        let placement = req.placement.expect("explicit placement");
        assert_eq!(placement.position, Position::new(300, 150));
        assert_eq!(placement.size, Size::new(700, 600));
        assert!(!req.maximized);
    }

    #[test]
    fn tall_panels_open_below_the_menu_bar() {
        let catalog = catalog();
        let config = catalog.shell_config();

        let req = open_request_for(&key("aboutMe"), &catalog, Viewport::new(1366, 768), 0, &config)
            .expect("known panel");

        let placement = req.placement.expect("explicit placement");
        assert_eq!(placement.position, Position::new(333, 48));
    }

    #[test]
    fn deep_cascades_stay_inside_the_viewport() {
        let catalog = catalog();
        let config = catalog.shell_config();
        let viewport = Viewport::new(1200, 800);

        let req = open_request_for(&key("blog"), &catalog, viewport, 40, &config)
            .expect("known panel");

        let placement = req.placement.expect("explicit placement");
        assert_eq!(placement.position, Position::new(500, 200));
    }

    #[test]
    fn narrow_viewport_opens_maximized_below_menu_bar() {
        let catalog = catalog();
        let config = catalog.shell_config();

        let req = open_request_for(&key("resume"), &catalog, Viewport::new(390, 844), 3, &config)
            .expect("known panel");

        assert!(req.maximized);
        assert_eq!(
            req.placement,
            Some(WindowPlacement::new(
                Position::new(0, 48),
                Size::new(390, 716)
            ))
        );
    }

    #[test]
    fn unknown_panel_has_no_request() {
        let catalog = catalog();
        assert_eq!(
            open_request_for(
                &key("weather"),
                &catalog,
                Viewport::default(),
                0,
                &catalog.shell_config()
            ),
            None
        );
        assert_eq!(PlacementTable::default().get(&key("weather")), None);
    }
}
