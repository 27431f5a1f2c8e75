//! Panel registry and default placement table built from the bundled `panels.toml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ShellConfig;
use crate::model::{Position, Size, WindowKey, WindowPlacement};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/panel_catalog_generated.rs"));
}

/// Supported `schema_version` for the bundled catalog.
pub const PANEL_CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("panel catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("panel catalog schema mismatch: expected {expected} found {found}")]
    SchemaMismatch { expected: u32, found: u32 },
    #[error("duplicate panel id `{0}`")]
    DuplicatePanel(String),
}

/// Static description of one window id: title, launcher entries, and default geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    pub id: WindowKey,
    pub title: String,
    pub dock_label: String,
    pub dock_icon: String,
    pub show_in_dock: bool,
    pub show_in_menu_bar: bool,
    pub position: Position,
    pub size: Size,
}

impl PanelDescriptor {
    pub fn default_placement(&self) -> WindowPlacement {
        WindowPlacement::new(self.position, self.size)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    schema_version: u32,
    #[serde(default)]
    shell: ShellConfig,
    #[serde(rename = "panel", default)]
    panels: Vec<PanelDescriptor>,
}

/// Window id to default placement, consulted when a window opens without explicit geometry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacementTable(BTreeMap<WindowKey, WindowPlacement>);

impl PlacementTable {
    pub fn get(&self, key: &WindowKey) -> Option<WindowPlacement> {
        self.0.get(key).copied()
    }
}

impl FromIterator<(WindowKey, WindowPlacement)> for PlacementTable {
    fn from_iter<T: IntoIterator<Item = (WindowKey, WindowPlacement)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelCatalog {
    shell: ShellConfig,
    panels: Vec<PanelDescriptor>,
}

impl PanelCatalog {
    /// Loads the catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled JSON is malformed or fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(generated::PANEL_CATALOG_JSON)
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed JSON, an unsupported schema, or duplicate ids.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        if document.schema_version != PANEL_CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaMismatch {
                expected: PANEL_CATALOG_SCHEMA_VERSION,
                found: document.schema_version,
            });
        }
        for (idx, panel) in document.panels.iter().enumerate() {
            if document.panels[..idx].iter().any(|p| p.id == panel.id) {
                return Err(CatalogError::DuplicatePanel(panel.id.to_string()));
            }
        }
        Ok(Self {
            shell: document.shell,
            panels: document.panels,
        })
    }

    pub fn shell_config(&self) -> ShellConfig {
        self.shell
    }

    pub fn panels(&self) -> &[PanelDescriptor] {
        &self.panels
    }

    pub fn panel(&self, key: &WindowKey) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|panel| panel.id == *key)
    }

    /// Display title for `key`, falling back to the raw id for unknown panels.
    pub fn title(&self, key: &WindowKey) -> String {
        self.panel(key)
            .map(|panel| panel.title.clone())
            .unwrap_or_else(|| key.to_string())
    }

    pub fn dock_panels(&self) -> Vec<PanelDescriptor> {
        self.panels
            .iter()
            .filter(|panel| panel.show_in_dock)
            .cloned()
            .collect()
    }

    pub fn menu_bar_panels(&self) -> Vec<PanelDescriptor> {
        self.panels
            .iter()
            .filter(|panel| panel.show_in_menu_bar)
            .cloned()
            .collect()
    }

    pub fn placement_table(&self) -> PlacementTable {
        self.panels
            .iter()
            .map(|panel| (panel.id.clone(), panel.default_placement()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_loads_all_panels() {
        let catalog = PanelCatalog::builtin().expect("builtin catalog");
        let ids: Vec<&str> = catalog.panels().iter().map(|p| p.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["aboutMe", "projects", "blog", "openSource", "contact", "resume"]
        );
        assert_eq!(catalog.shell_config(), ShellConfig::default());
    }

    #[test]
    fn builtin_placement_table_has_projects_default() {
        let table = PanelCatalog::builtin()
            .expect("builtin catalog")
            .placement_table();

        assert_eq!(
            table.get(&WindowKey::trusted("projects")),
            Some(WindowPlacement::new(
                Position::new(150, 120),
                Size::new(800, 600)
            ))
        );
        assert_eq!(table.get(&WindowKey::trusted("githubActivity")), None);
    }

    #[test]
    fn dock_and_menu_bar_filters_follow_flags() {
        let catalog = PanelCatalog::builtin().expect("builtin catalog");
        let dock: Vec<String> = catalog
            .dock_panels()
            .into_iter()
            .map(|p| p.dock_label)
            .collect();
        let menu: Vec<String> = catalog
            .menu_bar_panels()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(
            dock,
            vec!["About Me", "Projects", "Blog", "Open Source", "Contact"]
        );
        assert_eq!(menu, vec!["Projects", "Blog", "Contact", "Resume"]);
    }

    #[test]
    fn title_falls_back_to_id() {
        let catalog = PanelCatalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.title(&WindowKey::trusted("openSource")), "vatsal@github ~ zsh");
        assert_eq!(catalog.title(&WindowKey::trusted("widgets")), "widgets");
    }

    #[test]
    fn rejects_schema_mismatch_and_duplicates() {
        let wrong_schema = r#"{ "schema_version": 2, "panel": [] }"#;
        assert!(matches!(
            PanelCatalog::from_json(wrong_schema),
            Err(CatalogError::SchemaMismatch { expected: 1, found: 2 })
        ));

        let panel = r#"{ "id": "blog", "title": "Blog", "dock_label": "Blog", "dock_icon": "b.png",
            "show_in_dock": true, "show_in_menu_bar": true,
            "position": { "x": 0, "y": 0 }, "size": { "width": 400, "height": 300 } }"#;
        let duplicated = format!(r#"{{ "schema_version": 1, "panel": [{panel}, {panel}] }}"#);
        assert!(matches!(
            PanelCatalog::from_json(&duplicated),
            Err(CatalogError::DuplicatePanel(id)) if id == "blog"
        ));

        assert!(matches!(
            PanelCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
