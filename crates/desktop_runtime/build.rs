use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellSection {
    menu_bar_height: i32,
    dock_reservation: i32,
    cascade_step: i32,
    narrow_breakpoint: i32,
    min_width: i32,
    min_height: i32,
    base_z_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PanelPosition {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PanelSize {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PanelManifest {
    id: String,
    title: String,
    dock_label: String,
    dock_icon: String,
    show_in_dock: bool,
    show_in_menu_bar: bool,
    position: PanelPosition,
    size: PanelSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    shell: ShellSection,
    #[serde(rename = "panel")]
    panels: Vec<PanelManifest>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("panels.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if manifest.schema_version != 1 {
        panic!(
            "panel catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for panel in &manifest.panels {
        if panel.id.is_empty() || panel.id.chars().any(char::is_whitespace) {
            panic!("invalid panel id `{}` in {}", panel.id, path.display());
        }
        if !seen.insert(panel.id.clone()) {
            panic!("duplicate panel id `{}` in {}", panel.id, path.display());
        }
        if panel.size.width < manifest.shell.min_width
            || panel.size.height < manifest.shell.min_height
        {
            panic!(
                "panel `{}` default size {}x{} is below the {}x{} floor",
                panel.id,
                panel.size.width,
                panel.size.height,
                manifest.shell.min_width,
                manifest.shell.min_height
            );
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize panel catalog");
    let generated = format!(
        "/// Build-time generated panel catalog JSON.\n\
pub const PANEL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("panel_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
