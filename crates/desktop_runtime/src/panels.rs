//! Static content mounted inside each window.
//!
//! The portfolio sections are lightweight placeholders; their network-backed content lives
//! outside the window manager.

use folio_ui::{Heading, Panel, TerminalLine, TerminalSurface, Text, TextRole, TextTone};
use leptos::*;

use crate::model::WindowKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    AboutMe,
    Projects,
    Blog,
    OpenSource,
    Contact,
    Resume,
    Unknown,
}

impl PanelKind {
    pub fn from_key(key: &WindowKey) -> Self {
        match key.as_str() {
            "aboutMe" => Self::AboutMe,
            "projects" => Self::Projects,
            "blog" => Self::Blog,
            "openSource" => Self::OpenSource,
            "contact" => Self::Contact,
            "resume" => Self::Resume,
            _ => Self::Unknown,
        }
    }
}

/// Content view for `key`.
pub fn panel_view(key: &WindowKey, title: String) -> View {
    match PanelKind::from_key(key) {
        PanelKind::AboutMe => view! {
            <Panel ui_slot="about-me" aria_label=title.clone()>
                <Heading>{title}</Heading>
                <Text>"Software engineer building systems, tools, and the occasional side project."</Text>
                <Text tone=TextTone::Secondary>"Open the dock to explore projects, writing, and ways to get in touch."</Text>
            </Panel>
        }
        .into_view(),
        PanelKind::Projects => view! {
            <Panel ui_slot="projects" aria_label=title.clone()>
                <Heading>{title}</Heading>
                <Text>"A selection of personal and professional work."</Text>
                <Text role=TextRole::Label tone=TextTone::Secondary>"Project cards load here."</Text>
            </Panel>
        }
        .into_view(),
        PanelKind::Blog => view! {
            <Panel ui_slot="blog" aria_label=title.clone()>
                <Heading>{title}</Heading>
                <Text>"Notes and long-form posts."</Text>
                <Text role=TextRole::Label tone=TextTone::Secondary>"Recent posts load here."</Text>
            </Panel>
        }
        .into_view(),
        PanelKind::OpenSource => view! {
            <TerminalSurface>
                <TerminalLine tone=TextTone::Accent>{format!("{title} % gh repo list --public")}</TerminalLine>
                <TerminalLine tone=TextTone::Secondary>"fetching repositories..."</TerminalLine>
            </TerminalSurface>
        }
        .into_view(),
        PanelKind::Contact => view! {
            <Panel ui_slot="contact" aria_label=title.clone()>
                <Heading>{title}</Heading>
                <Text>"Say hello by email or find me on GitHub and LinkedIn."</Text>
            </Panel>
        }
        .into_view(),
        PanelKind::Resume => view! {
            <Panel ui_slot="resume" aria_label=title.clone()>
                <Heading>{title}</Heading>
                <Text role=TextRole::Code>"experience | education | skills"</Text>
            </Panel>
        }
        .into_view(),
        PanelKind::Unknown => view! {
            <Panel aria_label=title.clone()>
                <Text tone=TextTone::Secondary>{title}</Text>
            </Panel>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::PanelCatalog;

    #[test]
    fn every_catalog_panel_has_dedicated_content() {
        let catalog = PanelCatalog::builtin().expect("builtin catalog");
        for panel in catalog.panels() {
            assert_ne!(
                PanelKind::from_key(&panel.id),
                PanelKind::Unknown,
                "{}",
                panel.id
            );
        }
        assert_eq!(
            PanelKind::from_key(&WindowKey::trusted("weather")),
            PanelKind::Unknown
        );
    }
}
