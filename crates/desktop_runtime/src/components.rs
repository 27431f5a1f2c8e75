//! Desktop shell UI composition: menu bar, dock, and the window layer.

mod window;

use folio_ui::{
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Dock, DockButton, MenuBar, MenuBarItem,
    MenuBarSection,
};
use leptos::*;

use self::window::DesktopWindow;
use crate::{
    catalog::PanelCatalog,
    host::install_capture_keydown,
    model::{DesktopState, PointerPosition, WindowKey},
    reducer::DesktopAction,
    shortcuts::{is_close_window_chord, KeyChord},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Open windows in stable key order; stacking comes from each frame's z-index.
fn open_window_keys(state: &DesktopState) -> Vec<WindowKey> {
    state
        .windows
        .iter()
        .filter(|(_, window)| window.is_open)
        .map(|(key, _)| key.clone())
        .collect()
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}

#[component]
/// Renders the desktop shell and installs the global pointer, resize, and keyboard listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let narrow = Signal::derive(move || runtime.is_narrow());

    // Gestures are tracked on the window so they keep receiving moves and the final up event
    // after the pointer leaves the frame.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        runtime.pointer_moved(pointer_from_pointer_event(&ev));
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| runtime.pointer_released());
    let cancel_listener =
        window_event_listener(ev::pointercancel, move |_| runtime.pointer_released());
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.with_value(|host| host.viewport());
        runtime.viewport.set(viewport);
        runtime.dispatch_action(DesktopAction::ViewportChanged {
            viewport,
            narrow_breakpoint: runtime.config.narrow_breakpoint,
        });
    });
    let close_shortcut = install_capture_keydown(Callback::new(move |chord: KeyChord| {
        if !is_close_window_chord(&chord) {
            return false;
        }
        let has_active = state.with_untracked(|desktop| desktop.active_window().is_some());
        if has_active {
            runtime.dispatch_action(DesktopAction::CloseActiveWindow);
        }
        has_active
    }));
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
        resize_listener.remove();
        close_shortcut.remove();
    });

    let close_all = Callback::new(move |_| runtime.dispatch_action(DesktopAction::CloseAllWindows));
    let active_title = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .active_window()
                .map(|key| runtime.catalog.with_value(|catalog| catalog.title(key)))
                .unwrap_or_default()
        })
    });

    view! {
        <DesktopRoot id="desktop-shell-root" narrow=narrow>
            <MenuBar aria_label="Menu bar">
                <MenuBarSection ui_slot="leading">
                    <MenuBarItem ui_slot="logo" aria_label="Close all windows" on_click=close_all>
                        "folio"
                    </MenuBarItem>
                    <MenuBarItem ui_slot="home" on_click=close_all>
                        "Home"
                    </MenuBarItem>
                    <For
                        each=move || runtime.catalog.with_value(PanelCatalog::menu_bar_panels)
                        key=|panel| panel.id.clone()
                        let:panel
                    >
                        {{
                            let key = store_value(panel.id.clone());
                            view! {
                                <MenuBarItem
                                    active=Signal::derive(move || {
                                        state.with(|desktop| desktop.is_active(&key.get_value()))
                                    })
                                    on_click=Callback::new(move |_| {
                                        runtime.open_panel(&key.get_value());
                                    })
                                >
                                    {panel.title.clone()}
                                </MenuBarItem>
                            }
                        }}
                    </For>
                </MenuBarSection>
                <MenuBarSection ui_slot="trailing">
                    <span data-ui-slot="active-title">{move || active_title.get()}</span>
                </MenuBarSection>
            </MenuBar>

            <DesktopBackdrop>
                <DesktopWindowLayer>
                    <For
                        each=move || state.with(open_window_keys)
                        key=|window_key| window_key.clone()
                        let:window_key
                    >
                        <DesktopWindow window_key=window_key />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <Dock aria_label="Dock">
                <For
                    each=move || runtime.catalog.with_value(PanelCatalog::dock_panels)
                    key=|panel| panel.id.clone()
                    let:panel
                >
                    {{
                        let key = store_value(panel.id.clone());
                        view! {
                            <DockButton
                                label=panel.dock_label.clone()
                                icon=panel.dock_icon.clone()
                                running=Signal::derive(move || {
                                    state.with(|desktop| desktop.is_open(&key.get_value()))
                                })
                                show_label=Signal::derive(move || !narrow.get())
                                on_click=Callback::new(move |_| {
                                    runtime.open_panel(&key.get_value());
                                })
                            />
                        }
                    }}
                </For>
            </Dock>
        </DesktopRoot>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::PlacementTable;
    use crate::model::OpenWindowRequest;
    use crate::reducer::reduce_desktop;

    #[test]
    fn window_layer_lists_open_windows_in_key_order() {
        let catalog = PanelCatalog::builtin().expect("builtin catalog");
        let defaults: PlacementTable = catalog.placement_table();
        let mut state = DesktopState::default();
        for id in ["resume", "blog", "projects"] {
            reduce_desktop(
                &mut state,
                &defaults,
                DesktopAction::OpenWindow(OpenWindowRequest::new(WindowKey::trusted(id))),
            )
            .expect("open");
        }
        reduce_desktop(
            &mut state,
            &defaults,
            DesktopAction::CloseWindow {
                key: WindowKey::trusted("blog"),
            },
        )
        .expect("close");

        let keys: Vec<String> = open_window_keys(&state)
            .into_iter()
            .map(|key| key.to_string())
            .collect();
        assert_eq!(keys, vec!["projects", "resume"]);
    }
}
