use super::*;

#[component]
/// Fixed menu bar across the top of the desktop.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-menubar", layout_class)
            role="menubar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Leading or trailing group of menu bar items.
pub fn MenuBarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu bar button.
pub fn MenuBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="menuitem"
            class=merge_layout_class("ui-menubar-item", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar-item"
            data-ui-slot=ui_slot
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| call_optional(on_click, ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Launcher strip along the bottom of the desktop.
pub fn Dock(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-dock", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="dock"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Dock launcher with an icon, a label, and an open-window indicator.
pub fn DockButton(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] running: MaybeSignal<bool>,
    #[prop(optional, into)] show_label: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let title = label.clone();
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-dock-button", layout_class)
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-running=move || bool_token(running.get())
            on:click=move |ev| call_optional(on_click, ev)
        >
            <img data-ui-slot="dock-icon" src=icon alt="" />
            <Show when=move || show_label.get() fallback=|| ()>
                <span data-ui-slot="dock-label">{label.clone()}</span>
            </Show>
            <span data-ui-slot="dock-indicator" aria-hidden="true"></span>
        </button>
    }
}
