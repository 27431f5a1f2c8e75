use folio_ui::{
    ResizeHandle, TrafficLight, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    frame::{frame_layout, FrameLayout, WindowControl},
    model::ResizeDirection,
    panels::panel_view,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary button for mice, primary contact for touch and pens.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn traffic_light(control: WindowControl) -> TrafficLight {
    match control {
        WindowControl::Close => TrafficLight::Close,
        WindowControl::Minimize => TrafficLight::Minimize,
        WindowControl::Maximize | WindowControl::Restore => TrafficLight::Maximize,
    }
}

#[component]
pub(super) fn DesktopWindow(window_key: WindowKey) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = runtime.config;
    let title = store_value(runtime.catalog.with_value(|catalog| catalog.title(&window_key)));
    let key = store_value(window_key);

    let layout = create_memo(move |_| {
        let live = runtime.interaction.with(|i| i.live_rect(&key.get_value()));
        let viewport = runtime.viewport.get();
        runtime.state.with(|desktop| {
            let key = key.get_value();
            desktop
                .window(&key)
                .and_then(|w| frame_layout(w, live, desktop.is_active(&key), viewport, &config))
        })
    });
    let field = move |read: fn(&FrameLayout) -> bool| {
        Signal::derive(move || layout.with(|l| l.as_ref().map(read).unwrap_or(false)))
    };
    let focused = field(|l| l.active);
    let maximized = field(|l| l.maximized);
    let style = Signal::derive(move || {
        layout.with(|l| l.as_ref().map(FrameLayout::style).unwrap_or_default())
    });
    let handles = Signal::derive(move || {
        layout.with(|l| {
            l.as_ref()
                .map(|l| l.resize_handles.clone())
                .unwrap_or_default()
        })
    });
    let control_label = move |slot: usize| {
        Signal::derive(move || {
            layout.with(|l| {
                l.as_ref()
                    .map(|l| l.controls[slot].aria_label().to_string())
                    .unwrap_or_default()
            })
        })
    };

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.focus_if_inactive(&key.get_value());
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.begin_drag(&key.get_value(), pointer_from_pointer_event(&ev));
    });
    let toggle_maximize = Callback::new(move |_: ()| {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            key: key.get_value(),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        toggle_maximize.call(());
    });
    let close = Callback::new(move |_: ()| {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            key: key.get_value(),
        });
    });
    let minimize = Callback::new(move |_: ()| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            key: key.get_value(),
        });
    });
    let controls = [
        (WindowControl::Close, close),
        (WindowControl::Minimize, minimize),
        (WindowControl::Maximize, toggle_maximize),
    ];

    view! {
        <Show when=move || layout.with(Option::is_some) fallback=|| ()>
            <WindowFrame
                id=key.get_value().dom_id()
                style=style
                aria_label=title.get_value()
                focused=focused
                maximized=maximized
                on_pointerdown=focus
            >
                <WindowTitleBar
                    focused=focused
                    on_pointerdown=begin_move
                    on_dblclick=titlebar_double_click
                >
                    <WindowControls>
                        {controls
                            .into_iter()
                            .enumerate()
                            .map(|(slot, (control, on_click))| {
                                view! {
                                    <WindowControlButton
                                        light=traffic_light(control)
                                        aria_label=control_label(slot)
                                        on_click=Callback::new(move |_| on_click.call(()))
                                    />
                                }
                            })
                            .collect_view()}
                    </WindowControls>
                    <WindowTitle>{title.get_value()}</WindowTitle>
                </WindowTitleBar>
                <WindowBody>{panel_view(&key.get_value(), title.get_value())}</WindowBody>
                <For each=move || handles.get() key=|direction| *direction let:direction>
                    <WindowResizeHandle window_key=key.get_value() direction=direction />
                </For>
            </WindowFrame>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window_key: WindowKey, direction: ResizeDirection) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let key = store_value(window_key);

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.begin_resize(&key.get_value(), direction, pointer_from_pointer_event(&ev));
    });

    view! { <ResizeHandle edge=direction.token() on_pointerdown=on_pointerdown /> }
}
