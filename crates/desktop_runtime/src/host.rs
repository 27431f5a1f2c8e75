//! Browser-side helpers for executing reducer effects and querying the environment.
//!
//! Everything touching `web_sys` lives behind `cfg(target_arch = "wasm32")` so the pure
//! window-management modules and their tests build natively.

use leptos::{logging, Callback};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{Viewport, WindowKey},
    reducer::RuntimeEffect,
    shortcuts::KeyChord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Host bundle used by the effect executor and the shell for browser integration.
pub struct DesktopHostContext {
    fallback_viewport: Viewport,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            fallback_viewport: Viewport::default(),
        }
    }
}

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowElement(key) => focus_window_element(&key),
            RuntimeEffect::PanelLifecycle { key, event } => {
                logging::log!("panel `{key}` {}", event.token());
            }
        }
    }

    /// Current browser viewport, or the fallback when no window is available.
    pub fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                    value.ok().and_then(|value| value.as_f64()).map(|value| value as i32)
                };
                let width = dimension(window.inner_width()).unwrap_or(self.fallback_viewport.width);
                let height =
                    dimension(window.inner_height()).unwrap_or(self.fallback_viewport.height);
                return Viewport::new(width, height);
            }
        }

        self.fallback_viewport
    }
}

/// Moves keyboard focus to the frame of `key` on the next tick, after the frame has rendered.
pub fn focus_window_element(key: &WindowKey) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = key.dom_id();
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = key;
}

/// Handle to a keyboard listener installed on the document in the capture phase.
pub struct CaptureKeyListener {
    #[cfg(target_arch = "wasm32")]
    installed: Option<(web_sys::Document, Closure<dyn FnMut(web_sys::KeyboardEvent)>)>,
}

impl CaptureKeyListener {
    /// Detaches the listener.
    pub fn remove(self) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some((document, closure)) = self.installed else {
                return;
            };
            if let Err(err) = document.remove_event_listener_with_callback_and_bool(
                "keydown",
                closure.as_ref().unchecked_ref(),
                true,
            ) {
                logging::warn!("keydown listener removal failed: {err:?}");
            }
        }
    }
}

/// Installs a capture-phase `keydown` listener on the document.
///
/// `handler` receives the chord and returns whether the browser default should be prevented.
pub fn install_capture_keydown(handler: Callback<KeyChord, bool>) -> CaptureKeyListener {
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::Callable;

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            logging::warn!("no document available for keyboard shortcuts");
            return CaptureKeyListener { installed: None };
        };
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
            move |ev: web_sys::KeyboardEvent| {
                if handler.call(KeyChord::from_event(&ev)) {
                    ev.prevent_default();
                }
            },
        ));
        if let Err(err) = document.add_event_listener_with_callback_and_bool(
            "keydown",
            closure.as_ref().unchecked_ref(),
            true,
        ) {
            logging::warn!("keydown listener installation failed: {err:?}");
            return CaptureKeyListener { installed: None };
        }
        CaptureKeyListener {
            installed: Some((document, closure)),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = handler;
        CaptureKeyListener {}
    }
}
