//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the window store signal, the gesture state, the runtime effect queue, and
//! the panel catalog. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    catalog::{PanelCatalog, PlacementTable},
    config::ShellConfig,
    effect_executor,
    host::DesktopHostContext,
    interaction::InteractionState,
    model::{DesktopState, PointerPosition, ResizeDirection, Viewport, WindowKey},
    placement::open_request_for,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Browser integration for effects and viewport queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Panel registry the dock and menu bar are built from.
    pub catalog: StoredValue<PanelCatalog>,
    /// Default geometry per window id.
    pub placements: StoredValue<PlacementTable>,
    /// Shell layout constants.
    pub config: ShellConfig,
    /// Reactive window store.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag/resize gesture state.
    pub interaction: RwSignal<InteractionState>,
    /// Last observed browser viewport.
    pub viewport: RwSignal<Viewport>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Whether the current viewport uses the mobile layout.
    pub fn is_narrow(&self) -> bool {
        self.config.is_narrow(self.viewport.get())
    }

    /// Opens `key` with shell placement, or focuses it when already open.
    pub fn open_panel(&self, key: &WindowKey) {
        let desktop = self.state.get_untracked();
        if desktop.is_open(key) {
            self.dispatch_action(DesktopAction::FocusWindow { key: key.clone() });
            return;
        }

        let request = self.catalog.with_value(|catalog| {
            open_request_for(
                key,
                catalog,
                self.viewport.get_untracked(),
                desktop.open_window_count(),
                &self.config,
            )
        });
        match request {
            Some(request) => self.dispatch_action(DesktopAction::OpenWindow(request)),
            None => logging::warn!("no panel registered for window `{key}`"),
        }
    }

    /// Focuses `key` unless it is already the active, visible window.
    pub fn focus_if_inactive(&self, key: &WindowKey) {
        let needs_focus = self.state.with_untracked(|desktop| {
            !desktop.is_active(key)
                || desktop
                    .window(key)
                    .map(|w| w.is_minimized)
                    .unwrap_or(false)
        });
        if needs_focus {
            self.dispatch_action(DesktopAction::FocusWindow { key: key.clone() });
        }
    }

    /// Starts a title-bar drag and raises the window.
    pub fn begin_drag(&self, key: &WindowKey, pointer: PointerPosition) {
        self.focus_if_inactive(key);
        let desktop = self.state.get_untracked();
        self.interaction.update(|interaction| {
            if let Err(err) = interaction.begin_drag(&desktop, key, pointer) {
                logging::debug_warn!("drag ignored: {err}");
            }
        });
    }

    /// Starts a resize from one of the frame handles and raises the window.
    pub fn begin_resize(&self, key: &WindowKey, direction: ResizeDirection, pointer: PointerPosition) {
        self.focus_if_inactive(key);
        let desktop = self.state.get_untracked();
        self.interaction.update(|interaction| {
            if let Err(err) = interaction.begin_resize(&desktop, key, direction, pointer) {
                logging::debug_warn!("resize ignored: {err}");
            }
        });
    }

    /// Feeds a pointer move into the active gesture; the store is not touched.
    pub fn pointer_moved(&self, pointer: PointerPosition) {
        if self.interaction.with_untracked(InteractionState::is_idle) {
            return;
        }
        let viewport = self.viewport.get_untracked();
        let config = self.config;
        self.interaction.update(|interaction| {
            interaction.update_drag(pointer, viewport);
            interaction.update_resize(pointer, viewport, &config);
        });
    }

    /// Commits the active gesture, if any, to the store.
    pub fn pointer_released(&self) {
        if self.interaction.with_untracked(InteractionState::is_idle) {
            return;
        }
        let mut commit = None;
        self.interaction
            .update(|interaction| commit = interaction.end_gesture());
        if let Some(commit) = commit {
            for action in commit.into_actions() {
                self.dispatch_action(action);
            }
        }
    }
}

fn load_catalog() -> PanelCatalog {
    match PanelCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::error!("panel catalog failed to load: {err}");
            PanelCatalog::default()
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = load_catalog();
    let config = catalog.shell_config();
    let host = DesktopHostContext::default();
    let initial_viewport = host.viewport();

    let placements = store_value(catalog.placement_table());
    let catalog = store_value(catalog);
    let host = store_value(host);
    let state = create_rw_signal(DesktopState::new(config.base_z_index));
    let interaction = create_rw_signal(InteractionState::default());
    let viewport = create_rw_signal(initial_viewport);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        let result = placements.with_value(|defaults| reduce_desktop(&mut desktop, defaults, action));
        match result {
            Ok(new_effects) => {
                if desktop != previous {
                    let gesture_window = interaction.with_untracked(|i| {
                        i.dragging
                            .as_ref()
                            .map(|d| d.window.clone())
                            .or_else(|| i.resizing.as_ref().map(|r| r.window.clone()))
                    });
                    if let Some(key) = gesture_window.filter(|key| !desktop.is_open(key)) {
                        interaction.update(|i| i.cancel_for(&key));
                    }
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::debug_warn!("desktop action ignored: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        catalog,
        placements,
        config,
        state,
        interaction,
        viewport,
        effects,
        dispatch,
    };

    provide_context(runtime);
    runtime.dispatch_action(DesktopAction::ViewportChanged {
        viewport: initial_viewport,
        narrow_breakpoint: config.narrow_breakpoint,
    });
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
