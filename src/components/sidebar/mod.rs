//! Collapsible, resizable sidebar holding the file tree.
//!
//! On desktop the sidebar sits beside the editor and can be resized by
//! dragging its edge. On narrow screens it becomes an off-canvas drawer
//! over a backdrop. `Ctrl/Cmd+B` toggles whichever mode is active.

mod context_menu;
mod tree;

pub use context_menu::TreeContextMenu;

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{MOBILE_MEDIA_QUERY, sidebar};
use crate::models::{default_new_file_path, sidebar_width_for_pointer};
use crate::utils::dom;
use tree::FileTreeView;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

// =============================================================================
// SidebarState
// =============================================================================

/// Sidebar layout state, provided by [`SidebarProvider`].
#[derive(Clone, Copy)]
pub struct SidebarState {
    /// Desktop sidebar expanded.
    pub open: RwSignal<bool>,
    /// Mobile drawer shown.
    pub open_mobile: RwSignal<bool>,
    /// Desktop width in pixels.
    pub width: RwSignal<f64>,
    /// Resize drag in progress.
    pub dragging: RwSignal<bool>,
    /// Viewport is phone-sized.
    pub is_mobile: Signal<bool>,
    /// The sidebar panel, measured while resizing.
    pub panel: NodeRef<leptos::html::Aside>,
}

impl SidebarState {
    fn new(is_mobile: Signal<bool>) -> Self {
        Self {
            open: RwSignal::new(true),
            open_mobile: RwSignal::new(false),
            width: RwSignal::new(sidebar::DEFAULT_WIDTH),
            dragging: RwSignal::new(false),
            is_mobile,
            panel: NodeRef::new(),
        }
    }

    /// Toggle the drawer on mobile, the panel otherwise.
    pub fn toggle(&self) {
        if self.is_mobile.get_untracked() {
            self.open_mobile.update(|open| *open = !*open);
        } else {
            self.open.update(|open| *open = !*open);
        }
    }

    /// Hide the mobile drawer (after picking a file).
    pub fn close_mobile(&self) {
        self.open_mobile.set(false);
    }

    fn start_resize(&self) {
        self.dragging.set(true);
        dom::set_body_drag_style(Some("col-resize"));
    }

    fn resize_to(&self, pointer_x: f64) {
        let left = self
            .panel
            .get_untracked()
            .map(|panel| panel.get_bounding_client_rect().left())
            .unwrap_or(0.0);
        self.width.set(sidebar_width_for_pointer(pointer_x, left));
    }

    fn stop_resize(&self) {
        self.dragging.set(false);
        dom::set_body_drag_style(None);
    }
}

// =============================================================================
// Components
// =============================================================================

/// Provides [`SidebarState`] and the global shortcut and drag listeners.
#[component]
pub fn SidebarProvider(children: Children) -> impl IntoView {
    let state = SidebarState::new(use_media_query(MOBILE_MEDIA_QUERY));
    provide_context(state);

    let toggle_listener = window_event_listener(ev::keydown, move |e| {
        if (e.ctrl_key() || e.meta_key()) && e.key() == sidebar::TOGGLE_SHORTCUT {
            e.prevent_default();
            state.toggle();
        }
    });
    let move_listener = window_event_listener(ev::pointermove, move |e| {
        if state.dragging.get_untracked() {
            state.resize_to(e.client_x() as f64);
        }
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if state.dragging.get_untracked() {
            state.stop_resize();
        }
    });
    on_cleanup(move || {
        toggle_listener.remove();
        move_listener.remove();
        up_listener.remove();
    });

    view! { <div class=css::wrapper>{children()}</div> }
}

/// The sidebar panel: search entry, file actions, and the tree.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = use_context::<SidebarState>().expect("SidebarState must be provided");
    let read_only = ctx.is_read_only();

    let panel_class = move || {
        if state.is_mobile.get() {
            if state.open_mobile.get() {
                format!("{} {} {}", css::sidebar, css::mobile, css::mobileOpen)
            } else {
                format!("{} {}", css::sidebar, css::mobile)
            }
        } else if state.open.get() {
            css::sidebar.to_string()
        } else {
            format!("{} {}", css::sidebar, css::collapsed)
        }
    };
    let panel_style = move || {
        if state.is_mobile.get() {
            format!("width: {};", sidebar::MOBILE_WIDTH)
        } else {
            format!("width: {}px;", state.width.get())
        }
    };

    view! {
        <Show when=move || state.is_mobile.get() && state.open_mobile.get()>
            <div class=css::backdrop on:click=move |_| state.close_mobile()></div>
        </Show>
        <aside node_ref=state.panel class=panel_class style=panel_style>
            <div class=css::content>
                <div class=css::group>
                    <button
                        class=css::menuButton
                        on:click=move |_| ctx.dialogs.search_open.set(true)
                    >
                        <Icon icon=ic::SEARCH />
                        <span>"Search"</span>
                    </button>
                </div>
                <div class=css::group>
                    <div class=css::groupHeader>
                        <span class=css::groupLabel>"Files"</span>
                        <div class=css::groupActions>
                            <button
                                class=css::iconButton
                                title="New Text File"
                                disabled=read_only
                                on:click=move |_| ctx.prompt_new_file(default_new_file_path(""))
                            >
                                <Icon icon=ic::FILE_PLUS />
                            </button>
                            <button
                                class=css::iconButton
                                title="Upload Files"
                                disabled=read_only
                                on:click=move |_| ctx.dialogs.upload_files.set(true)
                            >
                                <Icon icon=ic::UPLOAD />
                            </button>
                            <button
                                class=css::iconButton
                                title="Upload Folder"
                                disabled=read_only
                                on:click=move |_| ctx.dialogs.pick_folder()
                            >
                                <Icon icon=ic::FOLDER_PLUS />
                            </button>
                            <button
                                class=css::iconButton
                                title="Reload"
                                on:click=move |_| ctx.reload()
                            >
                                <Icon icon=ic::RELOAD />
                            </button>
                        </div>
                    </div>
                    <FileTreeView />
                </div>
            </div>
            <Show when=move || !state.is_mobile.get()>
                <ResizeHandle />
            </Show>
        </aside>
    }
}

/// Drag handle on the sidebar's right edge.
#[component]
fn ResizeHandle() -> impl IntoView {
    let state = use_context::<SidebarState>().expect("SidebarState must be provided");

    view! {
        <div
            class=move || {
                if state.dragging.get() {
                    format!("{} {}", css::resizeHandle, css::resizeHandleActive)
                } else {
                    css::resizeHandle.to_string()
                }
            }
            role="separator"
            aria-orientation="vertical"
            title="Drag to resize"
            on:pointerdown=move |e: ev::PointerEvent| {
                e.prevent_default();
                state.start_resize();
            }
        ></div>
    }
}

/// Button toggling the sidebar.
#[component]
pub fn SidebarTrigger() -> impl IntoView {
    let state = use_context::<SidebarState>().expect("SidebarState must be provided");

    view! {
        <button
            class=css::iconButton
            title="Toggle sidebar (Ctrl+B)"
            on:click=move |_| state.toggle()
        >
            <Icon icon=ic::PANEL_LEFT />
        </button>
    }
}
