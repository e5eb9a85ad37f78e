//! Recursive file tree.
//!
//! Files open in the viewer on click. Folders collapse and expand; a few
//! reserved names start expanded. Right-clicking any node opens the
//! context menu with its actions.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::SidebarState;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::DEFAULT_EXPANDED_FOLDERS;
use crate::models::{ContextMenu, FileKind, NodeTarget, TreeItem};

stylance::import_crate_style!(css, "src/components/sidebar/tree.module.css");

/// Get icon for a file based on its kind.
fn file_icon(path: &str) -> IconData {
    match FileKind::from_path(path) {
        FileKind::Image => ic::FILE_IMAGE,
        FileKind::Config(_) => ic::FILE_CONFIG,
        FileKind::Text => ic::FILE,
    }
}

/// Open the context menu for a node at the pointer position.
fn open_context_menu(ctx: AppContext, e: web_sys::MouseEvent, target: NodeTarget) {
    e.prevent_default();
    ctx.dialogs.context_menu.set(Some(ContextMenu {
        x: e.client_x() as f64,
        y: e.client_y() as f64,
        target,
    }));
}

/// Top-level tree, rebuilt whenever the data reloads.
#[component]
pub fn FileTreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <ul class=css::tree role="tree">
            {move || {
                if ctx.data.with(|data| data.files.is_empty()) {
                    return view! { <li class=css::empty>"No files"</li> }.into_any();
                }
                ctx.data
                    .with(|data| data.files.roots().to_vec())
                    .into_iter()
                    .map(|item| view! { <TreeNode item=item parent=String::new() /> })
                    .collect_view()
                    .into_any()
            }}
        </ul>
    }
}

/// A single node and, for expanded folders, its children.
#[component]
fn TreeNode(item: TreeItem, parent: String) -> AnyView {
    let path = item.full_path(&parent);

    match item {
        TreeItem::File(name) => view! { <FileNode name=name path=path /> }.into_any(),
        TreeItem::Folder { name, children } => {
            view! { <FolderNode name=name path=path items=children /> }.into_any()
        }
    }
}

#[component]
fn FileNode(name: String, path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sidebar = use_context::<SidebarState>().expect("SidebarState must be provided");

    let icon = file_icon(&path);
    let path_for_active = path.clone();
    let is_active =
        Signal::derive(move || ctx.viewer.with(|v| v.opened() == Some(path_for_active.as_str())));

    let path_for_click = path.clone();
    let on_click = move |_| {
        ctx.open_file(path_for_click.clone());
        sidebar.close_mobile();
    };
    let on_context_menu = move |e| {
        let target = NodeTarget {
            path: path.clone(),
            is_folder: false,
        };
        open_context_menu(ctx, e, target);
    };

    view! {
        <li role="treeitem">
            <button
                class=move || {
                    if is_active.get() {
                        format!("{} {}", css::row, css::rowActive)
                    } else {
                        css::row.to_string()
                    }
                }
                on:click=on_click
                on:contextmenu=on_context_menu
            >
                <span class=css::chevronSpacer></span>
                <span class=css::icon><Icon icon=icon /></span>
                <span class=css::label>{name}</span>
            </button>
        </li>
    }
}

#[component]
fn FolderNode(name: String, path: String, items: Vec<TreeItem>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let expanded = RwSignal::new(DEFAULT_EXPANDED_FOLDERS.contains(&name.as_str()));

    let path_for_menu = path.clone();
    let on_context_menu = move |e| {
        let target = NodeTarget {
            path: path_for_menu.clone(),
            is_folder: true,
        };
        open_context_menu(ctx, e, target);
    };

    view! {
        <li role="treeitem" aria-expanded=move || expanded.get().to_string()>
            <button
                class=css::row
                on:click=move |_| expanded.update(|open| *open = !*open)
                on:contextmenu=on_context_menu
            >
                <span class=move || {
                    if expanded.get() {
                        format!("{} {}", css::chevron, css::chevronOpen)
                    } else {
                        css::chevron.to_string()
                    }
                }>
                    <Icon icon=ic::CHEVRON_RIGHT />
                </span>
                <span class=css::icon>
                    {move || {
                        let icon = if expanded.get() { ic::FOLDER_OPEN } else { ic::FOLDER };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
                <span class=css::label>{name}</span>
            </button>
            <Show when=move || expanded.get()>
                <ul class=css::subtree role="group">
                    {items
                        .clone()
                        .into_iter()
                        .map(|child| view! { <TreeNode item=child parent=path.clone() /> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}
