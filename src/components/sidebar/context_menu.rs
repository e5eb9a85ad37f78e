//! Right-click menu for tree nodes.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ContextMenu, default_new_file_path, folder_for_new_file};

stylance::import_crate_style!(css, "src/components/sidebar/context_menu.module.css");

/// Floating menu at the pointer, shown while `dialogs.context_menu` is set.
///
/// A click elsewhere, a window resize, or Escape closes it.
#[component]
pub fn TreeContextMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let menu = ctx.dialogs.context_menu;

    let close = move || {
        if menu.with_untracked(Option::is_some) {
            menu.set(None);
        }
    };
    let click_listener = window_event_listener(ev::click, move |_| close());
    let resize_listener = window_event_listener(ev::resize, move |_| close());
    let key_listener = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || {
        click_listener.remove();
        resize_listener.remove();
        key_listener.remove();
    });

    move || menu.get().map(|menu| view! { <MenuItems menu=menu /> })
}

#[component]
fn MenuItems(menu: ContextMenu) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let read_only = ctx.is_read_only();

    let target = menu.target;
    let is_folder = target.is_folder;
    let new_file_path = default_new_file_path(&folder_for_new_file(&target.path, is_folder));

    let open_path = target.path.clone();
    let on_open = move |_| ctx.open_file(open_path.clone());
    let on_new_file = move |_| ctx.prompt_new_file(new_file_path.clone());
    let on_delete = move |_| ctx.prompt_delete(target.clone());

    view! {
        <div
            class=css::menu
            role="menu"
            style=format!("left: {}px; top: {}px;", menu.x, menu.y)
            on:click=|e: ev::MouseEvent| e.stop_propagation()
            on:contextmenu=|e: ev::MouseEvent| e.prevent_default()
        >
            {(!is_folder).then(|| view! {
                <button class=css::item role="menuitem" on:click=on_open>
                    <span class=css::itemIcon><Icon icon=ic::FILE /></span>
                    "Open"
                </button>
            })}
            <button class=css::item role="menuitem" disabled=read_only on:click=on_new_file>
                <span class=css::itemIcon><Icon icon=ic::FILE_PLUS /></span>
                "New Text File"
            </button>
            <div class=css::divider></div>
            <button
                class=format!("{} {}", css::item, css::itemDestructive)
                role="menuitem"
                disabled=read_only
                on:click=on_delete
            >
                <span class=css::itemIcon><Icon icon=ic::TRASH /></span>
                {if is_folder { "Delete Folder" } else { "Delete File" }}
            </button>
        </div>
    }
}
