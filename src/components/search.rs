//! File search palette.
//!
//! A flat, filterable list of every file in the tree. Picking one opens it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::dialogs::Modal;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/search.module.css");

#[component]
pub fn SearchDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = ctx.dialogs.search_open;
    let query = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let results = Memo::new(move |_| {
        let query = query.get();
        ctx.data.with(|data| data.files.search(&query))
    });

    // Focus the input each time the palette opens
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let close = Callback::new(move |_| {
        open.set(false);
        query.set(String::new());
    });

    view! {
        <Modal open=open title="Search" on_close=close>
            <div class=css::inputRow>
                <Icon icon=ic::SEARCH />
                <input
                    node_ref=input_ref
                    class=css::input
                    type="text"
                    placeholder="Search a file..."
                    prop:value=move || query.get()
                    on:input=move |e| query.set(event_target_value(&e))
                />
            </div>
            <div class=css::results role="listbox">
                <Show
                    when=move || !results.with(Vec::is_empty)
                    fallback=|| view! { <p class=css::empty>"No results found."</p> }
                >
                    <For
                        each=move || results.get()
                        key=|path| path.clone()
                        children=move |path| {
                            let path_for_click = path.clone();
                            view! {
                                <button
                                    class=css::result
                                    role="option"
                                    on:click=move |_| {
                                        ctx.open_file(path_for_click.clone());
                                        close.run(());
                                    }
                                >
                                    <Icon icon=ic::FILE />
                                    <span>{path}</span>
                                </button>
                            }
                        }
                    />
                </Show>
            </div>
        </Modal>
    }
}
