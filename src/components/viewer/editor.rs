//! Plain text editor with a line-number gutter.

use leptos::ev;
use leptos::prelude::*;

use super::css;
use crate::app::AppContext;
use crate::models::language_for;
use crate::utils::format::line_count;

/// Edits the opened file's cached text in place.
///
/// Every keystroke replaces the viewer text; saving uploads whatever is
/// cached at that moment.
#[component]
pub fn CodeEditor(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let gutter_ref = NodeRef::<leptos::html::Div>::new();
    let language = language_for(&path);
    let read_only = ctx.is_read_only();

    let text = move || ctx.viewer.with(|v| v.text().unwrap_or_default().to_string());
    let lines = Memo::new(move |_| ctx.viewer.with(|v| line_count(v.text().unwrap_or_default())));

    let on_input = move |e: ev::Event| {
        let value = event_target_value(&e);
        ctx.viewer.update(|v| v.edit(value));
    };

    // Keep the gutter aligned with the text when scrolling
    let on_scroll = move |e: ev::Event| {
        let textarea = event_target::<web_sys::HtmlTextAreaElement>(&e);
        if let Some(gutter) = gutter_ref.get_untracked() {
            gutter.set_scroll_top(textarea.scroll_top());
        }
    };

    // Tab inserts two spaces instead of moving focus
    let on_keydown = move |e: ev::KeyboardEvent| {
        if e.key() != "Tab" || e.shift_key() {
            return;
        }
        e.prevent_default();
        let textarea = event_target::<web_sys::HtmlTextAreaElement>(&e);
        if textarea.set_range_text("  ").is_ok() {
            let start = textarea.selection_start().ok().flatten().unwrap_or(0) + 2;
            let _ = textarea.set_selection_range(start, start);
            let value = textarea.value();
            ctx.viewer.update(|v| v.edit(value));
        }
    };

    view! {
        <div class=css::editor>
            <div class=css::editorBar>
                <span class=css::language>{language}</span>
                <span class=css::lineInfo>{move || format!("{} lines", lines.get())}</span>
            </div>
            <div class=css::editorBody>
                <div class=css::gutter node_ref=gutter_ref aria-hidden="true">
                    {move || {
                        (1..=lines.get())
                            .map(|n| view! { <div class=css::lineNumber>{n}</div> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <textarea
                    class=css::textarea
                    spellcheck="false"
                    autocomplete="off"
                    wrap="off"
                    readonly=read_only
                    prop:value=text
                    on:input=on_input
                    on:scroll=on_scroll
                    on:keydown=on_keydown
                ></textarea>
            </div>
        </div>
    }
}
