//! Top bar: app name, read-only badge, theme toggle, and repository link.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, REPOSITORY_URL};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_dark = Signal::derive(move || ctx.theme.get().is_dark());

    view! {
        <header class=css::header>
            <div class=css::brand>
                <span class=css::title>{APP_NAME}</span>
                {ctx.is_read_only().then(|| view! {
                    <span class=css::badge title="This token cannot modify files">
                        <Icon icon=ic::LOCK />
                        "Read-only"
                    </span>
                })}
            </div>
            <div class=css::actions>
                <button
                    class=css::actionButton
                    title=move || if is_dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
                    on:click=move |_| ctx.theme.update(|theme| *theme = theme.toggled())
                >
                    {move || {
                        let icon = if is_dark.get() { ic::MOON } else { ic::SUN };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
                <a
                    class=css::actionButton
                    href=REPOSITORY_URL
                    target="_blank"
                    rel="noreferrer"
                    aria-label="Source code"
                    title="Source code"
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            </div>
        </header>
    }
}
