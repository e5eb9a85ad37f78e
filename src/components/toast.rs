//! Toast notifications, stacked in the bottom-right corner.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Toast, ToastKind};

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <ol class=css::toaster aria-live="polite">
            <For
                each=move || ctx.toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| (toast.id, toast.kind, toast.message.clone())
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = toast.id;

    let kind_class = match toast.kind {
        ToastKind::Loading => css::loading,
        ToastKind::Success => css::success,
        ToastKind::Error => css::error,
    };

    view! {
        <li class=format!("{} {}", css::toast, kind_class) role="status">
            {(toast.kind == ToastKind::Loading).then(|| view! { <span class=css::spinner></span> })}
            <span class=css::message>{toast.message}</span>
            <button
                class=css::close
                aria-label="Dismiss"
                on:click=move |_| ctx.toasts.update(|queue| queue.dismiss(id))
            >
                <Icon icon=ic::CLOSE />
            </button>
        </li>
    }
}
