//! Delete confirmation dialog.

use leptos::prelude::*;

use super::{Modal, css};
use crate::app::AppContext;

/// Confirm deleting the node in `dialogs.pending_delete`.
#[component]
pub fn DeleteDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let pending = ctx.dialogs.pending_delete;

    let title = Signal::derive(move || {
        pending.with(|target| target.as_ref().map(|t| t.delete_prompt()).unwrap_or_default())
    });
    let warning = move || pending.with(|target| target.as_ref().map(|t| t.delete_warning()));

    let close = Callback::new(move |_| pending.set(None));
    let confirm = move |_| {
        if let Some(target) = pending.get_untracked() {
            pending.set(None);
            ctx.delete(target);
        }
    };

    view! {
        <Modal open=Signal::derive(move || pending.with(Option::is_some)) title=title on_close=close>
            <p class=css::description>{warning}</p>
            <div class=css::footer>
                <button class=css::buttonOutline on:click=move |_| close.run(())>"Cancel"</button>
                <button class=css::buttonDestructive on:click=confirm>"Delete"</button>
            </div>
        </Modal>
    }
}
