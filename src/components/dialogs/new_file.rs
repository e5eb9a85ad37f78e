//! "New Text File" dialog.

use leptos::ev;
use leptos::prelude::*;

use super::{Modal, css};
use crate::app::AppContext;

/// Prompt for the path of a new, empty text file.
///
/// Opened with a suggested path (`file.txt` in the folder it was requested
/// from); a blank path creates nothing.
#[component]
pub fn NewFileDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let request = ctx.dialogs.new_file;
    let path = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(suggested) = request.get() {
            path.set(suggested);
        }
    });

    let close = Callback::new(move |_| request.set(None));
    let submit = move || {
        request.set(None);
        ctx.create_file(&path.get_untracked());
    };

    view! {
        <Modal
            open=Signal::derive(move || request.with(Option::is_some))
            title="New File"
            on_close=close
        >
            <form
                class=css::form
                on:submit=move |e: ev::SubmitEvent| {
                    e.prevent_default();
                    submit();
                }
            >
                <input
                    class=css::input
                    type="text"
                    placeholder="File Path"
                    prop:value=move || path.get()
                    on:input=move |e| path.set(event_target_value(&e))
                />
                <div class=css::footer>
                    <button type="button" class=css::buttonOutline on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class=css::buttonPrimary>"Create File"</button>
                </div>
            </form>
        </Modal>
    }
}
