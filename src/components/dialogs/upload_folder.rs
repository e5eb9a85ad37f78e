//! "Upload Folder" dialog.
//!
//! The sidebar button clicks a hidden directory input; once a directory is
//! picked, this dialog asks which server folder to upload it into.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{Blob, HtmlInputElement};

use super::{Modal, css};
use crate::app::AppContext;
use crate::config::DEFAULT_UPLOAD_FOLDER;
use crate::models::{picked_folder_name, upload_target};
use crate::utils::dom::{files_of, relative_path};
use crate::utils::format::format_size;

/// Hidden directory input plus the target folder prompt.
///
/// Every picked file is uploaded directly into the target folder under its
/// own name; the tree reloads once after the last upload settles.
#[component]
pub fn UploadFolderDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = ctx.dialogs.folder_input;
    let picked = RwSignal::new_local(None::<Vec<web_sys::File>>);
    let folder = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.set_attribute("webkitdirectory", "");
        }
    });

    let on_change = move |e: ev::Event| {
        let input: HtmlInputElement = event_target(&e);
        let files = input.files().map(|list| files_of(&list)).unwrap_or_default();
        input.set_value("");

        let name = files
            .first()
            .and_then(|file| picked_folder_name(&relative_path(file)).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string());
        folder.set(name);
        picked.set(Some(files));
    };

    let close = Callback::new(move |_| picked.set(None));
    let submit = move || {
        let files = picked.with_untracked(Option::clone).unwrap_or_default();
        picked.set(None);

        let target = folder.get_untracked();
        let batch = files
            .into_iter()
            .map(|file| (upload_target(&target, &file.name()), Blob::from(file)))
            .collect();
        ctx.upload_batch(batch);
    };

    let summary = move || {
        picked.with(|files| {
            let files = files.as_deref().unwrap_or_default();
            let total: u64 = files.iter().map(|f| f.size() as u64).sum();
            format!("{} files, {}", files.len(), format_size(total))
        })
    };

    view! {
        <input
            node_ref=input_ref
            class=css::hiddenInput
            type="file"
            multiple=true
            on:change=on_change
        />
        <Modal
            open=Signal::derive(move || picked.with(Option::is_some))
            title="Upload Folder"
            on_close=close
        >
            <form
                class=css::form
                on:submit=move |e: ev::SubmitEvent| {
                    e.prevent_default();
                    submit();
                }
            >
                <p class=css::description>{summary}</p>
                <input
                    class=css::input
                    type="text"
                    placeholder="Folder Path"
                    prop:value=move || folder.get()
                    on:input=move |e| folder.set(event_target_value(&e))
                />
                <div class=css::footer>
                    <button type="button" class=css::buttonOutline on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class=css::buttonPrimary>"Create Folder"</button>
                </div>
            </form>
        </Modal>
    }
}
