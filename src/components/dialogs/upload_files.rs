//! "Upload Files" dialog with a drop zone.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::{Blob, FileList, HtmlInputElement};

use super::{Modal, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::MAX_UPLOAD_BYTES;
use crate::models::{ToastKind, UploadCandidate, partition_by_size, upload_target};
use crate::utils::dom::files_of;
use crate::utils::format::format_size;

/// Pick or drop files, review the list, then upload them to the root.
///
/// Files over the size limit are rejected with a toast as soon as they are
/// added.
#[component]
pub fn UploadFilesDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = ctx.dialogs.upload_files;
    let files = RwSignal::new_local(Vec::<web_sys::File>::new());
    let drag_over = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let add_files = move |list: FileList| {
        let picked = files_of(&list);
        let candidates: Vec<UploadCandidate> = picked
            .iter()
            .map(|file| UploadCandidate::new(file.name(), file.size() as u64))
            .collect();
        let (accepted, rejected) = partition_by_size(&candidates);

        for idx in rejected {
            let file = &candidates[idx];
            ctx.toast(
                ToastKind::Error,
                format!(
                    "File is too large ({}, {}). Uploads are limited to {} per file.",
                    file.name,
                    format_size(file.size),
                    format_size(MAX_UPLOAD_BYTES)
                ),
            );
        }
        files.update(|current| current.extend(accepted.into_iter().map(|idx| picked[idx].clone())));
    };

    let close = Callback::new(move |_| {
        open.set(false);
        files.set(Vec::new());
    });

    let on_upload = move |_| {
        let picked = files.with_untracked(Vec::clone);
        close.run(());
        let batch = picked
            .into_iter()
            .map(|file| (upload_target("", &file.name()), Blob::from(file)))
            .collect();
        ctx.upload_batch(batch);
    };

    let rows = move || {
        files.with(|current| {
            current
                .iter()
                .enumerate()
                .map(|(idx, file)| (idx, file.name(), format_size(file.size() as u64)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Modal open=open title="Upload Files" on_close=close>
            <input
                node_ref=input_ref
                class=css::hiddenInput
                type="file"
                multiple=true
                on:change=move |e: ev::Event| {
                    let input: HtmlInputElement = event_target(&e);
                    if let Some(list) = input.files() {
                        add_files(list);
                    }
                    input.set_value("");
                }
            />
            <div
                class=move || {
                    if drag_over.get() {
                        format!("{} {}", css::dropzone, css::dropzoneActive)
                    } else {
                        css::dropzone.to_string()
                    }
                }
                role="button"
                tabindex="0"
                on:click=move |_| {
                    if let Some(input) = input_ref.get_untracked() {
                        input.click();
                    }
                }
                on:dragover=move |e: ev::DragEvent| {
                    e.prevent_default();
                    drag_over.set(true);
                }
                on:dragleave=move |_| drag_over.set(false)
                on:drop=move |e: ev::DragEvent| {
                    e.prevent_default();
                    drag_over.set(false);
                    if let Some(list) = e.data_transfer().and_then(|dt| dt.files()) {
                        add_files(list);
                    }
                }
            >
                <Icon icon=ic::CLOUD_UPLOAD />
                <span>"Drag and drop or click here to upload files"</span>
            </div>
            <ul class=css::fileList>
                {move || {
                    rows()
                        .into_iter()
                        .map(|(idx, name, size)| view! {
                            <li class=css::fileItem>
                                <span class=css::fileName>{name}</span>
                                <span class=css::fileSize>{size}</span>
                                <button
                                    class=css::iconButton
                                    aria-label="Remove"
                                    on:click=move |_| files.update(|current| {
                                        if idx < current.len() {
                                            current.remove(idx);
                                        }
                                    })
                                >
                                    <Icon icon=ic::CLOSE />
                                </button>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
            <div class=css::footer>
                <button class=css::buttonOutline on:click=move |_| close.run(())>"Cancel"</button>
                <button class=css::buttonPrimary on:click=on_upload>"Upload Files"</button>
            </div>
        </Modal>
    }
}
