//! Modal dialogs for file operations.
//!
//! - [`NewFileDialog`] - Create an empty text file at a typed path
//! - [`UploadFilesDialog`] - Pick or drop files and upload them to the root
//! - [`UploadFolderDialog`] - Upload a picked directory into a target folder
//! - [`DeleteDialog`] - Confirm deleting a file or folder

mod delete;
mod new_file;
mod upload_files;
mod upload_folder;

pub use delete::DeleteDialog;
pub use new_file::NewFileDialog;
pub use upload_files::UploadFilesDialog;
pub use upload_folder::UploadFolderDialog;

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(pub css, "src/components/dialogs/dialogs.module.css");

/// Centered dialog over a dimmed backdrop.
///
/// Clicking the backdrop, the close button, or pressing Escape calls
/// `on_close`; the caller decides what closing means.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show when=move || open.get()>
            <div class=css::overlay on:click=move |_| on_close.run(())>
                <div
                    class=css::dialog
                    role="dialog"
                    aria-modal="true"
                    on:click=|e: ev::MouseEvent| e.stop_propagation()
                >
                    <div class=css::header>
                        <h2 class=css::title>{move || title.get()}</h2>
                        <button
                            class=css::closeButton
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
