//! Page layout.
//!
//! Header on top, sidebar on the left, and the editor pane with its toolbar
//! (sidebar toggle, breadcrumb, save button) on the right. Dialogs, the
//! context menu, and toasts float above everything.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::dialogs::{DeleteDialog, NewFileDialog, UploadFilesDialog, UploadFolderDialog};
use crate::components::header::Header;
use crate::components::icons as ic;
use crate::components::search::SearchDialog;
use crate::components::sidebar::{Sidebar, SidebarProvider, SidebarTrigger, TreeContextMenu};
use crate::components::toast::Toaster;
use crate::components::viewer::FileViewer;
use crate::models::Viewer;

stylance::import_crate_style!(css, "src/components/workspace.module.css");

#[component]
pub fn Workspace() -> impl IntoView {
    view! {
        <div class=css::app>
            <Header />
            <SidebarProvider>
                <Sidebar />
                <main class=css::inset>
                    <div class=css::toolbar>
                        <div class=css::toolbarStart>
                            <SidebarTrigger />
                            <span class=css::separator></span>
                            <Breadcrumb />
                        </div>
                        <div class=css::toolbarEnd>
                            <SaveButton />
                        </div>
                    </div>
                    <div class=css::content>
                        <FileViewer />
                    </div>
                </main>
            </SidebarProvider>

            <TreeContextMenu />
            <SearchDialog />
            <NewFileDialog />
            <UploadFilesDialog />
            <UploadFolderDialog />
            <DeleteDialog />
            <Toaster />
        </div>
    }
}

/// Uploads the opened text file, like `Ctrl+S`.
///
/// Hidden unless a text file is loaded; disabled in read-only mode.
#[component]
fn SaveButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let can_save = Memo::new(move |_| ctx.viewer.with(Viewer::can_save));

    view! {
        <Show when=move || can_save.get()>
            <button
                class=css::saveButton
                disabled=ctx.is_read_only()
                title="Save (Ctrl+S)"
                on:click=move |_| ctx.save()
            >
                <Icon icon=ic::UPLOAD />
                <span>"Upload File"</span>
            </button>
        </Show>
    }
}
