//! File viewer pane.
//!
//! Renders the opened file according to its kind: images in a pan/zoom
//! view, YAML/TOML as a collapsible key/value tree (with a source tab), and
//! everything else in the text editor. Loading shows a skeleton and a failed
//! download shows its error inline.

mod config;
mod editor;
mod image;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{ConfigFormat, FileKind, LoadedContent, Viewer, ViewerState};
use config::ConfigView;
use editor::CodeEditor;
use image::ZoomableImage;

stylance::import_crate_style!(pub css, "src/components/viewer/viewer.module.css");

/// What the pane shows.
///
/// Carries no text, so typing in the editor does not rebuild the pane.
#[derive(Clone, Debug, PartialEq)]
enum Pane {
    Empty,
    Loading,
    Error(String),
    Image { path: String, url: String },
    Config { path: String, format: ConfigFormat },
    Editor { path: String },
}

impl Pane {
    fn of(viewer: &Viewer) -> Self {
        let Some(path) = viewer.opened() else {
            return Self::Empty;
        };
        let path = path.to_string();

        match viewer.state() {
            ViewerState::Idle => Self::Empty,
            ViewerState::Loading => Self::Loading,
            ViewerState::Error(message) => Self::Error(message.clone()),
            ViewerState::Loaded(LoadedContent::Image { url }) => Self::Image {
                path,
                url: url.clone(),
            },
            ViewerState::Loaded(LoadedContent::Text(_)) => match FileKind::from_path(&path) {
                FileKind::Config(format) => Self::Config { path, format },
                FileKind::Image | FileKind::Text => Self::Editor { path },
            },
        }
    }
}

#[component]
pub fn FileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let pane = Memo::new(move |_| ctx.viewer.with(Pane::of));

    move || match pane.get() {
        Pane::Empty => view! {
            <div class=css::placeholder>
                <div class=css::skeleton></div>
                <p class=css::hint>"Select a file from the sidebar"</p>
            </div>
        }
        .into_any(),
        Pane::Loading => view! { <div class=css::skeleton aria-busy="true"></div> }.into_any(),
        Pane::Error(message) => view! { <div class=css::error role="alert">{message}</div> }.into_any(),
        Pane::Image { path, url } => view! { <ZoomableImage src=url alt=path /> }.into_any(),
        Pane::Config { path, format } => view! { <ConfigView path=path format=format /> }.into_any(),
        Pane::Editor { path } => view! { <CodeEditor path=path /> }.into_any(),
    }
}
