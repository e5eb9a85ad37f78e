//! Root application module.
//!
//! Contains the main App component, AppContext definition, DialogState,
//! and the application-level actions (reload, open, save, create, upload,
//! delete) shared by every component.

use leptos::error::Errors;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Blob;

use crate::components::Workspace;
use crate::config::{DARK_MEDIA_QUERY, SAVE_SHORTCUT, THEME_STORAGE_KEY};
use crate::core::error::ApiError;
use crate::core::{ApiClient, gateway};
use crate::models::{
    ApiData, ContextMenu, FileKind, LoadedContent, NodeTarget, Session, Theme, ToastKind,
    ToastQueue, Viewer,
};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// DialogState
// ============================================================================

/// Open/closed state of every dialog and overlay.
///
/// Each dialog owns its own form state; these signals only say whether it
/// is shown and with which target.
#[derive(Clone, Copy)]
pub struct DialogState {
    /// File search palette.
    pub search_open: RwSignal<bool>,
    /// "New Text File" dialog, holding the suggested path while open.
    pub new_file: RwSignal<Option<String>>,
    /// "Upload Files" dialog.
    pub upload_files: RwSignal<bool>,
    /// Hidden directory input backing "Upload Folder".
    pub folder_input: NodeRef<leptos::html::Input>,
    /// Node awaiting delete confirmation.
    pub pending_delete: RwSignal<Option<NodeTarget>>,
    /// Open tree context menu.
    pub context_menu: RwSignal<Option<ContextMenu>>,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            search_open: RwSignal::new(false),
            new_file: RwSignal::new(None),
            upload_files: RwSignal::new(false),
            folder_input: NodeRef::new(),
            pending_delete: RwSignal::new(None),
            context_menu: RwSignal::new(None),
        }
    }

    /// Open the system directory picker for "Upload Folder".
    pub fn pick_folder(&self) {
        if let Some(input) = self.folder_input.get_untracked() {
            input.click();
        }
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or arena
/// handles, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Access token and read-only flag (fixed for the page lifetime).
    pub session: StoredValue<Session>,
    /// Latest `/api/data` payload; replaced wholesale on reload.
    pub data: RwSignal<ApiData>,
    /// Opened file and its loading state.
    pub viewer: RwSignal<Viewer>,
    /// Color theme.
    pub theme: RwSignal<Theme>,
    /// Visible notifications.
    pub toasts: RwSignal<ToastQueue>,
    /// Dialog visibility.
    pub dialogs: DialogState,
}

impl AppContext {
    /// Creates the context for a session.
    ///
    /// The theme comes from localStorage, falling back to the system
    /// preference.
    pub fn new(session: Session, prefers_dark: bool) -> Self {
        let stored_theme = dom::storage_get(THEME_STORAGE_KEY);
        Self::with_theme(session, Theme::resolve(stored_theme.as_deref(), prefers_dark))
    }

    fn with_theme(session: Session, theme: Theme) -> Self {
        Self {
            session: StoredValue::new(session),
            data: RwSignal::new(ApiData::default()),
            viewer: RwSignal::new(Viewer::default()),
            theme: RwSignal::new(theme),
            toasts: RwSignal::new(ToastQueue::default()),
            dialogs: DialogState::new(),
        }
    }

    /// Check if create, upload, save, and delete actions are allowed.
    pub fn can_write(&self) -> bool {
        self.session.with_value(Session::can_write)
    }

    pub fn is_read_only(&self) -> bool {
        self.session.with_value(Session::is_read_only)
    }

    fn client(&self) -> Result<ApiClient, ApiError> {
        self.session.with_value(ApiClient::for_session)
    }

    /// API client for a write action, or `None` (logged) when writes are
    /// not possible.
    fn write_client(&self, action: &str) -> Option<ApiClient> {
        if !self.can_write() {
            log::warn(&format!("{} ignored in read-only mode", action));
            return None;
        }
        match self.client() {
            Ok(client) => Some(client),
            Err(e) => {
                log::error(&format!("{} failed: {}", action, e));
                None
            }
        }
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Refetch the tree and item list.
    ///
    /// If the opened file no longer exists afterwards, the viewer closes.
    pub fn reload(&self) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                log::error(&format!("Reload failed: {}", e));
                self.toast(ToastKind::Error, format!("Reload failed: {}", e));
                return;
            }
        };

        let ctx = *self;
        let toast = self.toast(ToastKind::Loading, "Reloading...");
        spawn_local(async move {
            match client.fetch_data().await {
                Ok(data) => {
                    ctx.viewer.update(|viewer| {
                        viewer.retain_if(|path| data.files.contains_file(path));
                    });
                    ctx.data.set(data);
                    ctx.finish_toast(toast, ToastKind::Success, "Data reloaded");
                }
                Err(e) => {
                    log::error(&format!("Reload failed: {}", e));
                    ctx.finish_toast(toast, ToastKind::Error, format!("Reload failed: {}", e));
                }
            }
        });
    }

    /// Open a file in the viewer and start downloading it.
    ///
    /// Every selection clears the cached content and downloads again,
    /// including re-selecting the opened file.
    pub fn open_file(&self, path: String) {
        self.dialogs.context_menu.set(None);
        self.viewer.update(|viewer| viewer.open(path.clone()));

        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                self.viewer.update(|viewer| {
                    viewer.resolve(&path, Err(e.to_string()));
                });
                return;
            }
        };

        let ctx = *self;
        spawn_local(async move {
            let result = match FileKind::from_path(&path) {
                FileKind::Image => client
                    .check_download(&path)
                    .await
                    .map(|url| LoadedContent::Image { url }),
                FileKind::Config(_) | FileKind::Text => {
                    client.download_text(&path).await.map(LoadedContent::Text)
                }
            }
            .map_err(|e| {
                log::error(&format!("Failed to load {}: {}", path, e));
                format!("Failed to load file: {}", e)
            });

            ctx.viewer.update(|viewer| {
                if !viewer.resolve(&path, result) {
                    log::info(&format!("Dropped stale result for {}", path));
                }
            });
        });
    }

    // ========================================================================
    // Write actions
    // ========================================================================

    /// Upload the opened text file's current content, then reload.
    pub fn save(&self) {
        let Some((path, text)) = self.viewer.with_untracked(Viewer::save_payload) else {
            return;
        };
        let Some(client) = self.write_client("Save") else {
            return;
        };
        let Some(body) = dom::text_blob(&text) else {
            log::error("Save failed: could not create blob");
            return;
        };

        let ctx = *self;
        gateway::upload_file(client, path, body, move || ctx.reload());
    }

    /// Create an empty text file, then reload. A blank path does nothing.
    pub fn create_file(&self, path: &str) {
        let path = path.trim().trim_matches('/');
        if path.is_empty() {
            return;
        }
        let Some(client) = self.write_client("Create file") else {
            return;
        };
        let Some(body) = dom::text_blob("") else {
            log::error("Create file failed: could not create blob");
            return;
        };

        let ctx = *self;
        gateway::upload_file(client, path.to_string(), body, move || ctx.reload());
    }

    /// Upload several files in parallel and reload once after the last.
    pub fn upload_batch(&self, files: Vec<(String, Blob)>) {
        let Some(client) = self.write_client("Upload") else {
            return;
        };

        let ctx = *self;
        gateway::upload_batch(client, files, move || ctx.reload());
    }

    /// Delete a file or folder, then reload.
    pub fn delete(&self, target: NodeTarget) {
        let Some(client) = self.write_client("Delete") else {
            return;
        };

        let ctx = *self;
        gateway::delete_resource(client, target.path, move || ctx.reload());
    }

    // ========================================================================
    // Dialog shortcuts
    // ========================================================================

    /// Show the "New Text File" dialog prefilled with `path`.
    pub fn prompt_new_file(&self, path: String) {
        self.dialogs.context_menu.set(None);
        if self.can_write() {
            self.dialogs.new_file.set(Some(path));
        }
    }

    /// Ask for confirmation before deleting `target`.
    pub fn prompt_delete(&self, target: NodeTarget) {
        self.dialogs.context_menu.set(None);
        if self.can_write() {
            self.dialogs.pending_delete.set(Some(target));
        }
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Show a toast. Non-loading toasts dismiss themselves.
    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.toasts.try_update(|q| q.push(kind, message)).unwrap_or_default();
        if kind != ToastKind::Loading {
            self.schedule_dismiss(id);
        }
        id
    }

    /// Resolve a loading toast into its final state.
    fn finish_toast(&self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let resolved = self
            .toasts
            .try_update(|q| q.resolve(id, kind, message))
            .unwrap_or(false);
        if resolved {
            self.schedule_dismiss(id);
        }
    }

    /// Timers only exist in a browser; off wasm (native tests) toasts stay
    /// until dismissed.
    fn schedule_dismiss(&self, id: u64) {
        #[cfg(target_arch = "wasm32")]
        {
            let toasts = self.toasts;
            let _ = gloo_timers::callback::Timeout::new(crate::config::TOAST_DURATION_MS, move || {
                toasts.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Reads the session from the page URL and provides the global AppContext
/// - Applies and persists the theme
/// - Registers the save shortcut and triggers the initial load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let session = Session::from_query(&dom::location_search());
    let has_token = session.token().is_some();
    let ctx = AppContext::new(session, dom::matches_media(DARK_MEDIA_QUERY));
    provide_context(ctx);

    // Theme: `dark` class on <html>, persisted on every change
    Effect::new(move || {
        let theme = ctx.theme.get();
        dom::toggle_root_class("dark", theme.is_dark());
        dom::storage_set(THEME_STORAGE_KEY, theme.as_str());
    });

    // Ctrl+S saves the opened text file
    let save_listener = window_event_listener(ev::keydown, move |e| {
        if !e.ctrl_key() || e.key() != SAVE_SHORTCUT || !ctx.can_write() {
            return;
        }
        e.prevent_default();
        ctx.save();
    });
    on_cleanup(move || save_listener.remove());

    if has_token {
        ctx.reload();
    } else {
        log::error("Access token is missing: add ?token=... to the URL");
    }

    view! {
        <ErrorBoundary fallback=|errors| view! { <CrashScreen errors=errors /> }>
            <Workspace />
        </ErrorBoundary>
    }
}

/// Fallback shown when a component below the root returns an error.
#[component]
fn CrashScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class=css::crash role="alert">
            <div class=css::panel>
                <h1 class=css::heading>"Something went wrong"</h1>
                <p class=css::lead>
                    "The editor hit an unexpected error. Unsaved changes may be lost."
                </p>
                <details class=css::details>
                    <summary class=css::summary>"Error details"</summary>
                    <ul class=css::errorList>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </details>
                <button class=css::reloadButton on:click=move |_| dom::reload_page()>
                    "Reload Page"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewerState;

    fn with_context(query: &str, test: impl FnOnce(AppContext)) {
        let owner = Owner::new();
        owner.with(|| test(AppContext::with_theme(Session::from_query(query), Theme::Light)));
    }

    fn folder(path: &str) -> NodeTarget {
        NodeTarget {
            path: path.to_string(),
            is_folder: true,
        }
    }

    #[test]
    fn test_read_only_session_blocks_write_prompts() {
        with_context("?token=abc_readonly", |ctx| {
            ctx.prompt_delete(folder("default"));
            ctx.prompt_new_file("default/file.txt".to_string());

            assert_eq!(ctx.dialogs.pending_delete.get_untracked(), None);
            assert_eq!(ctx.dialogs.new_file.get_untracked(), None);
            assert!(ctx.write_client("Delete").is_none());
        });
    }

    #[test]
    fn test_read_only_write_actions_stop_before_requests() {
        with_context("?token=abc_readonly", |ctx| {
            ctx.viewer.update(|v| {
                v.open("a.txt");
                v.resolve("a.txt", Ok(LoadedContent::Text("edited".to_string())));
            });

            // Past the read-only gate each of these would build a blob or
            // spawn a request, neither of which exists off wasm
            ctx.save();
            ctx.create_file("b.txt");
            ctx.upload_batch(Vec::new());
            ctx.delete(folder("default"));

            let text = ctx.viewer.with_untracked(|v| v.text().map(str::to_string));
            assert_eq!(text, Some("edited".to_string()));
            assert!(ctx.toasts.with_untracked(|q| q.toasts().is_empty()));
        });
    }

    #[test]
    fn test_writable_session_opens_prompts() {
        with_context("?token=abc", |ctx| {
            ctx.prompt_delete(folder("default"));
            ctx.prompt_new_file("default/file.txt".to_string());

            assert_eq!(ctx.dialogs.pending_delete.get_untracked(), Some(folder("default")));
            assert_eq!(
                ctx.dialogs.new_file.get_untracked(),
                Some("default/file.txt".to_string())
            );
            assert_eq!(ctx.write_client("Delete"), Some(ApiClient::new("abc")));
        });
    }

    #[test]
    fn test_reselecting_loaded_file_downloads_again() {
        with_context("", |ctx| {
            ctx.viewer.update(|v| {
                v.open("a.txt");
                v.resolve("a.txt", Ok(LoadedContent::Text("v1".to_string())));
                v.edit("edited".to_string());
            });

            ctx.open_file("a.txt".to_string());

            // Cache dropped and a fresh download attempted (which fails here
            // for lack of a token)
            ctx.viewer.with_untracked(|v| {
                assert_eq!(v.opened(), Some("a.txt"));
                assert_eq!(v.text(), None);
                assert_eq!(
                    v.state(),
                    &ViewerState::Error(ApiError::MissingToken.to_string())
                );
            });
        });
    }

    #[test]
    fn test_reload_without_token_shows_error_toast() {
        with_context("", |ctx| {
            ctx.reload();

            ctx.toasts.with_untracked(|q| {
                assert_eq!(q.toasts().len(), 1);
                assert_eq!(q.toasts()[0].kind, ToastKind::Error);
                assert_eq!(q.toasts()[0].message, "Reload failed: Access token is missing");
            });
        });
    }
}
