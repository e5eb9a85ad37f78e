//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`TreeItem`], [`FileTree`] - Recursive file tree returned by the backend
//! - [`FileKind`] - Render mode chosen from the file extension
//! - [`Session`] - Access token and read-only mode
//! - [`Viewer`], [`ViewerState`] - Opened file and its loading state
//! - [`UploadCandidate`] - Upload targets and size limits
//! - [`Theme`], [`ZoomState`], [`NodeTarget`] - UI state
//! - [`ToastQueue`] - Notifications

mod api;
mod file_kind;
mod session;
mod toast;
mod tree;
mod ui;
mod upload;
mod viewer;

pub use api::ApiData;
pub use file_kind::{ConfigFormat, FileKind, language_for};
pub use session::Session;
pub use toast::{Toast, ToastKind, ToastQueue};
pub use tree::{FileTree, TreeItem, default_new_file_path, folder_for_new_file};
pub use ui::{ContextMenu, NodeTarget, Theme, ZoomState, sidebar_width_for_pointer};
pub use upload::{UploadCandidate, partition_by_size, picked_folder_name, upload_target};
pub use viewer::{LoadedContent, Viewer, ViewerState};
