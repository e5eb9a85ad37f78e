//! UI components built with Leptos.
//!
//! - [`Workspace`] - Page layout (main entry point)
//! - [`header`] - Top bar with the app name, theme toggle, and repository link
//! - [`sidebar`] - Resizable sidebar with the file tree and its context menu
//! - [`breadcrumb`] - Path of the opened file
//! - [`viewer`] - Text editor, image viewer, and config viewer
//! - [`search`] - File search palette
//! - [`dialogs`] - Create, upload, and delete dialogs
//! - [`toast`] - Notifications
//! - [`icons`] - Centralized icon definitions

pub mod breadcrumb;
pub mod dialogs;
pub mod header;
pub mod icons;
pub mod search;
pub mod sidebar;
pub mod toast;
pub mod viewer;
mod workspace;

pub use workspace::Workspace;
