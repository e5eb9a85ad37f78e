//! Utility modules for web, DOM, and string operations.
//!
//! Provides:
//! - [`dom`] - Browser window, storage, and document helpers
//! - [`format`] - Path joining and size formatting
//! - [`log`] - Console logging that is silent off wasm
//! - [`query_param`], [`encode_component`] - Query string handling

pub mod dom;
pub mod format;
pub mod log;
mod url;

pub use url::{encode_component, query_param};
