//! Core logic for the resource editor.
//!
//! This module provides:
//! - [`ApiClient`] for the backend resource API
//! - [`gateway`] fire-and-forget upload/delete calls with completion tracking
//! - [`parse_config`] structured YAML/TOML documents for the config viewer

mod api;
mod config_doc;
pub mod error;
pub mod gateway;

pub use api::ApiClient;
pub use config_doc::{ConfigNode, ScalarKind, parse as parse_config};
