//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, File, FileList, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a localStorage item.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a localStorage item (best-effort).
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Check a media query once (e.g. the system color scheme at startup).
pub fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Get the current query string, including the leading `?`.
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Add or remove a class on the `<html>` element.
pub fn toggle_root_class(class: &str, enabled: bool) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}

/// Lock the body cursor and text selection while a drag is in progress.
///
/// Passing `None` restores both.
pub fn set_body_drag_style(cursor: Option<&str>) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("cursor", cursor.unwrap_or(""));
        let _ = style.set_property("user-select", if cursor.is_some() { "none" } else { "" });
    }
}

/// Reload the page.
pub fn reload_page() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

/// Wrap text in a `text/plain` blob for upload.
pub fn text_blob(text: &str) -> Option<Blob> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    Blob::new_with_str_sequence_and_options(&parts, &options).ok()
}

/// Collect a `FileList` into owned files.
pub fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// `webkitRelativePath` of a file picked from a directory input.
///
/// Empty for files picked individually or dropped.
pub fn relative_path(file: &File) -> String {
    js_sys::Reflect::get(file, &JsValue::from_str("webkitRelativePath"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}
