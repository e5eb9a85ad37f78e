//! File viewer state machine.
//!
//! Each selected path goes `Idle → Loading → {Loaded | Error}`. Results are
//! tagged with the path they were requested for; a result that arrives after
//! the user moved to another file is dropped instead of overwriting the
//! newer selection.

use super::FileKind;

/// Content held by the viewer once a download succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadedContent {
    /// Editable text (also used for config files)
    Text(String),
    /// Image served directly from the download URL
    Image { url: String },
}

/// Phase of the viewer for the opened path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerState {
    /// Nothing opened
    #[default]
    Idle,
    /// Download in flight
    Loading,
    /// Content available (and cached client-side until the next open)
    Loaded(LoadedContent),
    /// Download failed; the message is shown inline
    Error(String),
}

/// Opened file plus its loading state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    opened: Option<String>,
    state: ViewerState,
}

impl Viewer {
    /// Path of the opened file.
    pub fn opened(&self) -> Option<&str> {
        self.opened.as_deref()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Open a path, dropping any cached content.
    ///
    /// Always moves to `Loading`, so re-selecting a file retries it.
    pub fn open(&mut self, path: impl Into<String>) {
        self.opened = Some(path.into());
        self.state = ViewerState::Loading;
    }

    /// Apply a download result for `path`.
    ///
    /// Returns `false` (and changes nothing) when `path` is no longer the
    /// opened file or the result was already applied.
    pub fn resolve(&mut self, path: &str, result: Result<LoadedContent, String>) -> bool {
        if self.opened() != Some(path) || self.state != ViewerState::Loading {
            return false;
        }

        self.state = match result {
            Ok(content) => ViewerState::Loaded(content),
            Err(message) => ViewerState::Error(message),
        };
        true
    }

    /// Replace the cached text after an edit.
    pub fn edit(&mut self, text: String) {
        if let ViewerState::Loaded(LoadedContent::Text(current)) = &mut self.state {
            *current = text;
        }
    }

    /// Return to `Idle`.
    pub fn close(&mut self) {
        self.opened = None;
        self.state = ViewerState::Idle;
    }

    /// Close the opened file unless `keep` accepts its path.
    ///
    /// Returns `true` if the file was closed.
    pub fn retain_if(&mut self, keep: impl FnOnce(&str) -> bool) -> bool {
        match self.opened() {
            Some(path) if !keep(path) => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Cached text of the opened file, if it is a loaded text file.
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Loaded(LoadedContent::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Check if the opened file can be saved (a loaded text file).
    pub fn can_save(&self) -> bool {
        self.opened()
            .is_some_and(|path| FileKind::from_path(path).is_text())
            && self.text().is_some()
    }

    /// Path and text to upload on save.
    ///
    /// `None` unless a text file is loaded; images are never saved back.
    pub fn save_payload(&self) -> Option<(String, String)> {
        if !self.can_save() {
            return None;
        }
        let path = self.opened()?;
        self.text().map(|text| (path.to_string(), text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> LoadedContent {
        LoadedContent::Text(s.to_string())
    }

    #[test]
    fn test_open_moves_to_loading() {
        let mut viewer = Viewer::default();
        assert_eq!(viewer.state(), &ViewerState::Idle);

        viewer.open("default/items.yml");
        assert_eq!(viewer.opened(), Some("default/items.yml"));
        assert_eq!(viewer.state(), &ViewerState::Loading);
    }

    #[test]
    fn test_resolve_success_then_ignores_second_result() {
        let mut viewer = Viewer::default();
        viewer.open("a.txt");

        assert!(viewer.resolve("a.txt", Ok(text("hello"))));
        assert_eq!(viewer.state(), &ViewerState::Loaded(text("hello")));

        // Exactly one terminal transition per open
        assert!(!viewer.resolve("a.txt", Err("late failure".to_string())));
        assert_eq!(viewer.text(), Some("hello"));
    }

    #[test]
    fn test_resolve_error() {
        let mut viewer = Viewer::default();
        viewer.open("a.txt");

        assert!(viewer.resolve("a.txt", Err("HTTP error 404".to_string())));
        assert_eq!(
            viewer.state(),
            &ViewerState::Error("HTTP error 404".to_string())
        );
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut viewer = Viewer::default();
        viewer.open("first.txt");
        viewer.open("second.txt");

        assert!(!viewer.resolve("first.txt", Ok(text("old"))));
        assert_eq!(viewer.state(), &ViewerState::Loading);

        assert!(viewer.resolve("second.txt", Ok(text("new"))));
        assert_eq!(viewer.text(), Some("new"));
    }

    #[test]
    fn test_reopen_retries_after_error() {
        let mut viewer = Viewer::default();
        viewer.open("a.txt");
        viewer.resolve("a.txt", Err("timeout".to_string()));

        viewer.open("a.txt");
        assert_eq!(viewer.state(), &ViewerState::Loading);
        assert!(viewer.resolve("a.txt", Ok(text("ok"))));
    }

    #[test]
    fn test_edit_updates_cached_text() {
        let mut viewer = Viewer::default();
        viewer.open("a.txt");
        viewer.resolve("a.txt", Ok(text("v1")));

        viewer.edit("v2".to_string());
        assert_eq!(
            viewer.save_payload(),
            Some(("a.txt".to_string(), "v2".to_string()))
        );
    }

    #[test]
    fn test_reopen_loaded_file_clears_cache() {
        let mut viewer = Viewer::default();
        viewer.open("a.txt");
        viewer.resolve("a.txt", Ok(text("v1")));
        viewer.edit("edited".to_string());

        viewer.open("a.txt");
        assert_eq!(viewer.state(), &ViewerState::Loading);
        assert_eq!(viewer.text(), None);
    }

    #[test]
    fn test_edit_ignored_while_loading() {
        let mut viewer = Viewer::default();
        viewer.open("a.txt");
        viewer.edit("typed too early".to_string());
        assert_eq!(viewer.text(), None);
        assert!(!viewer.can_save());
    }

    #[test]
    fn test_images_are_not_saved() {
        let mut viewer = Viewer::default();
        viewer.open("tnt.png");
        viewer.resolve(
            "tnt.png",
            Ok(LoadedContent::Image {
                url: "/api/download_resource?path=tnt.png".to_string(),
            }),
        );
        assert!(!viewer.can_save());
        assert_eq!(viewer.save_payload(), None);
    }

    #[test]
    fn test_retain_if_closes_missing_file() {
        let mut viewer = Viewer::default();
        viewer.open("gone/a.txt");
        viewer.resolve("gone/a.txt", Ok(text("x")));

        assert!(!viewer.retain_if(|_| true));
        assert_eq!(viewer.opened(), Some("gone/a.txt"));

        assert!(viewer.retain_if(|_| false));
        assert_eq!(viewer, Viewer::default());

        // Nothing opened: nothing to close
        assert!(!viewer.retain_if(|_| false));
    }
}
