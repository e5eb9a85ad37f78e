//! UI-related data types: theme, sidebar sizing, image zoom, and node actions.

use crate::config::{sidebar, zoom};

// =============================================================================
// Theme
// =============================================================================

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Resolve the startup theme.
    ///
    /// A stored `"dark"`/`"light"` wins; otherwise the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value persisted to localStorage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

// =============================================================================
// Sidebar
// =============================================================================

/// Sidebar width for a pointer at `pointer_x`, given the wrapper's left edge.
pub fn sidebar_width_for_pointer(pointer_x: f64, wrapper_left: f64) -> f64 {
    (pointer_x - wrapper_left).clamp(sidebar::MIN_WIDTH, sidebar::MAX_WIDTH)
}

// =============================================================================
// Image zoom
// =============================================================================

/// Pan and zoom of the image viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ZoomState {
    /// Apply a wheel event. Scrolling up (negative `delta_y`) zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = -delta_y / zoom::WHEEL_DIVISOR;
        self.scale = (self.scale + step).clamp(zoom::MIN_SCALE, zoom::MAX_SCALE);
    }

    /// Move the image by a pointer delta in screen pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// CSS transform: the offset is divided by the scale so the image
    /// follows the pointer one-to-one at any zoom level.
    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale,
            self.offset_x / self.scale,
            self.offset_y / self.scale
        )
    }
}

// =============================================================================
// Node actions
// =============================================================================

/// A tree node targeted by a context menu or delete confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeTarget {
    pub path: String,
    pub is_folder: bool,
}

impl NodeTarget {
    fn kind_label(&self) -> &'static str {
        if self.is_folder { "folder" } else { "file" }
    }

    /// Title of the delete confirmation.
    pub fn delete_prompt(&self) -> String {
        format!("Delete {} \"{}\"?", self.kind_label(), self.path)
    }

    /// Warning shown under the delete prompt.
    pub fn delete_warning(&self) -> &'static str {
        if self.is_folder {
            "This action cannot be undone. Deleting a folder might delete more files than you think, be careful."
        } else {
            "This action cannot be undone."
        }
    }
}

/// Open context menu position and target.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
    pub x: f64,
    pub y: f64,
    pub target: NodeTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_resolve() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("garbage"), false), Theme::Light);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().as_str(), "dark");
    }

    #[test]
    fn test_sidebar_width_clamped() {
        assert_eq!(sidebar_width_for_pointer(300.0, 0.0), 300.0);
        assert_eq!(sidebar_width_for_pointer(350.0, 50.0), 300.0);
        assert_eq!(sidebar_width_for_pointer(10.0, 0.0), sidebar::MIN_WIDTH);
        assert_eq!(sidebar_width_for_pointer(2000.0, 0.0), sidebar::MAX_WIDTH);
    }

    #[test]
    fn test_zoom_limits() {
        let mut state = ZoomState::default();
        state.wheel(-400.0);
        assert_eq!(state.scale, 2.0);

        for _ in 0..20 {
            state.wheel(-400.0);
        }
        assert_eq!(state.scale, zoom::MAX_SCALE);

        for _ in 0..40 {
            state.wheel(400.0);
        }
        assert_eq!(state.scale, zoom::MIN_SCALE);
    }

    #[test]
    fn test_pan_transform() {
        let mut state = ZoomState {
            scale: 2.0,
            ..Default::default()
        };
        state.pan(10.0, -4.0);
        state.pan(10.0, 0.0);
        assert_eq!(state.transform(), "scale(2) translate(10px, -2px)");
    }

    #[test]
    fn test_delete_wording() {
        let file = NodeTarget {
            path: "default/items.yml".to_string(),
            is_folder: false,
        };
        assert_eq!(file.delete_prompt(), "Delete file \"default/items.yml\"?");
        assert_eq!(file.delete_warning(), "This action cannot be undone.");

        let folder = NodeTarget {
            path: "default".to_string(),
            is_folder: true,
        };
        assert_eq!(folder.delete_prompt(), "Delete folder \"default\"?");
        assert!(folder.delete_warning().contains("might delete more files"));
    }
}
