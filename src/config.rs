//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The only runtime input is the `token` query parameter (see [`crate::models::Session`]).

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "LostEngine";

/// Project repository linked from the header.
pub const REPOSITORY_URL: &str = "https://github.com/LostEngine/LostEngine";

// =============================================================================
// Backend API
// =============================================================================

/// Backend API endpoints (relative to the page origin).
pub mod api {
    /// Tree model and registry items.
    pub const DATA: &str = "/api/data";
    /// Raw file download.
    pub const DOWNLOAD: &str = "/api/download_resource";
    /// Multipart file upload.
    pub const UPLOAD: &str = "/api/upload_resource";
    /// File or folder deletion.
    pub const DELETE: &str = "/api/delete_resource";
}

/// Query parameter carrying the access token.
pub const TOKEN_PARAM: &str = "token";

/// Token suffix that forces read-only mode.
pub const READONLY_TOKEN_SUFFIX: &str = "_readonly";

/// Fetch request timeout in milliseconds (data and download requests).
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Largest file accepted by the upload dialog (512 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 536_870_912;

// =============================================================================
// File Classification
// =============================================================================

/// Extensions rendered in the pan/zoom image viewer.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extensions rendered as YAML in the config viewer.
pub const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Extensions rendered as TOML in the config viewer.
pub const TOML_EXTENSIONS: &[&str] = &["toml"];

/// Editor language labels by extension. Anything else is `plaintext`.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("css", "css"),
    ("go", "go"),
    ("html", "html"),
    ("htm", "html"),
    ("ini", "ini"),
    ("java", "java"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "javascript"),
    ("json", "json"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("markdown", "markdown"),
    ("md", "markdown"),
    ("php", "php"),
    ("ps1", "powershell"),
    ("psm1", "powershell"),
    ("psd1", "powershell"),
    ("py", "python"),
    ("pyw", "python"),
    ("rs", "rust"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("sql", "sql"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("xml", "xml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
];

// =============================================================================
// File Tree
// =============================================================================

/// Folder names that start expanded in the sidebar tree.
pub const DEFAULT_EXPANDED_FOLDERS: &[&str] = &["components", "ui"];

/// File name suggested by the "New Text File" dialog.
pub const DEFAULT_NEW_FILE_NAME: &str = "file.txt";

/// Target folder suggested when a picked directory has no name.
pub const DEFAULT_UPLOAD_FOLDER: &str = "folder";

// =============================================================================
// Sidebar
// =============================================================================

/// Sidebar sizing and shortcut configuration.
pub mod sidebar {
    /// Initial sidebar width in pixels.
    pub const DEFAULT_WIDTH: f64 = 288.0;
    /// Narrowest width reachable with the resize handle.
    pub const MIN_WIDTH: f64 = 192.0;
    /// Widest width reachable with the resize handle.
    pub const MAX_WIDTH: f64 = 512.0;
    /// Off-canvas width on mobile.
    pub const MOBILE_WIDTH: &str = "18rem";
    /// Key toggling the sidebar together with Ctrl/Cmd.
    pub const TOGGLE_SHORTCUT: &str = "b";
}

/// Media query matching phone-sized viewports.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

// =============================================================================
// Editor
// =============================================================================

/// Key saving the opened file together with Ctrl.
pub const SAVE_SHORTCUT: &str = "s";

/// Image viewer zoom limits and wheel sensitivity.
pub mod zoom {
    pub const MIN_SCALE: f64 = 0.1;
    pub const MAX_SCALE: f64 = 5.0;
    /// Wheel `deltaY` units per 1.0 of scale.
    pub const WHEEL_DIVISOR: f64 = 400.0;
}

// =============================================================================
// Theme & Notifications
// =============================================================================

/// localStorage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query for the system dark-mode preference.
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// How long success/error toasts stay visible.
pub const TOAST_DURATION_MS: u32 = 4_000;
