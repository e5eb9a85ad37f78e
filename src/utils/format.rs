//! Formatting utilities for paths and file sizes.

/// Format file size for display (e.g., "512 B", "1.5 KB", "3.4 MB").
///
/// Uses binary units, matching what browsers report for `File.size`.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let value = bytes as f64;
    if value >= GB {
        format!("{:.1} GB", value / GB)
    } else if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Join a parent path and a child name with `/`.
///
/// An empty parent yields the bare name, so top-level paths have no
/// leading slash.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Get the parent folder of a path.
///
/// Returns an empty string for top-level paths.
pub fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

/// Get the last segment of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercased extension of the last path segment, if any.
///
/// Dotfiles such as `.profile` have no extension.
pub fn extension(path: &str) -> Option<String> {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_ascii_lowercase()),
        _ => None,
    }
}

/// Number of lines shown in the editor gutter.
///
/// A trailing newline starts a new (empty) line, like in any editor.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_572_864), "1.5 MB");
        assert_eq!(format_size(536_870_912), "512.0 MB");
        assert_eq!(format_size(2_147_483_648), "2.0 GB");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "default"), "default");
        assert_eq!(join_path("default", "items.yml"), "default/items.yml");
        assert_eq!(join_path("a/b", "c"), "a/b/c");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("default/assets/tnt.png"), "default/assets");
        assert_eq!(parent_path("items.yml"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("default/assets/tnt.png"), "tnt.png");
        assert_eq!(file_name("items.yml"), "items.yml");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("a/b/Block.PNG"), Some("png".to_string()));
        assert_eq!(extension("items.yml"), Some("yml".to_string()));
        assert_eq!(extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension("Makefile"), None);
        assert_eq!(extension(".profile"), None);
        assert_eq!(extension("dir.d/README"), None);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\nb\n"), 3);
    }
}
