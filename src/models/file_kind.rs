//! File classification by extension.

use crate::config::{IMAGE_EXTENSIONS, LANGUAGES, TOML_EXTENSIONS, YAML_EXTENSIONS};
use crate::utils::format::extension;

/// Structured config formats understood by the config viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

/// Render mode of a file, chosen from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Bitmap image shown in the pan/zoom viewer
    Image,
    /// Structured config shown as a key/value tree
    Config(ConfigFormat),
    /// Anything else, shown in the text editor
    Text,
}

impl FileKind {
    /// Detect file kind from a path (case-insensitive).
    pub fn from_path(path: &str) -> Self {
        let Some(ext) = extension(path) else {
            return Self::Text;
        };
        let ext = ext.as_str();

        if IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if YAML_EXTENSIONS.contains(&ext) {
            Self::Config(ConfigFormat::Yaml)
        } else if TOML_EXTENSIONS.contains(&ext) {
            Self::Config(ConfigFormat::Toml)
        } else {
            Self::Text
        }
    }

    /// Images are served as binary and cannot be saved back as text.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Image)
    }
}

/// Editor language label for a path, `plaintext` when unknown.
pub fn language_for(path: &str) -> &'static str {
    extension(path)
        .and_then(|ext| {
            LANGUAGES
                .iter()
                .find(|(candidate, _)| *candidate == ext)
                .map(|(_, language)| *language)
        })
        .unwrap_or("plaintext")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_path("a/tnt.png"), FileKind::Image);
        assert_eq!(FileKind::from_path("a/photo.JPG"), FileKind::Image);
        assert_eq!(FileKind::from_path("a/anim.gif"), FileKind::Image);
        assert_eq!(
            FileKind::from_path("default/items.yml"),
            FileKind::Config(ConfigFormat::Yaml)
        );
        assert_eq!(
            FileKind::from_path("blocks.YAML"),
            FileKind::Config(ConfigFormat::Yaml)
        );
        assert_eq!(
            FileKind::from_path("pack.toml"),
            FileKind::Config(ConfigFormat::Toml)
        );
        assert_eq!(FileKind::from_path("readme.txt"), FileKind::Text);
        assert_eq!(FileKind::from_path("Makefile"), FileKind::Text);
    }

    #[test]
    fn test_is_text() {
        assert!(!FileKind::Image.is_text());
        assert!(FileKind::Text.is_text());
        assert!(FileKind::Config(ConfigFormat::Yaml).is_text());
    }

    #[test]
    fn test_language_for() {
        assert_eq!(language_for("main.rs"), "rust");
        assert_eq!(language_for("Item.Java"), "java");
        assert_eq!(language_for("items.yml"), "yaml");
        assert_eq!(language_for("notes.txt"), "plaintext");
        assert_eq!(language_for("LICENSE"), "plaintext");
    }
}
