//! Backend API payloads.

use serde::{Deserialize, Serialize};

use super::FileTree;

/// Response of `GET /api/data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiData {
    /// Registry item identifiers known to the server
    #[serde(default)]
    pub items: Vec<String>,
    /// Resource folder contents
    #[serde(default)]
    pub files: FileTree,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_response() {
        let json = r#"{
            "items": ["minecraft:stone", "minecraft:tnt"],
            "files": [["default", "items.yml"], "readme.txt"]
        }"#;
        let data: ApiData = serde_json::from_str(json).unwrap();
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.files.file_paths(), vec!["default/items.yml", "readme.txt"]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let data: ApiData = serde_json::from_str("{}").unwrap();
        assert!(data.items.is_empty());
        assert!(data.files.is_empty());
    }
}
