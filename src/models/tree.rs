//! Recursive file tree model.
//!
//! The backend describes a resource folder as nested JSON arrays: a plain
//! string is a file, and an array is a folder whose first element is the
//! folder name and whose remaining elements are its children.
//!
//! ```json
//! [["default", ["assets", "tnt.png"], "items.yml"], "readme.txt"]
//! ```
//!
//! Paths are the only identity. A node's full path joins its ancestors'
//! names with `/`, and the whole tree is replaced on every reload.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_NEW_FILE_NAME;
use crate::utils::format::{join_path, parent_path};

// =============================================================================
// TreeItem
// =============================================================================

/// A single node of the file tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeItem {
    /// A file, identified by its name.
    File(String),
    /// A folder with its ordered children.
    Folder {
        name: String,
        children: Vec<TreeItem>,
    },
}

impl TreeItem {
    /// Create a file node.
    #[cfg(test)]
    pub fn file(name: impl Into<String>) -> Self {
        Self::File(name.into())
    }

    /// Create a folder node.
    #[cfg(test)]
    pub fn folder(name: impl Into<String>, children: Vec<TreeItem>) -> Self {
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    /// The node's own name (last path segment).
    pub fn name(&self) -> &str {
        match self {
            Self::File(name) | Self::Folder { name, .. } => name,
        }
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[TreeItem] {
        match self {
            Self::File(_) => &[],
            Self::Folder { children, .. } => children,
        }
    }

    /// Check if this node is a folder (including empty folders).
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Full path of this node under `parent_path`.
    pub fn full_path(&self, parent_path: &str) -> String {
        join_path(parent_path, self.name())
    }
}

impl Serialize for TreeItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::File(name) => serializer.serialize_str(name),
            Self::Folder { name, children } => {
                let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
                seq.serialize_element(name)?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for TreeItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TreeItemVisitor)
    }
}

struct TreeItemVisitor;

impl<'de> Visitor<'de> for TreeItemVisitor {
    type Value = TreeItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a file name or a [folder name, ...children] array")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<TreeItem, E> {
        Ok(TreeItem::File(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<TreeItem, E> {
        Ok(TreeItem::File(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TreeItem, A::Error> {
        // First slot is always the folder's own name
        let name: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let mut children = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(child) = seq.next_element::<TreeItem>()? {
            children.push(child);
        }

        Ok(TreeItem::Folder { name, children })
    }
}

// =============================================================================
// FileTree
// =============================================================================

/// The top-level list of tree nodes returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree(Vec<TreeItem>);

impl FileTree {
    #[cfg(test)]
    pub fn new(roots: Vec<TreeItem>) -> Self {
        Self(roots)
    }

    /// Top-level nodes in display order.
    pub fn roots(&self) -> &[TreeItem] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Depth-first, pre-order walk over every node with its full path.
    ///
    /// The tree is assumed finite; there is no cycle detection.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a TreeItem, &str),
    {
        fn walk_items<'a, F>(items: &'a [TreeItem], parent: &str, visit: &mut F)
        where
            F: FnMut(&'a TreeItem, &str),
        {
            for item in items {
                let path = item.full_path(parent);
                visit(item, &path);
                walk_items(item.children(), &path, visit);
            }
        }

        walk_items(&self.0, "", &mut visit);
    }

    /// Flat list of every file path, in document order.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.walk(|item, path| {
            if !item.is_folder() {
                paths.push(path.to_string());
            }
        });
        paths
    }

    /// Check if a file exists at the given full path.
    pub fn contains_file(&self, path: &str) -> bool {
        self.find(path).is_some_and(|item| !item.is_folder())
    }

    /// File paths containing `query` (case-insensitive), in document order.
    ///
    /// An empty or blank query matches every file.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        self.file_paths()
            .into_iter()
            .filter(|path| needle.is_empty() || path.to_lowercase().contains(&needle))
            .collect()
    }

    /// Find a node by full path.
    pub fn find(&self, path: &str) -> Option<&TreeItem> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut current = self.0.iter().find(|item| item.name() == first)?;

        for segment in segments {
            current = current
                .children()
                .iter()
                .find(|item| item.name() == segment)?;
        }

        Some(current)
    }
}

// =============================================================================
// Path helpers
// =============================================================================

/// Folder offered as the location of a new file created from a node.
///
/// Folders offer themselves; files offer their parent folder. The result has
/// no leading or trailing slashes and is empty at the top level.
pub fn folder_for_new_file(path: &str, is_folder: bool) -> String {
    let folder = if is_folder { path } else { parent_path(path) };
    folder.trim_matches('/').to_string()
}

/// Default path suggested by "New Text File" in the given folder.
pub fn default_new_file_path(folder: &str) -> String {
    join_path(folder.trim_matches('/'), DEFAULT_NEW_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileTree {
        serde_json::from_str(
            r#"[
                ["default",
                    ["assets",
                        ["textures",
                            ["block", "block.png", "ore.png", "tnt.png"],
                            ["item", "axe.png", "baguette.png"]
                        ]
                    ],
                    "items.yml"
                ],
                ["empty"],
                "readme.txt"
            ]"#,
        )
        .expect("sample tree should parse")
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    #[test]
    fn test_decode_nested_arrays() {
        let tree = sample_tree();
        assert_eq!(tree.roots().len(), 3);

        let default = &tree.roots()[0];
        assert_eq!(default.name(), "default");
        assert!(default.is_folder());
        assert_eq!(default.children().len(), 2);
        assert_eq!(default.children()[1], TreeItem::file("items.yml"));

        assert_eq!(tree.roots()[2], TreeItem::file("readme.txt"));
    }

    #[test]
    fn test_single_element_array_is_empty_folder() {
        let tree = sample_tree();
        let empty = &tree.roots()[1];
        assert!(empty.is_folder());
        assert!(empty.children().is_empty());
        assert!(!tree.contains_file("empty"));
    }

    #[test]
    fn test_decode_rejects_malformed_sequences() {
        assert!(serde_json::from_str::<FileTree>("[[]]").is_err());
        assert!(serde_json::from_str::<FileTree>(r#"[[["a"], "b"]]"#).is_err());
        assert!(serde_json::from_str::<FileTree>("[42]").is_err());
    }

    #[test]
    fn test_encode_matches_wire_shape() {
        let tree = FileTree::new(vec![
            TreeItem::folder("a", vec![TreeItem::file("b.txt")]),
            TreeItem::file("c.yml"),
        ]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"[["a","b.txt"],"c.yml"]"#);
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    #[test]
    fn test_child_path_extends_parent_path() {
        let tree = sample_tree();
        let top: Vec<&str> = tree.roots().iter().map(|item| item.name()).collect();
        let mut visited: Vec<String> = Vec::new();
        tree.walk(|item, path| {
            if top.contains(&path) {
                assert_eq!(path, item.name());
            } else {
                let parent = parent_path(path);
                assert_eq!(path, format!("{}/{}", parent, item.name()));
                assert!(
                    visited.iter().any(|p| p == parent),
                    "parent of {} must be visited first",
                    path
                );
            }
            visited.push(path.to_string());
        });
        assert!(!visited.is_empty());
    }

    #[test]
    fn test_file_paths_in_document_order() {
        let tree = sample_tree();
        assert_eq!(
            tree.file_paths(),
            vec![
                "default/assets/textures/block/block.png",
                "default/assets/textures/block/ore.png",
                "default/assets/textures/block/tnt.png",
                "default/assets/textures/item/axe.png",
                "default/assets/textures/item/baguette.png",
                "default/items.yml",
                "readme.txt",
            ]
        );
    }

    #[test]
    fn test_contains_file() {
        let tree = sample_tree();
        assert!(tree.contains_file("default/items.yml"));
        assert!(tree.contains_file("default/assets/textures/item/axe.png"));
        assert!(tree.contains_file("readme.txt"));
        // Folders are not files
        assert!(!tree.contains_file("default/assets"));
        assert!(!tree.contains_file("default/missing.yml"));
        assert!(!tree.contains_file(""));
    }

    #[test]
    fn test_deleted_folder_removes_descendants() {
        let before = sample_tree();
        let after: FileTree =
            serde_json::from_str(r#"[["default", "items.yml"], ["empty"], "readme.txt"]"#).unwrap();

        let removed: Vec<String> = before
            .file_paths()
            .into_iter()
            .filter(|p| p.starts_with("default/assets/"))
            .collect();
        assert!(!removed.is_empty());
        assert!(removed.iter().all(|p| !after.contains_file(p)));
        assert!(after.find("default/assets").is_none());
    }

    #[test]
    fn test_search_filters_file_paths() {
        let tree = sample_tree();
        assert_eq!(tree.search("").len(), 7);
        assert_eq!(
            tree.search("TNT"),
            vec!["default/assets/textures/block/tnt.png"]
        );
        assert_eq!(tree.search(" items "), vec!["default/items.yml"]);
        // Folder names match through their files only
        assert_eq!(tree.search("item/").len(), 2);
        assert!(tree.search("empty").is_empty());
    }

    // =========================================================================
    // New file paths
    // =========================================================================

    #[test]
    fn test_folder_for_new_file() {
        assert_eq!(folder_for_new_file("default/assets", true), "default/assets");
        assert_eq!(folder_for_new_file("default/items.yml", false), "default");
        assert_eq!(folder_for_new_file("readme.txt", false), "");
    }

    #[test]
    fn test_default_new_file_path() {
        assert_eq!(default_new_file_path("default"), "default/file.txt");
        assert_eq!(default_new_file_path(""), "file.txt");
        assert_eq!(default_new_file_path("/a/"), "a/file.txt");
    }
}
