//! Upload planning: target paths and size limits.

use crate::config::MAX_UPLOAD_BYTES;
use crate::utils::format::join_path;

/// Name and size of a file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Check if the file fits under the upload limit.
    pub fn within_limit(&self) -> bool {
        self.size <= MAX_UPLOAD_BYTES
    }
}

/// Split picked files into accepted and rejected (oversize) indices.
pub fn partition_by_size(candidates: &[UploadCandidate]) -> (Vec<usize>, Vec<usize>) {
    (0..candidates.len()).partition(|&i| candidates[i].within_limit())
}

/// Server path for a file uploaded into `folder`.
///
/// Folder uploads are flattened: every file lands directly in `folder`
/// under its own name. An empty folder means the resource root.
pub fn upload_target(folder: &str, file_name: &str) -> String {
    join_path(folder.trim_matches('/'), file_name)
}

/// Top-level folder name of a file picked from a directory input.
///
/// `webkitRelativePath` looks like `pack/textures/tnt.png`; files picked
/// without a directory have an empty relative path.
pub fn picked_folder_name(relative_path: &str) -> Option<&str> {
    match relative_path.split_once('/') {
        Some((folder, _)) if !folder.is_empty() => Some(folder),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_target() {
        assert_eq!(upload_target("pack", "tnt.png"), "pack/tnt.png");
        assert_eq!(upload_target("pack/", "tnt.png"), "pack/tnt.png");
        assert_eq!(upload_target("", "tnt.png"), "tnt.png");
        assert_eq!(upload_target("/a/b/", "c.yml"), "a/b/c.yml");
    }

    #[test]
    fn test_partition_by_size() {
        let files = vec![
            UploadCandidate::new("small.png", 10),
            UploadCandidate::new("huge.zip", MAX_UPLOAD_BYTES + 1),
            UploadCandidate::new("exact.bin", MAX_UPLOAD_BYTES),
        ];
        let (accepted, rejected) = partition_by_size(&files);
        assert_eq!(accepted, vec![0, 2]);
        assert_eq!(rejected, vec![1]);
    }

    #[test]
    fn test_picked_folder_name() {
        assert_eq!(picked_folder_name("pack/textures/tnt.png"), Some("pack"));
        assert_eq!(picked_folder_name("pack/items.yml"), Some("pack"));
        assert_eq!(picked_folder_name("tnt.png"), None);
        assert_eq!(picked_folder_name(""), None);
    }
}
