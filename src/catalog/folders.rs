//! Folder path resolution.
//!
//! Canvas reports the full path of every folder, rooted at a folder labelled
//! `course files`. Local paths are those full paths without the root label.
//! The reported `full_name` is trusted as is; parent links are not walked.

use crate::api::Folder;
use std::collections::HashMap;

/// Label of the root folder of every course.
pub const ROOT_FOLDER_LABEL: &str = "course files";

/// Normalize a folder's full path.
///
/// Empty segments are dropped and a leading root label is removed, so
/// `course files/Lectures/Week 1` becomes `Lectures/Week 1` and the root
/// itself becomes the empty string.
pub fn normalize_folder_path(full_name: &str) -> String {
    let mut segments = full_name.split('/').filter(|s| !s.is_empty()).peekable();
    if segments
        .peek()
        .is_some_and(|first| first.eq_ignore_ascii_case(ROOT_FOLDER_LABEL))
    {
        segments.next();
    }
    segments.collect::<Vec<_>>().join("/")
}

/// Map every folder id to its normalized path.
pub fn resolve_folders(folders: &[Folder]) -> HashMap<u64, String> {
    folders
        .iter()
        .map(|folder| (folder.id, normalize_folder_path(&folder.full_name)))
        .collect()
}
