//! Records returned by the Canvas REST API.
//!
//! Only the fields canvas-dl relies on are deserialized; everything else in
//! the payloads is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A course visible to the token owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    /// Course identifier, unique per account.
    pub id: u64,
    /// Display name. Courses the token cannot fully read come without one.
    #[serde(default)]
    pub name: String,
}

/// A folder of a course, as listed by `courses/{id}/folders`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Folder {
    /// Folder identifier, unique within the course.
    pub id: u64,
    /// Folder name.
    #[serde(default)]
    pub name: String,
    /// Parent folder, `None` for the course root.
    #[serde(default)]
    pub parent_folder_id: Option<u64>,
    /// Slash separated path starting with the root label, e.g.
    /// `course files/Lectures/Week 1`.
    #[serde(default)]
    pub full_name: String,
}

/// A downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    /// File identifier.
    pub id: u64,
    /// Name shown in Canvas, used as the on-disk file name.
    pub display_name: String,
    /// Direct download URL.
    #[serde(default)]
    pub url: String,
    /// Creation time reported by Canvas.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time reported by Canvas.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Owning folder.
    #[serde(default)]
    pub folder_id: Option<u64>,
    /// Resolved folder path relative to the course root. Empty at the root.
    #[serde(skip)]
    pub folder_path: String,
}

impl FileEntry {
    /// Attach the resolved path of the owning folder.
    ///
    /// Files whose folder is missing from `folder_paths` land at the course
    /// root.
    pub fn with_folder_path(self, folder_paths: &HashMap<u64, String>) -> Self {
        let folder_path = self
            .folder_id
            .and_then(|id| folder_paths.get(&id))
            .cloned()
            .unwrap_or_default();
        Self {
            folder_path,
            ..self
        }
    }

    /// Place the file at the course root.
    pub fn at_root(self) -> Self {
        Self {
            folder_path: String::new(),
            ..self
        }
    }
}
