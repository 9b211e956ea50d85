//! Course file catalog.

use super::folders::resolve_folders;
use crate::api::{CanvasApi, FileEntry};

use tracing::{debug, warn};

/// Collects every file of a course together with its resolved folder path.
///
/// The catalog is unfiltered; see [`ExtensionFilter`](super::ExtensionFilter)
/// for selection.
#[derive(Debug, Clone, Copy)]
pub struct CatalogBuilder<'a> {
    api: &'a CanvasApi,
}

impl<'a> CatalogBuilder<'a> {
    /// Creates a catalog builder on top of the API accessor.
    pub fn new(api: &'a CanvasApi) -> Self {
        Self { api }
    }

    /// List every file of `course_id`.
    ///
    /// Files come in folder listing order, then the root-scope files. A
    /// folder whose file listing fails contributes nothing; the failure is
    /// logged and the other folders are still listed.
    pub async fn build(&self, course_id: u64) -> Vec<FileEntry> {
        let folders = self.api.folders(course_id).await;
        if let Some(ref e) = folders.error {
            warn!(
                course_id,
                listed = folders.items.len(),
                "Folder listing truncated: {}",
                e
            );
        }
        let folder_paths = resolve_folders(&folders.items);
        debug!(course_id, folders = folder_paths.len(), "Resolved folder paths");

        let mut files = Vec::new();
        for folder in &folders.items {
            match self.api.folder_files(folder.id).await.into_result() {
                Ok(listed) => {
                    debug!(folder_id = folder.id, files = listed.len(), "Listed folder");
                    files.extend(
                        listed
                            .into_iter()
                            .map(|file| file.with_folder_path(&folder_paths)),
                    );
                }
                Err(e) => {
                    warn!(folder_id = folder.id, "Skipping folder: {}", e);
                }
            }
        }

        match self.api.root_files().await.into_result() {
            Ok(listed) => {
                debug!(course_id, files = listed.len(), "Listed root-scope files");
                files.extend(listed.into_iter().map(FileEntry::at_root));
            }
            Err(e) => {
                warn!(course_id, "Skipping root-scope files: {}", e);
            }
        }

        files
    }
}
