//! File selection by extension.

use crate::api::FileEntry;

/// Extensions downloaded when none are configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".pdf", ".docx"];

/// Case-insensitive file name suffix filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionFilter {
    /// Creates a filter. `pdf` and `.PDF` are both accepted and stored as `.pdf`.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_lowercase())
            .filter(|ext| !ext.is_empty() && ext != ".")
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
        Self { extensions }
    }

    /// Normalized extensions, each with a leading dot.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `name` ends with one of the extensions.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Keep the matching files, preserving their order.
    pub fn apply(&self, files: Vec<FileEntry>) -> Vec<FileEntry> {
        files
            .into_iter()
            .filter(|file| self.matches(&file.display_name))
            .collect()
    }
}
