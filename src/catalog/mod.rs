//! Course file catalog.
//!
//! - [`folders`] - Folder id to local path resolution
//! - [`builder`] - Merges folder-scoped and root-scoped file listings
//! - [`filter`] - Extension based selection applied by the caller

pub mod builder;
pub mod filter;
pub mod folders;

pub use builder::CatalogBuilder;
pub use filter::{ExtensionFilter, DEFAULT_EXTENSIONS};
pub use folders::{normalize_folder_path, resolve_folders, ROOT_FOLDER_LABEL};
