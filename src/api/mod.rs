//! Canvas API access.
//!
//! - [`model`] - Course, folder and file records
//! - [`pagination`] - `Link` header pagination
//! - [`canvas`] - Credentials and the listing endpoints

pub mod canvas;
pub mod model;
pub mod pagination;

pub use canvas::{CanvasApi, Credentials, DEFAULT_PER_PAGE};
pub use model::{Course, FileEntry, Folder};
pub use pagination::{find_relation, next_link, Paginator, Traversal};
