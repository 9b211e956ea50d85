//! Destination path helpers.

use crate::api::FileEntry;
use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Characters refused in file names by at least one mainstream filesystem.
const INVALID_FILE_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace characters that cannot appear in a file name with `_`.
///
/// ```rust
/// use canvas_dl::utils::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("CS101: Intro/Lab"), "CS101_ Intro_Lab");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_control() || INVALID_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Local path of `file` below `course_dir`.
///
/// Folder segments are always sanitized and `.`/`..` segments are dropped.
/// The file name is taken verbatim unless `sanitize_name` is set; see
/// [`check_file_name`] for the names a transfer refuses.
pub fn destination_for(course_dir: &Path, file: &FileEntry, sanitize_name: bool) -> PathBuf {
    let mut path = file
        .folder_path
        .split('/')
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .fold(course_dir.to_path_buf(), |path, segment| {
            path.join(sanitize_file_name(segment))
        });

    if sanitize_name {
        path.push(sanitize_file_name(&file.display_name));
    } else {
        path.push(&file.display_name);
    }
    path
}

/// Refuse file names that would escape the directory they are pushed onto.
///
/// Absolute names, drive prefixes and `..` components are rejected.
pub fn check_file_name(name: &str) -> Result<()> {
    let escapes = Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::ParentDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(Error::UnsafePath(name.to_string()));
    }
    Ok(())
}
