//! Restoring remote timestamps on downloaded files.
//!
//! The modification time is set everywhere. The creation time can only be
//! written on Windows and macOS; other platforms keep the local one.

use chrono::{DateTime, Utc};
use std::fs::{File, FileTimes};
use std::io;
use std::time::SystemTime;

/// Set the creation and modification times of an open file.
///
/// A `None` timestamp leaves the corresponding time untouched.
pub fn apply_timestamps(
    file: &File,
    created: Option<DateTime<Utc>>,
    modified: Option<DateTime<Utc>>,
) -> io::Result<()> {
    if created.is_none() && modified.is_none() {
        return Ok(());
    }

    let mut times = FileTimes::new();
    if let Some(modified) = modified {
        times = times.set_modified(SystemTime::from(modified));
    }
    if let Some(created) = created {
        times = with_created(times, SystemTime::from(created));
    }
    file.set_times(times)
}

#[cfg(windows)]
fn with_created(times: FileTimes, created: SystemTime) -> FileTimes {
    use std::os::windows::fs::FileTimesExt;
    times.set_created(created)
}

#[cfg(target_os = "macos")]
fn with_created(times: FileTimes, created: SystemTime) -> FileTimes {
    use std::os::macos::fs::FileTimesExt;
    times.set_created(created)
}

#[cfg(not(any(windows, target_os = "macos")))]
fn with_created(times: FileTimes, _created: SystemTime) -> FileTimes {
    times
}
