//! Layout file auto-discovery.
//!
//! When no layout path is given on the command line, the CLI looks for one of
//! the well-known file names in the working directory and then climbs toward
//! the filesystem root, like version-control tools locate their repository.

use crate::constants::{DEFAULT_SEARCH_DEPTH, LAYOUT_FILE_CANDIDATES};
use std::fs;
use std::path::{Path, PathBuf};

/// Finds the nearest layout file at or above `start`.
///
/// Each directory is probed for the candidate names in priority order before
/// moving one level up, so a lower-priority name close by beats a
/// higher-priority name further up. The climb stops after
/// [`DEFAULT_SEARCH_DEPTH`] directories.
#[must_use]
pub fn find_layout_file(start: &Path) -> Option<PathBuf> {
    find_layout_file_with_depth(start, DEFAULT_SEARCH_DEPTH)
}

/// Like [`find_layout_file`] with an explicit directory limit.
#[must_use]
pub fn find_layout_file_with_depth(start: &Path, max_depth: usize) -> Option<PathBuf> {
    let mut dir = start;

    for _ in 0..max_depth {
        for candidate in LAYOUT_FILE_CANDIDATES {
            let path = dir.join(candidate);
            // Unreadable files are skipped, the search keeps going
            if path.is_file() && fs::File::open(&path).is_ok() {
                return Some(path);
            }
        }
        dir = dir.parent()?;
    }

    None
}
