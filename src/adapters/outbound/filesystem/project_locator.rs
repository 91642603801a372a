use crate::ports::outbound::ProjectLocator;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// WalkDirProjectLocator adapter searching the source tree recursively
///
/// Entries are visited in file-name order so the same tree always yields
/// the same match. Unreadable entries are skipped.
pub struct WalkDirProjectLocator;

impl WalkDirProjectLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WalkDirProjectLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectLocator for WalkDirProjectLocator {
    fn find_file(&self, search_root: &Path, file_name: &str) -> Option<PathBuf> {
        if !search_root.is_dir() {
            return None;
        }

        WalkDir::new(search_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .find(|e| e.file_type().is_file() && e.file_name() == file_name)
            .map(|e| e.into_path())
    }
}
