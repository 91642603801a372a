use prebuilt_report::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ProjectLocator returning canned matches by file name
#[derive(Default, Clone)]
pub struct MockProjectLocator {
    projects: HashMap<String, PathBuf>,
    pub queries: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MockProjectLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, file_name: &str, found: impl Into<PathBuf>) -> Self {
        self.projects.insert(file_name.to_string(), found.into());
        self
    }

    pub fn get_queries(&self) -> Vec<(PathBuf, String)> {
        self.queries.lock().unwrap().clone()
    }
}

impl ProjectLocator for MockProjectLocator {
    fn find_file(&self, search_root: &Path, file_name: &str) -> Option<PathBuf> {
        self.queries
            .lock()
            .unwrap()
            .push((search_root.to_path_buf(), file_name.to_string()));
        self.projects.get(file_name).cloned()
    }
}
