use prebuilt_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ProvenanceProvider for testing
#[derive(Default, Clone)]
pub struct MockProvenanceProvider {
    explanations: HashMap<String, String>,
    pub should_fail: bool,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockProvenanceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explanation(mut self, package_id: &str, explanation: &str) -> Self {
        self.explanations
            .insert(package_id.to_string(), explanation.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ProvenanceProvider for MockProvenanceProvider {
    fn explain(&self, file_path: &str, package_id: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((file_path.to_string(), package_id.to_string()));
        if self.should_fail {
            anyhow::bail!("Mock provenance failure");
        }
        Ok(self
            .explanations
            .get(package_id)
            .cloned()
            .unwrap_or_default())
    }
}
