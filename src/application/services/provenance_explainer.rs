use crate::ports::outbound::ProvenanceProvider;
use crate::prebuilt_usage::domain::ValidUsage;

/// ProvenanceExplainer attaches a "why is this here" explanation to
/// transitive usages.
///
/// Provenance is supplementary: any provider failure degrades to an empty
/// explanation and is only logged.
pub struct ProvenanceExplainer<P> {
    provider: P,
}

impl<P: ProvenanceProvider> ProvenanceExplainer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the provider's output verbatim for transitive usages and an
    /// empty string for direct ones or on failure.
    pub fn explain(&self, usage: &ValidUsage<'_>) -> String {
        if usage.is_direct_dependency {
            return String::new();
        }

        match self.provider.explain(usage.file_path, usage.package_id) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    file_path = usage.file_path,
                    package = usage.package_id,
                    "provenance lookup failed: {:#}",
                    e
                );
                String::new()
            }
        }
    }
}
