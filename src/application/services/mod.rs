//! Application services that resolve a usage against infrastructure ports.
mod file_link_resolver;
mod provenance_explainer;

pub use file_link_resolver::FileLinkResolver;
pub use provenance_explainer::ProvenanceExplainer;
