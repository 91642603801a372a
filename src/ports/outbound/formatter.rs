use crate::application::read_models::ReportModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the aggregated report
///
/// Renderers only consume the final Repo hierarchy; they never influence
/// how usages are grouped or resolved.
pub trait ReportFormatter {
    /// Renders the report model into the formatter's output format
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn format(&self, model: &ReportModel<'_>) -> Result<String>;
}
