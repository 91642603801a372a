//! Read models handed to report formatters.
pub mod report_model;

pub use report_model::ReportModel;
