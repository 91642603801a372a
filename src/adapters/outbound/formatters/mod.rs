/// Report formatter adapters
mod html_formatter;
mod json_formatter;

pub use html_formatter::HtmlFormatter;
pub use json_formatter::JsonFormatter;
