//! Output formatting for subnet data.
//!
//! - [`terminal`] - aligned text with digit grouping
//! - [`json`] - JSON object for scripts

mod json;
mod terminal;

use crate::models::SubnetInfo;

pub use json::subnet_json;
pub use terminal::{format_fields, format_value, group_digits};

/// How a [`SubnetInfo`] is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `info` as text ready for stdout, newline terminated.
pub fn render(info: &SubnetInfo, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_fields(&info.fields())),
        OutputFormat::Json => subnet_json(info).map(|json| json + "\n"),
    }
}
