//! Report writers.
//!
//! All writers render the same two reports. The command layer picks one
//! with [`create_writer`] and hands it stdout or the output file.

pub mod json;
pub mod markdown;
pub mod terminal;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::comparison::ComparisonReport;
use crate::formatting::FormattingConfig;
use crate::sensitivity::SensitivityReport;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Terminal => "terminal",
        };
        f.write_str(name)
    }
}

pub trait ReportWriter {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()>;
    fn write_sensitivity(&mut self, report: &SensitivityReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Note listing vendor names that fell back to the generic model.
pub(crate) fn unrecognized_note(names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    Some(format!(
        "Unrecognized vendor names are priced together as Other NAC with the generic hybrid model: {}",
        names.join(", ")
    ))
}

/// Format implied by an output file's extension, if any.
pub fn format_for_path(path: &std::path::Path) -> Option<OutputFormat> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "json" => Some(OutputFormat::Json),
        "md" | "markdown" => Some(OutputFormat::Markdown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{compare_vendors, ComparisonInputs};
    use crate::core::VendorIdentity;
    use std::path::Path;

    #[test]
    fn test_format_for_path() {
        assert_eq!(
            format_for_path(Path::new("report.JSON")),
            Some(OutputFormat::Json)
        );
        assert_eq!(
            format_for_path(Path::new("out/report.md")),
            Some(OutputFormat::Markdown)
        );
        assert_eq!(format_for_path(Path::new("report.txt")), None);
        assert_eq!(format_for_path(Path::new("report")), None);
    }

    #[test]
    fn test_every_format_renders_a_comparison() {
        let report = compare_vendors(
            &[VendorIdentity::PortnoxCloud, VendorIdentity::NoNac],
            &ComparisonInputs::default(),
        )
        .unwrap();

        for format in [
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Terminal,
        ] {
            let mut buffer = Vec::new();
            create_writer(format, &mut buffer, FormattingConfig::plain())
                .write_comparison(&report)
                .unwrap();
            let text = String::from_utf8(buffer).unwrap();
            assert!(
                text.to_lowercase().contains("portnox"),
                "{format} output lacks vendor"
            );
        }
    }
}
