use std::io::Write;

use super::ReportWriter;
use crate::comparison::ComparisonReport;
use crate::sensitivity::SensitivityReport;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_sensitivity(&mut self, report: &SensitivityReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}
