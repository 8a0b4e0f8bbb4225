use std::io::Write;

use super::{unrecognized_note, ReportWriter};
use crate::comparison::{ComparisonReport, VendorComparison};
use crate::formatting::{
    format_currency, format_optional_percent, format_percent, format_unit_price,
};
use crate::sensitivity::{SensitivityMetric, SensitivityReport};

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_cost_summary(report)?;
        self.write_cost_details(report)?;
        self.write_value_drivers(report)?;
        self.write_risk(report)?;
        self.write_features(report)?;
        self.write_approximation_note(report)?;
        Ok(())
    }

    fn write_sensitivity(&mut self, report: &SensitivityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Sensitivity Analysis")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** by **{}**, baseline {}",
            report.metric.label(),
            report.variable.label(),
            report.baseline
        )?;
        writeln!(self.writer)?;

        let vendors: Vec<String> = report
            .series
            .iter()
            .map(|series| series.vendor.to_string())
            .collect();
        writeln!(self.writer, "| {} | {} |", report.variable.label(), vendors.join(" | "))?;
        writeln!(self.writer, "|---{}|", "|---".repeat(vendors.len()))?;

        for (i, point) in report.points.iter().enumerate() {
            let cells: Vec<String> = report
                .series
                .iter()
                .map(|series| format_metric(report.metric, series.values[i]))
                .collect();
            writeln!(self.writer, "| {} | {} |", point, cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        self.write_unrecognized_note(&report.unrecognized_vendors)
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let org = &report.inputs.organization;
        writeln!(self.writer, "# NAC Total Cost of Ownership Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} devices across {} locations over {} years. Baseline: {}.",
            org.device_count(),
            org.locations(),
            org.years_to_project(),
            report.baseline
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_summary(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Cost Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Vendor | Initial | Annual | TCO | Per Device/Month | Savings | ROI | Payback |"
        )?;
        writeln!(
            self.writer,
            "|--------|---------|--------|-----|------------------|---------|-----|---------|"
        )?;
        for result in &report.results {
            self.write_cost_row(result)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_row(&mut self, result: &VendorComparison) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            result.vendor,
            format_currency(result.cost.initial_total()),
            format_currency(result.cost.annual_run_rate()),
            format_currency(result.cost.total_tco()),
            format_unit_price(result.per_device_per_month),
            format_currency(result.roi.total_savings),
            format_optional_percent(result.roi.roi_percent),
            result.roi.payback_period,
        )?;
        Ok(())
    }

    fn write_cost_details(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Cost Breakdown")?;
        writeln!(self.writer)?;
        for result in &report.results {
            let cost = &result.cost;
            writeln!(self.writer, "### {}", result.vendor)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Category | Item | Amount |")?;
            writeln!(self.writer, "|----------|------|--------|")?;
            let rows = [
                ("Initial", "Hardware", cost.initial().hardware),
                ("Initial", "Software", cost.initial().software),
                ("Initial", "Implementation", cost.initial().implementation),
                ("Initial", "Training", cost.initial().training),
                ("Annual", "Subscription", cost.recurring().subscription),
                ("Annual", "Maintenance", cost.recurring().maintenance),
                ("Annual", "Support", cost.recurring().support),
                ("Annual", "Operations", cost.recurring().operations),
                ("Indirect", "Downtime", cost.indirect().downtime),
                ("Indirect", "Security", cost.indirect().security),
                ("Indirect", "Compliance", cost.indirect().compliance),
            ];
            for (category, item, amount) in rows {
                writeln!(
                    self.writer,
                    "| {category} | {item} | {} |",
                    format_currency(amount)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_value_drivers(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let measured: Vec<&VendorComparison> = report
            .results
            .iter()
            .filter(|result| result.vendor != report.baseline)
            .collect();
        if measured.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Value Drivers vs {}", report.baseline)?;
        writeln!(self.writer)?;
        for result in measured {
            writeln!(self.writer, "### {}", result.vendor)?;
            writeln!(self.writer)?;
            for (name, value) in result.roi.value_drivers.iter() {
                writeln!(self.writer, "- {name}: {}", format_currency(value))?;
            }
            writeln!(self.writer, "- NPV: {}", format_currency(result.roi.npv))?;
            writeln!(
                self.writer,
                "- Simplified return ratio: {}",
                format_optional_percent(result.roi.simplified_return_ratio)
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_risk(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Security Posture")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Vendor | Posture | Breach Probability | Compliance Coverage | MTTR (min) | Insurance Impact |"
        )?;
        writeln!(
            self.writer,
            "|--------|---------|--------------------|---------------------|------------|------------------|"
        )?;
        for result in &report.results {
            let risk = &result.risk;
            writeln!(
                self.writer,
                "| {} | {} | {} | {}% | {} | {} |",
                result.vendor,
                risk.security_posture,
                risk.breach_probability,
                risk.compliance_coverage,
                risk.mean_time_to_respond_minutes,
                format!("{:.1}", risk.insurance_impact),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_features(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Feature Comparison")?;
        writeln!(self.writer)?;
        let vendors: Vec<String> = report
            .results
            .iter()
            .map(|result| result.vendor.to_string())
            .collect();
        writeln!(self.writer, "| Feature | {} |", vendors.join(" | "))?;
        writeln!(self.writer, "|---------{}|", "|---".repeat(vendors.len()))?;

        let Some(first) = report.results.first() else {
            return Ok(());
        };
        for (i, (feature, _)) in first.features.iter().enumerate() {
            let scores: Vec<String> = report
                .results
                .iter()
                .filter_map(|result| result.features.iter().nth(i))
                .map(|(_, score)| score.to_string())
                .collect();
            writeln!(self.writer, "| {feature} | {} |", scores.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_approximation_note(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let approximated: Vec<String> = report
            .results
            .iter()
            .filter(|result| result.approximated)
            .map(|result| result.vendor.to_string())
            .collect();
        if !approximated.is_empty() {
            writeln!(
                self.writer,
                "> Costs for {} use the generic hybrid model.",
                approximated.join(", ")
            )?;
            writeln!(self.writer)?;
        }
        self.write_unrecognized_note(&report.unrecognized_vendors)
    }

    fn write_unrecognized_note(&mut self, names: &[String]) -> anyhow::Result<()> {
        if let Some(note) = unrecognized_note(names) {
            writeln!(self.writer, "> {note}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub(crate) fn format_metric(metric: SensitivityMetric, value: Option<f64>) -> String {
    match (metric, value) {
        (_, None) => "N/A".to_string(),
        (
            SensitivityMetric::Tco | SensitivityMetric::Savings | SensitivityMetric::TotalValue,
            Some(amount),
        ) => format_currency(amount),
        (SensitivityMetric::Roi, Some(percent)) => format_percent(percent),
        (SensitivityMetric::PaybackMonths, Some(months)) => format!("{months:.1}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{compare_vendors, ComparisonInputs};
    use crate::core::VendorIdentity;
    use crate::sensitivity::{analyze, SensitivityVariable};

    fn render_comparison(vendors: &[VendorIdentity]) -> String {
        let report = compare_vendors(vendors, &ComparisonInputs::default()).unwrap();
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_comparison(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_comparison_sections() {
        let markdown = render_comparison(&[VendorIdentity::PortnoxCloud, VendorIdentity::NoNac]);

        assert!(markdown.starts_with("# NAC Total Cost of Ownership Report"));
        assert!(markdown.contains("## Cost Summary"));
        assert!(markdown.contains("| Portnox Cloud | $17,000 |"));
        assert!(markdown.contains("## Value Drivers vs No NAC"));
        assert!(markdown.contains("## Security Posture"));
        assert!(markdown.contains("| Remote access | 95 | 0 |"));
        assert!(!markdown.contains("generic hybrid model"));
    }

    #[test]
    fn test_approximated_vendors_are_noted() {
        let markdown = render_comparison(&[VendorIdentity::SecureW2]);
        assert!(markdown.contains("> Costs for SecureW2 use the generic hybrid model."));
    }

    #[test]
    fn test_unrecognized_names_are_listed() {
        let report = compare_vendors(&[VendorIdentity::OtherGeneric], &ComparisonInputs::default())
            .unwrap()
            .with_unrecognized_vendors(vec!["zscaler".into(), "acme".into()]);
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_comparison(&report)
            .unwrap();
        let markdown = String::from_utf8(buffer).unwrap();

        assert!(markdown.contains("generic hybrid model: zscaler, acme"));
    }

    #[test]
    fn test_sensitivity_table() {
        let report = analyze(
            SensitivityVariable::RiskReduction,
            SensitivityMetric::Roi,
            &[VendorIdentity::PortnoxCloud, VendorIdentity::NoNac],
            &ComparisonInputs::default(),
            None,
        )
        .unwrap();

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_sensitivity(&report)
            .unwrap();
        let markdown = String::from_utf8(buffer).unwrap();

        assert!(markdown.contains("| Risk reduction (%) | Portnox Cloud | No NAC |"));
        // No NAC is the baseline, so its ROI against itself is zero
        let rows = markdown
            .lines()
            .filter(|line| line.ends_with("| 0.0% |"))
            .count();
        assert_eq!(rows, 9);
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(SensitivityMetric::Tco, Some(1_500.0)), "$1,500");
        assert_eq!(format_metric(SensitivityMetric::PaybackMonths, Some(7.0)), "7.0");
        assert_eq!(format_metric(SensitivityMetric::Roi, None), "N/A");
    }
}
