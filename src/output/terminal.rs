use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

use super::markdown::format_metric;
use super::{unrecognized_note, ReportWriter};
use crate::comparison::{ComparisonReport, VendorComparison};
use crate::formatting::{
    format_currency, format_optional_percent, format_unit_price, FormattingConfig,
};
use crate::risk::BreachProbability;
use crate::roi::PaybackPeriod;
use crate::sensitivity::SensitivityReport;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn table(&self, header: Vec<String>) -> Table {
        let mut table = Table::new();
        if self.formatting.is_plain() {
            table.load_preset(ASCII_FULL).force_no_tty();
        } else {
            table.load_preset(UTF8_FULL);
            if self.formatting.color.should_use_color() {
                table.enforce_styling();
            }
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(
            header
                .into_iter()
                .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
        table
    }

    fn write_unrecognized_note(&mut self, names: &[String]) -> anyhow::Result<()> {
        if let Some(note) = unrecognized_note(names) {
            writeln!(self.writer, "{}", self.formatting.warning(&format!("Note: {note}")))?;
        }
        Ok(())
    }

    fn section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatting.header(title))?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let org = &report.inputs.organization;
        writeln!(
            self.writer,
            "{}",
            self.formatting.header("NAC Total Cost of Ownership")
        )?;
        writeln!(
            self.writer,
            "{}",
            self.formatting.dim(&format!(
                "{} devices, {} locations, {} years, baseline {}",
                org.device_count(),
                org.locations(),
                org.years_to_project(),
                report.baseline
            ))
        )?;

        self.section("Cost summary")?;
        let cost_table = self.cost_table(report);
        writeln!(self.writer, "{cost_table}")?;

        if let Some(best) = report.lowest_tco() {
            writeln!(
                self.writer,
                "{}",
                self.formatting.highlight(&format!(
                    "Lowest TCO: {} at {}",
                    best.vendor,
                    format_currency(best.cost.total_tco())
                ))
            )?;
        }

        self.section("Security posture")?;
        let risk_table = self.risk_table(report);
        writeln!(self.writer, "{risk_table}")?;

        self.section("Feature scores")?;
        let feature_table = self.feature_table(report);
        writeln!(self.writer, "{feature_table}")?;

        for result in report.results.iter().filter(|result| result.approximated) {
            writeln!(
                self.writer,
                "{}",
                self.formatting.warning(&format!(
                    "Note: {} is priced with the generic hybrid model",
                    result.vendor
                ))
            )?;
        }
        self.write_unrecognized_note(&report.unrecognized_vendors)
    }

    fn write_sensitivity(&mut self, report: &SensitivityReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatting.header(&format!(
                "{} by {}",
                report.metric.label(),
                report.variable.label()
            ))
        )?;
        writeln!(
            self.writer,
            "{}",
            self.formatting.dim(&format!("Baseline {}", report.baseline))
        )?;

        let mut header = vec![report.variable.label().to_string()];
        header.extend(report.series.iter().map(|series| series.vendor.to_string()));
        let mut table = self.table(header);

        for (i, point) in report.points.iter().enumerate() {
            let mut row = vec![Cell::new(point)];
            row.extend(
                report
                    .series
                    .iter()
                    .map(|series| Cell::new(format_metric(report.metric, series.values[i]))),
            );
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;
        self.write_unrecognized_note(&report.unrecognized_vendors)
    }
}

impl<W: Write> TerminalWriter<W> {
    fn cost_table(&self, report: &ComparisonReport) -> Table {
        let mut table = self.table(
            [
                "Vendor",
                "Initial",
                "Annual",
                "TCO",
                "Per device/mo",
                "Savings",
                "ROI",
                "Payback",
            ]
            .map(String::from)
            .to_vec(),
        );

        let lowest = report.lowest_tco().map(|best| best.vendor);
        for result in &report.results {
            let vendor_cell = if Some(result.vendor) == lowest {
                Cell::new(result.vendor).fg(Color::Green)
            } else {
                Cell::new(result.vendor)
            };
            table.add_row(vec![
                vendor_cell,
                Cell::new(format_currency(result.cost.initial_total())),
                Cell::new(format_currency(result.cost.annual_run_rate())),
                Cell::new(format_currency(result.cost.total_tco())),
                Cell::new(format_unit_price(result.per_device_per_month)),
                savings_cell(result),
                Cell::new(format_optional_percent(result.roi.roi_percent)),
                payback_cell(result.roi.payback_period),
            ]);
        }
        table
    }

    fn risk_table(&self, report: &ComparisonReport) -> Table {
        let mut table = self.table(
            [
                "Vendor",
                "Posture",
                "Breach probability",
                "Coverage",
                "MTTR (min)",
                "Insurance impact",
            ]
            .map(String::from)
            .to_vec(),
        );

        for result in &report.results {
            let risk = &result.risk;
            table.add_row(vec![
                Cell::new(result.vendor),
                Cell::new(risk.security_posture),
                breach_cell(risk.breach_probability),
                Cell::new(format!("{}%", risk.compliance_coverage)),
                Cell::new(risk.mean_time_to_respond_minutes),
                Cell::new(format!("{:.1}", risk.insurance_impact)),
            ]);
        }
        table
    }

    fn feature_table(&self, report: &ComparisonReport) -> Table {
        let mut header = vec!["Feature".to_string()];
        header.extend(report.results.iter().map(|result| result.vendor.to_string()));
        let mut table = self.table(header);

        let Some(first) = report.results.first() else {
            return table;
        };
        for (i, (feature, _)) in first.features.iter().enumerate() {
            let mut row = vec![Cell::new(feature)];
            row.extend(
                report
                    .results
                    .iter()
                    .filter_map(|result| result.features.iter().nth(i))
                    .map(|(_, score)| Cell::new(score)),
            );
            table.add_row(row);
        }

        let mut averages = vec![Cell::new("Average").add_attribute(Attribute::Bold)];
        averages.extend(
            report
                .results
                .iter()
                .map(|result| Cell::new(format!("{:.1}", result.features.average()))),
        );
        table.add_row(averages);
        table
    }
}

fn savings_cell(result: &VendorComparison) -> Cell {
    let savings = result.roi.total_savings;
    let cell = Cell::new(format_currency(savings));
    if savings > 0.0 {
        cell.fg(Color::Green)
    } else if savings < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn payback_cell(payback: PaybackPeriod) -> Cell {
    match payback {
        PaybackPeriod::Months(months) => Cell::new(format!("{months:.1} mo")),
        PaybackPeriod::NotApplicable => Cell::new("N/A").fg(Color::Grey),
    }
}

fn breach_cell(probability: BreachProbability) -> Cell {
    let color = match probability {
        BreachProbability::VeryLow | BreachProbability::Low => Color::Green,
        BreachProbability::LowMedium | BreachProbability::Medium => Color::Yellow,
        BreachProbability::MediumHigh | BreachProbability::High | BreachProbability::VeryHigh => {
            Color::Red
        }
    };
    Cell::new(probability).fg(color)
}
