use anyhow::{Context, Result};

use super::{emit, load_scenario};
use crate::cli::{OutputArgs, ScenarioArgs};
use crate::comparison::compare_vendors;

pub fn compare(scenario: &ScenarioArgs, output: &OutputArgs, plain: bool) -> Result<()> {
    let loaded = load_scenario(scenario)?;
    let report = compare_vendors(&loaded.vendors, &loaded.inputs)
        .context("Failed to compare vendors")?
        .with_unrecognized_vendors(loaded.unrecognized.clone());

    if let Some(lowest) = report.lowest_tco() {
        tracing::debug!(
            vendor = %lowest.vendor,
            tco = lowest.cost.total_tco(),
            "Lowest total cost of ownership"
        );
    }

    emit(output, &loaded.config, plain, |writer| {
        writer.write_comparison(&report)
    })
}
