use anyhow::{Context, Result};

use super::{emit, load_scenario};
use crate::cli::{Metric, OutputArgs, ScenarioArgs, Variable};
use crate::sensitivity::{analyze, SweepRange};

pub struct SensitivityArgs {
    pub variable: Variable,
    pub metric: Metric,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub step: Option<f64>,
}

impl SensitivityArgs {
    /// An explicit range when all three bounds were given.
    fn range(&self) -> Option<SweepRange> {
        match (self.start, self.end, self.step) {
            (Some(start), Some(end), Some(step)) => Some(SweepRange { start, end, step }),
            _ => None,
        }
    }
}

pub fn run_sensitivity(
    args: &SensitivityArgs,
    scenario: &ScenarioArgs,
    output: &OutputArgs,
    plain: bool,
) -> Result<()> {
    let loaded = load_scenario(scenario)?;
    let report = analyze(
        args.variable.into(),
        args.metric.into(),
        &loaded.vendors,
        &loaded.inputs,
        args.range(),
    )
    .context("Sensitivity analysis failed")?
    .with_unrecognized_vendors(loaded.unrecognized.clone());

    emit(output, &loaded.config, plain, |writer| {
        writer.write_sensitivity(&report)
    })
}
