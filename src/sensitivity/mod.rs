//! What-if sweeps over a single organization input.
//!
//! Each point of the sweep is a fresh set of inputs that goes through the
//! same validation as user-supplied values, so a sweep cannot hand the
//! calculators a value they would otherwise reject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::comparison::{dedup_preserving_order, ComparisonInputs};
use crate::core::{OrganizationParams, VendorIdentity};
use crate::cost::compute_cost_breakdown;
use crate::errors::{Error, Result};
use crate::roi::{compute_roi, select_baseline};

/// Hard cap on points per sweep.
const MAX_POINTS: usize = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityVariable {
    DeviceCount,
    PortnoxBasePrice,
    PortnoxDiscount,
    FteCost,
    FteAllocation,
    MaintenancePercentage,
    RiskReduction,
}

impl SensitivityVariable {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DeviceCount => "Device count",
            Self::PortnoxBasePrice => "Portnox base price",
            Self::PortnoxDiscount => "Portnox discount (%)",
            Self::FteCost => "FTE cost",
            Self::FteAllocation => "FTE allocation (%)",
            Self::MaintenancePercentage => "Maintenance (%)",
            Self::RiskReduction => "Risk reduction (%)",
        }
    }

    pub fn default_range(&self) -> SweepRange {
        let (start, end, step) = match self {
            Self::DeviceCount => (300.0, 5_000.0, 500.0),
            Self::PortnoxBasePrice => (1.0, 6.0, 0.5),
            Self::PortnoxDiscount => (0.0, 40.0, 5.0),
            Self::FteCost => (60_000.0, 160_000.0, 10_000.0),
            Self::FteAllocation => (5.0, 50.0, 5.0),
            Self::MaintenancePercentage => (10.0, 30.0, 2.0),
            Self::RiskReduction => (10.0, 50.0, 5.0),
        };
        SweepRange { start, end, step }
    }

    fn apply(&self, params: &mut OrganizationParams, value: f64) {
        match self {
            // Negative or fractional counts round to a whole device count;
            // zero is left for validation to reject.
            Self::DeviceCount => params.device_count = value.round().max(0.0) as u32,
            Self::PortnoxBasePrice => params.portnox_base_price = value,
            Self::PortnoxDiscount => params.portnox_discount = value,
            Self::FteCost => params.fte_cost = value,
            Self::FteAllocation => params.fte_allocation = value,
            Self::MaintenancePercentage => params.maintenance_percentage = value,
            Self::RiskReduction => params.risk_reduction = value,
        }
    }
}

impl fmt::Display for SensitivityVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityMetric {
    #[default]
    Tco,
    Savings,
    Roi,
    PaybackMonths,
    /// Sum of the value drivers, the only metric risk reduction moves.
    TotalValue,
}

impl SensitivityMetric {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tco => "Total cost of ownership",
            Self::Savings => "Savings vs baseline",
            Self::Roi => "ROI (%)",
            Self::PaybackMonths => "Payback (months)",
            Self::TotalValue => "Total value delivered",
        }
    }
}

/// Inclusive range of values to sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SweepRange {
    /// Values from `start` up to and including `end`.
    pub fn points(&self) -> Result<Vec<f64>> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(Error::InvalidRange("bounds must be finite".to_string()));
        }
        if self.step <= 0.0 {
            return Err(Error::InvalidRange(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.end < self.start {
            return Err(Error::InvalidRange(format!(
                "end {} is below start {}",
                self.end, self.start
            )));
        }

        // Bounded in f64 before the cast, which would saturate on huge spans.
        let steps = ((self.end - self.start) / self.step + 1e-9).floor();
        if !steps.is_finite() || steps >= MAX_POINTS as f64 {
            return Err(Error::InvalidRange(format!(
                "more than {MAX_POINTS} points from {} to {} by {}",
                self.start, self.end, self.step
            )));
        }
        let count = steps as usize + 1;
        Ok((0..count)
            .map(|i| self.start + self.step * i as f64)
            .collect())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensitivitySeries {
    pub vendor: VendorIdentity,
    /// One entry per swept value. `None` where the metric is undefined, such
    /// as payback for a vendor that saves nothing.
    pub values: Vec<Option<f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensitivityReport {
    pub generated_at: DateTime<Utc>,
    pub variable: SensitivityVariable,
    pub metric: SensitivityMetric,
    pub baseline: VendorIdentity,
    pub range: SweepRange,
    pub points: Vec<f64>,
    pub series: Vec<SensitivitySeries>,
    /// Requested names that matched no known vendor.
    pub unrecognized_vendors: Vec<String>,
}

impl SensitivityReport {
    pub fn with_unrecognized_vendors(mut self, names: Vec<String>) -> Self {
        self.unrecognized_vendors = names;
        self
    }
}

/// Sweep `variable` across `range` (or its default range) and record
/// `metric` for every vendor at every point.
pub fn analyze(
    variable: SensitivityVariable,
    metric: SensitivityMetric,
    vendors: &[VendorIdentity],
    inputs: &ComparisonInputs,
    range: Option<SweepRange>,
) -> Result<SensitivityReport> {
    let unique = dedup_preserving_order(vendors);
    if unique.is_empty() {
        return Err(Error::EmptyComparison);
    }

    let range = range.unwrap_or_else(|| variable.default_range());
    let points = range.points()?;
    let baseline = select_baseline(&unique);

    tracing::info!(
        %variable,
        ?metric,
        points = points.len(),
        vendors = unique.len(),
        "Running sensitivity analysis"
    );

    let mut series: Vec<SensitivitySeries> = unique
        .iter()
        .map(|&vendor| SensitivitySeries {
            vendor,
            values: Vec::with_capacity(points.len()),
        })
        .collect();

    for &value in &points {
        let mut params = inputs.organization.to_params();
        variable.apply(&mut params, value);
        let organization = params.validate()?;
        let baseline_breakdown = compute_cost_breakdown(baseline, &organization);

        for entry in &mut series {
            let breakdown = compute_cost_breakdown(entry.vendor, &organization);
            let roi = compute_roi(
                entry.vendor,
                baseline,
                &organization,
                &breakdown,
                &baseline_breakdown,
            );
            let measured = match metric {
                SensitivityMetric::Tco => Some(breakdown.total_tco()),
                SensitivityMetric::Savings => Some(roi.total_savings),
                SensitivityMetric::Roi => roi.roi_percent,
                SensitivityMetric::PaybackMonths => roi.payback_period.months(),
                SensitivityMetric::TotalValue => Some(roi.value_drivers.total()),
            };
            entry.values.push(measured);
        }
    }

    Ok(SensitivityReport {
        generated_at: Utc::now(),
        variable,
        metric,
        baseline,
        range,
        points,
        series,
        unrecognized_vendors: Vec::new(),
    })
}
