//! One comparison run across a set of vendors.
//!
//! The baseline vendor is chosen and priced once per run, then every vendor
//! is priced, measured against it, and scored for risk and features.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{
    ComplianceSelection, CyberInsurance, NetworkRequirements, OrganizationInputs, RiskProfile,
    VendorIdentity,
};
use crate::cost::{compute_cost_breakdown, CostBreakdown};
use crate::errors::{Error, Result};
use crate::features::{compute_feature_scores, FeatureScores};
use crate::risk::{compute_risk_metrics, RiskMetrics};
use crate::roi::{compute_roi, select_baseline, RoiResult};

/// Everything a comparison run needs besides the vendor list.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComparisonInputs {
    pub organization: OrganizationInputs,
    pub requirements: NetworkRequirements,
    pub compliance: ComplianceSelection,
    pub risk_profile: RiskProfile,
    pub cyber_insurance: Option<CyberInsurance>,
}

/// All results for one vendor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VendorComparison {
    pub vendor: VendorIdentity,
    pub cost: CostBreakdown,
    pub roi: RoiResult,
    pub risk: RiskMetrics,
    pub features: FeatureScores,
    pub per_device_per_month: f64,
    /// Costs come from the generic hybrid model, not a vendor-specific one.
    pub approximated: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub baseline: VendorIdentity,
    pub inputs: ComparisonInputs,
    /// Sorted by ascending total cost of ownership.
    pub results: Vec<VendorComparison>,
    /// Requested names that matched no known vendor. They share the single
    /// `OtherGeneric` result.
    pub unrecognized_vendors: Vec<String>,
}

impl ComparisonReport {
    pub fn get(&self, vendor: VendorIdentity) -> Option<&VendorComparison> {
        self.results.iter().find(|result| result.vendor == vendor)
    }

    /// Vendor with the lowest total cost of ownership.
    pub fn lowest_tco(&self) -> Option<&VendorComparison> {
        self.results.first()
    }

    pub fn has_approximations(&self) -> bool {
        self.results.iter().any(|result| result.approximated)
    }

    pub fn with_unrecognized_vendors(mut self, names: Vec<String>) -> Self {
        self.unrecognized_vendors = names;
        self
    }
}

pub fn compare_vendors(
    vendors: &[VendorIdentity],
    inputs: &ComparisonInputs,
) -> Result<ComparisonReport> {
    let vendors = dedup_preserving_order(vendors);
    if vendors.is_empty() {
        return Err(Error::EmptyComparison);
    }

    let organization = &inputs.organization;
    let baseline = select_baseline(&vendors);
    let baseline_breakdown = compute_cost_breakdown(baseline, organization);

    tracing::info!(
        vendors = vendors.len(),
        baseline = %baseline,
        "Comparing vendors"
    );

    let mut results: Vec<VendorComparison> = vendors
        .iter()
        .map(|&vendor| compare_one(vendor, baseline, &baseline_breakdown, inputs))
        .collect();
    results.sort_by(|a, b| a.cost.total_tco().total_cmp(&b.cost.total_tco()));

    Ok(ComparisonReport {
        generated_at: Utc::now(),
        baseline,
        inputs: inputs.clone(),
        results,
        unrecognized_vendors: Vec::new(),
    })
}

fn compare_one(
    vendor: VendorIdentity,
    baseline: VendorIdentity,
    baseline_breakdown: &CostBreakdown,
    inputs: &ComparisonInputs,
) -> VendorComparison {
    let organization = &inputs.organization;
    let cost = compute_cost_breakdown(vendor, organization);
    let roi = compute_roi(vendor, baseline, organization, &cost, baseline_breakdown);
    let risk = compute_risk_metrics(
        vendor,
        &inputs.compliance,
        inputs.risk_profile,
        inputs.cyber_insurance,
    );
    let features = compute_feature_scores(vendor, &inputs.requirements);

    VendorComparison {
        vendor,
        per_device_per_month: cost.per_device_per_month(organization.device_count()),
        approximated: vendor.is_cost_approximated(),
        cost,
        roi,
        risk,
        features,
    }
}

pub(crate) fn dedup_preserving_order(vendors: &[VendorIdentity]) -> Vec<VendorIdentity> {
    let mut unique = Vec::with_capacity(vendors.len());
    for vendor in vendors {
        if !unique.contains(vendor) {
            unique.push(*vendor);
        }
    }
    unique
}
