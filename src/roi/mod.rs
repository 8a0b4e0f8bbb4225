//! Return on investment of one vendor against a baseline vendor.

pub mod models;

#[cfg(test)]
mod tests;

use crate::core::{OrganizationInputs, VendorIdentity};
use crate::cost::CostBreakdown;

pub use models::{PaybackPeriod, RoiResult, ValueDrivers};

/// Annual rate used to discount future savings.
pub const NPV_DISCOUNT_RATE: f64 = 0.10;

const PRODUCTIVITY_PER_DEVICE: f64 = 15.0;
const COMPLIANCE_AUTOMATION_PER_DEVICE: f64 = 20.0;
/// Reference annual premium the insurance reduction percentage applies to.
const REFERENCE_ANNUAL_PREMIUM: f64 = 10_000.0;

/// Pick the vendor every other vendor is measured against.
///
/// Doing nothing is the natural baseline when it is on the list. Otherwise
/// the incumbent on-premise product stands in for it.
pub fn select_baseline(vendors: &[VendorIdentity]) -> VendorIdentity {
    if vendors.contains(&VendorIdentity::NoNac) {
        VendorIdentity::NoNac
    } else {
        VendorIdentity::CiscoIse
    }
}

pub fn compute_roi(
    vendor: VendorIdentity,
    baseline: VendorIdentity,
    inputs: &OrganizationInputs,
    vendor_breakdown: &CostBreakdown,
    baseline_breakdown: &CostBreakdown,
) -> RoiResult {
    if vendor == baseline {
        return RoiResult::zero();
    }

    let years = f64::from(inputs.years_to_project());
    let initial = vendor_breakdown.initial_total();
    let annual_savings = baseline_breakdown.annual_run_rate() - vendor_breakdown.annual_run_rate();
    let total_savings = baseline_breakdown.total_tco() - vendor_breakdown.total_tco();

    let savings_percent = if baseline_breakdown.total_tco() > 0.0 {
        total_savings / baseline_breakdown.total_tco() * 100.0
    } else {
        0.0
    };

    let roi_percent = (initial > 0.0).then(|| (annual_savings * years - initial) / initial * 100.0);
    let simplified_return_ratio = (initial > 0.0).then(|| annual_savings / initial * 100.0);

    let result = RoiResult {
        annual_savings,
        total_savings,
        savings_percent,
        payback_period: payback_period(initial, annual_savings),
        roi_percent,
        npv: net_present_value(initial, annual_savings, inputs.years_to_project()),
        simplified_return_ratio,
        value_drivers: value_drivers(inputs, vendor_breakdown, baseline_breakdown, total_savings),
    };

    tracing::debug!(
        vendor = %vendor,
        baseline = %baseline,
        annual_savings,
        payback = %result.payback_period,
        "Computed ROI"
    );
    result
}

/// Months of savings needed to recover `initial`.
pub fn payback_period(initial: f64, annual_savings: f64) -> PaybackPeriod {
    if annual_savings <= 0.0 {
        return PaybackPeriod::NotApplicable;
    }
    PaybackPeriod::Months(initial / (annual_savings / 12.0))
}

/// Savings discounted year by year, less the initial investment.
pub fn net_present_value(initial: f64, annual_savings: f64, years: u32) -> f64 {
    let discounted: f64 = (1..=years)
        .map(|year| annual_savings / (1.0 + NPV_DISCOUNT_RATE).powi(year as i32))
        .sum();
    discounted - initial
}

fn value_drivers(
    inputs: &OrganizationInputs,
    vendor_breakdown: &CostBreakdown,
    baseline_breakdown: &CostBreakdown,
    total_savings: f64,
) -> ValueDrivers {
    let devices = f64::from(inputs.device_count());
    let years = f64::from(inputs.years_to_project());
    let staff_delta =
        baseline_breakdown.recurring().operations - vendor_breakdown.recurring().operations;

    ValueDrivers {
        direct_cost_reduction: total_savings,
        it_staff_efficiency: staff_delta.max(0.0) * years,
        breach_risk_reduction: baseline_breakdown.indirect().security
            * years
            * inputs.risk_reduction()
            / 100.0,
        compliance_automation: devices * COMPLIANCE_AUTOMATION_PER_DEVICE,
        productivity_gains: devices * PRODUCTIVITY_PER_DEVICE,
        insurance_premium_reduction: REFERENCE_ANNUAL_PREMIUM
            * years
            * inputs.insurance_reduction()
            / 100.0,
    }
}
