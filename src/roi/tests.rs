use super::*;
use crate::cost::compute_cost_breakdown;

fn roi_against(vendor: VendorIdentity, baseline: VendorIdentity) -> RoiResult {
    let inputs = OrganizationInputs::default();
    let vendor_bd = compute_cost_breakdown(vendor, &inputs);
    let baseline_bd = compute_cost_breakdown(baseline, &inputs);
    compute_roi(vendor, baseline, &inputs, &vendor_bd, &baseline_bd)
}

#[test]
fn test_self_comparison_is_zero() {
    for vendor in VendorIdentity::ALL {
        assert_eq!(roi_against(vendor, vendor), RoiResult::zero());
    }
}

#[test]
fn test_baseline_prefers_no_nac() {
    assert_eq!(
        select_baseline(&[VendorIdentity::PortnoxCloud, VendorIdentity::NoNac]),
        VendorIdentity::NoNac
    );
    assert_eq!(
        select_baseline(&[VendorIdentity::PortnoxCloud, VendorIdentity::ArubaClearPass]),
        VendorIdentity::CiscoIse
    );
    assert_eq!(select_baseline(&[]), VendorIdentity::CiscoIse);
}

#[test]
fn test_portnox_pays_back_against_cisco() {
    let inputs = OrganizationInputs::default();
    let portnox = compute_cost_breakdown(VendorIdentity::PortnoxCloud, &inputs);
    let cisco = compute_cost_breakdown(VendorIdentity::CiscoIse, &inputs);

    let roi = compute_roi(
        VendorIdentity::PortnoxCloud,
        VendorIdentity::CiscoIse,
        &inputs,
        &portnox,
        &cisco,
    );

    let expected_savings = cisco.annual_run_rate() - portnox.annual_run_rate();
    assert!(expected_savings > 0.0);
    assert_eq!(roi.annual_savings, expected_savings);
    assert_eq!(
        roi.payback_period,
        PaybackPeriod::Months(portnox.initial_total() / (expected_savings / 12.0))
    );
    assert!(roi.roi_percent.unwrap() > 0.0);
    assert!(roi.npv > 0.0);
    assert_eq!(roi.total_savings, cisco.total_tco() - portnox.total_tco());
}

#[test]
fn test_no_savings_has_no_payback() {
    assert_eq!(payback_period(10_000.0, 0.0), PaybackPeriod::NotApplicable);
    assert_eq!(payback_period(10_000.0, -500.0), PaybackPeriod::NotApplicable);
    assert_eq!(payback_period(0.0, 1_200.0), PaybackPeriod::Months(0.0));
    assert_eq!(payback_period(12_000.0, 12_000.0), PaybackPeriod::Months(12.0));
}

#[test]
fn test_more_expensive_vendor_never_pays_back() {
    // Cisco costs more to run than Portnox, so Portnox as baseline gives negative savings.
    let roi = roi_against(VendorIdentity::CiscoIse, VendorIdentity::PortnoxCloud);
    assert!(roi.annual_savings < 0.0);
    assert_eq!(roi.payback_period, PaybackPeriod::NotApplicable);
    assert!(!roi.pays_back());
}

#[test]
fn test_no_initial_investment_has_no_ratio() {
    let roi = roi_against(VendorIdentity::NoNac, VendorIdentity::CiscoIse);
    assert_eq!(roi.roi_percent, None);
    assert_eq!(roi.simplified_return_ratio, None);
}

#[test]
fn test_simplified_return_ratio_ignores_time_value() {
    let roi = roi_against(VendorIdentity::PortnoxCloud, VendorIdentity::NoNac);
    let inputs = OrganizationInputs::default();
    let initial = compute_cost_breakdown(VendorIdentity::PortnoxCloud, &inputs).initial_total();
    assert_eq!(
        roi.simplified_return_ratio,
        Some(roi.annual_savings / initial * 100.0)
    );
}

#[test]
fn test_npv_discounts_each_year() {
    let npv = net_present_value(1_000.0, 1_100.0, 1);
    assert!((npv - 0.0).abs() < 1e-9);

    let two_years = net_present_value(0.0, 121.0, 2);
    assert!((two_years - (110.0 + 100.0)).abs() < 1e-9);
}

#[test]
fn test_value_drivers() {
    let roi = roi_against(VendorIdentity::PortnoxCloud, VendorIdentity::CiscoIse);
    let drivers = roi.value_drivers;

    assert_eq!(drivers.productivity_gains, 500.0 * 15.0);
    assert_eq!(drivers.compliance_automation, 500.0 * 20.0);
    assert!((drivers.insurance_premium_reduction - 3_000.0).abs() < 1e-9);
    // Cisco operations 37,500 minus Portnox 12,500, for three years
    assert!((drivers.it_staff_efficiency - 75_000.0).abs() < 1e-9);
    assert_eq!(drivers.direct_cost_reduction, roi.total_savings);
    assert_eq!(drivers.iter().count(), 6);
}

#[test]
fn test_breach_risk_reduction_scales_baseline_exposure() {
    let inputs = OrganizationInputs::default();
    let no_nac = compute_cost_breakdown(VendorIdentity::NoNac, &inputs);
    let cheap = roi_against(VendorIdentity::PortnoxCloud, VendorIdentity::NoNac);
    let dear = roi_against(VendorIdentity::CiscoIse, VendorIdentity::NoNac);

    // 12,500 a year of breach exposure, 35% avoided, for three years
    assert!((no_nac.indirect().security - 12_500.0).abs() < 1e-9);
    assert!((cheap.value_drivers.breach_risk_reduction - 13_125.0).abs() < 1e-9);
    assert_eq!(
        cheap.value_drivers.breach_risk_reduction,
        dear.value_drivers.breach_risk_reduction
    );
}

#[test]
fn test_staff_efficiency_never_negative() {
    let roi = roi_against(VendorIdentity::CiscoIse, VendorIdentity::NoNac);
    assert_eq!(roi.value_drivers.it_staff_efficiency, 0.0);
}

#[test]
fn test_payback_display() {
    assert_eq!(PaybackPeriod::Months(7.26).to_string(), "7.3 months");
    assert_eq!(PaybackPeriod::NotApplicable.to_string(), "N/A");
}
