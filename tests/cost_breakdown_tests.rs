use nac_tco::{compute_cost_breakdown, OrganizationInputs, OrganizationParams, VendorIdentity};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_portnox_subscription_for_a_mid_sized_organization() {
    let inputs = OrganizationParams {
        device_count: 500,
        locations: 2,
        years_to_project: 3,
        portnox_base_price: 3.0,
        portnox_discount: 15.0,
        fte_cost: 100_000.0,
        fte_allocation: 25.0,
        maintenance_percentage: 18.0,
        downtime_cost: 5_000.0,
        ..Default::default()
    }
    .validate()
    .unwrap();

    let breakdown = compute_cost_breakdown(VendorIdentity::PortnoxCloud, &inputs);

    assert_close(breakdown.recurring().subscription, 3.0 * 0.85 * 12.0 * 500.0);
    assert_close(breakdown.total_tco(), 140_900.0);
    assert_eq!(breakdown.years(), 3);
}

#[test]
fn test_cisco_needs_a_redundant_pair_at_one_site() {
    let inputs = OrganizationParams {
        device_count: 5_000,
        locations: 1,
        ..Default::default()
    }
    .validate()
    .unwrap();

    let breakdown = compute_cost_breakdown(VendorIdentity::CiscoIse, &inputs);

    assert_close(breakdown.initial().hardware, 70_000.0);
}

#[test]
fn test_default_inputs_rank_cloud_below_on_prem() {
    let inputs = OrganizationInputs::default();
    let portnox = compute_cost_breakdown(VendorIdentity::PortnoxCloud, &inputs);
    let cisco = compute_cost_breakdown(VendorIdentity::CiscoIse, &inputs);
    let no_nac = compute_cost_breakdown(VendorIdentity::NoNac, &inputs);

    assert_close(cisco.total_tco(), 711_250.0);
    assert_close(no_nac.total_tco(), 352_500.0);
    assert!(portnox.total_tco() < no_nac.total_tco());
    assert!(no_nac.total_tco() < cisco.total_tco());
}

#[test]
fn test_yearly_schedule_accumulates_to_tco() {
    let inputs = OrganizationInputs::default();
    let breakdown = compute_cost_breakdown(VendorIdentity::ArubaClearPass, &inputs);
    let schedule = breakdown.yearly_schedule();

    assert_eq!(
        schedule.iter().map(|row| row.year).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert_close(schedule[0].amount, breakdown.initial_total());
    assert_close(schedule[3].cumulative, breakdown.total_tco());
}

#[test]
fn test_per_device_cost_is_monthly() {
    let inputs = OrganizationInputs::default();
    let breakdown = compute_cost_breakdown(VendorIdentity::PortnoxCloud, &inputs);

    assert_close(
        breakdown.per_device_per_month(inputs.device_count()),
        140_900.0 / (500.0 * 36.0),
    );
}
