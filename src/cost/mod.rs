//! Cost breakdown calculator.
//!
//! Every vendor is priced by one of five cost models (see [`CostModel`]).
//! The branch decides which line items exist; the numbers come from the
//! vendor's [`CostProfile`](profiles::CostProfile).

pub mod models;
pub mod profiles;


use crate::core::{CostModel, OrganizationInputs, VendorIdentity};

pub use models::{CostBreakdown, IndirectCosts, InitialCosts, RecurringCosts, YearCost};
use profiles::{CostProfile, BASELINE_OUTAGE_HOURS, DEVICES_PER_SERVER};

/// Price `vendor` for the given organization.
pub fn compute_cost_breakdown(vendor: VendorIdentity, inputs: &OrganizationInputs) -> CostBreakdown {
    let profile = profiles::profile_for(vendor);
    let model = vendor.cost_model();

    let (initial, recurring) = match model {
        CostModel::CloudNative => cloud_native(profile, inputs),
        CostModel::EnterpriseOnPrem => enterprise_on_prem(profile, inputs),
        CostModel::WindowsServer => windows_server(profile, inputs),
        CostModel::NoNac => (InitialCosts::default(), RecurringCosts::default()),
        CostModel::GenericHybrid => generic_hybrid(profile, inputs),
    };
    let indirect = indirect_costs(profile, inputs);

    if vendor.is_cost_approximated() {
        tracing::debug!(vendor = %vendor, "Pricing with the generic hybrid model");
    }

    let breakdown = CostBreakdown::new(
        vendor,
        inputs.years_to_project(),
        initial,
        recurring,
        indirect,
    );
    tracing::debug!(
        vendor = %vendor,
        ?model,
        tco = breakdown.total_tco(),
        "Computed cost breakdown"
    );
    breakdown
}

fn devices(inputs: &OrganizationInputs) -> f64 {
    f64::from(inputs.device_count())
}

fn locations(inputs: &OrganizationInputs) -> f64 {
    f64::from(inputs.locations())
}

fn implementation(profile: &CostProfile, inputs: &OrganizationInputs) -> f64 {
    profile.implementation_base + profile.implementation_per_location * locations(inputs)
}

fn operations(profile: &CostProfile, inputs: &OrganizationInputs) -> f64 {
    inputs.standard_staff_cost() * profile.staff_multiplier
}

/// Maintenance and support, both charged as a share of the capital outlay.
fn upkeep(profile: &CostProfile, inputs: &OrganizationInputs, capital: f64) -> (f64, f64) {
    (
        capital * inputs.maintenance_percentage() / 100.0,
        capital * profile.support_rate,
    )
}

/// Monthly per-device subscription after add-ons and the volume discount.
fn cloud_subscription(inputs: &OrganizationInputs) -> f64 {
    let monthly_price = inputs.portnox_base_price() + inputs.portnox_addons().monthly_price();
    monthly_price * (1.0 - inputs.portnox_discount() / 100.0) * 12.0 * devices(inputs)
}

fn cloud_native(profile: &CostProfile, inputs: &OrganizationInputs) -> (InitialCosts, RecurringCosts) {
    let initial = InitialCosts {
        hardware: 0.0,
        software: 0.0,
        implementation: implementation(profile, inputs),
        training: profile.training,
    };
    let recurring = RecurringCosts {
        subscription: cloud_subscription(inputs),
        maintenance: 0.0,
        support: 0.0,
        operations: operations(profile, inputs),
    };
    (initial, recurring)
}

/// Appliance nodes needed at each location, including one for redundancy.
pub fn servers_per_location(device_count: u32) -> u32 {
    device_count.div_ceil(DEVICES_PER_SERVER) + 1
}

fn enterprise_on_prem(
    profile: &CostProfile,
    inputs: &OrganizationInputs,
) -> (InitialCosts, RecurringCosts) {
    let servers = f64::from(servers_per_location(inputs.device_count())) * locations(inputs);
    let hardware = servers * profile.server_price;
    let software = devices(inputs) * profile.license_per_device;
    let (maintenance, support) = upkeep(profile, inputs, hardware + software);

    let initial = InitialCosts {
        hardware,
        software,
        implementation: implementation(profile, inputs),
        training: profile.training,
    };
    let recurring = RecurringCosts {
        subscription: 0.0,
        maintenance,
        support,
        operations: operations(profile, inputs),
    };
    (initial, recurring)
}

fn windows_server(profile: &CostProfile, inputs: &OrganizationInputs) -> (InitialCosts, RecurringCosts) {
    let hardware = profile.hardware_per_location * locations(inputs);
    let software = profile.software_per_location * locations(inputs);
    let (maintenance, support) = upkeep(profile, inputs, hardware + software);

    let initial = InitialCosts {
        hardware,
        software,
        implementation: implementation(profile, inputs),
        training: profile.training,
    };
    let recurring = RecurringCosts {
        subscription: 0.0,
        maintenance,
        support,
        operations: operations(profile, inputs),
    };
    (initial, recurring)
}

fn generic_hybrid(profile: &CostProfile, inputs: &OrganizationInputs) -> (InitialCosts, RecurringCosts) {
    let hardware = profile.hardware_per_location * locations(inputs);
    let software = profile.license_per_device * devices(inputs);
    let (maintenance, support) = upkeep(profile, inputs, hardware + software);

    let initial = InitialCosts {
        hardware,
        software,
        implementation: implementation(profile, inputs),
        training: profile.training,
    };
    let recurring = RecurringCosts {
        subscription: profile.subscription_per_device * devices(inputs),
        maintenance,
        support,
        operations: operations(profile, inputs),
    };
    (initial, recurring)
}

fn indirect_costs(profile: &CostProfile, inputs: &OrganizationInputs) -> IndirectCosts {
    let baseline_downtime = inputs.downtime_cost() * BASELINE_OUTAGE_HOURS;
    IndirectCosts {
        downtime: baseline_downtime * profile.downtime_multiplier,
        security: profile.security_base + profile.security_per_device * devices(inputs),
        compliance: profile.compliance_base + profile.compliance_per_device * devices(inputs),
    }
}
