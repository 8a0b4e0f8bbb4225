//! Vendor pricing constants.
//!
//! Figures come from vendor sales collateral and list prices, not from a
//! live pricing feed. They live in one table so they can be audited and
//! tested apart from the cost-model branching.

use crate::core::VendorIdentity;

/// Outage hours per year used as the downtime baseline.
pub const BASELINE_OUTAGE_HOURS: f64 = 4.0;

/// Devices one appliance node handles before another node is needed.
pub const DEVICES_PER_SERVER: u32 = 5_000;

/// Pricing constants for one vendor. Fields a cost model does not use are
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostProfile {
    /// Price of one appliance node
    pub server_price: f64,
    /// Perpetual licence per device
    pub license_per_device: f64,
    pub hardware_per_location: f64,
    pub software_per_location: f64,
    /// Annual subscription per device (hybrid products only)
    pub subscription_per_device: f64,
    pub implementation_base: f64,
    pub implementation_per_location: f64,
    pub training: f64,
    /// Annual support as a fraction of hardware plus software
    pub support_rate: f64,
    /// Multiple of the standard staff cost needed to run the product
    pub staff_multiplier: f64,
    /// Multiple of the baseline outage cost
    pub downtime_multiplier: f64,
    pub security_base: f64,
    pub security_per_device: f64,
    pub compliance_base: f64,
    pub compliance_per_device: f64,
}

const ZERO: CostProfile = CostProfile {
    server_price: 0.0,
    license_per_device: 0.0,
    hardware_per_location: 0.0,
    software_per_location: 0.0,
    subscription_per_device: 0.0,
    implementation_base: 0.0,
    implementation_per_location: 0.0,
    training: 0.0,
    support_rate: 0.0,
    staff_multiplier: 0.0,
    downtime_multiplier: 0.0,
    security_base: 0.0,
    security_per_device: 0.0,
    compliance_base: 0.0,
    compliance_per_device: 0.0,
};

pub const PORTNOX: CostProfile = CostProfile {
    implementation_base: 10_000.0,
    implementation_per_location: 2_500.0,
    training: 2_000.0,
    staff_multiplier: 0.5,
    downtime_multiplier: 0.5,
    security_base: 2_000.0,
    compliance_base: 1_500.0,
    ..ZERO
};

pub const CISCO_ISE: CostProfile = CostProfile {
    server_price: 35_000.0,
    license_per_device: 65.0,
    implementation_base: 50_000.0,
    implementation_per_location: 10_000.0,
    training: 15_000.0,
    support_rate: 0.12,
    staff_multiplier: 1.5,
    downtime_multiplier: 2.5,
    security_per_device: 4.0,
    compliance_base: 10_000.0,
    ..ZERO
};

pub const ARUBA_CLEARPASS: CostProfile = CostProfile {
    server_price: 30_000.0,
    license_per_device: 55.0,
    implementation_base: 40_000.0,
    implementation_per_location: 8_000.0,
    training: 12_000.0,
    support_rate: 0.12,
    staff_multiplier: 1.5,
    downtime_multiplier: 2.5,
    security_per_device: 4.0,
    compliance_base: 10_000.0,
    ..ZERO
};

pub const FORESCOUT: CostProfile = CostProfile {
    server_price: 40_000.0,
    license_per_device: 70.0,
    implementation_base: 45_000.0,
    implementation_per_location: 9_000.0,
    training: 12_000.0,
    support_rate: 0.15,
    staff_multiplier: 1.5,
    downtime_multiplier: 2.5,
    security_per_device: 4.0,
    compliance_base: 9_000.0,
    ..ZERO
};

pub const MICROSOFT_NPS: CostProfile = CostProfile {
    hardware_per_location: 5_000.0,
    software_per_location: 3_000.0,
    implementation_base: 15_000.0,
    implementation_per_location: 2_500.0,
    training: 5_000.0,
    staff_multiplier: 1.2,
    downtime_multiplier: 1.5,
    security_per_device: 10.0,
    compliance_base: 20_000.0,
    ..ZERO
};

pub const NO_NAC: CostProfile = CostProfile {
    downtime_multiplier: 5.0,
    security_per_device: 25.0,
    compliance_per_device: 10.0,
    ..ZERO
};

/// Flat hybrid approximation for products without a dedicated model.
pub const GENERIC_HYBRID: CostProfile = CostProfile {
    license_per_device: 40.0,
    hardware_per_location: 20_000.0,
    subscription_per_device: 12.0,
    implementation_base: 30_000.0,
    implementation_per_location: 5_000.0,
    training: 8_000.0,
    support_rate: 0.10,
    staff_multiplier: 1.0,
    downtime_multiplier: 1.5,
    security_per_device: 5.0,
    compliance_base: 7_500.0,
    ..ZERO
};

pub fn profile_for(vendor: VendorIdentity) -> &'static CostProfile {
    match vendor {
        VendorIdentity::PortnoxCloud => &PORTNOX,
        VendorIdentity::CiscoIse => &CISCO_ISE,
        VendorIdentity::ArubaClearPass => &ARUBA_CLEARPASS,
        VendorIdentity::Forescout => &FORESCOUT,
        VendorIdentity::MicrosoftNps => &MICROSOFT_NPS,
        VendorIdentity::NoNac => &NO_NAC,
        VendorIdentity::FortiNac
        | VendorIdentity::JuniperMist
        | VendorIdentity::SecureW2
        | VendorIdentity::OtherGeneric => &GENERIC_HYBRID,
    }
}
