//! Value types shared by every calculator.

pub mod inputs;
pub mod vendor;

pub use inputs::{
    ComplianceSelection, CyberInsurance, NetworkRequirements, OrganizationInputs,
    OrganizationParams, PortnoxAddons, RiskProfile, MAX_AMOUNT, MAX_DEVICE_COUNT, MAX_LOCATIONS,
    MAX_PROJECTION_YEARS,
};
pub use vendor::{CostModel, Deployment, VendorIdentity, VendorResolution};
