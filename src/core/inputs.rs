//! Calculator inputs.
//!
//! [`OrganizationParams`] is the unvalidated form read from config files and
//! CLI flags. [`OrganizationInputs`] can only be obtained by validating it, so
//! every calculator receives counts above zero and finite, in-range numbers.

use serde::{Deserialize, Serialize};

use crate::errors::{FieldViolation, ValidationError};

/// Longest projection horizon accepted, in years.
pub const MAX_PROJECTION_YEARS: u32 = 10;
pub const MAX_DEVICE_COUNT: u32 = 10_000_000;
pub const MAX_LOCATIONS: u32 = 10_000;
/// Largest accepted money amount. Keeps every cost-model product finite.
pub const MAX_AMOUNT: f64 = 1e9;

/// Optional Portnox modules, each priced per device per month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortnoxAddons {
    pub advanced_threat_protection: bool,
    pub compliance_reporting: bool,
    pub iot_profiling: bool,
    pub analytics: bool,
}

impl PortnoxAddons {
    const ATP_MONTHLY: f64 = 1.5;
    const COMPLIANCE_MONTHLY: f64 = 1.0;
    const IOT_MONTHLY: f64 = 2.0;
    const ANALYTICS_MONTHLY: f64 = 1.5;

    /// Added monthly price per device for the enabled modules.
    pub fn monthly_price(&self) -> f64 {
        [
            (self.advanced_threat_protection, Self::ATP_MONTHLY),
            (self.compliance_reporting, Self::COMPLIANCE_MONTHLY),
            (self.iot_profiling, Self::IOT_MONTHLY),
            (self.analytics, Self::ANALYTICS_MONTHLY),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, price)| price)
        .sum()
    }
}

/// Unvalidated organization parameters.
///
/// Defaults match the values the calculator starts with before a user edits
/// anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationParams {
    pub device_count: u32,
    pub locations: u32,
    pub years_to_project: u32,
    /// Portnox list price per device per month
    pub portnox_base_price: f64,
    /// Volume discount, percent
    pub portnox_discount: f64,
    /// Fully loaded annual cost of one FTE
    pub fte_cost: f64,
    /// Share of one FTE spent on access control, percent
    pub fte_allocation: f64,
    /// Annual maintenance as a percent of hardware plus software
    pub maintenance_percentage: f64,
    /// Cost of one hour of outage
    pub downtime_cost: f64,
    pub risk_reduction: f64,
    pub insurance_reduction: f64,
    pub portnox_addons: PortnoxAddons,
}

impl Default for OrganizationParams {
    fn default() -> Self {
        Self {
            device_count: 500,
            locations: 2,
            years_to_project: 3,
            portnox_base_price: 3.0,
            portnox_discount: 15.0,
            fte_cost: 100_000.0,
            fte_allocation: 25.0,
            maintenance_percentage: 18.0,
            downtime_cost: 5_000.0,
            risk_reduction: 35.0,
            insurance_reduction: 10.0,
            portnox_addons: PortnoxAddons::default(),
        }
    }
}

impl OrganizationParams {
    /// Check every field and collect all violations.
    pub fn validate(self) -> Result<OrganizationInputs, ValidationError> {
        let mut violations = Vec::new();

        require_count(&mut violations, "device_count", self.device_count, MAX_DEVICE_COUNT);
        require_count(&mut violations, "locations", self.locations, MAX_LOCATIONS);
        require_count(
            &mut violations,
            "years_to_project",
            self.years_to_project,
            MAX_PROJECTION_YEARS,
        );

        require_positive_amount(&mut violations, "portnox_base_price", self.portnox_base_price);
        require_positive_amount(&mut violations, "fte_cost", self.fte_cost);
        require_non_negative_amount(&mut violations, "downtime_cost", self.downtime_cost);

        for (field, value) in [
            ("portnox_discount", self.portnox_discount),
            ("fte_allocation", self.fte_allocation),
            ("maintenance_percentage", self.maintenance_percentage),
            ("risk_reduction", self.risk_reduction),
            ("insurance_reduction", self.insurance_reduction),
        ] {
            require_percentage(&mut violations, field, value);
        }

        if !violations.is_empty() {
            return Err(ValidationError::InvalidInput { violations });
        }

        Ok(OrganizationInputs {
            device_count: self.device_count,
            locations: self.locations,
            years_to_project: self.years_to_project,
            portnox_base_price: self.portnox_base_price,
            portnox_discount: self.portnox_discount,
            fte_cost: self.fte_cost,
            fte_allocation: self.fte_allocation,
            maintenance_percentage: self.maintenance_percentage,
            downtime_cost: self.downtime_cost,
            risk_reduction: self.risk_reduction,
            insurance_reduction: self.insurance_reduction,
            portnox_addons: self.portnox_addons,
        })
    }
}

fn require_count(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: u32,
    max: u32,
) {
    if value == 0 {
        violations.push(FieldViolation::new(field, "must be greater than zero"));
    } else if value > max {
        violations.push(FieldViolation::new(
            field,
            format!("must be at most {max}, got {value}"),
        ));
    }
}

fn require_positive_amount(violations: &mut Vec<FieldViolation>, field: &'static str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        violations.push(FieldViolation::new(
            field,
            format!("must be a positive amount, got {value}"),
        ));
    } else if value > MAX_AMOUNT {
        violations.push(too_large(field, value));
    }
}

fn require_non_negative_amount(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: f64,
) {
    if !value.is_finite() || value < 0.0 {
        violations.push(FieldViolation::new(
            field,
            format!("must not be negative, got {value}"),
        ));
    } else if value > MAX_AMOUNT {
        violations.push(too_large(field, value));
    }
}

fn too_large(field: &'static str, value: f64) -> FieldViolation {
    FieldViolation::new(field, format!("must be at most {MAX_AMOUNT:e}, got {value:e}"))
}

fn require_percentage(violations: &mut Vec<FieldViolation>, field: &'static str, value: f64) {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        violations.push(FieldViolation::new(
            field,
            format!("must be between 0 and 100, got {value}"),
        ));
    }
}

/// Validated organization inputs. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrganizationParams")]
pub struct OrganizationInputs {
    device_count: u32,
    locations: u32,
    years_to_project: u32,
    portnox_base_price: f64,
    portnox_discount: f64,
    fte_cost: f64,
    fte_allocation: f64,
    maintenance_percentage: f64,
    downtime_cost: f64,
    risk_reduction: f64,
    insurance_reduction: f64,
    portnox_addons: PortnoxAddons,
}

impl TryFrom<OrganizationParams> for OrganizationInputs {
    type Error = ValidationError;

    fn try_from(params: OrganizationParams) -> Result<Self, Self::Error> {
        params.validate()
    }
}

impl Default for OrganizationInputs {
    fn default() -> Self {
        let defaults = OrganizationParams::default();
        Self {
            device_count: defaults.device_count,
            locations: defaults.locations,
            years_to_project: defaults.years_to_project,
            portnox_base_price: defaults.portnox_base_price,
            portnox_discount: defaults.portnox_discount,
            fte_cost: defaults.fte_cost,
            fte_allocation: defaults.fte_allocation,
            maintenance_percentage: defaults.maintenance_percentage,
            downtime_cost: defaults.downtime_cost,
            risk_reduction: defaults.risk_reduction,
            insurance_reduction: defaults.insurance_reduction,
            portnox_addons: defaults.portnox_addons,
        }
    }
}

impl OrganizationInputs {
    pub fn device_count(&self) -> u32 {
        self.device_count
    }

    pub fn locations(&self) -> u32 {
        self.locations
    }

    pub fn years_to_project(&self) -> u32 {
        self.years_to_project
    }

    pub fn portnox_base_price(&self) -> f64 {
        self.portnox_base_price
    }

    pub fn portnox_discount(&self) -> f64 {
        self.portnox_discount
    }

    pub fn fte_cost(&self) -> f64 {
        self.fte_cost
    }

    pub fn fte_allocation(&self) -> f64 {
        self.fte_allocation
    }

    pub fn maintenance_percentage(&self) -> f64 {
        self.maintenance_percentage
    }

    pub fn downtime_cost(&self) -> f64 {
        self.downtime_cost
    }

    pub fn risk_reduction(&self) -> f64 {
        self.risk_reduction
    }

    pub fn insurance_reduction(&self) -> f64 {
        self.insurance_reduction
    }

    pub fn portnox_addons(&self) -> PortnoxAddons {
        self.portnox_addons
    }

    /// Annual cost of the staff time allocated to access control.
    pub fn standard_staff_cost(&self) -> f64 {
        self.fte_cost * self.fte_allocation / 100.0
    }

    /// Back to the editable form, for what-if sweeps.
    pub fn to_params(&self) -> OrganizationParams {
        OrganizationParams {
            device_count: self.device_count,
            locations: self.locations,
            years_to_project: self.years_to_project,
            portnox_base_price: self.portnox_base_price,
            portnox_discount: self.portnox_discount,
            fte_cost: self.fte_cost,
            fte_allocation: self.fte_allocation,
            maintenance_percentage: self.maintenance_percentage,
            downtime_cost: self.downtime_cost,
            risk_reduction: self.risk_reduction,
            insurance_reduction: self.insurance_reduction,
            portnox_addons: self.portnox_addons,
        }
    }
}

/// Network capabilities the organization needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkRequirements {
    pub cloud_integration: bool,
    pub legacy_devices: bool,
    pub byod: bool,
    pub iot: bool,
    pub wireless: bool,
    pub remote_work: bool,
}

/// Compliance frameworks in scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceSelection {
    pub pci: bool,
    pub hipaa: bool,
    pub nist: bool,
    pub gdpr: bool,
    pub iso: bool,
    pub cmmc: bool,
    pub ferpa: bool,
    pub sox: bool,
}

impl ComplianceSelection {
    /// Number of selected frameworks.
    pub fn count(&self) -> usize {
        [
            self.pci, self.hipaa, self.nist, self.gdpr, self.iso, self.cmmc, self.ferpa, self.sox,
        ]
        .iter()
        .filter(|selected| **selected)
        .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    #[default]
    Standard,
    Elevated,
    High,
    Regulated,
}

impl RiskProfile {
    /// Elevated, high and regulated profiles widen the gap between strong
    /// and weak security postures.
    pub fn is_heightened(&self) -> bool {
        !matches!(self, Self::Standard)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyberInsurance {
    None,
    Basic,
    #[default]
    Standard,
    Comprehensive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let inputs = OrganizationParams::default().validate().unwrap();
        assert_eq!(inputs.device_count(), 500);
        assert_eq!(inputs.years_to_project(), 3);
        assert_eq!(inputs, OrganizationInputs::default());
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let params = OrganizationParams {
            device_count: 0,
            locations: 0,
            fte_allocation: 140.0,
            downtime_cost: -1.0,
            ..Default::default()
        };

        let err = params.validate().unwrap_err();
        assert_eq!(err.violations().len(), 4);
        assert!(err.has_field("device_count"));
        assert!(err.has_field("locations"));
        assert!(err.has_field("fte_allocation"));
        assert!(err.has_field("downtime_cost"));
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        let params = OrganizationParams {
            portnox_base_price: f64::NAN,
            fte_cost: f64::INFINITY,
            ..Default::default()
        };

        let err = params.validate().unwrap_err();
        assert!(err.has_field("portnox_base_price"));
        assert!(err.has_field("fte_cost"));
    }

    #[test]
    fn test_rejects_long_horizon() {
        let params = OrganizationParams {
            years_to_project: MAX_PROJECTION_YEARS + 1,
            ..Default::default()
        };
        assert!(params.validate().unwrap_err().has_field("years_to_project"));
    }

    #[test]
    fn test_rejects_amounts_that_would_overflow() {
        let params = OrganizationParams {
            fte_cost: 1e308,
            fte_allocation: 100.0,
            downtime_cost: 1e300,
            portnox_base_price: MAX_AMOUNT * 2.0,
            device_count: MAX_DEVICE_COUNT + 1,
            locations: MAX_LOCATIONS + 1,
            ..Default::default()
        };

        let err = params.validate().unwrap_err();
        for field in [
            "fte_cost",
            "downtime_cost",
            "portnox_base_price",
            "device_count",
            "locations",
        ] {
            assert!(err.has_field(field), "{field} accepted");
        }
    }

    #[test]
    fn test_largest_inputs_keep_every_total_finite() {
        let inputs = OrganizationParams {
            device_count: MAX_DEVICE_COUNT,
            locations: MAX_LOCATIONS,
            years_to_project: MAX_PROJECTION_YEARS,
            portnox_base_price: MAX_AMOUNT,
            fte_cost: MAX_AMOUNT,
            fte_allocation: 100.0,
            maintenance_percentage: 100.0,
            downtime_cost: MAX_AMOUNT,
            portnox_addons: PortnoxAddons {
                advanced_threat_protection: true,
                compliance_reporting: true,
                iot_profiling: true,
                analytics: true,
            },
            ..Default::default()
        }
        .validate()
        .unwrap();

        for vendor in crate::core::VendorIdentity::ALL {
            let breakdown = crate::cost::compute_cost_breakdown(vendor, &inputs);
            assert!(breakdown.total_tco().is_finite(), "{vendor}");
        }
    }

    #[test]
    fn test_zero_downtime_cost_is_allowed() {
        let params = OrganizationParams {
            downtime_cost: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_addon_pricing() {
        let addons = PortnoxAddons {
            advanced_threat_protection: true,
            iot_profiling: true,
            ..Default::default()
        };
        assert_eq!(addons.monthly_price(), 3.5);
        assert_eq!(PortnoxAddons::default().monthly_price(), 0.0);
    }

    #[test]
    fn test_compliance_count() {
        let selection = ComplianceSelection {
            pci: true,
            hipaa: true,
            sox: true,
            ..Default::default()
        };
        assert_eq!(selection.count(), 3);
        assert_eq!(ComplianceSelection::default().count(), 0);
    }

    #[test]
    fn test_round_trip_through_params() {
        let inputs = OrganizationInputs::default();
        assert_eq!(inputs.to_params().validate().unwrap(), inputs);
    }

    #[test]
    fn test_staff_cost() {
        let inputs = OrganizationInputs::default();
        assert_eq!(inputs.standard_staff_cost(), 25_000.0);
    }
}
