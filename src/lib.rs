//! Total cost of ownership and return on investment for network access
//! control (NAC) products.
//!
//! The calculation core ([`cost`], [`roi`], [`risk`], [`features`]) is a set of
//! pure functions over validated [`OrganizationInputs`]. [`comparison`] and
//! [`sensitivity`] compose them into reports, which [`output`] renders as
//! JSON, Markdown or terminal tables.

pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod cost;
pub mod errors;
pub mod features;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod risk;
pub mod roi;
pub mod sensitivity;

pub use crate::core::{
    ComplianceSelection, CyberInsurance, NetworkRequirements, OrganizationInputs,
    OrganizationParams, PortnoxAddons, RiskProfile, VendorIdentity, VendorResolution,
};

pub use crate::errors::{Error, FieldViolation, Result, ValidationError};

pub use crate::cost::{compute_cost_breakdown, CostBreakdown};

pub use crate::roi::{compute_roi, select_baseline, PaybackPeriod, RoiResult, ValueDrivers};

pub use crate::risk::{compute_risk_metrics, BreachProbability, RiskMetrics};

pub use crate::features::{compute_feature_scores, FeatureScores};

pub use crate::comparison::{compare_vendors, ComparisonInputs, ComparisonReport, VendorComparison};

pub use crate::sensitivity::{
    analyze, SensitivityMetric, SensitivityReport, SensitivityVariable, SweepRange,
};

pub use crate::output::{create_writer, OutputFormat, ReportWriter};
