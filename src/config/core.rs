use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonInputs;
use crate::core::{
    ComplianceSelection, CyberInsurance, NetworkRequirements, OrganizationParams, RiskProfile,
    VendorIdentity, VendorResolution,
};
use crate::errors::Result;
use crate::output::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".nac-tco.toml";

/// Root configuration structure for nac-tco
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TcoConfig {
    /// Organization parameters fed to the cost and ROI calculators
    #[serde(default)]
    pub organization: Option<OrganizationParams>,

    /// Network requirements used to adjust feature scores
    #[serde(default)]
    pub requirements: Option<NetworkRequirements>,

    /// Compliance frameworks in scope
    #[serde(default)]
    pub compliance: Option<ComplianceSelection>,

    /// Risk profile and cyber insurance
    #[serde(default)]
    pub risk: Option<RiskConfig>,

    /// Vendors to compare
    #[serde(default)]
    pub comparison: Option<ComparisonConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RiskConfig {
    pub profile: RiskProfile,
    pub cyber_insurance: Option<CyberInsurance>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Vendor slugs or names. Unknown names use the generic model.
    #[serde(default = "default_vendors")]
    pub vendors: Vec<String>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            vendors: default_vendors(),
        }
    }
}

pub fn default_vendors() -> Vec<String> {
    [
        VendorIdentity::PortnoxCloud,
        VendorIdentity::CiscoIse,
        VendorIdentity::ArubaClearPass,
        VendorIdentity::NoNac,
    ]
    .iter()
    .map(|vendor| vendor.slug().to_string())
    .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl TcoConfig {
    /// Everything filled in with defaults, as written by `nac-tco init`.
    pub fn with_defaults() -> Self {
        Self {
            organization: Some(OrganizationParams::default()),
            requirements: Some(NetworkRequirements::default()),
            compliance: Some(ComplianceSelection::default()),
            risk: Some(RiskConfig {
                profile: RiskProfile::Standard,
                cyber_insurance: Some(CyberInsurance::Standard),
            }),
            comparison: Some(ComparisonConfig::default()),
            output: Some(OutputConfig {
                default_format: Some(OutputFormat::Terminal),
                use_color: None,
            }),
        }
    }

    pub fn organization_params(&self) -> OrganizationParams {
        self.organization.clone().unwrap_or_default()
    }

    pub fn vendor_names(&self) -> Vec<String> {
        self.comparison
            .as_ref()
            .map(|comparison| comparison.vendors.clone())
            .unwrap_or_else(default_vendors)
    }

    pub fn resolve_vendors(&self) -> Vec<VendorResolution> {
        self.vendor_names()
            .iter()
            .map(|name| VendorIdentity::parse_slug(name))
            .collect()
    }

    /// Validated calculator inputs, with `params` standing in for the
    /// `[organization]` section.
    pub fn comparison_inputs(&self, params: OrganizationParams) -> Result<ComparisonInputs> {
        let risk = self.risk.clone().unwrap_or_default();
        Ok(ComparisonInputs {
            organization: params.validate()?,
            requirements: self.requirements.unwrap_or_default(),
            compliance: self.compliance.unwrap_or_default(),
            risk_profile: risk.profile,
            cyber_insurance: risk.cyber_insurance,
        })
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.default_format)
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|output| output.use_color)
    }
}
