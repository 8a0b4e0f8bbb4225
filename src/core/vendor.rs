use serde::{Deserialize, Serialize};
use std::fmt;

/// Network access control products the calculator knows how to price.
///
/// Adding a vendor here forces every calculator to handle it, since all of
/// them match on this enum exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorIdentity {
    PortnoxCloud,
    CiscoIse,
    ArubaClearPass,
    Forescout,
    FortiNac,
    JuniperMist,
    SecureW2,
    MicrosoftNps,
    NoNac,
    OtherGeneric,
}

/// How a product is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    Cloud,
    OnPremise,
    Hybrid,
    None,
}

/// The cost-model branch a vendor is priced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Per-device subscription, no appliances
    CloudNative,
    /// Appliance clusters per location plus per-device licensing
    EnterpriseOnPrem,
    /// Windows Server role on existing infrastructure
    WindowsServer,
    /// No access control at all; only indirect costs
    NoNac,
    /// Flat hybrid approximation for products without a dedicated model
    GenericHybrid,
}

/// Result of resolving a free-form vendor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorResolution {
    pub vendor: VendorIdentity,
    /// The name did not match any known vendor and fell back to `OtherGeneric`.
    pub approximated: bool,
}

impl VendorIdentity {
    pub const ALL: [VendorIdentity; 10] = [
        Self::PortnoxCloud,
        Self::CiscoIse,
        Self::ArubaClearPass,
        Self::Forescout,
        Self::FortiNac,
        Self::JuniperMist,
        Self::SecureW2,
        Self::MicrosoftNps,
        Self::NoNac,
        Self::OtherGeneric,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::PortnoxCloud => "portnox",
            Self::CiscoIse => "cisco",
            Self::ArubaClearPass => "aruba",
            Self::Forescout => "forescout",
            Self::FortiNac => "fortinac",
            Self::JuniperMist => "juniper",
            Self::SecureW2 => "securew2",
            Self::MicrosoftNps => "microsoft",
            Self::NoNac => "no-nac",
            Self::OtherGeneric => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PortnoxCloud => "Portnox Cloud",
            Self::CiscoIse => "Cisco ISE",
            Self::ArubaClearPass => "Aruba ClearPass",
            Self::Forescout => "Forescout",
            Self::FortiNac => "FortiNAC",
            Self::JuniperMist => "Juniper Mist",
            Self::SecureW2 => "SecureW2",
            Self::MicrosoftNps => "Microsoft NPS",
            Self::NoNac => "No NAC",
            Self::OtherGeneric => "Other NAC",
        }
    }

    pub fn deployment(&self) -> Deployment {
        match self {
            Self::PortnoxCloud | Self::JuniperMist | Self::SecureW2 => Deployment::Cloud,
            Self::CiscoIse | Self::Forescout | Self::MicrosoftNps => Deployment::OnPremise,
            Self::ArubaClearPass | Self::FortiNac | Self::OtherGeneric => Deployment::Hybrid,
            Self::NoNac => Deployment::None,
        }
    }

    pub fn cost_model(&self) -> CostModel {
        match self {
            Self::PortnoxCloud => CostModel::CloudNative,
            Self::CiscoIse | Self::ArubaClearPass | Self::Forescout => CostModel::EnterpriseOnPrem,
            Self::MicrosoftNps => CostModel::WindowsServer,
            Self::NoNac => CostModel::NoNac,
            Self::FortiNac | Self::JuniperMist | Self::SecureW2 | Self::OtherGeneric => {
                CostModel::GenericHybrid
            }
        }
    }

    /// Costs for this vendor come from the generic hybrid approximation
    /// rather than a vendor-specific model.
    pub fn is_cost_approximated(&self) -> bool {
        self.cost_model() == CostModel::GenericHybrid
    }

    /// Resolve a slug, display name, or common alias.
    ///
    /// Unknown names resolve to [`VendorIdentity::OtherGeneric`] and are
    /// flagged so callers can tell the result is an approximation.
    pub fn parse_slug(name: &str) -> VendorResolution {
        let normalized: String = name
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        let known = match normalized.as_str() {
            "portnox" | "portnoxcloud" => Some(Self::PortnoxCloud),
            "cisco" | "ciscoise" | "ise" => Some(Self::CiscoIse),
            "aruba" | "arubaclearpass" | "clearpass" => Some(Self::ArubaClearPass),
            "forescout" => Some(Self::Forescout),
            "fortinac" | "fortinet" => Some(Self::FortiNac),
            "juniper" | "junipermist" | "mist" => Some(Self::JuniperMist),
            "securew2" => Some(Self::SecureW2),
            "microsoft" | "microsoftnps" | "nps" => Some(Self::MicrosoftNps),
            "nonac" | "none" => Some(Self::NoNac),
            "other" | "othergeneric" | "generic" => Some(Self::OtherGeneric),
            _ => None,
        };

        match known {
            Some(vendor) => VendorResolution {
                vendor,
                approximated: false,
            },
            None => {
                tracing::warn!(
                    vendor = name,
                    "Unknown vendor, using the generic cost and scoring model"
                );
                VendorResolution {
                    vendor: Self::OtherGeneric,
                    approximated: true,
                }
            }
        }
    }
}

impl fmt::Display for VendorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Deployment::Cloud => "Cloud",
            Deployment::OnPremise => "On-premise",
            Deployment::Hybrid => "Hybrid",
            Deployment::None => "None",
        };
        f.write_str(label)
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CostModel::CloudNative => "Cloud subscription",
            CostModel::EnterpriseOnPrem => "Enterprise on-premise",
            CostModel::WindowsServer => "Windows Server role",
            CostModel::NoNac => "Indirect costs only",
            CostModel::GenericHybrid => "Generic hybrid",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug_round_trips_every_vendor() {
        for vendor in VendorIdentity::ALL {
            let resolved = VendorIdentity::parse_slug(vendor.slug());
            assert_eq!(resolved.vendor, vendor);
            assert!(!resolved.approximated);
        }
    }

    #[test]
    fn test_parse_slug_accepts_display_names() {
        assert_eq!(
            VendorIdentity::parse_slug("Cisco ISE").vendor,
            VendorIdentity::CiscoIse
        );
        assert_eq!(
            VendorIdentity::parse_slug("No NAC").vendor,
            VendorIdentity::NoNac
        );
        assert_eq!(
            VendorIdentity::parse_slug("Microsoft NPS").vendor,
            VendorIdentity::MicrosoftNps
        );
    }

    #[test]
    fn test_unknown_vendor_falls_back_to_generic() {
        let resolved = VendorIdentity::parse_slug("acme-nac");
        assert_eq!(resolved.vendor, VendorIdentity::OtherGeneric);
        assert!(resolved.approximated);
    }

    #[test]
    fn test_cost_models() {
        assert_eq!(
            VendorIdentity::PortnoxCloud.cost_model(),
            CostModel::CloudNative
        );
        assert_eq!(
            VendorIdentity::Forescout.cost_model(),
            CostModel::EnterpriseOnPrem
        );
        assert_eq!(
            VendorIdentity::MicrosoftNps.cost_model(),
            CostModel::WindowsServer
        );
        assert!(VendorIdentity::SecureW2.is_cost_approximated());
        assert!(!VendorIdentity::NoNac.is_cost_approximated());
    }
}
