//! Capability scores per vendor, nudged by the organization's network
//! requirements.

use serde::Serialize;

use crate::core::{NetworkRequirements, VendorIdentity};

const CLOUD_STRONG: i32 = 80;

/// Ten capability scores, each 0 to 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FeatureScores {
    pub cloud_architecture: u8,
    pub zero_trust: u8,
    pub deployment_speed: u8,
    pub fte_requirements: u8,
    pub remote_access: u8,
    pub hardware_footprint: u8,
    pub ai_capabilities: u8,
    pub compliance_automation: u8,
    pub scalability: u8,
    pub integration: u8,
}

impl FeatureScores {
    fn from_row(row: [u8; 10]) -> Self {
        let [
            cloud_architecture,
            zero_trust,
            deployment_speed,
            fte_requirements,
            remote_access,
            hardware_footprint,
            ai_capabilities,
            compliance_automation,
            scalability,
            integration,
        ] = row;
        Self {
            cloud_architecture,
            zero_trust,
            deployment_speed,
            fte_requirements,
            remote_access,
            hardware_footprint,
            ai_capabilities,
            compliance_automation,
            scalability,
            integration,
        }
    }

    /// Scores with their display names, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> {
        [
            ("Cloud architecture", self.cloud_architecture),
            ("Zero trust", self.zero_trust),
            ("Deployment speed", self.deployment_speed),
            ("FTE requirements", self.fte_requirements),
            ("Remote access", self.remote_access),
            ("Hardware footprint", self.hardware_footprint),
            ("AI capabilities", self.ai_capabilities),
            ("Compliance automation", self.compliance_automation),
            ("Scalability", self.scalability),
            ("Integration", self.integration),
        ]
        .into_iter()
    }

    pub fn average(&self) -> f64 {
        let total: u32 = self.iter().map(|(_, score)| u32::from(score)).sum();
        f64::from(total) / 10.0
    }
}

fn base_scores(vendor: VendorIdentity) -> FeatureScores {
    let row = match vendor {
        VendorIdentity::PortnoxCloud => [98, 95, 95, 90, 95, 100, 85, 90, 95, 85],
        VendorIdentity::CiscoIse => [40, 70, 35, 40, 60, 30, 50, 70, 80, 90],
        VendorIdentity::ArubaClearPass => [50, 70, 45, 45, 65, 35, 55, 70, 80, 85],
        VendorIdentity::Forescout => [35, 75, 40, 45, 55, 35, 60, 75, 75, 85],
        VendorIdentity::FortiNac => [45, 65, 50, 50, 60, 40, 50, 65, 70, 75],
        VendorIdentity::JuniperMist => [85, 75, 70, 70, 75, 60, 90, 65, 85, 70],
        VendorIdentity::SecureW2 => [90, 70, 80, 80, 80, 95, 40, 60, 80, 60],
        VendorIdentity::MicrosoftNps => [10, 30, 60, 55, 40, 50, 10, 30, 45, 50],
        VendorIdentity::NoNac => [0; 10],
        VendorIdentity::OtherGeneric => [50; 10],
    };
    FeatureScores::from_row(row)
}

pub fn compute_feature_scores(
    vendor: VendorIdentity,
    requirements: &NetworkRequirements,
) -> FeatureScores {
    let mut scores = base_scores(vendor);

    if requirements.cloud_integration {
        let delta = if i32::from(scores.cloud_architecture) >= CLOUD_STRONG {
            5
        } else {
            -10
        };
        nudge(&mut scores.cloud_architecture, delta);
    }

    if requirements.legacy_devices {
        match vendor {
            VendorIdentity::CiscoIse | VendorIdentity::Forescout => {
                nudge(&mut scores.integration, 5)
            }
            VendorIdentity::PortnoxCloud => nudge(&mut scores.integration, -5),
            _ => {}
        }
    }

    if requirements.remote_work {
        match vendor {
            VendorIdentity::PortnoxCloud => nudge(&mut scores.remote_access, 5),
            VendorIdentity::MicrosoftNps => nudge(&mut scores.remote_access, -10),
            _ => {}
        }
    }

    tracing::debug!(vendor = %vendor, average = scores.average(), "Computed feature scores");
    scores
}

fn nudge(score: &mut u8, delta: i32) {
    *score = (i32::from(*score) + delta).clamp(0, 100) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_portnox_remote_work_clamps_at_100() {
        let requirements = NetworkRequirements {
            remote_work: true,
            ..Default::default()
        };
        let scores = compute_feature_scores(VendorIdentity::PortnoxCloud, &requirements);
        assert_eq!(scores.remote_access, 100);
    }

    #[test]
    fn test_no_requirements_returns_table_row() {
        let scores =
            compute_feature_scores(VendorIdentity::CiscoIse, &NetworkRequirements::default());
        assert_eq!(scores, base_scores(VendorIdentity::CiscoIse));
        assert_eq!(scores.integration, 90);
    }

    #[test]
    fn test_cloud_integration_favours_cloud_vendors() {
        let requirements = NetworkRequirements {
            cloud_integration: true,
            ..Default::default()
        };
        let juniper = compute_feature_scores(VendorIdentity::JuniperMist, &requirements);
        let cisco = compute_feature_scores(VendorIdentity::CiscoIse, &requirements);
        let portnox = compute_feature_scores(VendorIdentity::PortnoxCloud, &requirements);
        let none = compute_feature_scores(VendorIdentity::NoNac, &requirements);

        assert_eq!(juniper.cloud_architecture, 90);
        assert_eq!(cisco.cloud_architecture, 30);
        assert_eq!(portnox.cloud_architecture, 100);
        assert_eq!(none.cloud_architecture, 0);
    }

    #[test]
    fn test_legacy_devices_adjust_integration() {
        let requirements = NetworkRequirements {
            legacy_devices: true,
            ..Default::default()
        };
        assert_eq!(
            compute_feature_scores(VendorIdentity::CiscoIse, &requirements).integration,
            95
        );
        assert_eq!(
            compute_feature_scores(VendorIdentity::Forescout, &requirements).integration,
            90
        );
        assert_eq!(
            compute_feature_scores(VendorIdentity::PortnoxCloud, &requirements).integration,
            80
        );
        assert_eq!(
            compute_feature_scores(VendorIdentity::ArubaClearPass, &requirements).integration,
            85
        );
    }

    #[test]
    fn test_remote_work_penalises_nps() {
        let requirements = NetworkRequirements {
            remote_work: true,
            ..Default::default()
        };
        assert_eq!(
            compute_feature_scores(VendorIdentity::MicrosoftNps, &requirements).remote_access,
            30
        );
    }

    #[test]
    fn test_average() {
        assert_eq!(base_scores(VendorIdentity::OtherGeneric).average(), 50.0);
        assert_eq!(base_scores(VendorIdentity::NoNac).average(), 0.0);
        assert_eq!(base_scores(VendorIdentity::PortnoxCloud).iter().count(), 10);
    }
}
