//! Security posture scoring.
//!
//! Scores start from a fixed per-vendor table and are then adjusted for the
//! organization's compliance scope and risk profile.

use serde::Serialize;
use std::fmt;

use crate::core::{ComplianceSelection, CyberInsurance, RiskProfile, VendorIdentity};

/// Frameworks in scope beyond which coverage differences are amplified.
const BROAD_COMPLIANCE_THRESHOLD: usize = 3;
const STRONG_POSTURE: u8 = 80;
const WEAK_POSTURE: u8 = 50;
/// Largest premium impact, reached at a posture of 100.
const MAX_INSURANCE_IMPACT: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachProbability {
    VeryLow,
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
}

impl BreachProbability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::LowMedium => "Low-Medium",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for BreachProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskMetrics {
    /// 0 to 100
    pub security_posture: u8,
    pub breach_probability: BreachProbability,
    /// 0 to 100
    pub compliance_coverage: u8,
    pub mean_time_to_respond_minutes: u32,
    /// 0 to 20
    pub insurance_impact: f64,
    /// Expected premium reduction for the selected insurance tier, percent.
    pub premium_reduction_percent: Option<f64>,
}

struct Baseline {
    posture: u8,
    breach: BreachProbability,
    coverage: u8,
    mttr_minutes: u32,
}

fn baseline(vendor: VendorIdentity) -> Baseline {
    use BreachProbability::*;

    let (posture, breach, coverage, mttr_minutes) = match vendor {
        VendorIdentity::PortnoxCloud => (92, VeryLow, 95, 8),
        VendorIdentity::CiscoIse => (78, Low, 85, 45),
        VendorIdentity::ArubaClearPass => (76, Low, 82, 50),
        VendorIdentity::Forescout => (74, LowMedium, 80, 60),
        VendorIdentity::FortiNac => (70, LowMedium, 75, 75),
        VendorIdentity::JuniperMist => (80, Low, 78, 30),
        VendorIdentity::SecureW2 => (72, LowMedium, 70, 60),
        VendorIdentity::MicrosoftNps => (50, Medium, 45, 240),
        VendorIdentity::NoNac => (20, VeryHigh, 10, 480),
        VendorIdentity::OtherGeneric => (60, Medium, 60, 120),
    };
    Baseline {
        posture,
        breach,
        coverage,
        mttr_minutes,
    }
}

pub fn compute_risk_metrics(
    vendor: VendorIdentity,
    compliance: &ComplianceSelection,
    risk_profile: RiskProfile,
    cyber_insurance: Option<CyberInsurance>,
) -> RiskMetrics {
    let base = baseline(vendor);
    let mut posture = i32::from(base.posture);
    let mut coverage = i32::from(base.coverage);

    if compliance.count() > BROAD_COMPLIANCE_THRESHOLD {
        if base.posture > STRONG_POSTURE {
            coverage += 5;
        } else if base.posture < WEAK_POSTURE {
            coverage -= 5;
        }
    }

    if risk_profile.is_heightened() {
        if base.posture > STRONG_POSTURE {
            posture += 5;
        } else if base.posture < WEAK_POSTURE {
            posture -= 10;
        }
    }

    let security_posture = clamp_score(posture);
    let insurance_impact = f64::from(security_posture) / 100.0 * MAX_INSURANCE_IMPACT;

    tracing::debug!(
        vendor = %vendor,
        security_posture,
        ?risk_profile,
        "Computed risk metrics"
    );

    RiskMetrics {
        security_posture,
        breach_probability: base.breach,
        compliance_coverage: clamp_score(coverage),
        mean_time_to_respond_minutes: base.mttr_minutes,
        insurance_impact,
        premium_reduction_percent: cyber_insurance
            .and_then(tier_factor)
            .map(|factor| insurance_impact * factor),
    }
}

fn tier_factor(insurance: CyberInsurance) -> Option<f64> {
    match insurance {
        CyberInsurance::None => None,
        CyberInsurance::Basic => Some(0.5),
        CyberInsurance::Standard => Some(1.0),
        CyberInsurance::Comprehensive => Some(1.25),
    }
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
