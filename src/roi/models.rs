use serde::{Serialize, Serializer};
use std::fmt;

/// Time until cumulative savings cover the initial investment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaybackPeriod {
    Months(f64),
    /// The vendor never pays back: it saves nothing per year against the
    /// baseline.
    NotApplicable,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<f64> {
        match self {
            Self::Months(months) => Some(*months),
            Self::NotApplicable => None,
        }
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(months) => write!(f, "{months:.1} months"),
            Self::NotApplicable => write!(f, "N/A"),
        }
    }
}

// Serialized as a number of months or `null`.
impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.months().serialize(serializer)
    }
}

/// Where the savings come from, in currency over the projection horizon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ValueDrivers {
    pub direct_cost_reduction: f64,
    pub it_staff_efficiency: f64,
    pub breach_risk_reduction: f64,
    pub compliance_automation: f64,
    pub productivity_gains: f64,
    pub insurance_premium_reduction: f64,
}

impl ValueDrivers {
    pub fn total(&self) -> f64 {
        self.direct_cost_reduction
            + self.it_staff_efficiency
            + self.breach_risk_reduction
            + self.compliance_automation
            + self.productivity_gains
            + self.insurance_premium_reduction
    }

    /// Named drivers in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("Direct cost reduction", self.direct_cost_reduction),
            ("IT staff efficiency", self.it_staff_efficiency),
            ("Breach risk reduction", self.breach_risk_reduction),
            ("Compliance automation", self.compliance_automation),
            ("Productivity gains", self.productivity_gains),
            ("Insurance premium reduction", self.insurance_premium_reduction),
        ]
        .into_iter()
    }
}

/// Return of one vendor measured against the baseline vendor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoiResult {
    pub annual_savings: f64,
    pub total_savings: f64,
    pub savings_percent: f64,
    pub payback_period: PaybackPeriod,
    /// Return over the whole horizon as a percent of the initial investment.
    /// `None` when there is no initial investment to divide by.
    pub roi_percent: Option<f64>,
    /// Net present value at [`super::NPV_DISCOUNT_RATE`].
    pub npv: f64,
    /// Annual savings as a percent of the initial investment. A plain ratio
    /// that ignores the time value of money; it is not an internal rate of
    /// return.
    pub simplified_return_ratio: Option<f64>,
    pub value_drivers: ValueDrivers,
}

impl RoiResult {
    /// Result of comparing a vendor with itself.
    pub fn zero() -> Self {
        Self {
            annual_savings: 0.0,
            total_savings: 0.0,
            savings_percent: 0.0,
            payback_period: PaybackPeriod::Months(0.0),
            roi_percent: Some(0.0),
            npv: 0.0,
            simplified_return_ratio: Some(0.0),
            value_drivers: ValueDrivers::default(),
        }
    }

    pub fn pays_back(&self) -> bool {
        matches!(self.payback_period, PaybackPeriod::Months(_))
    }

    pub fn summary(&self) -> String {
        format!(
            "Savings: {:.0}/yr | Payback: {} | ROI: {} | NPV: {:.0}",
            self.annual_savings,
            self.payback_period,
            self.roi_percent
                .map_or_else(|| "N/A".to_string(), |roi| format!("{roi:.1}%")),
            self.npv,
        )
    }
}
