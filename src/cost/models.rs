use serde::{Deserialize, Serialize};

use crate::core::VendorIdentity;

/// One-time costs paid before the first year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialCosts {
    pub hardware: f64,
    pub software: f64,
    pub implementation: f64,
    pub training: f64,
}

impl InitialCosts {
    pub fn total(&self) -> f64 {
        self.hardware + self.software + self.implementation + self.training
    }
}

/// Direct costs paid every year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringCosts {
    pub subscription: f64,
    pub maintenance: f64,
    pub support: f64,
    pub operations: f64,
}

impl RecurringCosts {
    pub fn total(&self) -> f64 {
        self.subscription + self.maintenance + self.support + self.operations
    }
}

/// Annual exposure that never shows up on an invoice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndirectCosts {
    pub downtime: f64,
    pub security: f64,
    pub compliance: f64,
}

impl IndirectCosts {
    pub fn total(&self) -> f64 {
        self.downtime + self.security + self.compliance
    }
}

/// Cost of one vendor over the projection horizon.
///
/// Totals are derived once at construction, so
/// `total_tco == initial_total + (recurring_annual + indirect_annual) * years`
/// holds for every value of this type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    vendor: VendorIdentity,
    years: u32,
    initial: InitialCosts,
    recurring: RecurringCosts,
    indirect: IndirectCosts,
    initial_total: f64,
    recurring_annual: f64,
    indirect_annual: f64,
    total_tco: f64,
}

/// One row of the year-by-year cost schedule. Year 0 holds the initial costs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearCost {
    pub year: u32,
    pub amount: f64,
    pub cumulative: f64,
}

impl CostBreakdown {
    pub fn new(
        vendor: VendorIdentity,
        years: u32,
        initial: InitialCosts,
        recurring: RecurringCosts,
        indirect: IndirectCosts,
    ) -> Self {
        let initial_total = initial.total();
        let recurring_annual = recurring.total();
        let indirect_annual = indirect.total();
        let total_tco = initial_total + (recurring_annual + indirect_annual) * f64::from(years);

        Self {
            vendor,
            years,
            initial,
            recurring,
            indirect,
            initial_total,
            recurring_annual,
            indirect_annual,
            total_tco,
        }
    }

    pub fn vendor(&self) -> VendorIdentity {
        self.vendor
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn initial(&self) -> &InitialCosts {
        &self.initial
    }

    pub fn recurring(&self) -> &RecurringCosts {
        &self.recurring
    }

    pub fn indirect(&self) -> &IndirectCosts {
        &self.indirect
    }

    pub fn initial_total(&self) -> f64 {
        self.initial_total
    }

    pub fn recurring_annual(&self) -> f64 {
        self.recurring_annual
    }

    pub fn indirect_annual(&self) -> f64 {
        self.indirect_annual
    }

    /// Total cost of ownership over `years()` years.
    pub fn total_tco(&self) -> f64 {
        self.total_tco
    }

    /// Recurring plus indirect cost of one year.
    pub fn annual_run_rate(&self) -> f64 {
        self.recurring_annual + self.indirect_annual
    }

    /// TCO spread over every device and month of the horizon.
    pub fn per_device_per_month(&self, device_count: u32) -> f64 {
        let device_months = f64::from(device_count) * f64::from(self.years) * 12.0;
        if device_months > 0.0 {
            self.total_tco / device_months
        } else {
            0.0
        }
    }

    /// Initial outlay followed by one row per projected year.
    pub fn yearly_schedule(&self) -> Vec<YearCost> {
        let run_rate = self.annual_run_rate();
        std::iter::once(self.initial_total)
            .chain((0..self.years).map(|_| run_rate))
            .enumerate()
            .scan(0.0, |cumulative, (year, amount)| {
                *cumulative += amount;
                Some(YearCost {
                    year: year as u32,
                    amount,
                    cumulative: *cumulative,
                })
            })
            .collect()
    }
}
