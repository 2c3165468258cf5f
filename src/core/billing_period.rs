use crate::{
    core::{analysis_type::AnalysisType, degree_days::period_hdd},
    error::EstimationError,
    quantity::{degree_days::DegreeDays, temperature::Fahrenheit},
};

/// Billing interval with the daily average outdoor temperatures it covers.
#[must_use]
#[derive(Clone, Debug)]
pub struct BillingPeriod {
    /// Daily average temperatures, both boundary dates included.
    avg_temps: Vec<Fahrenheit>,

    /// Energy consumed during the interval, in the fuel's billing units.
    pub usage: f64,

    pub analysis_type: AnalysisType,

    balance_point: Fahrenheit,
    total_hdd: DegreeDays,
}

impl BillingPeriod {
    pub fn try_new(
        avg_temps: Vec<Fahrenheit>,
        usage: f64,
        balance_point: Fahrenheit,
        analysis_type: AnalysisType,
    ) -> Result<Self, EstimationError> {
        if avg_temps.is_empty() {
            return Err(EstimationError::EmptyBillingPeriod);
        }
        let total_hdd = period_hdd(&avg_temps, balance_point);
        Ok(Self { avg_temps, usage, analysis_type, balance_point, total_hdd })
    }

    #[must_use]
    pub const fn days(&self) -> usize {
        self.avg_temps.len()
    }

    #[must_use]
    pub const fn balance_point(&self) -> Fahrenheit {
        self.balance_point
    }

    /// Heating degree-days at the current balance point.
    #[must_use]
    pub const fn total_hdd(&self) -> DegreeDays {
        self.total_hdd
    }

    /// Heating degree-days the period would have at another balance point.
    #[must_use]
    pub fn hdd_at(&self, balance_point: Fahrenheit) -> DegreeDays {
        period_hdd(&self.avg_temps, balance_point)
    }

    /// Move the period to another balance point.
    pub fn with_balance_point(self, balance_point: Fahrenheit) -> Self {
        let total_hdd = self.hdd_at(balance_point);
        self.with_total_hdd(balance_point, total_hdd)
    }

    /// Move the period to a balance point whose degree-days are already known.
    pub(super) fn with_total_hdd(
        mut self,
        balance_point: Fahrenheit,
        total_hdd: DegreeDays,
    ) -> Self {
        self.balance_point = balance_point;
        self.total_hdd = total_hdd;
        self
    }
}
