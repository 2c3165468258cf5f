use crate::{
    core::billing_period::BillingPeriod,
    error::EstimationError,
    quantity::{degree_days::DegreeDays, temperature::Fahrenheit},
};

/// Winter billing period with its UA estimate.
#[must_use]
#[derive(Clone, Debug)]
pub struct WinterPeriod {
    /// Position of the period in the home's billing history.
    pub index: usize,

    pub period: BillingPeriod,

    /// Average daily usage attributed to heating.
    pub avg_heating_usage: f64,

    /// The part of the UA which does not depend on the balance point.
    pub partial_ua: f64,

    /// UA at the period's current balance point, in BTU/h·°F.
    pub ua: f64,
}

impl WinterPeriod {
    pub fn try_new(
        index: usize,
        period: BillingPeriod,
        avg_heating_usage: f64,
        partial_ua: f64,
    ) -> Result<Self, EstimationError> {
        let mut this = Self { index, period, avg_heating_usage, partial_ua, ua: 0.0 };
        this.ua = this.ua_at(this.period.balance_point(), this.period.total_hdd())?;
        Ok(this)
    }

    /// Full UA given the period's degree-days at some balance point.
    pub fn ua_at(
        &self,
        balance_point: Fahrenheit,
        total_hdd: DegreeDays,
    ) -> Result<f64, EstimationError> {
        if total_hdd > DegreeDays::ZERO {
            Ok(self.partial_ua / total_hdd.0)
        } else {
            Err(EstimationError::ZeroDegreeDays { index: self.index, balance_point })
        }
    }
}
