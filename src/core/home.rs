use bon::bon;

use crate::{
    core::{
        analysis_type::AnalysisType,
        billing_period::BillingPeriod,
        dhw::BoilerUsage,
        dispersion::Dispersion,
        fuel::FuelType,
        search::{Convergence, SearchSettings, SearchState},
        summary::HomeSummary,
        winter_period::WinterPeriod,
    },
    error::EstimationError,
    prelude::*,
    quantity::{Quantity, temperature::Fahrenheit},
};

/// A single home with its billing history split by season.
///
/// Calculates the UA of every winter billing period, and searches for the balance point which
/// makes those UAs agree the most.
#[must_use]
#[derive(Clone, Debug)]
pub struct Home {
    fuel_type: FuelType,
    heat_sys_efficiency: f64,
    thermostat_set_point: Fahrenheit,

    /// Initial balance point of the search.
    balance_point: Fahrenheit,

    has_boiler_for_dhw: bool,
    same_fuel_dhw_heating: bool,

    /// Winter periods along with their positions in the billing history.
    bills_winter: Vec<(usize, BillingPeriod)>,

    bills_summer: Vec<BillingPeriod>,
    bills_shoulder: Vec<BillingPeriod>,
}

/// Estimated balance point and UA of a home.
#[must_use]
#[derive(Clone, Debug)]
pub struct Estimate {
    pub balance_point: Fahrenheit,
    pub dispersion: Dispersion,

    /// Average daily usage not attributed to heating, in the fuel's billing units.
    pub avg_non_heating_usage: f64,

    /// Winter periods which made it through the outlier removal.
    pub winter_periods: Vec<WinterPeriod>,

    /// Winter periods removed as outliers, in the order of removal.
    pub outliers: Vec<WinterPeriod>,
}

#[bon]
impl Home {
    #[builder]
    pub fn new(
        summary: &HomeSummary,
        billing_periods: Vec<BillingPeriod>,
        #[builder(default = Quantity(60.0))] initial_balance_point: Fahrenheit,
        #[builder(default)] has_boiler_for_dhw: bool,
        #[builder(default)] same_fuel_dhw_heating: bool,
    ) -> Self {
        let mut bills_winter = Vec::new();
        let mut bills_summer = Vec::new();
        let mut bills_shoulder = Vec::new();
        for (index, period) in billing_periods.into_iter().enumerate() {
            match period.analysis_type {
                AnalysisType::Include => {
                    bills_winter.push((index, period.with_balance_point(initial_balance_point)));
                }
                AnalysisType::DoNotInclude => bills_summer.push(period),
                AnalysisType::IncludeInOtherAnalysis => bills_shoulder.push(period),
            }
        }
        Self {
            fuel_type: summary.fuel_type,
            heat_sys_efficiency: summary.heating_system_efficiency,
            thermostat_set_point: summary.thermostat_set_point,
            balance_point: initial_balance_point,
            has_boiler_for_dhw,
            same_fuel_dhw_heating,
            bills_winter,
            bills_summer,
            bills_shoulder,
        }
    }
}

impl Home {
    pub fn bills_winter(&self) -> impl Iterator<Item = &BillingPeriod> {
        self.bills_winter.iter().map(|(_, period)| period)
    }

    #[must_use]
    pub fn bills_summer(&self) -> &[BillingPeriod] {
        &self.bills_summer
    }

    #[must_use]
    pub fn bills_shoulder(&self) -> &[BillingPeriod] {
        &self.bills_shoulder
    }

    /// Average daily summer usage, zero when there are no summer bills.
    ///
    /// Zero means «no baseline available» rather than a measured rate.
    #[must_use]
    pub fn average_summer_usage(&self) -> f64 {
        let usage = self.bills_summer.iter().map(|period| period.usage).sum::<f64>();
        let days = self.bills_summer.iter().map(BillingPeriod::days).sum::<usize>();
        if days == 0 {
            0.0
        } else {
            #[expect(clippy::cast_precision_loss)]
            let days = days as f64;
            usage / days
        }
    }

    /// Average daily usage which is not spent on heating.
    pub fn average_non_heating_usage(
        &self,
        boiler_usage: &dyn BoilerUsage,
    ) -> Result<f64, EstimationError> {
        if self.fuel_type.is_metered() {
            Ok(self.average_summer_usage())
        } else if self.has_boiler_for_dhw && self.same_fuel_dhw_heating {
            boiler_usage.daily_usage(self.fuel_type.boiler_usage_multiplier())
        } else {
            Ok(0.0)
        }
    }

    /// Attribute the usage of a winter period to heating and calculate its UA.
    pub fn initialize_ua(
        &self,
        index: usize,
        period: BillingPeriod,
        avg_non_heating_usage: f64,
    ) -> Result<WinterPeriod, EstimationError> {
        #[expect(clippy::cast_precision_loss)]
        let days = period.days() as f64;
        let avg_heating_usage = period.usage / days - avg_non_heating_usage;
        let partial_ua = days
            * avg_heating_usage
            * self.fuel_type.energy_content()
            * self.heat_sys_efficiency
            / 24.0;
        WinterPeriod::try_new(index, period, avg_heating_usage, partial_ua)
    }

    /// Estimate the balance point and UA, removing the UA outliers.
    #[instrument(
        skip_all,
        fields(
            fuel_type = ?self.fuel_type,
            n_winter = self.bills_winter.len(),
            n_summer = self.bills_summer.len(),
            n_shoulder = self.bills_shoulder.len(),
        ),
    )]
    pub fn calculate(
        &self,
        settings: &SearchSettings,
        boiler_usage: &dyn BoilerUsage,
    ) -> Result<Estimate, EstimationError> {
        let avg_non_heating_usage = self.average_non_heating_usage(boiler_usage)?;
        debug!(avg_non_heating_usage, "calculated the non-heating usage");

        let periods = self
            .bills_winter
            .iter()
            .cloned()
            .map(|(index, period)| self.initialize_ua(index, period, avg_non_heating_usage))
            .collect::<Result<Vec<_>, _>>()?;
        let Convergence { state, outliers } = SearchState::try_new(self.balance_point, periods)?
            .converge(settings, self.thermostat_set_point)?;

        info!(
            balance_point = ?state.balance_point,
            average_ua = state.dispersion.average,
            stdev_pct = state.dispersion.stdev_pct,
            n_periods = state.periods.len(),
            n_outliers = outliers.len(),
            "estimated",
        );
        Ok(Estimate {
            balance_point: state.balance_point,
            dispersion: state.dispersion,
            avg_non_heating_usage,
            winter_periods: state.periods,
            outliers,
        })
    }
}
