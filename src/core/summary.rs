use serde::{Deserialize, Serialize};

use crate::{
    core::{
        fuel::FuelType,
        heat_load::{DESIGN_SET_POINT, average_heat_load, average_indoor_temp, max_heat_load},
        home::Estimate,
    },
    quantity::temperature::Fahrenheit,
};

/// What the homeowner tells about the home.
#[derive(Clone, Debug, Deserialize)]
pub struct HomeSummary {
    pub fuel_type: FuelType,

    /// Fraction of the fuel energy delivered as heat.
    pub heating_system_efficiency: f64,

    pub thermostat_set_point: Fahrenheit,

    #[serde(default)]
    pub setback_temperature: Option<Fahrenheit>,

    #[serde(default)]
    pub setback_hours_per_day: Option<f64>,

    /// One of the coldest outdoor temperatures of the year at the home's location.
    pub design_temperature: Fahrenheit,
}

impl HomeSummary {
    #[must_use]
    pub fn average_indoor_temperature(&self) -> Fahrenheit {
        match (self.setback_temperature, self.setback_hours_per_day) {
            (Some(setback_temperature), Some(setback_hours_per_day)) => average_indoor_temp(
                self.thermostat_set_point,
                setback_temperature,
                setback_hours_per_day,
            ),
            _ => self.thermostat_set_point,
        }
    }
}

/// Heat metrics of a home derived from the estimated balance point and UA.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct HeatLoadSummary {
    pub estimated_balance_point: Fahrenheit,

    /// Average daily non-heating usage, in the fuel's billing units.
    pub other_fuel_usage: f64,

    pub average_indoor_temperature: Fahrenheit,
    pub difference_between_ti_and_tbp: Fahrenheit,
    pub design_temperature: Fahrenheit,

    /// Average UA in BTU/h·°F.
    pub whole_home_heat_loss_rate: f64,

    /// Coefficient of variation of the UA.
    pub standard_deviation_of_heat_loss_rate: f64,

    /// BTU/h at the design temperature.
    pub average_heat_load: f64,

    /// BTU/h at the design temperature.
    pub maximum_heat_load: f64,
}

impl HeatLoadSummary {
    pub fn new(summary: &HomeSummary, estimate: &Estimate) -> Self {
        let average_indoor_temperature = summary.average_indoor_temperature();
        let ua = estimate.dispersion.average;
        Self {
            estimated_balance_point: estimate.balance_point,
            other_fuel_usage: estimate.avg_non_heating_usage,
            average_indoor_temperature,
            difference_between_ti_and_tbp: average_indoor_temperature - estimate.balance_point,
            design_temperature: summary.design_temperature,
            whole_home_heat_loss_rate: ua,
            standard_deviation_of_heat_loss_rate: estimate.dispersion.stdev_pct,
            average_heat_load: average_heat_load(
                DESIGN_SET_POINT,
                average_indoor_temperature,
                estimate.balance_point,
                summary.design_temperature,
                ua,
            ),
            maximum_heat_load: max_heat_load(DESIGN_SET_POINT, summary.design_temperature, ua),
        }
    }
}
