use crate::quantity::{Quantity, temperature::Fahrenheit};

/// Standard indoor temperature the heating system is sized for, as opposed to the preferred
/// set point of a particular homeowner.
pub const DESIGN_SET_POINT: Fahrenheit = Quantity(70.0);

/// Average indoor temperature of a home with a thermostat setback.
#[must_use]
pub fn average_indoor_temp(
    tstat_set: Fahrenheit,
    tstat_setback: Fahrenheit,
    setback_daily_hrs: f64,
) -> Fahrenheit {
    (tstat_set * (24.0 - setback_daily_hrs) + tstat_setback * setback_daily_hrs) / 24.0
}

/// Average heat load in BTU/h at the design temperature.
///
/// The gap between the indoor temperature and the balance point is covered by internal gains,
/// so it is subtracted from the design temperature difference.
#[must_use]
pub fn average_heat_load(
    design_set_point: Fahrenheit,
    avg_indoor_temp: Fahrenheit,
    balance_point: Fahrenheit,
    design_temp: Fahrenheit,
    ua: f64,
) -> f64 {
    (design_set_point - (avg_indoor_temp - balance_point) - design_temp).0 * ua
}

/// Maximum heat load in BTU/h, ignoring internal gains.
#[must_use]
pub fn max_heat_load(design_set_point: Fahrenheit, design_temp: Fahrenheit, ua: f64) -> f64 {
    (design_set_point - design_temp).0 * ua
}
