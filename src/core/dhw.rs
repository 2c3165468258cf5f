use crate::error::EstimationError;

/// Estimates the fuel a boiler burns for domestic hot water.
pub trait BoilerUsage {
    /// Average daily usage in the fuel's billing units.
    ///
    /// `fuel_multiplier` is the fuel-dependent factor of [`crate::core::fuel::FuelType`].
    fn daily_usage(&self, fuel_multiplier: f64) -> Result<f64, EstimationError>;
}

/// There is no boiler usage model yet, so refuse to make up a number.
pub struct UnsupportedBoilerUsage;

impl BoilerUsage for UnsupportedBoilerUsage {
    fn daily_usage(&self, _fuel_multiplier: f64) -> Result<f64, EstimationError> {
        Err(EstimationError::NotYetSupported { capability: "boiler usage estimation" })
    }
}
