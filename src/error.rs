use thiserror::Error;

use crate::quantity::temperature::Fahrenheit;

/// Failures of the balance point and UA estimation.
///
/// Search exhaustion is not an error: the estimation then returns the best result found.
#[derive(Debug, Error, PartialEq)]
pub enum EstimationError {
    /// A billing period must cover at least one day of temperatures.
    #[error("billing period covers no days")]
    EmptyBillingPeriod,

    /// The UA of a winter period is undefined when it has no heating degree-days.
    #[error("winter billing period #{index} has zero heating degree-days at {balance_point}")]
    ZeroDegreeDays { index: usize, balance_point: Fahrenheit },

    /// The dispersion of a single UA value says nothing about the balance point.
    #[error("at least two winter billing periods are required, got {actual}")]
    InsufficientWinterPeriods { actual: usize },

    #[error("average UA {average} cannot normalize the standard deviation")]
    DegenerateAverageUa { average: f64 },

    #[error("{capability} is not yet supported")]
    NotYetSupported { capability: &'static str },
}
