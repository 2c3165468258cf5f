use serde::Serialize;
use statrs::statistics::Statistics;

use crate::error::EstimationError;

/// Average of a UA population and its spread normalized by that average.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Dispersion {
    /// Average UA in BTU/h·°F.
    #[serde(rename = "average_ua")]
    pub average: f64,

    /// Population standard deviation divided by the average, the coefficient of variation.
    pub stdev_pct: f64,
}

impl Dispersion {
    /// Measure a UA population.
    ///
    /// The average must be positive: a zero or negative heat loss cannot normalize anything.
    pub fn try_from_uas(uas: &[f64]) -> Result<Self, EstimationError> {
        if uas.is_empty() {
            return Err(EstimationError::InsufficientWinterPeriods { actual: 0 });
        }
        let average = uas.iter().mean();
        if !average.is_normal() || average.is_sign_negative() {
            return Err(EstimationError::DegenerateAverageUa { average });
        }
        Ok(Self { average, stdev_pct: uas.iter().population_std_dev() / average })
    }

    #[must_use]
    pub fn is_tighter_than(&self, other: &Self) -> bool {
        self.stdev_pct < other.stdev_pct
    }
}
