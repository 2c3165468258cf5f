pub mod degree_days;
pub mod temperature;
pub mod time;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Physical quantity with the dimension exponents encoded in the type.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<const TEMPERATURE: isize, const TIME: isize>(pub f64);

impl<const TEMPERATURE: isize, const TIME: isize> Quantity<TEMPERATURE, TIME> {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }

    #[must_use]
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }
}

impl<const TEMPERATURE: isize, const TIME: isize> Mul<f64> for Quantity<TEMPERATURE, TIME> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const TEMPERATURE: isize, const TIME: isize> Div<f64> for Quantity<TEMPERATURE, TIME> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}
