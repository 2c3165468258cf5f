use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, degree_days::DegreeDays, time::Days};

/// Degrees Fahrenheit, either a temperature or a temperature difference.
pub type Fahrenheit = Quantity<1, 0>;

impl Display for Fahrenheit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} °F", self.0)
    }
}

impl Debug for Fahrenheit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}°F", self.0)
    }
}

impl Mul<Days> for Fahrenheit {
    type Output = DegreeDays;

    fn mul(self, rhs: Days) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
