use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type DegreeDays = Quantity<1, 1>;

impl Display for DegreeDays {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} HDD", self.0)
    }
}

impl Debug for DegreeDays {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}HDD", self.0)
    }
}
