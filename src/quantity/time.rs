use std::fmt::{Debug, Formatter};

use crate::quantity::Quantity;

pub type Days = Quantity<0, 1>;

impl Days {
    pub const ONE: Self = Self(1.0);
}

impl Debug for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
