use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

pub type Days = Quantity<0, 0, 1, 0>;

impl Days {
    pub const ONE: Self = Self(OrderedFloat(1.0));
}

impl From<u32> for Days {
    fn from(days: u32) -> Self {
        Self(OrderedFloat(f64::from(days)))
    }
}

impl Display for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}

impl Debug for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
