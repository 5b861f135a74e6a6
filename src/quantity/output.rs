use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{Quantity, cost::DailyCost};

/// Produced units (tonnes, cubic metres…) per day.
pub type DailyOutput = Quantity<1, 0, -1, 0>;

/// Selling price or per-unit cost of the product.
pub type UnitPrice = Quantity<-1, 0, 0, 1>;

implement_mul!(DailyOutput, UnitPrice, DailyCost);

impl Display for DailyOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} u/day", self.0)
    }
}

impl Debug for DailyOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}u/d", self.0)
    }
}

impl Display for UnitPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} /u", self.0)
    }
}

impl Debug for UnitPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$/u", self.0)
    }
}
