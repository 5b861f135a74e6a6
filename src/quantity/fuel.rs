use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{
    Quantity,
    cost::DailyCost,
    output::DailyOutput,
};

/// Diesel burnt per day.
pub type DailyLiters = Quantity<0, 1, -1, 0>;

/// Diesel burnt per produced unit.
pub type LitersPerUnit = Quantity<-1, 1, 0, 0>;

/// Diesel price.
pub type LiterPrice = Quantity<0, -1, 0, 1>;

implement_mul!(DailyOutput, LitersPerUnit, DailyLiters);
implement_mul!(DailyLiters, LiterPrice, DailyCost);

impl Display for DailyLiters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} l/day", self.0)
    }
}

impl Debug for DailyLiters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}l/d", self.0)
    }
}

impl Display for LitersPerUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} l/u", self.0)
    }
}

impl Debug for LitersPerUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}l/u", self.0)
    }
}

impl Display for LiterPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} /l", self.0)
    }
}

impl Debug for LiterPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}$/l", self.0)
    }
}
