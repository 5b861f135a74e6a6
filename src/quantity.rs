#[macro_use]
mod macros;

pub mod cost;
pub mod fuel;
pub mod output;
pub mod time;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Scalar tagged with the exponents of its dimensions: produced units, litres of fuel, days, money.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
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
#[from(f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const OUTPUT: isize, const FUEL: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const OUTPUT: isize, const FUEL: isize, const TIME: isize, const COST: isize>
    Quantity<OUTPUT, FUEL, TIME, COST>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Negative and `NaN` inputs become zero, everything else passes through.
    pub fn clamp_non_negative(self) -> Self {
        // `f64::max` ignores `NaN`:
        Self(OrderedFloat(self.0.0.max(0.0)))
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.0.0
    }
}

impl<const OUTPUT: isize, const FUEL: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<OUTPUT, FUEL, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const OUTPUT: isize, const FUEL: isize, const TIME: isize, const COST: isize> Div<f64>
    for Quantity<OUTPUT, FUEL, TIME, COST>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}
