use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{Quantity, time::Days};

/// Money, in whatever currency the scenario is expressed in.
pub type Cost = Quantity<0, 0, 0, 1>;

/// Money per day.
pub type DailyCost = Quantity<0, 0, -1, 1>;

implement_mul!(DailyCost, Days, Cost);
implement_div!(Cost, Days, DailyCost);

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$", self.0)
    }
}

impl Display for DailyCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} /day", self.0)
    }
}

impl Debug for DailyCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$/d", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_daily_cost_over_days() {
        let cost = DailyCost::from(250.0) * Days::from(4_u32);
        assert_abs_diff_eq!(cost.into_inner(), 1000.0);
    }

    #[test]
    fn test_cost_spread_over_days() {
        let daily = Cost::from(1000.0) / Days::from(8_u32);
        assert_abs_diff_eq!(daily.into_inner(), 125.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(-1234.567).to_string(), "-1234.57");
        assert_eq!(DailyCost::from(8000.0).to_string(), "8000.00 /day");
    }
}
