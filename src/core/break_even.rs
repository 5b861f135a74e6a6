use serde::{Deserialize, Serialize};

use crate::quantity::cost::Cost;

/// Days on which renting catches up with stopping.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BreakEven {
    /// First day the cumulative difference is non-negative. Informational.
    pub first_day: Option<u32>,

    /// First day after which the cumulative difference never turns negative again.
    pub stable_day: Option<u32>,
}

impl BreakEven {
    /// Scan the `(day, cumulative rent − cumulative stop)` series, ordered by day.
    pub fn scan(differences: &[(u32, Cost)]) -> Self {
        Self { first_day: first_crossing(differences), stable_day: stable(differences) }
    }
}

fn first_crossing(differences: &[(u32, Cost)]) -> Option<u32> {
    differences.iter().find(|(_, difference)| *difference >= Cost::ZERO).map(|(day, _)| *day)
}

/// Smallest day whose suffix minimum is non-negative.
fn stable(differences: &[(u32, Cost)]) -> Option<u32> {
    let mut suffix_minimums = vec![Cost::ZERO; differences.len()];
    let mut running_minimum: Option<Cost> = None;
    for (index, &(_, difference)) in differences.iter().enumerate().rev() {
        let minimum = running_minimum.map_or(difference, |minimum| minimum.min(difference));
        suffix_minimums[index] = minimum;
        running_minimum = Some(minimum);
    }
    differences
        .iter()
        .zip(suffix_minimums)
        .find(|(_, suffix_minimum)| *suffix_minimum >= Cost::ZERO)
        .map(|((day, _), _)| *day)
}
