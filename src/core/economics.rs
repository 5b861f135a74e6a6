use std::ops::Sub;

use crate::{
    core::scenario::{FuelMethod, Scenario},
    quantity::{
        cost::{Cost, DailyCost},
        time::Days,
    },
};

/// Longest outage or rental commitment considered, in days.
pub const MAX_DAYS: i64 = 365;

/// Per-day figures derived from a [`Scenario`], with every input clamped to be non-negative.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Economics {
    pub outage_days: u32,

    /// Days the rental vendor charges for: zero without an outage, otherwise at least the outage.
    pub billed_days: u32,

    /// Simulated span, covering the outage and any extra billed days.
    pub horizon_days: u32,

    pub revenue_per_day: DailyCost,
    pub non_power_variable_per_day: DailyCost,
    pub fuel_cost_per_day: DailyCost,
    pub fixed_costs_per_day: DailyCost,
    pub stop_penalty_per_day: DailyCost,
    pub rental_cost_per_day: DailyCost,

    /// Mobilization fee spread evenly over the billed days.
    pub mobilization_per_billed_day: DailyCost,
}

impl From<&Scenario> for Economics {
    fn from(scenario: &Scenario) -> Self {
        let outage_days = clamp_days(scenario.outage_days);
        let billed_days = if outage_days == 0 {
            0
        } else {
            outage_days.max(clamp_days(scenario.minimum_rental_days))
        };

        let production = scenario.production_per_day.clamp_non_negative();
        let mobilization = scenario.mobilization_cost.clamp_non_negative();

        Self {
            outage_days,
            billed_days,
            horizon_days: outage_days.max(billed_days),
            revenue_per_day: production * scenario.price_per_unit.clamp_non_negative(),
            non_power_variable_per_day: production
                * scenario.non_power_variable_cost_per_unit.clamp_non_negative(),
            fuel_cost_per_day: fuel_cost_per_day(scenario, outage_days),
            fixed_costs_per_day: scenario.fixed_costs_per_day.clamp_non_negative(),
            stop_penalty_per_day: scenario.stop_penalty_per_day.clamp_non_negative(),
            rental_cost_per_day: scenario.rental_cost_per_day.clamp_non_negative(),
            mobilization_per_billed_day: if billed_days == 0 {
                DailyCost::ZERO
            } else {
                mobilization / Days::from(billed_days)
            },
        }
    }
}

impl Economics {
    /// Profit contribution of each strategy on the 1-based `day`.
    ///
    /// Only the incremental decision window is modelled: once the outage is over,
    /// stopping costs nothing more and renting costs only the remaining billed days.
    pub fn outcome(&self, day: u32) -> Outcome<Cost> {
        let in_outage = day <= self.outage_days;

        let stop = if in_outage {
            DailyCost::ZERO - (self.fixed_costs_per_day + self.stop_penalty_per_day)
        } else {
            DailyCost::ZERO
        };

        let rent = if in_outage {
            self.revenue_per_day
                - self.non_power_variable_per_day
                - self.fuel_cost_per_day
                - self.fixed_costs_per_day
                - self.rental_charge(day)
                - self.mobilization_charge(day)
        } else {
            // Minimum-commitment tail, no operational benefit:
            DailyCost::ZERO - (self.rental_charge(day) + self.mobilization_charge(day))
        };

        Outcome { stop: stop * Days::ONE, rent: rent * Days::ONE }
    }

    const fn is_billed(&self, day: u32) -> bool {
        day <= self.billed_days
    }

    fn rental_charge(&self, day: u32) -> DailyCost {
        if self.is_billed(day) { self.rental_cost_per_day } else { DailyCost::ZERO }
    }

    fn mobilization_charge(&self, day: u32) -> DailyCost {
        if self.is_billed(day) { self.mobilization_per_billed_day } else { DailyCost::ZERO }
    }
}

/// The generator never runs without an outage, so the fuel is free then regardless of the method.
fn fuel_cost_per_day(scenario: &Scenario, outage_days: u32) -> DailyCost {
    if outage_days == 0 {
        return DailyCost::ZERO;
    }
    let liters = match scenario.fuel_method {
        FuelMethod::PerUnit => {
            scenario.production_per_day.clamp_non_negative()
                * scenario.liters_per_unit.clamp_non_negative()
        }
        FuelMethod::PerDay => scenario.liters_per_day.clamp_non_negative(),
    };
    liters * scenario.diesel_price_per_liter.clamp_non_negative()
}

fn clamp_days(days: i64) -> u32 {
    u32::try_from(days.clamp(0, MAX_DAYS)).unwrap_or_default()
}

/// A pair of values, one per strategy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct Outcome<T> {
    /// Halt production for the outage.
    pub stop: T,

    /// Rent a generator and keep producing.
    pub rent: T,
}

impl<T: Copy + Sub<Output = T>> Outcome<T> {
    /// Renting minus stopping: positive when renting is better.
    pub fn difference(&self) -> T {
        self.rent - self.stop
    }
}
