use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::{
    cost::{Cost, DailyCost},
    fuel::{DailyLiters, LiterPrice, LitersPerUnit},
    output::{DailyOutput, UnitPrice},
};

/// Which of the fuel consumption figures is authoritative.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FuelMethod {
    /// Generator burns a fixed amount of diesel per day.
    #[default]
    PerDay,

    /// Generator burns diesel in proportion to the production.
    PerUnit,
}

/// Simulation input: the outage, the plant economics, and the rental terms.
///
/// The values are taken as entered. Negative numbers are tolerated here
/// and treated as zero when the derived economics are computed.
#[derive(Builder, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Scenario {
    /// Length of the power interruption.
    #[builder(default)]
    pub outage_days: i64,

    #[builder(default, into)]
    pub production_per_day: DailyOutput,

    #[builder(default, into)]
    pub price_per_unit: UnitPrice,

    /// Costs that scale with production, excluding the generator diesel.
    #[builder(default, into)]
    pub non_power_variable_cost_per_unit: UnitPrice,

    /// Costs that continue while the plant is stopped.
    #[builder(default, into)]
    pub fixed_costs_per_day: DailyCost,

    /// Contract penalties or lost margin while the plant is stopped.
    #[builder(default, into)]
    pub stop_penalty_per_day: DailyCost,

    #[builder(default)]
    pub fuel_method: FuelMethod,

    #[builder(default, into)]
    pub diesel_price_per_liter: LiterPrice,

    #[builder(default, into)]
    pub liters_per_day: DailyLiters,

    #[builder(default, into)]
    pub liters_per_unit: LitersPerUnit,

    #[builder(default, into)]
    pub rental_cost_per_day: DailyCost,

    /// One-time mobilization and installation fee.
    #[builder(default, into)]
    pub mobilization_cost: Cost,

    /// Days the vendor bills for even if the outage is shorter.
    #[builder(default)]
    pub minimum_rental_days: i64,
}

impl Scenario {
    /// Same scenario with another daily rental price.
    pub const fn with_rental_cost_per_day(self, rental_cost_per_day: DailyCost) -> Self {
        Self { rental_cost_per_day, ..self }
    }
}
