//! Scenario parameters, defaulting to a mid-size aggregates plant.

use clap::Parser;

use crate::core::{
    economics::MAX_DAYS,
    scenario::{FuelMethod, Scenario},
};

#[must_use]
#[derive(Clone, Parser)]
pub struct ScenarioArgs {
    /// Length of the power interruption in days.
    #[clap(
        long,
        default_value = "7",
        env = "GENSET_OUTAGE_DAYS",
        value_parser = clap::value_parser!(i64).range(0..=MAX_DAYS),
    )]
    pub outage_days: i64,

    #[clap(flatten)]
    pub plant: PlantArgs,

    #[clap(flatten)]
    pub fuel: FuelArgs,

    #[clap(flatten)]
    pub rental: RentalArgs,
}

impl ScenarioArgs {
    pub fn scenario(&self) -> Scenario {
        Scenario::builder()
            .outage_days(self.outage_days)
            .production_per_day(self.plant.production_per_day)
            .price_per_unit(self.plant.price_per_unit)
            .non_power_variable_cost_per_unit(self.plant.non_power_variable_cost_per_unit)
            .fixed_costs_per_day(self.plant.fixed_costs_per_day)
            .stop_penalty_per_day(self.plant.stop_penalty_per_day)
            .fuel_method(self.fuel.method)
            .diesel_price_per_liter(self.fuel.diesel_price_per_liter)
            .liters_per_day(self.fuel.liters_per_day)
            .liters_per_unit(self.fuel.liters_per_unit)
            .rental_cost_per_day(self.rental.cost_per_day)
            .mobilization_cost(self.rental.mobilization_cost)
            .minimum_rental_days(self.rental.minimum_days)
            .build()
    }
}

/// Plant economics while running, and the costs that continue while stopped.
#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct PlantArgs {
    /// Production in units (tonnes, cubic metres…) per day.
    #[clap(long, default_value = "800", env = "GENSET_PRODUCTION_PER_DAY")]
    pub production_per_day: f64,

    /// Selling price per unit.
    #[clap(long, default_value = "65", env = "GENSET_PRICE_PER_UNIT")]
    pub price_per_unit: f64,

    /// Costs that scale with production excluding the generator diesel: loader wear, consumables…
    #[clap(long, default_value = "20", env = "GENSET_NON_POWER_VARIABLE_COST_PER_UNIT")]
    pub non_power_variable_cost_per_unit: f64,

    /// Payroll, administration, security, leases, and whatever else continues during a stoppage.
    #[clap(long, default_value = "6000", env = "GENSET_FIXED_COSTS_PER_DAY")]
    pub fixed_costs_per_day: f64,

    /// Contract penalties or client loss per day of stoppage.
    #[clap(long, default_value = "0", env = "GENSET_STOP_PENALTY_PER_DAY")]
    pub stop_penalty_per_day: f64,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct FuelArgs {
    #[clap(long = "fuel-method", value_enum, default_value = "per-day", env = "GENSET_FUEL_METHOD")]
    pub method: FuelMethod,

    #[clap(long, default_value = "3.72", env = "GENSET_DIESEL_PRICE_PER_LITER")]
    pub diesel_price_per_liter: f64,

    /// Diesel consumption with `--fuel-method=per-day`.
    #[clap(long, default_value = "700", env = "GENSET_LITERS_PER_DAY")]
    pub liters_per_day: f64,

    /// Diesel consumption with `--fuel-method=per-unit`.
    #[clap(long, default_value = "0.9", env = "GENSET_LITERS_PER_UNIT")]
    pub liters_per_unit: f64,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct RentalArgs {
    #[clap(long = "rental-cost-per-day", default_value = "8000", env = "GENSET_RENTAL_COST_PER_DAY")]
    pub cost_per_day: f64,

    /// One-time mobilization and installation fee.
    #[clap(long, default_value = "0", env = "GENSET_MOBILIZATION_COST")]
    pub mobilization_cost: f64,

    /// Days the vendor bills for even if the outage is shorter.
    #[clap(
        long = "minimum-rental-days",
        default_value = "0",
        env = "GENSET_MINIMUM_RENTAL_DAYS",
        value_parser = clap::value_parser!(i64).range(0..=MAX_DAYS),
    )]
    pub minimum_days: i64,
}
