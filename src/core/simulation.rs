use crate::{
    core::{
        break_even::BreakEven,
        economics::{Economics, Outcome},
        indifference::max_indifferent_rental_per_day,
        scenario::Scenario,
        summary::Summary,
    },
    prelude::*,
    quantity::cost::{Cost, DailyCost},
};

/// Single simulated day.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Step {
    /// 1-based day index.
    pub day: u32,

    /// Profit contribution of this very day.
    pub profit: Outcome<Cost>,

    /// Running total up to and including this day.
    pub cumulative: Outcome<Cost>,
}

/// Outcome of both strategies over the horizon.
///
/// Always computed afresh from a [`Scenario`], the same scenario yields the same result.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Simulation {
    pub economics: Economics,
    pub steps: Vec<Step>,
    pub total: Outcome<Cost>,
    pub break_even: BreakEven,
    pub max_indifferent_rental_per_day: Option<DailyCost>,
}

impl Simulation {
    #[instrument(skip_all, fields(outage_days = scenario.outage_days))]
    pub fn run(scenario: &Scenario) -> Self {
        let economics = Economics::from(scenario);
        debug!(?economics, "derived");

        let mut steps = Vec::with_capacity(economics.horizon_days as usize);
        let mut cumulative = Outcome { stop: Cost::ZERO, rent: Cost::ZERO };
        for day in 1..=economics.horizon_days {
            let profit = economics.outcome(day);
            cumulative.stop += profit.stop;
            cumulative.rent += profit.rent;
            steps.push(Step { day, profit, cumulative });
        }

        let total = steps.last().map_or_else(Outcome::default, |step| step.cumulative);
        let break_even = BreakEven::scan(
            &steps.iter().map(|step| (step.day, step.cumulative.difference())).collect::<Vec<_>>(),
        );
        let max_indifferent_rental_per_day = max_indifferent_rental_per_day(&economics, total);

        Self { economics, steps, total, break_even, max_indifferent_rental_per_day }
    }

    /// Renting minus stopping over the whole horizon.
    pub fn incremental_total(&self) -> Cost {
        self.total.difference()
    }

    /// Scalar part of the result, without the per-day series.
    pub fn summary(&self) -> Summary {
        Summary {
            outage_days: self.economics.outage_days,
            billed_days: self.economics.billed_days,
            horizon_days: self.economics.horizon_days,
            revenue_per_day: self.economics.revenue_per_day,
            non_power_variable_per_day: self.economics.non_power_variable_per_day,
            fuel_cost_per_day: self.economics.fuel_cost_per_day,
            mobilization_per_billed_day: self.economics.mobilization_per_billed_day,
            total_stop: self.total.stop,
            total_rent: self.total.rent,
            incremental_total: self.incremental_total(),
            break_even_day: self.break_even.first_day,
            stable_break_even_day: self.break_even.stable_day,
            max_rental_cost_per_day: self.max_indifferent_rental_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::scenario::FuelMethod;

    fn plant() -> Scenario {
        Scenario::builder()
            .outage_days(7)
            .production_per_day(800.0)
            .price_per_unit(65.0)
            .non_power_variable_cost_per_unit(20.0)
            .fixed_costs_per_day(6000.0)
            .stop_penalty_per_day(500.0)
            .fuel_method(FuelMethod::PerUnit)
            .diesel_price_per_liter(3.72)
            .liters_per_unit(0.9)
            .rental_cost_per_day(8000.0)
            .mobilization_cost(5000.0)
            .minimum_rental_days(10)
            .build()
    }

    #[test]
    fn test_deterministic() {
        let scenario = plant();
        let first = Simulation::run(&scenario);
        let second = Simulation::run(&scenario);
        assert_eq!(first, second);
        for (lhs, rhs) in first.steps.iter().zip(&second.steps) {
            assert_eq!(
                lhs.cumulative.rent.into_inner().to_bits(),
                rhs.cumulative.rent.into_inner().to_bits(),
            );
        }
    }

    #[test]
    fn test_zero_outage() {
        let simulation = Simulation::run(
            &Scenario::builder()
                .production_per_day(800.0)
                .price_per_unit(65.0)
                .fixed_costs_per_day(6000.0)
                .rental_cost_per_day(8000.0)
                .minimum_rental_days(5)
                .build(),
        );
        assert_eq!(simulation.economics.billed_days, 0);
        assert_eq!(simulation.economics.horizon_days, 0);
        assert!(simulation.steps.is_empty());
        assert_eq!(simulation.total, Outcome { stop: Cost::ZERO, rent: Cost::ZERO });
        assert_eq!(simulation.incremental_total(), Cost::ZERO);
        assert_eq!(simulation.break_even, BreakEven::default());
        assert_eq!(simulation.max_indifferent_rental_per_day, None);
    }

    #[test]
    fn test_clamping_matches_zero() {
        for fuel_method in [FuelMethod::PerDay, FuelMethod::PerUnit] {
            let negative = Scenario::builder()
                .outage_days(5)
                .production_per_day(-800.0)
                .price_per_unit(-65.0)
                .non_power_variable_cost_per_unit(-20.0)
                .fixed_costs_per_day(-6000.0)
                .stop_penalty_per_day(-500.0)
                .fuel_method(fuel_method)
                .diesel_price_per_liter(-3.72)
                .liters_per_day(-700.0)
                .liters_per_unit(-0.9)
                .rental_cost_per_day(-8000.0)
                .mobilization_cost(-5000.0)
                .minimum_rental_days(-10)
                .build();
            let zeroed = Scenario::builder().outage_days(5).fuel_method(fuel_method).build();
            assert_eq!(Simulation::run(&negative), Simulation::run(&zeroed));
        }
    }

    #[test]
    fn test_saturated_day_counts() {
        let simulation = Simulation::run(&Scenario {
            outage_days: i64::MAX,
            minimum_rental_days: i64::MAX,
            ..plant()
        });
        assert_eq!(simulation.economics.horizon_days, 365);
        assert_eq!(simulation.steps.len(), 365);
        assert_eq!(simulation.steps.last().map(|step| step.day), Some(365));
    }

    #[test]
    fn test_stop_favoured() {
        let simulation = Simulation::run(
            &Scenario::builder()
                .outage_days(5)
                .fixed_costs_per_day(1000.0)
                .rental_cost_per_day(500.0)
                .build(),
        );
        assert!(simulation.incremental_total() < Cost::ZERO);
        assert_abs_diff_eq!(simulation.total.stop.into_inner(), -5000.0);
        assert_abs_diff_eq!(simulation.total.rent.into_inner(), -7500.0);
        assert_eq!(simulation.break_even, BreakEven::default());
    }

    #[test]
    fn test_rent_favoured() {
        let simulation = Simulation::run(
            &Scenario::builder()
                .outage_days(10)
                .production_per_day(100.0)
                .price_per_unit(50.0)
                .rental_cost_per_day(10.0)
                .build(),
        );
        assert_abs_diff_eq!(simulation.total.rent.into_inner(), 49_900.0);
        assert_abs_diff_eq!(simulation.total.stop.into_inner(), 0.0);
        assert_abs_diff_eq!(simulation.incremental_total().into_inner(), 49_900.0);
        assert_eq!(simulation.break_even.first_day, Some(1));
        assert_eq!(simulation.break_even.stable_day, Some(1));
    }

    #[test]
    fn test_minimum_rental_exceeds_outage() {
        let simulation = Simulation::run(
            &Scenario::builder()
                .outage_days(3)
                .minimum_rental_days(10)
                .production_per_day(100.0)
                .price_per_unit(50.0)
                .fixed_costs_per_day(1000.0)
                .rental_cost_per_day(300.0)
                .mobilization_cost(2000.0)
                .build(),
        );
        assert_eq!(simulation.economics.billed_days, 10);
        assert_eq!(simulation.economics.horizon_days, 10);
        assert_eq!(simulation.steps.len(), 10);
        for step in &simulation.steps[3..] {
            assert_eq!(step.profit.stop, Cost::ZERO);
            assert_abs_diff_eq!(step.profit.rent.into_inner(), -500.0);
        }
        // Days 1–3: 5000 − 1000 − 300 − 200 = 3500 vs. −1000:
        assert_abs_diff_eq!(simulation.steps[2].cumulative.rent.into_inner(), 10_500.0);
        assert_abs_diff_eq!(simulation.steps[2].cumulative.stop.into_inner(), -3000.0);
        assert_abs_diff_eq!(simulation.total.rent.into_inner(), 7000.0);
        assert_abs_diff_eq!(simulation.total.stop.into_inner(), -3000.0);
    }

    #[test]
    fn test_cumulative_series() {
        let simulation = Simulation::run(&plant());
        let mut expected = Outcome { stop: Cost::ZERO, rent: Cost::ZERO };
        for (step, day) in simulation.steps.iter().zip(1..) {
            assert_eq!(step.day, day);
            expected.stop += step.profit.stop;
            expected.rent += step.profit.rent;
            assert_eq!(step.cumulative, expected);
        }
        assert_eq!(simulation.total, expected);
    }

    #[test]
    fn test_break_even_consistency() {
        let simulation = Simulation::run(&plant());
        if let (Some(first_day), Some(stable_day)) =
            (simulation.break_even.first_day, simulation.break_even.stable_day)
        {
            assert!(stable_day >= first_day);
        }
    }

    #[test]
    fn test_indifference_price_zeroes_the_benefit() {
        let scenario = plant();
        let price = Simulation::run(&scenario).max_indifferent_rental_per_day.unwrap();
        assert!(price > DailyCost::ZERO);
        let simulation = Simulation::run(&scenario.with_rental_cost_per_day(price));
        assert_abs_diff_eq!(simulation.incremental_total().into_inner(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_summary() {
        let simulation = Simulation::run(&plant());
        let summary = simulation.summary();
        assert_eq!(summary.billed_days, 10);
        assert_eq!(summary.incremental_total, simulation.incremental_total());
        assert_eq!(summary.stable_break_even_day, simulation.break_even.stable_day);
        assert_eq!(summary.max_rental_cost_per_day, simulation.max_indifferent_rental_per_day);
    }
}
