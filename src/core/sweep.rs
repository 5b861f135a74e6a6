use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    core::{scenario::Scenario, simulation::Simulation},
    prelude::*,
    quantity::{
        Quantity,
        cost::{Cost, DailyCost},
    },
};

/// Number of sampled rental prices, including both ends of the span.
pub const N_POINTS: u32 = 60;

/// The swept span never ends below this daily price.
pub const MIN_SPAN: DailyCost = Quantity(OrderedFloat(100.0));

/// Incremental benefit as a function of the daily rental price.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub enum Sweep {
    /// Nothing is billed, hence the rental price does not matter.
    NotApplicable,

    /// Sampled points ordered by the rental price.
    Curve(Vec<Point>),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Point {
    pub rental_cost_per_day: DailyCost,
    pub incremental_total: Cost,
}

impl Sweep {
    /// Re-run the simulation over evenly spaced rental prices from zero to the upper bound.
    #[instrument(skip_all, fields(rental_cost_per_day = ?scenario.rental_cost_per_day))]
    pub fn run(scenario: &Scenario, baseline: &Simulation) -> Self {
        if baseline.economics.billed_days == 0 {
            info!("nothing is billed, the sweep is not applicable");
            return Self::NotApplicable;
        }
        let upper_bound = upper_bound(
            baseline.economics.rental_cost_per_day,
            baseline.max_indifferent_rental_per_day,
        );
        debug!(?upper_bound, n_points = N_POINTS, "sweeping…");
        let points = (0..N_POINTS)
            .map(|index| {
                let rental_cost_per_day = upper_bound * f64::from(index) / f64::from(N_POINTS - 1);
                let incremental_total = Simulation::run(
                    &scenario.with_rental_cost_per_day(rental_cost_per_day),
                )
                .incremental_total();
                Point { rental_cost_per_day, incremental_total }
            })
            .collect();
        Self::Curve(points)
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Self::NotApplicable => &[],
            Self::Curve(points) => points,
        }
    }

    /// Rental price where the curve crosses zero, interpolated linearly between the samples.
    pub fn zero_crossing(&self) -> Option<DailyCost> {
        self.points().iter().tuple_windows().find_map(|(lhs, rhs)| {
            if lhs.incremental_total >= Cost::ZERO && rhs.incremental_total < Cost::ZERO {
                let fraction = lhs.incremental_total.into_inner()
                    / (lhs.incremental_total - rhs.incremental_total).into_inner();
                Some(
                    lhs.rental_cost_per_day
                        + (rhs.rental_cost_per_day - lhs.rental_cost_per_day) * fraction,
                )
            } else {
                None
            }
        })
    }

    /// Index of the sample closest to the specified price.
    pub fn nearest(&self, rental_cost_per_day: DailyCost) -> Option<usize> {
        self.points()
            .iter()
            .position_min_by_key(|point| {
                Cost::from((point.rental_cost_per_day - rental_cost_per_day).into_inner().abs())
            })
    }
}

/// At least twice the current price, at least 1.5 times the indifference price, at least [`MIN_SPAN`].
fn upper_bound(current: DailyCost, indifference: Option<DailyCost>) -> DailyCost {
    let mut upper_bound = (current * 2.0).max(DailyCost::from(1.0));
    if let Some(indifference) = indifference
        && indifference.is_finite()
    {
        upper_bound = upper_bound.max(indifference.clamp_non_negative() * 1.5);
    }
    if upper_bound.is_finite() { upper_bound.max(MIN_SPAN) } else { MIN_SPAN }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::scenario::FuelMethod;

    fn scenario() -> Scenario {
        Scenario::builder()
            .outage_days(7)
            .production_per_day(800.0)
            .price_per_unit(65.0)
            .non_power_variable_cost_per_unit(20.0)
            .fixed_costs_per_day(6000.0)
            .diesel_price_per_liter(3.72)
            .liters_per_day(700.0)
            .rental_cost_per_day(8000.0)
            .minimum_rental_days(10)
            .build()
    }

    #[test]
    fn test_not_applicable_without_outage() {
        let scenario = Scenario::builder().rental_cost_per_day(8000.0).build();
        let sweep = Sweep::run(&scenario, &Simulation::run(&scenario));
        assert_eq!(sweep, Sweep::NotApplicable);
        assert!(sweep.points().is_empty());
        assert_eq!(sweep.zero_crossing(), None);
    }

    #[test]
    fn test_curve_shape() {
        let scenario = scenario();
        let baseline = Simulation::run(&scenario);
        let sweep = Sweep::run(&scenario, &baseline);
        let points = sweep.points();
        assert_eq!(points.len(), N_POINTS as usize);
        assert_eq!(points[0].rental_cost_per_day, DailyCost::ZERO);

        let indifference = baseline.max_indifferent_rental_per_day.unwrap();
        let expected_upper = (DailyCost::from(16_000.0)).max(indifference * 1.5);
        assert_abs_diff_eq!(
            points[points.len() - 1].rental_cost_per_day.into_inner(),
            expected_upper.into_inner(),
            epsilon = 1e-6,
        );
    }

    fn assert_non_increasing(scenario: &Scenario) {
        let sweep = Sweep::run(scenario, &Simulation::run(scenario));
        assert_eq!(sweep.points().len(), N_POINTS as usize);
        assert!(
            sweep
                .points()
                .iter()
                .tuple_windows()
                .all(|(lhs, rhs)| rhs.incremental_total <= lhs.incremental_total)
        );
    }

    #[test]
    fn test_monotonically_non_increasing() {
        assert_non_increasing(&scenario());
    }

    #[test]
    fn test_monotonically_non_increasing_with_mobilization_and_per_unit_fuel() {
        let scenario = Scenario {
            fuel_method: FuelMethod::PerUnit,
            liters_per_unit: 0.9.into(),
            stop_penalty_per_day: 500.0.into(),
            mobilization_cost: 5000.0.into(),
            ..scenario()
        };
        assert_non_increasing(&scenario);
    }

    #[test]
    fn test_monotonically_non_increasing_with_negative_indifference() {
        let scenario = Scenario::builder()
            .outage_days(3)
            .fixed_costs_per_day(1000.0)
            .rental_cost_per_day(100.0)
            .mobilization_cost(5000.0)
            .minimum_rental_days(10)
            .build();
        let indifference = Simulation::run(&scenario).max_indifferent_rental_per_day.unwrap();
        assert!(indifference < DailyCost::ZERO);
        assert_non_increasing(&scenario);
    }


    #[test]
    fn test_sample_matches_baseline() {
        let scenario = scenario().with_rental_cost_per_day(DailyCost::ZERO);
        let baseline = Simulation::run(&scenario);
        let sweep = Sweep::run(&scenario, &baseline);
        assert_eq!(sweep.points()[0].incremental_total, baseline.incremental_total());
    }

    #[test]
    fn test_zero_crossing_is_near_indifference_price() {
        let scenario = scenario();
        let baseline = Simulation::run(&scenario);
        let sweep = Sweep::run(&scenario, &baseline);
        let crossing = sweep.zero_crossing().unwrap();
        // The curve is linear in the price, so the interpolation is exact up to rounding:
        assert_abs_diff_eq!(
            crossing.into_inner(),
            baseline.max_indifferent_rental_per_day.unwrap().into_inner(),
            epsilon = 1e-6,
        );
    }

    #[test]
    fn test_nearest() {
        let scenario = scenario();
        let sweep = Sweep::run(&scenario, &Simulation::run(&scenario));
        assert_eq!(sweep.nearest(DailyCost::ZERO), Some(0));
        assert_eq!(sweep.nearest(DailyCost::from(1e12)), Some(N_POINTS as usize - 1));
    }

    #[test]
    fn test_upper_bound_minimum_span() {
        assert_eq!(upper_bound(DailyCost::ZERO, None), MIN_SPAN);
        assert_eq!(upper_bound(DailyCost::from(10.0), Some(DailyCost::from(20.0))), MIN_SPAN);
    }

    #[test]
    fn test_upper_bound_follows_current_price() {
        assert_eq!(upper_bound(DailyCost::from(500.0), None), DailyCost::from(1000.0));
    }

    #[test]
    fn test_upper_bound_follows_indifference_price() {
        assert_eq!(
            upper_bound(DailyCost::from(500.0), Some(DailyCost::from(2000.0))),
            DailyCost::from(3000.0),
        );
    }

    #[test]
    fn test_upper_bound_ignores_negative_indifference_price() {
        assert_eq!(
            upper_bound(DailyCost::from(500.0), Some(DailyCost::from(-2000.0))),
            DailyCost::from(1000.0),
        );
    }

    #[test]
    fn test_upper_bound_falls_back_on_non_finite() {
        assert_eq!(upper_bound(DailyCost::from(f64::INFINITY), None), MIN_SPAN);
        assert_eq!(
            upper_bound(DailyCost::from(500.0), Some(DailyCost::from(f64::NAN))),
            DailyCost::from(1000.0),
        );
    }
}
