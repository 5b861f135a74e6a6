use crate::{
    core::economics::{Economics, Outcome},
    quantity::{
        cost::{Cost, DailyCost},
        time::Days,
    },
};

/// Daily rental price at which renting and stopping end up with the same total.
///
/// Any price at or below it makes renting at least as good as stopping over the whole horizon.
/// Negative means that renting loses even for free. [`None`] when nothing is billed.
pub fn max_indifferent_rental_per_day(
    economics: &Economics,
    total: Outcome<Cost>,
) -> Option<DailyCost> {
    if economics.billed_days == 0 {
        return None;
    }
    let billed_days = Days::from(economics.billed_days);
    let total_rent_without_rental = total.rent + economics.rental_cost_per_day * billed_days;
    Some((total_rent_without_rental - total.stop) / billed_days)
}
