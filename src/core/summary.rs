use std::fmt::{Display, Formatter};

use comfy_table::{Attribute, Cell, Color, Table, modifiers, presets};
use serde::{Deserialize, Serialize};

use crate::quantity::cost::{Cost, DailyCost};

/// Scalar part of a simulation, the one worth storing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Summary {
    pub outage_days: u32,
    pub billed_days: u32,
    pub horizon_days: u32,
    pub revenue_per_day: DailyCost,
    pub non_power_variable_per_day: DailyCost,
    pub fuel_cost_per_day: DailyCost,
    pub mobilization_per_billed_day: DailyCost,
    pub total_stop: Cost,
    pub total_rent: Cost,
    pub incremental_total: Cost,
    pub break_even_day: Option<u32>,
    pub stable_break_even_day: Option<u32>,
    pub max_rental_cost_per_day: Option<DailyCost>,
}

impl Summary {
    pub fn recommendation(&self) -> Recommendation {
        if self.incremental_total > Cost::ZERO {
            Recommendation::Rent
        } else if self.incremental_total < Cost::ZERO {
            Recommendation::Stop
        } else {
            Recommendation::Indifferent
        }
    }

    /// Indifference price as shown to a user: never negative, absent when not finite.
    pub fn presentable_max_rental(&self) -> Option<DailyCost> {
        self.max_rental_cost_per_day
            .filter(|price| price.is_finite())
            .map(DailyCost::clamp_non_negative)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let recommendation = self.recommendation();
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .enforce_styling()
            .set_header(vec![
                Cell::from("Stop"),
                Cell::from("Rent"),
                Cell::from("Rent − Stop"),
                Cell::from("Billed days"),
                Cell::from("Break-even"),
                Cell::from("Stable break-even"),
                Cell::from("Max rental"),
                Cell::from("Recommendation"),
            ])
            .add_row(vec![
                Cell::from(self.total_stop).fg(profit_color(self.total_stop)),
                Cell::from(self.total_rent).fg(profit_color(self.total_rent)),
                Cell::from(self.incremental_total)
                    .fg(profit_color(self.incremental_total))
                    .add_attribute(Attribute::Bold),
                Cell::from(self.billed_days),
                Cell::from(format_day(self.break_even_day)),
                Cell::from(format_day(self.stable_break_even_day)),
                Cell::from(
                    self.presentable_max_rental()
                        .map_or_else(|| "N/A".to_string(), |price| price.to_string()),
                ),
                Cell::from(recommendation)
                    .fg(recommendation.color())
                    .add_attribute(Attribute::Bold),
            ]);
        write!(f, "{table}")
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Recommendation {
    /// Renting yields a higher total profit over the horizon.
    #[display("rent the generator")]
    Rent,

    /// Renting reduces the total profit over the horizon.
    #[display("stop production")]
    Stop,

    #[display("indifferent")]
    Indifferent,
}

impl Recommendation {
    pub const fn color(self) -> Color {
        match self {
            Self::Rent => Color::Green,
            Self::Stop => Color::Red,
            Self::Indifferent => Color::DarkYellow,
        }
    }
}

pub fn profit_color(profit: Cost) -> Color {
    if profit >= Cost::ZERO { Color::Green } else { Color::Red }
}

fn format_day(day: Option<u32>) -> String {
    day.map_or_else(|| "N/A".to_string(), |day| format!("day {day}"))
}
