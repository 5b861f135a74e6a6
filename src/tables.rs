use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        scenario::{FuelMethod, Scenario},
        simulation::Step,
        summary::{Summary, profit_color},
        sweep::Sweep,
    },
    store::Store,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Per-day audit table.
pub fn build_steps_table(steps: &[Step]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Day",
        "Profit stop",
        "Profit rent",
        "Cumulative stop",
        "Cumulative rent",
        "Rent − Stop",
    ]);
    for step in steps {
        let difference = step.cumulative.difference();
        table.add_row(vec![
            Cell::new(step.day).add_attribute(Attribute::Dim),
            Cell::new(step.profit.stop)
                .set_alignment(CellAlignment::Right)
                .fg(profit_color(step.profit.stop)),
            Cell::new(step.profit.rent)
                .set_alignment(CellAlignment::Right)
                .fg(profit_color(step.profit.rent)),
            Cell::new(step.cumulative.stop).set_alignment(CellAlignment::Right),
            Cell::new(step.cumulative.rent).set_alignment(CellAlignment::Right),
            Cell::new(difference)
                .set_alignment(CellAlignment::Right)
                .fg(profit_color(difference))
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Daily economics of the plant when it runs on the generator.
pub fn build_economics_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Revenue", "Non-power variable", "Fuel", "Mobilization", "Horizon"]);
    table.add_row(vec![
        Cell::new(summary.revenue_per_day).fg(Color::Green),
        Cell::new(summary.non_power_variable_per_day).fg(Color::Red),
        Cell::new(summary.fuel_cost_per_day).fg(Color::Red),
        Cell::new(summary.mobilization_per_billed_day).fg(Color::Red),
        Cell::new(format!("{} days", summary.horizon_days)),
    ]);
    table
}

pub fn build_sweep_table(sweep: &Sweep, scenario: &Scenario) -> Table {
    let current = sweep.nearest(scenario.rental_cost_per_day.clamp_non_negative());
    let mut table = new_table();
    table.set_header(vec!["Rental", "Rent − Stop"]);
    for (index, point) in sweep.points().iter().enumerate() {
        let mut price = Cell::new(point.rental_cost_per_day).set_alignment(CellAlignment::Right);
        if current == Some(index) {
            price = price.add_attribute(Attribute::Bold).fg(Color::Cyan);
        }
        table.add_row(vec![
            price,
            Cell::new(point.incremental_total)
                .set_alignment(CellAlignment::Right)
                .fg(profit_color(point.incremental_total)),
        ]);
    }
    table
}

pub fn build_scenario_table(scenario: &Scenario) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Parameter", "Value"]);
    let fuel_consumption = match scenario.fuel_method {
        FuelMethod::PerDay => scenario.liters_per_day.to_string(),
        FuelMethod::PerUnit => scenario.liters_per_unit.to_string(),
    };
    let rows: [(&str, String); 12] = [
        ("Outage", format!("{} days", scenario.outage_days)),
        ("Production", scenario.production_per_day.to_string()),
        ("Selling price", scenario.price_per_unit.to_string()),
        ("Non-power variable cost", scenario.non_power_variable_cost_per_unit.to_string()),
        ("Fixed costs", scenario.fixed_costs_per_day.to_string()),
        ("Stop penalty", scenario.stop_penalty_per_day.to_string()),
        ("Fuel method", format!("{:?}", scenario.fuel_method)),
        ("Diesel price", scenario.diesel_price_per_liter.to_string()),
        ("Diesel consumption", fuel_consumption),
        ("Rental", scenario.rental_cost_per_day.to_string()),
        ("Mobilization", scenario.mobilization_cost.to_string()),
        ("Minimum rental", format!("{} days", scenario.minimum_rental_days)),
    ];
    for (parameter, value) in rows {
        table.add_row(vec![
            Cell::new(parameter).add_attribute(Attribute::Dim),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_store_table(store: &Store) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Created", "Outage", "Rent − Stop", "Recommendation"]);
    for (name, entry) in store.newest_first() {
        let recommendation = entry.summary.recommendation();
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(entry.created_at.format("%Y-%m-%d %H:%M")).add_attribute(Attribute::Dim),
            Cell::new(format!("{} days", entry.summary.outage_days)),
            Cell::new(entry.summary.incremental_total)
                .set_alignment(CellAlignment::Right)
                .fg(profit_color(entry.summary.incremental_total)),
            Cell::new(recommendation).fg(recommendation.color()),
        ]);
    }
    table
}
