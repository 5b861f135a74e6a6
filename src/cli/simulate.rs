use clap::Parser;

use crate::{
    cli::ScenarioArgs,
    core::simulation::Simulation,
    prelude::*,
    tables::{build_economics_table, build_steps_table},
};

#[derive(Parser)]
pub struct SimulateArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Also print the per-day table.
    #[clap(long)]
    pub daily: bool,
}

#[instrument(skip_all)]
pub fn simulate(args: &SimulateArgs) -> Result {
    let simulation = Simulation::run(&args.scenario.scenario());
    report(&simulation, args.daily);
    Ok(())
}

/// Print the simulation outcome.
pub fn report(simulation: &Simulation, daily: bool) {
    let summary = simulation.summary();
    info!(
        total_stop = %summary.total_stop,
        total_rent = %summary.total_rent,
        incremental_total = %summary.incremental_total,
        recommendation = %summary.recommendation(),
        "simulated",
    );
    if summary.outage_days == 0 {
        info!("the outage is zero days long, renting is typically unnecessary");
    }
    if summary.billed_days > summary.outage_days {
        warn!(
            billed_days = summary.billed_days,
            outage_days = summary.outage_days,
            "minimum rental days exceed the outage, the extra billed days are modelled as cost only",
        );
    }
    if daily {
        println!("{}", build_steps_table(&simulation.steps));
    }
    println!("{}", build_economics_table(&summary));
    println!("{summary}");
}
