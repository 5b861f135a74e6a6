use clap::Parser;

use crate::{
    cli::ScenarioArgs,
    core::{simulation::Simulation, sweep::Sweep},
    prelude::*,
    tables::build_sweep_table,
};

#[derive(Parser)]
pub struct SweepArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,
}

#[instrument(skip_all)]
pub fn sweep(args: &SweepArgs) -> Result {
    let scenario = args.scenario.scenario();
    let baseline = Simulation::run(&scenario);
    let sweep = Sweep::run(&scenario, &baseline);
    if sweep == Sweep::NotApplicable {
        println!("Sensitivity to the rental price is not applicable: nothing is billed.");
        return Ok(());
    }
    println!("{}", build_sweep_table(&sweep, &scenario));
    match sweep.zero_crossing() {
        Some(price) => println!("Renting breaks even at about {price}."),
        None => println!("The benefit does not change its sign within the swept span."),
    }
    Ok(())
}
