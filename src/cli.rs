mod scenario;
mod simulate;
mod store;
mod sweep;

use clap::{Parser, Subcommand};

pub use self::{
    scenario::ScenarioArgs,
    simulate::{SimulateArgs, simulate},
    store::{StoreArgs, manage_store},
    sweep::{SweepArgs, sweep},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare stopping production with renting a generator for the outage.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Show how the benefit of renting changes with the daily rental price.
    #[clap(name = "sweep")]
    Sweep(Box<SweepArgs>),

    /// Save, list, and re-run named scenarios.
    #[clap(name = "scenario")]
    Scenario(Box<StoreArgs>),
}
