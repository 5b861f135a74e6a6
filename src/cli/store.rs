use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{ScenarioArgs, simulate::report},
    core::simulation::Simulation,
    prelude::*,
    store::{Entry, Store},
    tables::{build_scenario_table, build_store_table},
};

#[derive(Parser)]
pub struct StoreArgs {
    #[clap(long = "store-path", env = "GENSET_STORE_PATH", default_value = "scenarios.toml")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: StoreCommand,
}

#[derive(Subcommand)]
pub enum StoreCommand {
    /// Simulate and save the scenario under the name.
    Save(SaveArgs),

    /// List the saved scenarios, newest first.
    List,

    /// Show the saved inputs and summary.
    Show(NameArgs),

    /// Re-run the saved scenario.
    Run(RunArgs),

    /// Delete the saved scenario.
    Delete(NameArgs),
}

#[derive(Parser)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Parser)]
pub struct SaveArgs {
    pub name: String,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,
}

#[derive(Parser)]
pub struct RunArgs {
    pub name: String,

    /// Also print the per-day table.
    #[clap(long)]
    pub daily: bool,
}

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn manage_store(args: &StoreArgs) -> Result {
    let mut store = Store::read_from(&args.path)?;
    debug!(n_scenarios = store.len(), "loaded");

    match &args.command {
        StoreCommand::Save(save_args) => {
            let scenario = save_args.scenario.scenario();
            let summary = Simulation::run(&scenario).summary();
            let entry = Entry::builder().scenario(scenario).summary(summary).build();
            if store.insert(&save_args.name, entry)?.is_some() {
                warn!(name = %save_args.name, "replaced the existing scenario");
            }
            store.write_to(&args.path)?;
            info!(name = %save_args.name, "saved");
        }

        StoreCommand::List => {
            if store.is_empty() {
                println!("No saved scenarios.");
            } else {
                println!("{}", build_store_table(&store));
            }
        }

        StoreCommand::Show(NameArgs { name }) => {
            let entry = get(&store, name)?;
            println!("{}", build_scenario_table(&entry.scenario));
            println!("{}", entry.summary);
        }

        StoreCommand::Run(run_args) => {
            let entry = get(&store, &run_args.name)?;
            let simulation = Simulation::run(&entry.scenario);
            if simulation.summary() != entry.summary {
                warn!("the result differs from the saved one");
            }
            report(&simulation, run_args.daily);
        }

        StoreCommand::Delete(NameArgs { name }) => {
            ensure!(store.remove(name).is_some(), "scenario `{name}` is not found");
            store.write_to(&args.path)?;
            info!(%name, "deleted");
        }
    }

    Ok(())
}

fn get<'a>(store: &'a Store, name: &str) -> Result<&'a Entry> {
    store.get(name).with_context(|| format!("scenario `{name}` is not found"))
}
