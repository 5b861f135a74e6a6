#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod store;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, manage_store, simulate, sweep},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    debug!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Simulate(args) => simulate(&args)?,
        Command::Sweep(args) => sweep(&args)?,
        Command::Scenario(args) => manage_store(&args)?,
    }

    Ok(())
}
