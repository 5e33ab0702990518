//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod distribution;
mod richlist;
mod schedule;

#[derive(Subcommand)]
pub enum Commands {
    /// Show top address balances from a node
    Richlist(richlist::RichlistArgs),
    /// Show the coin distribution address table
    Distribution(distribution::DistributionArgs),
    /// Show the validator scheduled for a timestamp
    Schedule(schedule::ScheduleArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Richlist(args) => richlist::run(args),
        Commands::Distribution(args) => distribution::run(args),
        Commands::Schedule(args) => schedule::run(args),
    }
}
