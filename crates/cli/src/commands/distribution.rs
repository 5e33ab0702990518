//! Coin distribution table command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use slotchain_core::distribution::{
    distribution_addresses, locked_distribution_addresses, unlocked_distribution_addresses,
    DISTRIBUTION_ADDRESS_INITIAL_BALANCE,
};

#[derive(Args)]
pub struct DistributionArgs {
    /// Show only locked distribution addresses
    #[arg(long, conflicts_with = "unlocked")]
    locked: bool,

    /// Show only unlocked distribution addresses
    #[arg(long)]
    unlocked: bool,
}

pub fn run(args: DistributionArgs) -> Result<()> {
    let (title, addresses) = if args.locked {
        ("Locked distribution addresses:", locked_distribution_addresses())
    } else if args.unlocked {
        (
            "Unlocked distribution addresses:",
            unlocked_distribution_addresses(),
        )
    } else {
        ("Distribution addresses:", distribution_addresses())
    };

    println!("{}", title.bold().cyan());
    println!(
        "  {} coins each",
        DISTRIBUTION_ADDRESS_INITIAL_BALANCE.to_string().bright_cyan()
    );
    println!();
    for address in &addresses {
        println!("  {}", address.to_hex().bright_yellow());
    }
    println!();
    println!("  {} addresses", addresses.len().to_string().bright_cyan());

    Ok(())
}
