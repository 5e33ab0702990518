//! Rich list query command: a read-only wrapper over the node API.

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Args)]
pub struct RichlistArgs {
    /// Number of top addresses to return
    #[arg(default_value_t = 20)]
    top: usize,

    /// Include distribution addresses in the result
    #[arg(long)]
    include_distribution: bool,

    /// Node API base URL
    #[arg(long, default_value = "http://127.0.0.1:6420")]
    node: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RichlistEntry {
    address: String,
    coins: String,
    locked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Richlist {
    richlist: Vec<RichlistEntry>,
}

pub fn run(args: RichlistArgs) -> Result<()> {
    let url = format!(
        "{}/api/v1/richlist?n={}&include-distribution={}",
        args.node.trim_end_matches('/'),
        args.top,
        args.include_distribution
    );

    let response = reqwest::blocking::get(&url)
        .with_context(|| format!("Failed to query node at {}", url))?
        .error_for_status()
        .context("Node returned an error status")?;

    let richlist: Richlist = response.json().context("Malformed richlist response")?;

    println!("{}", serde_json::to_string_pretty(&richlist)?);
    Ok(())
}
