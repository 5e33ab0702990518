//! slotchain CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "slotchain")]
#[command(about = "Tools for a DPoS block scheduling chain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("slotchain - a DPoS block scheduling chain");
            println!("Run 'slotchain --help' for usage information.");
        }
    }
}
