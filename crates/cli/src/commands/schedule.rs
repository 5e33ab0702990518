//! Validator schedule command.
//!
//! Computes which validator is authorized for a slot from an ordered
//! validator file, without talking to a node.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use slotchain_consensus::{next_slot_start, prev_slot_start, Dpos, Error, ValidatorSet, BLOCK_INTERVAL};
use slotchain_core::Address;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ScheduleArgs {
    /// JSON file holding the ordered validator list (array of hex addresses)
    #[arg(short, long)]
    validators: PathBuf,

    /// Slot-aligned Unix timestamp in seconds
    timestamp: u64,
}

pub fn run(args: ScheduleArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.validators)
        .with_context(|| format!("Failed to read {}", args.validators.display()))?;
    let validators = parse_validator_list(&contents)?;

    let set = Arc::new(ValidatorSet::new());
    set.set_validators(validators);
    let dpos = Dpos::new(set);

    match dpos.lookup_validator(args.timestamp) {
        Ok(validator) => {
            println!("{}", "Slot schedule:".bold().cyan());
            println!();
            println!(
                "  Slot:      [{}, {})",
                args.timestamp.to_string().bright_cyan(),
                (args.timestamp + BLOCK_INTERVAL).to_string().bright_cyan()
            );
            println!("  Validator: {}", validator.to_hex().bright_yellow());
            Ok(())
        }
        Err(Error::MisalignedSlotTime) => {
            bail!(
                "timestamp {} is not slot-aligned (previous boundary {}, next boundary {})",
                args.timestamp,
                prev_slot_start(args.timestamp),
                next_slot_start(args.timestamp)
            )
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_validator_list(contents: &str) -> Result<Vec<Address>> {
    let entries: Vec<String> =
        serde_json::from_str(contents).context("Validator file must be a JSON array of hex addresses")?;
    entries
        .iter()
        .map(|s| {
            Address::from_hex(s).with_context(|| format!("Invalid validator address: {}", s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validator_list() {
        let contents = r#"[
            "0xe425b2bd8a3c458b90cef1af8641aa32656d907f",
            "49d4c0d27f79cd29c75284598186bfcfce9dbc7f"
        ]"#;
        let validators = parse_validator_list(contents).unwrap();
        assert_eq!(validators.len(), 2);
        assert_ne!(validators[0], validators[1]);
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!(parse_validator_list(r#"["nothex"]"#).is_err());
        assert!(parse_validator_list(r#"{"validators": []}"#).is_err());
    }

    #[test]
    fn test_run_with_validator_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validators.json");
        fs::write(
            &path,
            r#"["0xe425b2bd8a3c458b90cef1af8641aa32656d907f"]"#,
        )
        .unwrap();

        let ok = ScheduleArgs {
            validators: path.clone(),
            timestamp: 3 * BLOCK_INTERVAL,
        };
        assert!(run(ok).is_ok());

        let misaligned = ScheduleArgs {
            validators: path,
            timestamp: 3 * BLOCK_INTERVAL + 1,
        };
        let err = run(misaligned).unwrap_err().to_string();
        assert!(err.contains("not slot-aligned"));
    }
}
