//! Layout listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use std::path::PathBuf;

use super::common::{load_bank, scale_label};

#[derive(Args)]
pub struct ListArgs {
    /// Layout file (TOML)
    layout: PathBuf,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let (layout, bank) = load_bank(&args.layout)?;

    println!("{}", layout.name);
    println!("{}", "=".repeat(layout.name.len()));
    if let Some(description) = &layout.description {
        println!();
        println!("{description}");
    }
    println!();

    if bank.is_empty() {
        println!("  (no parameters)");
        return Ok(());
    }

    println!(
        "  {:>3}  {:12}  {:16}  {:6}  {:>10}  {:>10}  {:>12}  {}",
        "#", "Id", "Name", "Unit", "Min", "Max", "Default", "Scale"
    );
    println!(
        "  {:>3}  {:12}  {:16}  {:6}  {:>10}  {:>10}  {:>12}  {}",
        "-", "--", "----", "----", "---", "---", "-------", "-----"
    );

    for (index, (id, param)) in bank.iter().enumerate() {
        println!(
            "  {:>3}  {:12}  {:16}  {:6}  {:>10}  {:>10}  {:>12}  {}",
            index,
            id,
            param.name(),
            param.unit(),
            param.minimum(),
            param.maximum(),
            param.default_actual(),
            scale_label(param.scale())
        );
    }

    Ok(())
}
