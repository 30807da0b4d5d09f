//! Range change preview command.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use super::common::{load_bank, resolve_param};

#[derive(Args)]
pub struct RemapArgs {
    /// Layout file (TOML)
    layout: PathBuf,

    /// Parameter id or name
    param: String,

    /// New minimum
    #[arg(long, allow_negative_numbers = true)]
    min: f32,

    /// New maximum
    #[arg(long, allow_negative_numbers = true)]
    max: f32,

    /// Position to start from (defaults to the parameter's default)
    #[arg(long)]
    normalized: Option<f32>,
}

pub fn run(args: RemapArgs) -> anyhow::Result<()> {
    let (_, mut bank) = load_bank(&args.layout)?;
    let index = resolve_param(&bank, &args.param)?;
    let param = bank
        .at_mut(index)
        .with_context(|| format!("parameter index {index} out of bounds"))?;

    if let Some(normalized) = args.normalized {
        param
            .set_normalized(normalized)
            .with_context(|| format!("cannot set '{}' to {normalized}", args.param))?;
    }

    let (old_min, old_max) = (param.minimum(), param.maximum());
    let before = param.display_text();

    param
        .set_range(args.min, args.max)
        .with_context(|| format!("cannot remap '{}'", args.param))?;

    println!("parameter:  {}", param.name());
    println!(
        "range:      [{old_min}, {old_max}] -> [{}, {}]",
        param.minimum(),
        param.maximum()
    );
    println!("normalized: {}", param.normalized());
    println!("actual:     {} -> {}", before, param.display_text());

    Ok(())
}
