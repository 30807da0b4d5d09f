//! Actual/normalized conversion command.

use anyhow::Context;
use clap::{ArgGroup, Args};
use std::path::PathBuf;

use super::common::{load_bank, resolve_param};

#[derive(Args)]
#[command(group(ArgGroup::new("value").required(true).args(["actual", "normalized"])))]
pub struct ConvertArgs {
    /// Layout file (TOML)
    layout: PathBuf,

    /// Parameter id or name
    param: String,

    /// Value in real units
    #[arg(long, allow_negative_numbers = true)]
    actual: Option<f32>,

    /// Value in [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    normalized: Option<f32>,

    /// Clamp out-of-range input instead of rejecting it
    #[arg(long)]
    clamp: bool,

    /// Decimals in the display text
    #[arg(long, default_value_t = 2)]
    precision: usize,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let (_, mut bank) = load_bank(&args.layout)?;
    let index = resolve_param(&bank, &args.param)?;
    let param = bank
        .at_mut(index)
        .with_context(|| format!("parameter index {index} out of bounds"))?;

    match (args.actual, args.normalized) {
        (Some(actual), _) if args.clamp => {
            param.set_actual_clamped(actual);
        }
        (Some(actual), _) => {
            param
                .set_actual(actual)
                .with_context(|| format!("cannot set '{}' to {actual}", args.param))?;
        }
        (None, Some(normalized)) if args.clamp => {
            param.set_normalized_clamped(normalized);
        }
        (None, Some(normalized)) => {
            param
                .set_normalized(normalized)
                .with_context(|| format!("cannot set '{}' to {normalized}", args.param))?;
        }
        (None, None) => anyhow::bail!("either --actual or --normalized is required"),
    }

    tracing::debug!(
        param = %args.param,
        index,
        actual = param.actual(),
        normalized = param.normalized(),
        "converted"
    );

    println!("parameter:  {}", param.name());
    println!("actual:     {}", param.actual());
    println!("normalized: {}", param.normalized());
    println!("display:    {param:.prec$}", prec = args.precision);

    Ok(())
}
