//! Layout validation command.

use anyhow::Context;
use clap::Args;
use plugparam_config::{ParamLayout, validate_layout};
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Layout files (TOML)
    #[arg(required = true)]
    layouts: Vec<PathBuf>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let mut failures = 0usize;

    for path in &args.layouts {
        let result = ParamLayout::load(path)
            .with_context(|| format!("cannot load layout '{}'", path.display()))
            .and_then(|layout| {
                validate_layout(&layout)
                    .with_context(|| format!("invalid layout '{}'", path.display()))?;
                Ok(layout)
            });

        match result {
            Ok(layout) => {
                println!(
                    "ok    {} ({}, {} parameters)",
                    path.display(),
                    layout.name,
                    layout.len()
                );
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(path = %path.display(), "layout check failed");
                println!("FAIL  {}: {e:#}", path.display());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} layouts failed validation", args.layouts.len());
    }
    Ok(())
}
