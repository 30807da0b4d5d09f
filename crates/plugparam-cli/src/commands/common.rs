//! Shared helpers for commands.

use std::path::Path;

use anyhow::Context;
use plugparam_config::ParamLayout;
use plugparam_core::{HostParams, ParamBank, ParamScale};

/// Load a layout file and build its bank.
pub fn load_bank(path: &Path) -> anyhow::Result<(ParamLayout, ParamBank<String>)> {
    let layout = ParamLayout::load(path)
        .with_context(|| format!("cannot load layout '{}'", path.display()))?;
    let bank = layout
        .build_bank()
        .with_context(|| format!("invalid layout '{}'", path.display()))?;
    Ok((layout, bank))
}

/// Find a parameter index by id, falling back to a case-insensitive name match.
pub fn resolve_param(bank: &ParamBank<String>, key: &str) -> anyhow::Result<usize> {
    bank.index_of(key)
        .or_else(|| bank.find_param_by_name(key))
        .ok_or_else(|| {
            let ids: Vec<&str> = bank.keys().map(String::as_str).collect();
            anyhow::anyhow!("unknown parameter '{}' (available: {})", key, ids.join(", "))
        })
}

/// Short label for a mapping curve.
pub fn scale_label(scale: ParamScale) -> String {
    match scale {
        ParamScale::Linear => "linear".to_string(),
        ParamScale::Logarithmic => "log".to_string(),
        ParamScale::Power(exp) => format!("power({exp})"),
    }
}
