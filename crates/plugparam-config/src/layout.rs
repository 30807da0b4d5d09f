//! Layout file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use plugparam_core::ParamBank;

use crate::error::LayoutError;
use crate::param_spec::ParamSpec;
use crate::validation::{ValidationError, validate_layout};

/// A plugin's parameter set, declared in TOML.
///
/// # TOML Format
///
/// ```toml
/// name = "Simple Filter"
/// description = "Gain and cutoff"
///
/// [[params]]
/// id = "gain"
/// name = "Gain"
/// unit = "dB"
/// min = -60.0
/// max = 12.0
/// default = 0.0
///
/// [[params]]
/// id = "cutoff"
/// unit = "Hz"
/// min = 20.0
/// max = 20000.0
/// default = 1000.0
/// scale = "log"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamLayout {
    /// Name of the layout.
    pub name: String,

    /// Optional description of the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters in host order.
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl ParamLayout {
    /// Create a new empty layout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a parameter.
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Append several parameters.
    pub fn with_params(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.params.extend(params);
        self
    }

    /// Describe an existing bank, capturing each parameter's default.
    pub fn from_bank(name: impl Into<String>, bank: &ParamBank<String>) -> Self {
        Self::new(name).with_params(
            bank.iter()
                .map(|(id, param)| ParamSpec::from_parameter(id.as_str(), param)),
        )
    }

    /// Load a layout from a TOML file.
    ///
    /// Only the syntax is checked here; call [`validate_layout`] or
    /// [`build_bank`](Self::build_bank) for the contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LayoutError::read_file(path, e))?;
        let layout = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            params = layout.len(),
            "loaded layout"
        );
        Ok(layout)
    }

    /// Load a layout from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the layout to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| LayoutError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| LayoutError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the layout to a TOML string.
    pub fn to_toml(&self) -> Result<String, LayoutError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the layout and build a bank keyed by parameter id.
    pub fn build_bank(&self) -> Result<ParamBank<String>, LayoutError> {
        validate_layout(self)?;

        let mut bank = ParamBank::with_capacity(self.params.len());
        for spec in &self.params {
            let param = spec
                .to_parameter()
                .map_err(|source| ValidationError::InvalidParam {
                    id: spec.id.clone(),
                    source,
                })?;
            bank.insert(spec.id.clone(), param);
        }
        tracing::debug!(layout = %self.name, params = bank.len(), "built parameter bank");
        Ok(bank)
    }

    /// Get the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the layout declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Find a parameter by id.
    pub fn get(&self, id: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.id == id)
    }

    /// Iterate over parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter()
    }

    /// Ids in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.id.as_str()).collect()
    }
}

impl Default for ParamLayout {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_spec::ScaleSpec;

    const FILTER: &str = r#"
name = "Simple Filter"
description = "Gain and cutoff"

[[params]]
id = "gain"
name = "Gain"
unit = "dB"
min = -60.0
max = 12.0
default = 0.0

[[params]]
id = "cutoff"
unit = "Hz"
min = 20.0
max = 20000.0
default = 1000.0
scale = "log"
"#;

    #[test]
    fn test_layout_new() {
        let layout = ParamLayout::new("Test");
        assert_eq!(layout.name, "Test");
        assert!(layout.description.is_none());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_layout_from_toml() {
        let layout = ParamLayout::from_toml(FILTER).unwrap();
        assert_eq!(layout.name, "Simple Filter");
        assert_eq!(layout.description.as_deref(), Some("Gain and cutoff"));
        assert_eq!(layout.ids(), ["gain", "cutoff"]);
        assert_eq!(layout.get("cutoff").unwrap().scale, ScaleSpec::Log);
        assert!(layout.get("mix").is_none());
    }

    #[test]
    fn test_layout_without_params() {
        let layout = ParamLayout::from_toml(r#"name = "Nothing""#).unwrap();
        assert!(layout.is_empty());
        assert!(layout.build_bank().unwrap().is_empty());
    }

    #[test]
    fn test_layout_missing_name() {
        let result = ParamLayout::from_toml("[[params]]\nid = \"gain\"\n");
        assert!(matches!(result, Err(LayoutError::TomlParse(_))));
    }

    #[test]
    fn test_layout_to_toml_reparses() {
        let layout = ParamLayout::new("Written")
            .with_description("Generated")
            .with_param(
                ParamSpec::new("drive")
                    .with_range(0.0, 40.0)
                    .with_scale(ScaleSpec::Power(2.0)),
            );

        let toml_str = layout.to_toml().unwrap();
        assert!(toml_str.contains("name = \"Written\""));
        assert_eq!(ParamLayout::from_toml(&toml_str).unwrap(), layout);
    }

    #[test]
    fn test_build_bank() {
        let bank = ParamLayout::from_toml(FILTER).unwrap().build_bank().unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.key_at(0).map(String::as_str), Some("gain"));
        let gain = bank.get("gain").unwrap();
        assert_eq!(gain.name(), "Gain");
        assert_eq!(gain.actual(), 0.0);
        // Name falls back to the id
        assert_eq!(bank.get("cutoff").unwrap().name(), "cutoff");
    }

    #[test]
    fn test_build_bank_rejects_duplicates() {
        let layout = ParamLayout::new("Dup")
            .with_param(ParamSpec::new("mix"))
            .with_param(ParamSpec::new("mix"));
        assert!(matches!(
            layout.build_bank(),
            Err(LayoutError::Validation(ValidationError::DuplicateId(ref id))) if id == "mix"
        ));
    }

    #[test]
    fn test_from_bank() {
        let mut bank = ParamLayout::from_toml(FILTER).unwrap().build_bank().unwrap();
        bank.get_mut("gain").unwrap().set_actual(6.0).unwrap();

        let layout = ParamLayout::from_bank("Captured", &bank);
        assert_eq!(layout.ids(), ["gain", "cutoff"]);
        assert_eq!(layout.get("gain").unwrap().default, Some(0.0));
        assert_eq!(layout.get("cutoff").unwrap().scale, ScaleSpec::Log);
    }
}
