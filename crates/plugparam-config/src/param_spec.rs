//! Declarative description of a single parameter.

use plugparam_core::{ParamError, ParamScale, Parameter};
use serde::{Deserialize, Serialize};

/// Mapping curve as written in a layout file.
///
/// ```toml
/// scale = "linear"
/// scale = "log"
/// scale = { power = 2.0 }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleSpec {
    /// Linear mapping.
    #[default]
    Linear,
    /// Logarithmic mapping, requires a positive minimum.
    #[serde(alias = "logarithmic")]
    Log,
    /// Power curve with the given exponent.
    Power(f32),
}

impl From<ScaleSpec> for ParamScale {
    fn from(spec: ScaleSpec) -> Self {
        match spec {
            ScaleSpec::Linear => ParamScale::Linear,
            ScaleSpec::Log => ParamScale::Logarithmic,
            ScaleSpec::Power(exp) => ParamScale::Power(exp),
        }
    }
}

impl From<ParamScale> for ScaleSpec {
    fn from(scale: ParamScale) -> Self {
        match scale {
            ParamScale::Linear => ScaleSpec::Linear,
            ParamScale::Logarithmic => ScaleSpec::Log,
            ParamScale::Power(exp) => ScaleSpec::Power(exp),
        }
    }
}

/// Configuration for one parameter in a layout.
///
/// Only `id` is required. Omitted bounds give `[0, 1]`, an omitted default
/// gives the minimum, an omitted name falls back to the id.
///
/// # Example
///
/// ```rust
/// use plugparam_config::ParamSpec;
///
/// let spec = ParamSpec::new("gain")
///     .with_name("Gain")
///     .with_unit("dB")
///     .with_range(-60.0, 12.0)
///     .with_default(0.0);
///
/// let param = spec.to_parameter().unwrap();
/// assert_eq!(param.actual(), 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamSpec {
    /// Stable identifier, unique within a layout.
    pub id: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Display unit suffix.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,

    /// Lower bound of the actual value.
    #[serde(default = "default_min")]
    pub min: f32,

    /// Upper bound of the actual value.
    #[serde(default = "default_max")]
    pub max: f32,

    /// Default in real units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f32>,

    /// Mapping curve.
    #[serde(default)]
    pub scale: ScaleSpec,
}

fn default_min() -> f32 {
    0.0
}

fn default_max() -> f32 {
    1.0
}

impl ParamSpec {
    /// Create a spec with the given id and every other field at its default.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            unit: String::new(),
            min: default_min(),
            max: default_max(),
            default: None,
            scale: ScaleSpec::Linear,
        }
    }

    /// Describe an existing parameter. Its default, not its current value,
    /// becomes the spec's default.
    pub fn from_parameter(id: impl Into<String>, param: &Parameter) -> Self {
        Self {
            id: id.into(),
            name: param.name().to_string(),
            unit: param.unit().to_string(),
            min: param.minimum(),
            max: param.maximum(),
            default: Some(param.default_actual()),
            scale: param.scale().into(),
        }
    }

    /// Set the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the unit suffix.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the bounds.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the default.
    pub fn with_default(mut self, default: f32) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the mapping curve.
    pub fn with_scale(mut self, scale: ScaleSpec) -> Self {
        self.scale = scale;
        self
    }

    /// Label shown to users: the name, or the id when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Build the runtime parameter this spec describes.
    pub fn to_parameter(&self) -> Result<Parameter, ParamError> {
        let mut builder = Parameter::builder()
            .name(self.display_name())
            .unit(self.unit.as_str())
            .range(self.min, self.max)
            .scale(self.scale.into());
        if let Some(default) = self.default {
            builder = builder.default_value(default);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        scale: ScaleSpec,
    }

    #[test]
    fn minimal_spec_defaults() {
        let spec: ParamSpec = toml::from_str(r#"id = "drive""#).unwrap();
        assert_eq!(spec, ParamSpec::new("drive"));

        let param = spec.to_parameter().unwrap();
        assert_eq!(param.name(), "drive");
        assert_eq!(param.minimum(), 0.0);
        assert_eq!(param.maximum(), 1.0);
        assert_eq!(param.actual(), 0.0);
    }

    #[test]
    fn scale_forms() {
        let linear: Wrapper = toml::from_str(r#"scale = "linear""#).unwrap();
        assert_eq!(linear.scale, ScaleSpec::Linear);

        let log: Wrapper = toml::from_str(r#"scale = "log""#).unwrap();
        assert_eq!(log.scale, ScaleSpec::Log);

        let long: Wrapper = toml::from_str(r#"scale = "logarithmic""#).unwrap();
        assert_eq!(long.scale, ScaleSpec::Log);

        let power: Wrapper = toml::from_str("scale = { power = 2.5 }").unwrap();
        assert_eq!(power.scale, ScaleSpec::Power(2.5));

        assert!(toml::from_str::<Wrapper>(r#"scale = "cubic""#).is_err());
    }

    #[test]
    fn to_parameter_applies_everything() {
        let param = ParamSpec::new("cutoff")
            .with_name("Cutoff")
            .with_unit("Hz")
            .with_range(20.0, 20000.0)
            .with_scale(ScaleSpec::Log)
            .with_default(1000.0)
            .to_parameter()
            .unwrap();

        assert_eq!(param.name(), "Cutoff");
        assert_eq!(param.unit(), "Hz");
        assert_eq!(param.scale(), ParamScale::Logarithmic);
        assert_eq!(param.actual(), 1000.0);
    }

    #[test]
    fn to_parameter_reports_core_errors() {
        let err = ParamSpec::new("x").with_range(5.0, 1.0).to_parameter();
        assert!(matches!(err, Err(ParamError::InvalidRange { .. })));

        let err = ParamSpec::new("x").with_default(3.0).to_parameter();
        assert!(matches!(err, Err(ParamError::OutOfDomain { .. })));
    }

    #[test]
    fn from_parameter_uses_default() {
        let mut param = Parameter::builder()
            .name("Mix")
            .unit("%")
            .range(0.0, 100.0)
            .default_value(50.0)
            .build()
            .unwrap();
        param.set_actual(80.0).unwrap();

        let spec = ParamSpec::from_parameter("mix", &param);
        assert_eq!(spec.default, Some(50.0));
        assert_eq!(spec.to_parameter().unwrap().actual(), 50.0);
    }
}
