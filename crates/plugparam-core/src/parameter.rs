//! Dual-representation plugin parameter.
//!
//! Host automation talks in normalized values (0.0–1.0), UI controls talk in
//! actual units (dB, Hz, ms). [`Parameter`] keeps both representations of one
//! control, plus its default, consistent through every update.
//!
//! ## Update Rules
//!
//! - Each setter makes one side authoritative and derives the other from it.
//! - Changing the range preserves *normalized* positions: the actual value and
//!   the actual default are remapped into the new bounds.
//! - Inputs outside the setter's domain are rejected and leave the parameter
//!   untouched. The `*_clamped` setters saturate instead.
//!
//! ## Usage
//!
//! ```rust
//! use plugparam_core::Parameter;
//!
//! let mut gain = Parameter::builder()
//!     .name("Gain")
//!     .unit("dB")
//!     .range(-20.0, 20.0)
//!     .build()
//!     .unwrap();
//!
//! // UI edit: returns the normalized value to forward to the host
//! assert_eq!(gain.set_actual(10.0).unwrap(), 0.75);
//!
//! // Host automation: returns the actual value to show in the UI
//! assert_eq!(gain.set_normalized(0.5).unwrap(), 0.0);
//!
//! // Range change keeps the normalized position
//! gain.set_range(-40.0, 40.0).unwrap();
//! assert_eq!(gain.normalized(), 0.5);
//! assert_eq!(gain.actual(), 0.0);
//! ```

use alloc::string::String;
use core::fmt;

use crate::error::ParamError;
use crate::range::{ParamRange, ParamScale};

/// One controllable plugin parameter in actual and normalized form.
///
/// See the [module docs](self) for the update rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Display label
    name: String,
    /// Display unit suffix
    unit: String,
    /// Bounds and mapping curve
    range: ParamRange,
    /// Current value in real units
    actual: f32,
    /// Current value in [0, 1]
    normalized: f32,
    /// Default in real units
    default_actual: f32,
    /// Default in [0, 1]
    default_normalized: f32,
}

impl Parameter {
    /// Creates an unnamed parameter over `[0, 1]` with value and default 0.
    pub fn new() -> Self {
        Self::from_normalized(String::new(), String::new(), ParamRange::UNIT, 0.0, 0.0)
    }

    /// Starts a [`ParamBuilder`] for a configured parameter.
    pub fn builder() -> ParamBuilder {
        ParamBuilder::default()
    }

    /// Assembles a parameter from normalized positions, deriving the actual side.
    pub(crate) fn from_normalized(
        name: String,
        unit: String,
        range: ParamRange,
        normalized: f32,
        default_normalized: f32,
    ) -> Self {
        Self {
            name,
            unit,
            range,
            actual: derive_actual(&range, normalized),
            normalized,
            default_actual: derive_actual(&range, default_normalized),
            default_normalized,
        }
    }

    /// Display label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display unit suffix.
    #[inline]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Bounds and mapping curve.
    #[inline]
    pub fn range(&self) -> ParamRange {
        self.range
    }

    /// Mapping curve.
    #[inline]
    pub fn scale(&self) -> ParamScale {
        self.range.scale()
    }

    /// Lower bound of the actual value.
    #[inline]
    pub fn minimum(&self) -> f32 {
        self.range.min()
    }

    /// Upper bound of the actual value.
    #[inline]
    pub fn maximum(&self) -> f32 {
        self.range.max()
    }

    /// Current value in real units.
    #[inline]
    pub fn actual(&self) -> f32 {
        self.actual
    }

    /// Current value in `[0, 1]`.
    #[inline]
    pub fn normalized(&self) -> f32 {
        self.normalized
    }

    /// Default value in real units.
    #[inline]
    pub fn default_actual(&self) -> f32 {
        self.default_actual
    }

    /// Default value in `[0, 1]`.
    #[inline]
    pub fn default_normalized(&self) -> f32 {
        self.default_normalized
    }

    /// Replaces the range bounds, keeping the current scale.
    ///
    /// The normalized value and normalized default are preserved; their
    /// actual counterparts are remapped into the new bounds. The actual value
    /// is *not* reset to the default.
    ///
    /// # Errors
    ///
    /// [`ParamError::InvalidRange`] or [`ParamError::InvalidScale`]; the
    /// parameter is unchanged.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<(), ParamError> {
        let range = ParamRange::with_scale(min, max, self.range.scale())?;
        self.apply_range(range);
        Ok(())
    }

    /// Replaces bounds and curve together, preserving normalized positions.
    ///
    /// # Errors
    ///
    /// Same as [`set_range`](Self::set_range).
    pub fn set_scaled_range(
        &mut self,
        min: f32,
        max: f32,
        scale: ParamScale,
    ) -> Result<(), ParamError> {
        let range = ParamRange::with_scale(min, max, scale)?;
        self.apply_range(range);
        Ok(())
    }

    fn apply_range(&mut self, range: ParamRange) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            name = %self.name,
            min = range.min(),
            max = range.max(),
            normalized = self.normalized,
            "param_set_range"
        );
        self.range = range;
        self.actual = derive_actual(&range, self.normalized);
        self.default_actual = derive_actual(&range, self.default_normalized);
    }

    /// Sets the actual value and returns the derived normalized value.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] if `value` is NaN or outside
    /// `[minimum, maximum]`; the parameter is unchanged.
    pub fn set_actual(&mut self, value: f32) -> Result<f32, ParamError> {
        self.check_actual(value)?;
        self.store_actual(value);
        Ok(self.normalized)
    }

    /// Sets the normalized value and returns the derived actual value.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] if `value` is NaN or outside `[0, 1]`;
    /// the parameter is unchanged.
    pub fn set_normalized(&mut self, value: f32) -> Result<f32, ParamError> {
        self.check_normalized(value)?;
        self.store_normalized(value);
        Ok(self.actual)
    }

    /// Like [`set_actual`](Self::set_actual) but saturates at the range bounds.
    ///
    /// NaN maps to the minimum. Returns the derived normalized value.
    pub fn set_actual_clamped(&mut self, value: f32) -> f32 {
        self.store_actual(self.range.clamp(value));
        self.normalized
    }

    /// Like [`set_normalized`](Self::set_normalized) but saturates at 0 and 1.
    ///
    /// NaN maps to 0. Returns the derived actual value.
    pub fn set_normalized_clamped(&mut self, value: f32) -> f32 {
        self.store_normalized(clamp_unit(value));
        self.actual
    }

    /// Sets the default in real units and returns the derived normalized default.
    ///
    /// The current value is not touched.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] for values outside the range.
    pub fn set_default_actual(&mut self, value: f32) -> Result<f32, ParamError> {
        self.check_actual(value)?;
        self.default_actual = value;
        self.default_normalized = derive_normalized(&self.range, value);
        Ok(self.default_normalized)
    }

    /// Sets the default in normalized form and returns the derived actual default.
    ///
    /// The current value is not touched.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] for values outside `[0, 1]`.
    pub fn set_default_normalized(&mut self, value: f32) -> Result<f32, ParamError> {
        self.check_normalized(value)?;
        self.default_normalized = value;
        self.default_actual = derive_actual(&self.range, value);
        Ok(self.default_actual)
    }

    /// Returns the current value to the default.
    pub fn reset(&mut self) {
        self.actual = self.default_actual;
        self.normalized = self.default_normalized;
    }

    /// Formats the actual value with its unit, e.g. `"-6.00 dB"`.
    ///
    /// Same text as the [`Display`](fmt::Display) impl with its default
    /// precision of two decimals.
    pub fn display_text(&self) -> String {
        alloc::format!("{self}")
    }

    fn check_actual(&self, value: f32) -> Result<(), ParamError> {
        if self.range.contains(value) {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(name = %self.name, value, "param_rejected_actual");
        Err(ParamError::OutOfDomain {
            value,
            min: self.range.min(),
            max: self.range.max(),
        })
    }

    fn check_normalized(&self, value: f32) -> Result<(), ParamError> {
        if (0.0..=1.0).contains(&value) {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(name = %self.name, value, "param_rejected_normalized");
        Err(ParamError::normalized_out_of_domain(value))
    }

    fn store_actual(&mut self, value: f32) {
        self.actual = value;
        self.normalized = derive_normalized(&self.range, value);
    }

    fn store_normalized(&mut self, value: f32) {
        self.normalized = value;
        self.actual = derive_actual(&self.range, value);
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}", precision, self.actual)?;
        match self.unit.as_str() {
            "" => Ok(()),
            "%" => f.write_str("%"),
            unit => write!(f, " {unit}"),
        }
    }
}

/// Builder for [`Parameter`].
///
/// Every option is optional:
///
/// - no range → `[0, 1]`
/// - no default → the range minimum
/// - the current value starts at the default
///
/// # Example
///
/// ```rust
/// use plugparam_core::{Parameter, ParamScale};
///
/// let cutoff = Parameter::builder()
///     .name("Cutoff")
///     .unit("Hz")
///     .range(20.0, 20000.0)
///     .scale(ParamScale::Logarithmic)
///     .default_value(1000.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(cutoff.actual(), 1000.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamBuilder {
    name: String,
    unit: String,
    bounds: Option<(f32, f32)>,
    scale: ParamScale,
    default: Option<f32>,
}

impl ParamBuilder {
    /// Sets the display label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display unit suffix.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the actual-value bounds.
    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Sets the mapping curve.
    pub fn scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the default in real units.
    pub fn default_value(mut self, value: f32) -> Self {
        self.default = Some(value);
        self
    }

    /// Validates the configuration and creates the parameter.
    ///
    /// # Errors
    ///
    /// - [`ParamError::InvalidRange`] / [`ParamError::InvalidScale`] for bad bounds
    /// - [`ParamError::OutOfDomain`] if the default lies outside the bounds
    pub fn build(self) -> Result<Parameter, ParamError> {
        let (min, max) = self.bounds.unwrap_or((0.0, 1.0));
        let range = ParamRange::with_scale(min, max, self.scale)?;
        let default = self.default.unwrap_or(min);
        if !range.contains(default) {
            return Err(ParamError::OutOfDomain {
                value: default,
                min,
                max,
            });
        }

        let default_normalized = derive_normalized(&range, default);
        Ok(Parameter {
            name: self.name,
            unit: self.unit,
            range,
            actual: default,
            normalized: default_normalized,
            default_actual: default,
            default_normalized,
        })
    }
}

// Derived values are kept inside their domain against float rounding.
#[inline]
fn derive_normalized(range: &ParamRange, actual: f32) -> f32 {
    clamp_unit(range.to_normalized(actual))
}

#[inline]
fn derive_actual(range: &ParamRange, normalized: f32) -> f32 {
    range.clamp(range.to_actual(normalized))
}

#[inline]
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
