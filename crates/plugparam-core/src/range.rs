//! Range mapping between actual and normalized parameter values.
//!
//! A [`ParamRange`] holds validated `[min, max]` bounds and the [`ParamScale`]
//! curve used to map them onto the normalized \[0.0, 1.0\] space that host
//! automation works in. The mapping itself is two pure functions,
//! [`to_normalized`] and [`to_actual`], so it can be tested and reused
//! without any parameter state.
//!
//! # Normalization Formulas
//!
//! - **Linear**: `normalized = (actual - min) / (max - min)`
//! - **Logarithmic**: `normalized = ln(actual/min) / ln(max/min)`
//! - **Power(exp)**: `normalized = ((actual - min) / (max - min)).powf(1.0 / exp)`
//!
//! # Example
//!
//! ```rust
//! use plugparam_core::{ParamRange, to_actual, to_normalized};
//!
//! let range = ParamRange::new(-20.0, 20.0).unwrap();
//! assert_eq!(to_normalized(10.0, &range), 0.75);
//! assert_eq!(to_actual(0.5, &range), 0.0);
//! ```

use libm::{logf, powf};

use crate::error::ParamError;

/// Scaling curve for parameter normalization.
///
/// Linear is the default. Use Logarithmic for frequency parameters
/// (20 Hz–20 kHz) and Power for parameters that need more resolution at one
/// end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Linear mapping. Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    /// Requires `min > 0.0` and a finite `max / min`.
    Logarithmic,
    /// Power curve mapping with configurable exponent.
    /// exponent < 1.0 → more resolution at low end.
    /// exponent > 1.0 → more resolution at high end.
    /// Requires a normal positive exponent whose reciprocal is also normal.
    Power(f32),
}

impl ParamScale {
    fn check(self, min: f32, max: f32) -> Result<(), ParamError> {
        let usable = match self {
            ParamScale::Linear => true,
            ParamScale::Logarithmic => min > 0.0 && (max / min).is_finite(),
            ParamScale::Power(exp) => exp > 0.0 && exp.is_normal() && exp.recip().is_normal(),
        };
        if usable {
            Ok(())
        } else {
            Err(ParamError::InvalidScale {
                scale: self,
                min,
                max,
            })
        }
    }
}

/// Validated bounds of a parameter's actual value plus its mapping curve.
///
/// Construction guarantees `min < max` with both bounds and the span finite,
/// and that the
/// scale can map the range, so the mapping functions never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    min: f32,
    max: f32,
    scale: ParamScale,
}

impl ParamRange {
    /// The `[0, 1]` linear range unconfigured parameters start with.
    pub const UNIT: Self = Self {
        min: 0.0,
        max: 1.0,
        scale: ParamScale::Linear,
    };

    /// Creates a linear range.
    ///
    /// # Errors
    ///
    /// [`ParamError::InvalidRange`] if `min >= max` or a bound or the span is
    /// not finite.
    pub fn new(min: f32, max: f32) -> Result<Self, ParamError> {
        Self::with_scale(min, max, ParamScale::Linear)
    }

    /// Creates a range with the given scaling curve.
    ///
    /// # Errors
    ///
    /// [`ParamError::InvalidRange`] for bad bounds, [`ParamError::InvalidScale`]
    /// if the curve cannot map them (e.g. logarithmic with `min <= 0`).
    pub fn with_scale(min: f32, max: f32, scale: ParamScale) -> Result<Self, ParamError> {
        if !min.is_finite() || !max.is_finite() || min >= max || !(max - min).is_finite() {
            return Err(ParamError::InvalidRange { min, max });
        }
        scale.check(min, max)?;
        Ok(Self { min, max, scale })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Distance between the bounds, always positive.
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Mapping curve.
    #[inline]
    pub fn scale(&self) -> ParamScale {
        self.scale
    }

    /// Returns `true` if `actual` lies within the bounds. NaN is never contained.
    #[inline]
    pub fn contains(&self, actual: f32) -> bool {
        actual >= self.min && actual <= self.max
    }

    /// Clamps `actual` into the bounds. NaN maps to the minimum.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plugparam_core::ParamRange;
    ///
    /// let range = ParamRange::new(-60.0, 12.0).unwrap();
    /// assert_eq!(range.clamp(0.0), 0.0);
    /// assert_eq!(range.clamp(-100.0), -60.0);
    /// assert_eq!(range.clamp(100.0), 12.0);
    /// ```
    #[inline]
    pub fn clamp(&self, actual: f32) -> f32 {
        if actual.is_nan() {
            self.min
        } else {
            actual.clamp(self.min, self.max)
        }
    }

    /// Converts an actual value to normalized. See [`to_normalized`].
    #[inline]
    pub fn to_normalized(&self, actual: f32) -> f32 {
        to_normalized(actual, self)
    }

    /// Converts a normalized value to actual. See [`to_actual`].
    #[inline]
    pub fn to_actual(&self, normalized: f32) -> f32 {
        to_actual(normalized, self)
    }
}

impl Default for ParamRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Maps an actual value into normalized space.
///
/// No clamping is applied. Linear ranges extrapolate for values outside the
/// bounds; curved scales may yield NaN there.
#[inline]
pub fn to_normalized(actual: f32, range: &ParamRange) -> f32 {
    match range.scale {
        ParamScale::Linear => (actual - range.min) / range.span(),
        ParamScale::Logarithmic => logf(actual / range.min) / logf(range.max / range.min),
        ParamScale::Power(exp) => powf((actual - range.min) / range.span(), 1.0 / exp),
    }
}

/// Maps a normalized value back into the actual range.
///
/// Inverse of [`to_normalized`]. No clamping is applied.
#[inline]
pub fn to_actual(normalized: f32, range: &ParamRange) -> f32 {
    match range.scale {
        ParamScale::Linear => range.min + range.span() * normalized,
        ParamScale::Logarithmic => range.min * powf(range.max / range.min, normalized),
        ParamScale::Power(exp) => range.min + powf(normalized, exp) * range.span(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_degenerate_ranges() {
        assert_eq!(
            ParamRange::new(1.0, 0.0),
            Err(ParamError::InvalidRange { min: 1.0, max: 0.0 })
        );
        assert!(ParamRange::new(42.0, 42.0).is_err());
        assert!(ParamRange::new(f32::NAN, 1.0).is_err());
        assert!(ParamRange::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn rejects_span_overflow() {
        assert_eq!(
            ParamRange::new(-3.0e38, 3.0e38),
            Err(ParamError::InvalidRange {
                min: -3.0e38,
                max: 3.0e38
            })
        );
        assert!(ParamRange::new(-f32::MAX, f32::MAX).is_err());

        // Widest span that still fits
        let range = ParamRange::new(-1.0e38, 1.0e38).unwrap();
        assert_eq!(range.to_normalized(0.0), 0.5);
        assert_eq!(range.to_actual(0.5), 0.0);
    }

    #[test]
    fn rejects_overflowing_curves() {
        assert!(matches!(
            ParamRange::with_scale(1.0e-38, 1.0e38, ParamScale::Logarithmic),
            Err(ParamError::InvalidScale { .. })
        ));
        assert!(matches!(
            ParamRange::with_scale(0.0, 100.0, ParamScale::Power(1.0e-39)),
            Err(ParamError::InvalidScale { .. })
        ));
        assert!(ParamRange::with_scale(0.0, 100.0, ParamScale::Power(f32::MAX)).is_err());
        assert!(ParamRange::with_scale(0.0, 100.0, ParamScale::Power(f32::INFINITY)).is_err());

        let range = ParamRange::with_scale(1.0e-6, 1.0e6, ParamScale::Logarithmic).unwrap();
        assert!((range.to_normalized(1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_unusable_scales() {
        assert!(matches!(
            ParamRange::with_scale(0.0, 100.0, ParamScale::Logarithmic),
            Err(ParamError::InvalidScale { .. })
        ));
        assert!(ParamRange::with_scale(0.0, 1.0, ParamScale::Power(0.0)).is_err());
        assert!(ParamRange::with_scale(0.0, 1.0, ParamScale::Power(f32::NAN)).is_err());
        assert!(ParamRange::with_scale(20.0, 20000.0, ParamScale::Logarithmic).is_ok());
    }

    #[test]
    fn linear_mapping() {
        let range = ParamRange::new(-20.0, 20.0).unwrap();
        assert_eq!(range.to_normalized(-20.0), 0.0);
        assert_eq!(range.to_normalized(0.0), 0.5);
        assert_eq!(range.to_normalized(20.0), 1.0);
        assert_eq!(range.to_actual(0.0), -20.0);
        assert_eq!(range.to_actual(0.75), 10.0);
        assert_eq!(range.to_actual(1.0), 20.0);
    }

    #[test]
    fn linear_mapping_extrapolates() {
        let range = ParamRange::new(0.0, 10.0).unwrap();
        assert_eq!(range.to_normalized(20.0), 2.0);
        assert_eq!(range.to_actual(-0.5), -5.0);
    }

    #[test]
    fn logarithmic_mapping() {
        let range = ParamRange::with_scale(20.0, 20000.0, ParamScale::Logarithmic).unwrap();

        assert!((range.to_normalized(20.0) - 0.0).abs() < 1e-6);
        assert!((range.to_normalized(20000.0) - 1.0).abs() < 1e-6);

        // Geometric mean sits at the midpoint
        let mid = range.to_actual(0.5);
        let expected = libm::sqrtf(20.0 * 20000.0);
        assert!((mid - expected).abs() < 1.0, "expected ~{expected}, got {mid}");

        for &val in &[20.0, 100.0, 1000.0, 5000.0, 20000.0] {
            let rt = range.to_actual(range.to_normalized(val));
            assert!((rt - val).abs() / val < 1e-4, "round-trip {val}: got {rt}");
        }
    }

    #[test]
    fn power_mapping() {
        let range = ParamRange::with_scale(0.0, 100.0, ParamScale::Power(2.0)).unwrap();

        let n = range.to_normalized(25.0); // sqrt(0.25)
        assert!((n - 0.5).abs() < 1e-6, "got {n}");

        let v = range.to_actual(0.5); // 0.5^2 * 100
        assert!((v - 25.0).abs() < 1e-4, "got {v}");
    }

    #[test]
    fn clamp_handles_nan() {
        let range = ParamRange::new(-1.0, 1.0).unwrap();
        assert_eq!(range.clamp(f32::NAN), -1.0);
        assert!(!range.contains(f32::NAN));
    }

    #[test]
    fn default_is_unit_range() {
        let range = ParamRange::default();
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 1.0);
        assert_eq!(range.scale(), ParamScale::Linear);
    }
}
