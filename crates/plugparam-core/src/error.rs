//! Error types for parameter operations.
//!
//! Every error here is a local precondition violation. The operation that
//! reports one leaves the parameter in its previous consistent state, so a
//! single bad host or UI update never corrupts the value pair.

use thiserror::Error;

use crate::range::ParamScale;

/// Errors reported by [`Parameter`](crate::Parameter), [`ParamRange`](crate::ParamRange)
/// and the containers built on them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamError {
    /// Range bounds are inverted, degenerate, or not finite.
    #[error("invalid range [{min}, {max}]: minimum must be finite and below maximum")]
    InvalidRange {
        /// Requested minimum.
        min: f32,
        /// Requested maximum.
        max: f32,
    },

    /// A value was outside the domain of the setter it was passed to.
    ///
    /// For actual values the domain is the parameter range, for normalized
    /// values it is `[0, 1]`. NaN is never in any domain.
    #[error("value {value} is outside [{min}, {max}]")]
    OutOfDomain {
        /// Rejected value.
        value: f32,
        /// Lower bound of the domain.
        min: f32,
        /// Upper bound of the domain.
        max: f32,
    },

    /// The scale cannot map the requested range.
    #[error("scale {scale:?} cannot map range [{min}, {max}]")]
    InvalidScale {
        /// Offending scale.
        scale: ParamScale,
        /// Range minimum.
        min: f32,
        /// Range maximum.
        max: f32,
    },

    /// A host adapter addressed a parameter slot that does not exist.
    #[error("no parameter at index {0}")]
    UnknownIndex(usize),
}

impl ParamError {
    /// Out-of-domain error for a normalized value.
    pub(crate) fn normalized_out_of_domain(value: f32) -> Self {
        ParamError::OutOfDomain {
            value,
            min: 0.0,
            max: 1.0,
        }
    }
}
