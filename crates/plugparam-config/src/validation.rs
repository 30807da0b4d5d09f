//! Layout validation.
//!
//! Checks identifiers and builds every parameter once so that a layout that
//! passes validation is guaranteed to produce a bank.
//!
//! # Example
//!
//! ```rust
//! use plugparam_config::{ParamLayout, ParamSpec, ValidationError, validate_layout};
//!
//! let layout = ParamLayout::new("Broken")
//!     .with_param(ParamSpec::new("gain"))
//!     .with_param(ParamSpec::new("gain"));
//!
//! assert_eq!(
//!     validate_layout(&layout),
//!     Err(ValidationError::DuplicateId("gain".to_string()))
//! );
//! ```

use std::collections::HashSet;

use plugparam_core::ParamError;
use thiserror::Error;

use crate::layout::ParamLayout;
use crate::param_spec::ParamSpec;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A parameter has an empty or whitespace-only id.
    #[error("parameter at position {0} has an empty id")]
    EmptyId(usize),

    /// Two parameters share an id.
    #[error("duplicate parameter id '{0}'")]
    DuplicateId(String),

    /// A parameter's range, scale or default is unusable.
    #[error("parameter '{id}': {source}")]
    InvalidParam {
        /// Id of the offending parameter.
        id: String,
        /// What the core model rejected.
        #[source]
        source: ParamError,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a single parameter spec.
pub fn validate_param(position: usize, spec: &ParamSpec) -> ValidationResult<()> {
    if spec.id.trim().is_empty() {
        return Err(ValidationError::EmptyId(position));
    }
    spec.to_parameter()
        .map(|_| ())
        .map_err(|source| ValidationError::InvalidParam {
            id: spec.id.clone(),
            source,
        })
}

/// Validate a whole layout, stopping at the first problem in declaration order.
pub fn validate_layout(layout: &ParamLayout) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(layout.len());
    for (position, spec) in layout.iter().enumerate() {
        validate_param(position, spec)?;
        if !seen.insert(spec.id.as_str()) {
            return Err(ValidationError::DuplicateId(spec.id.clone()));
        }
    }
    Ok(())
}
