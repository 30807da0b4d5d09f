//! Declarative parameter layouts for plugparam.
//!
//! A layout is a TOML file listing a plugin's parameters in host order. This
//! crate parses, validates and saves layouts, and turns them into a
//! [`ParamBank`](plugparam_core::ParamBank) keyed by parameter id.
//!
//! # Example
//!
//! ```rust
//! use plugparam_config::ParamLayout;
//!
//! let layout = ParamLayout::from_toml(r#"
//! name = "Simple Gain"
//!
//! [[params]]
//! id = "gain"
//! name = "Gain"
//! unit = "dB"
//! min = -60.0
//! max = 12.0
//! default = 0.0
//! "#)?;
//!
//! let mut bank = layout.build_bank()?;
//! let normalized = bank.get_mut("gain").unwrap().set_actual(-24.0)?;
//! assert_eq!(normalized, 0.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod layout;
mod param_spec;

/// Layout validation.
pub mod validation;

pub use error::LayoutError;
pub use layout::ParamLayout;
pub use param_spec::{ParamSpec, ScaleSpec};
pub use validation::{ValidationError, ValidationResult, validate_layout, validate_param};
