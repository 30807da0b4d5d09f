//! Plugparam Core - parameter model for audio plugins
//!
//! Host automation works in normalized values (0.0–1.0) while editors and
//! users think in actual units (dB, Hz, ms). This crate keeps the two in sync.
//!
//! # Core Abstractions
//!
//! ## Parameters
//!
//! - [`Parameter`] - One control in actual and normalized form, with a default
//! - [`ParamBuilder`] - Optional name, unit, range, scale and default
//! - [`ParamRange`] / [`ParamScale`] - Validated bounds and mapping curve
//! - [`to_actual`] / [`to_normalized`] - The pure mapping functions
//!
//! ## Containers
//!
//! - [`ParamBank`] - Keyed, insertion-ordered set of parameters
//! - [`HostParams`] - Index-based view for plugin host adapters
//!
//! ## Threading (`std` feature)
//!
//! - [`SharedParam`] - Lock-free parameter for audio/UI hand-off
//! - [`ParamPoller`] - Change detection for editor timers
//!
//! ## Utilities
//!
//! - Level conversions: [`db_to_linear`], [`linear_to_db`]
//!
//! # Errors
//!
//! Every fallible operation returns [`ParamError`] and leaves the parameter
//! in its previous consistent state. Inputs are never silently turned into
//! NaN or an inconsistent pair.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for names and banks).
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! plugparam-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use plugparam_core::{HostParams, ParamBank, Parameter};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Param {
//!     Gain,
//! }
//!
//! let mut params = ParamBank::new();
//! params.insert(
//!     Param::Gain,
//!     Parameter::builder().name("Gain").unit("dB").range(-20.0, 20.0).build()?,
//! );
//!
//! // Editor: user drags the gain slider to +10 dB
//! let normalized = params.get_mut(&Param::Gain).unwrap().set_actual(10.0)?;
//! assert_eq!(normalized, 0.75);
//!
//! // Host: reads the value back by index
//! assert_eq!(params.get_normalized(0), Some(0.75));
//! assert_eq!(params.param_text(0).as_deref(), Some("10.00 dB"));
//! # Ok::<(), plugparam_core::ParamError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bank;
pub mod error;
pub mod host;
pub mod math;
pub mod parameter;
pub mod range;
#[cfg(feature = "std")]
pub mod shared;

// Re-export main types at crate root
pub use bank::ParamBank;
pub use error::ParamError;
pub use host::HostParams;
pub use math::{SILENCE_DB, SILENCE_THRESHOLD, db_to_linear, linear_to_db};
pub use parameter::{ParamBuilder, Parameter};
pub use range::{ParamRange, ParamScale, to_actual, to_normalized};
#[cfg(feature = "std")]
pub use shared::{ParamPoller, SharedParam};
