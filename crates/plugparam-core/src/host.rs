//! Index-based parameter access for plugin host adapters.
//!
//! Plugin hosts address parameters by position and exchange values in
//! normalized form. [`HostParams`] is that view: a host adapter (VST, AU,
//! CLAP glue) implements its callbacks on top of it without knowing the
//! plugin's parameter keys.
//!
//! [`ParamBank`] implements it, so a plugin usually just hands its bank to
//! the adapter.
//!
//! # Example
//!
//! ```rust
//! use plugparam_core::{HostParams, ParamBank, Parameter};
//!
//! fn automate<H: HostParams>(host: &mut H, index: usize, value: f32) {
//!     if let Ok(actual) = host.set_normalized(index, value) {
//!         // forward `actual` to the editor
//!         let _ = actual;
//!     }
//! }
//!
//! let mut bank = ParamBank::new();
//! bank.insert("gain", Parameter::builder().name("Gain").unit("dB").range(-20.0, 20.0).build().unwrap());
//!
//! automate(&mut bank, 0, 0.75);
//! assert_eq!(bank.param_text(0).as_deref(), Some("10.00 dB"));
//! ```

use alloc::string::String;

use crate::bank::ParamBank;
use crate::error::ParamError;
use crate::parameter::Parameter;

/// Positional parameter access in the shape host protocols expect.
///
/// Valid indices are `0..param_count()`. Reads of an unknown index return
/// `None`; writes fail with [`ParamError::UnknownIndex`].
pub trait HostParams {
    /// Number of parameters exposed to the host.
    fn param_count(&self) -> usize;

    /// Parameter at `index`.
    fn param(&self, index: usize) -> Option<&Parameter>;

    /// Mutable parameter at `index`.
    fn param_mut(&mut self, index: usize) -> Option<&mut Parameter>;

    /// Display label of the parameter at `index`.
    fn param_name(&self, index: usize) -> Option<&str> {
        self.param(index).map(Parameter::name)
    }

    /// Unit suffix of the parameter at `index`.
    fn param_unit(&self, index: usize) -> Option<&str> {
        self.param(index).map(Parameter::unit)
    }

    /// Current normalized value of the parameter at `index`.
    fn get_normalized(&self, index: usize) -> Option<f32> {
        self.param(index).map(Parameter::normalized)
    }

    /// Normalized default of the parameter at `index`.
    fn default_normalized(&self, index: usize) -> Option<f32> {
        self.param(index).map(Parameter::default_normalized)
    }

    /// Formatted actual value of the parameter at `index`, e.g. `"-6.00 dB"`.
    fn param_text(&self, index: usize) -> Option<String> {
        self.param(index).map(Parameter::display_text)
    }

    /// Sets the normalized value of the parameter at `index` and returns the
    /// derived actual value.
    ///
    /// # Errors
    ///
    /// [`ParamError::UnknownIndex`] for a bad index, otherwise whatever
    /// [`Parameter::set_normalized`] reports.
    fn set_normalized(&mut self, index: usize, value: f32) -> Result<f32, ParamError> {
        self.param_mut(index)
            .ok_or(ParamError::UnknownIndex(index))?
            .set_normalized(value)
    }

    /// Finds a parameter index by display name (case-insensitive).
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count())
            .find(|&i| self.param_name(i).is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }
}

impl<K> HostParams for ParamBank<K> {
    fn param_count(&self) -> usize {
        self.len()
    }

    fn param(&self, index: usize) -> Option<&Parameter> {
        self.at(index)
    }

    fn param_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.at_mut(index)
    }
}
