//! Lock-free parameter shared between the audio thread and UI/host threads.
//!
//! [`SharedParam`] is the cross-thread form of [`Parameter`]. The normalized
//! value and normalized default live in `AtomicU32`s (f32 bit-cast), the range
//! is published via `ArcSwap` for wait-free reads. Actual values are never
//! stored: every read derives them from one normalized load and one range
//! load, so a reader can never observe a torn actual/normalized pair.
//!
//! # Thread Safety
//!
//! - **Values**: `AtomicU32`, lock-free reads and writes.
//! - **Range**: `ArcSwap::load()`, wait-free reads. Range changes allocate
//!   and belong on a UI or main thread.
//! - **Generation**: `AtomicU32` bumped after every successful write, used by
//!   [`ParamPoller`] to detect changes.
//!
//! A write computed against a range that is swapped concurrently keeps its
//! normalized position, which is the same rule [`Parameter::set_range`]
//! applies.
//!
//! # Example
//!
//! ```rust
//! use plugparam_core::{Parameter, ParamPoller, SharedParam};
//!
//! let gain = SharedParam::from(
//!     Parameter::builder().name("Gain").unit("dB").range(-20.0, 20.0).build().unwrap(),
//! );
//!
//! // Audio thread gets a clone
//! let audio = gain.clone();
//!
//! // UI edit
//! let normalized = gain.set_actual(10.0).unwrap();
//! assert_eq!(normalized, 0.75);
//! assert_eq!(audio.actual(), 10.0);
//!
//! // Editor timer polls for host-driven changes
//! let mut poller = ParamPoller::new();
//! assert_eq!(poller.poll(&gain), Some(10.0));
//! assert_eq!(poller.poll(&gain), None);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use arc_swap::ArcSwap;

use crate::error::ParamError;
use crate::parameter::Parameter;
use crate::range::{ParamRange, ParamScale};

/// Inner storage behind `Arc` so `SharedParam` can be cheaply cloned.
struct SharedParamData {
    name: Box<str>,
    unit: Box<str>,
    range: ArcSwap<ParamRange>,
    /// Normalized value as f32 bits.
    normalized: AtomicU32,
    /// Normalized default as f32 bits.
    default_normalized: AtomicU32,
    generation: AtomicU32,
}

/// A parameter readable from the audio thread without blocking.
///
/// Clones share the same underlying state.
#[derive(Clone)]
pub struct SharedParam {
    inner: Arc<SharedParamData>,
}

impl SharedParam {
    /// Creates shared state holding `param`'s configuration and current values.
    pub fn new(param: &Parameter) -> Self {
        Self {
            inner: Arc::new(SharedParamData {
                name: param.name().into(),
                unit: param.unit().into(),
                range: ArcSwap::from_pointee(param.range()),
                normalized: AtomicU32::new(param.normalized().to_bits()),
                default_normalized: AtomicU32::new(param.default_normalized().to_bits()),
                generation: AtomicU32::new(0),
            }),
        }
    }

    // ── Reads (lock-free) ───────────────────────────────────────────────────

    /// Display label.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Display unit suffix.
    pub fn unit(&self) -> &str {
        &self.inner.unit
    }

    /// Current range.
    pub fn range(&self) -> ParamRange {
        **self.inner.range.load()
    }

    /// Lower bound of the actual value.
    pub fn minimum(&self) -> f32 {
        self.range().min()
    }

    /// Upper bound of the actual value.
    pub fn maximum(&self) -> f32 {
        self.range().max()
    }

    /// Current normalized value.
    #[inline]
    pub fn normalized(&self) -> f32 {
        f32::from_bits(self.inner.normalized.load(Ordering::Acquire))
    }

    /// Current actual value, derived from the normalized value and range.
    #[inline]
    pub fn actual(&self) -> f32 {
        let normalized = self.normalized();
        let range = self.range();
        range.clamp(range.to_actual(normalized))
    }

    /// Normalized default.
    pub fn default_normalized(&self) -> f32 {
        f32::from_bits(self.inner.default_normalized.load(Ordering::Acquire))
    }

    /// Actual default, derived from the normalized default and range.
    pub fn default_actual(&self) -> f32 {
        let normalized = self.default_normalized();
        let range = self.range();
        range.clamp(range.to_actual(normalized))
    }

    /// Number of successful writes so far (wrapping).
    #[inline]
    pub fn generation(&self) -> u32 {
        self.inner.generation.load(Ordering::Acquire)
    }

    /// Consistent single-threaded copy of the current state.
    pub fn snapshot(&self) -> Parameter {
        Parameter::from_normalized(
            self.inner.name.to_string(),
            self.inner.unit.to_string(),
            self.range(),
            self.normalized(),
            self.default_normalized(),
        )
    }

    // ── Writes (lock-free except range) ─────────────────────────────────────

    /// Sets the normalized value and returns the derived actual value.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] for NaN or values outside `[0, 1]`.
    pub fn set_normalized(&self, value: f32) -> Result<f32, ParamError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ParamError::normalized_out_of_domain(value));
        }
        self.store(&self.inner.normalized, value);
        let range = self.range();
        Ok(range.clamp(range.to_actual(value)))
    }

    /// Sets the actual value and returns the derived normalized value.
    ///
    /// Only the normalized form is stored, so [`actual`](Self::actual) reads
    /// back the value re-derived from it, which can differ from `value` in
    /// the last bit. [`Parameter::set_actual`] keeps `value` exactly.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] for NaN or values outside the range.
    pub fn set_actual(&self, value: f32) -> Result<f32, ParamError> {
        let range = self.range();
        if !range.contains(value) {
            return Err(ParamError::OutOfDomain {
                value,
                min: range.min(),
                max: range.max(),
            });
        }
        let normalized = range.to_normalized(value).clamp(0.0, 1.0);
        self.store(&self.inner.normalized, normalized);
        Ok(normalized)
    }

    /// Sets the normalized default and returns the derived actual default.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] for NaN or values outside `[0, 1]`.
    pub fn set_default_normalized(&self, value: f32) -> Result<f32, ParamError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ParamError::normalized_out_of_domain(value));
        }
        self.store(&self.inner.default_normalized, value);
        let range = self.range();
        Ok(range.clamp(range.to_actual(value)))
    }

    /// Sets the default in real units and returns the derived normalized default.
    ///
    /// # Errors
    ///
    /// [`ParamError::OutOfDomain`] for NaN or values outside the range.
    pub fn set_default_actual(&self, value: f32) -> Result<f32, ParamError> {
        let range = self.range();
        if !range.contains(value) {
            return Err(ParamError::OutOfDomain {
                value,
                min: range.min(),
                max: range.max(),
            });
        }
        let normalized = range.to_normalized(value).clamp(0.0, 1.0);
        self.store(&self.inner.default_normalized, normalized);
        Ok(normalized)
    }

    /// Returns the current value to the default.
    pub fn reset(&self) {
        self.store(&self.inner.normalized, self.default_normalized());
    }

    /// Replaces the range bounds, keeping the scale and normalized positions.
    ///
    /// Allocates; call from a UI or main thread.
    ///
    /// # Errors
    ///
    /// [`ParamError::InvalidRange`] or [`ParamError::InvalidScale`]; the
    /// range is unchanged.
    pub fn set_range(&self, min: f32, max: f32) -> Result<(), ParamError> {
        let scale = self.range().scale();
        self.set_scaled_range(min, max, scale)
    }

    /// Replaces bounds and curve together, keeping normalized positions.
    ///
    /// # Errors
    ///
    /// Same as [`set_range`](Self::set_range).
    pub fn set_scaled_range(&self, min: f32, max: f32, scale: ParamScale) -> Result<(), ParamError> {
        let range = ParamRange::with_scale(min, max, scale)?;
        self.inner.range.store(Arc::new(range));
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn store(&self, slot: &AtomicU32, value: f32) {
        slot.store(value.to_bits(), Ordering::Release);
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl From<Parameter> for SharedParam {
    fn from(param: Parameter) -> Self {
        Self::new(&param)
    }
}

impl From<&Parameter> for SharedParam {
    fn from(param: &Parameter) -> Self {
        Self::new(param)
    }
}

impl std::fmt::Debug for SharedParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedParam")
            .field("name", &self.name())
            .field("range", &self.range())
            .field("normalized", &self.normalized())
            .field("generation", &self.generation())
            .finish()
    }
}

/// Change detector for a UI timer that mirrors a [`SharedParam`].
///
/// Polling only reads the shared state. Each poller keeps its own cursor, so
/// several views can watch the same parameter independently.
#[derive(Debug, Clone, Default)]
pub struct ParamPoller {
    last_seen: Option<u32>,
}

impl ParamPoller {
    /// Creates a poller that reports on its first poll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current actual value if the parameter changed since the
    /// last poll, `None` otherwise.
    pub fn poll(&mut self, param: &SharedParam) -> Option<f32> {
        let generation = param.generation();
        if self.last_seen == Some(generation) {
            return None;
        }
        self.last_seen = Some(generation);
        Some(param.actual())
    }
}
