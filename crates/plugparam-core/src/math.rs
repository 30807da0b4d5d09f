//! Level conversions between linear amplitude and decibels.
//!
//! Gain parameters are usually presented in dB while processing works on
//! linear amplitude (unit voltage, -1.0 to 1.0 for full scale). Keep track of
//! which one a value is in: samples are never output in decibels.

use libm::{log10f, powf};

/// Level reported for amplitudes at or below [`SILENCE_THRESHOLD`].
pub const SILENCE_DB: f32 = -100.0;

/// Amplitude treated as silence by [`linear_to_db`].
pub const SILENCE_THRESHOLD: f32 = 0.000_01;

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use plugparam_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db / 20.0)
}

/// Convert linear gain to decibels.
///
/// Amplitudes at or below [`SILENCE_THRESHOLD`] (including zero and
/// negative values) report [`SILENCE_DB`].
///
/// # Example
/// ```rust
/// use plugparam_core::{linear_to_db, SILENCE_DB};
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// assert_eq!(linear_to_db(0.0), SILENCE_DB);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear > SILENCE_THRESHOLD {
        20.0 * log10f(linear)
    } else {
        SILENCE_DB
    }
}
