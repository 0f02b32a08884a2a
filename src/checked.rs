//! Validating wrapper around [`approximate`].
//!
//! The primitive itself never checks its input. This layer is for callers
//! whose inputs come from outside a trusted numeric pipeline.

use crate::error::RsqrtError;
use crate::rsqrt::approximate;

/// [`approximate`] with the precondition enforced.
///
/// Returns `Err` for NaN, infinities, zero (either sign) and negative values.
/// Any accepted input yields exactly the bits `approximate` would.
///
/// ```
/// use qrsqrt::{try_approximate, RsqrtError};
///
/// assert!(try_approximate(16.0).is_ok());
/// assert_eq!(try_approximate(0.0), Err(RsqrtError::NonPositive(0.0)));
/// ```
#[inline]
pub fn try_approximate(number: f32) -> Result<f32, RsqrtError> {
    if !number.is_finite() {
        log::trace!("rejecting non-finite rsqrt input {}", number);
        return Err(RsqrtError::NotFinite(number));
    }
    if number <= 0.0 {
        log::trace!("rejecting non-positive rsqrt input {}", number);
        return Err(RsqrtError::NonPositive(number));
    }
    Ok(approximate(number))
}
