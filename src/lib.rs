//! Fast approximate inverse square root for `f32`.
//!
//! `qrsqrt` provides one primitive, [`approximate`], computing `1/sqrt(x)`
//! without division or sqrt:
//!
//! - **Estimate**: [`estimate`], the magic-number bit hack on the `i32` view
//! - **Refine**: [`newton_step`], one Newton-Raphson iteration
//! - **Checked**: [`try_approximate`], the same result with input validation
//!
//! # Accuracy
//!
//! | Stage | Max relative error |
//! |-------|--------------------|
//! | [`estimate`] | ~3.4% |
//! | [`approximate`] | ~0.175% |
//! | `1.0 / x.sqrt()` | ~1 ulp |
//!
//! Good enough for normalizing direction vectors in lighting or physics
//! code, not for anything that accumulates the error.
//!
//! # Historical Context
//!
//! The constant `0x5f3759df` became famous through the Quake III Arena source
//! release (2005), though it predates the game. Lomont (2003) showed it is
//! close to, but not exactly, the optimum for the one-iteration case.
//!
//! # Example
//!
//! ```rust
//! use qrsqrt::approximate;
//!
//! let v = [3.0_f32, 4.0];
//! let inv_len = approximate(v[0] * v[0] + v[1] * v[1]);
//! let unit = [v[0] * inv_len, v[1] * inv_len];
//!
//! assert!((unit[0] - 0.6).abs() < 2e-3);
//! assert!((unit[1] - 0.8).abs() < 2e-3);
//! ```
//!
//! # References
//!
//! - Lomont, C. (2003). "Fast Inverse Square Root"
//! - Robertson, M. (2012). "A Brief History of InvSqrt"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod checked;
mod error;
mod rsqrt;

pub use checked::try_approximate;
pub use error::RsqrtError;
pub use rsqrt::{approximate, estimate, newton_step, MAGIC};
