//! Fast inverse square root using the magic-number bit hack.
//!
//! # Algorithm
//!
//! An IEEE-754 binary32 value read as an integer is, roughly, a scaled and
//! shifted `log2` of the value. Halving and negating that integer therefore
//! approximates `log2(x^-1/2)`, and the constant `0x5f3759df` restores the
//! exponent bias and tunes the mantissa error:
//!
//! ```text
//! i  = bits(x) as i32
//! y0 = from_bits(0x5f3759df - (i >> 1))   // ~3.4% max relative error
//! y1 = y0 * (1.5 - 0.5 * x * y0 * y0)     // ~0.175% max relative error
//! ```
//!
//! The second line is one Newton-Raphson step on `f(y) = 1/y^2 - x`, whose
//! positive root is `1/sqrt(x)`. Each step roughly squares the relative error.
//!
//! # Performance Impact
//!
//! Normalizing a vector with `v / sqrt(dot(v, v))` costs one sqrt and one
//! division (~30-40 cycles). `v * approximate(dot(v, v))` is a shift, two
//! subtractions and four multiplies.
//!
//! # References
//!
//! - Lomont (2003): "Fast Inverse Square Root", analysis of the constant
//! - Quake III Arena (1999): `Q_rsqrt`

/// Magic constant for the zeroth-order estimate.
///
/// Subtracting the halved bit pattern from this value halves and negates the
/// exponent while keeping the mantissa error near its minimax optimum.
pub const MAGIC: i32 = 0x5f3759df;

/// Zeroth-order inverse square root estimate, before any refinement.
///
/// Reinterprets `number` as an `i32`, computes `MAGIC - (i >> 1)` with an
/// arithmetic shift, and reinterprets the result as an `f32`.
///
/// The subtraction wraps. For every positive input it never overflows, so
/// wrapping only matters for negative bit patterns, where it keeps the
/// function from panicking with overflow checks enabled.
///
/// ```
/// use qrsqrt::estimate;
///
/// assert_eq!(estimate(1.0).to_bits(), 0x3f77_59df);
/// ```
#[inline]
#[must_use]
pub fn estimate(number: f32) -> f32 {
    let i = number.to_bits() as i32;
    let i = MAGIC.wrapping_sub(i >> 1);
    f32::from_bits(i as u32)
}

/// One Newton-Raphson step towards `1/sqrt(number)` starting from `y`.
///
/// `y' = y * (1.5 - 0.5 * number * y * y)`
///
/// Converges quadratically when `y` is already close to the root.
#[inline]
#[must_use]
pub fn newton_step(number: f32, y: f32) -> f32 {
    let half = 0.5 * number;
    y * (1.5 - half * y * y)
}

/// Fast approximate inverse square root: `1/sqrt(number)` within ~0.175%.
///
/// Magic-number estimate followed by exactly one Newton-Raphson step.
/// No division, no sqrt, no branches.
///
/// # Preconditions
///
/// `number` must be finite and strictly positive. Zero, negative, NaN and
/// infinite inputs produce an unspecified value; the function still never
/// panics or allocates. Use [`try_approximate`](crate::try_approximate) when
/// inputs are not known to be in range.
///
/// ```
/// use qrsqrt::approximate;
///
/// let r = approximate(4.0);
/// assert!((r - 0.5).abs() / 0.5 < 2e-3);  // 1/sqrt(4) = 0.5
/// ```
#[inline]
#[must_use]
pub fn approximate(number: f32) -> f32 {
    newton_step(number, estimate(number))
}
