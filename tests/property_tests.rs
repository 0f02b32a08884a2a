//! Property-based tests for the approximation's numeric guarantees.
//!
//! Inputs are drawn as `2^e` with a uniform exponent so that every octave in
//! the tested range gets equal weight.

use proptest::prelude::*;
use qrsqrt::{approximate, estimate, newton_step, try_approximate, MAGIC};

/// Exact inverse square root in f64.
fn rsqrt_reference(x: f32) -> f64 {
    1.0 / (x as f64).sqrt()
}

/// Zeroth-order estimate computed independently on the unsigned view.
///
/// The arithmetic shift is spelled out: a logical shift with the sign bit
/// copied back into the top position.
fn estimate_reference(x: f32) -> u32 {
    let bits = x.to_bits();
    let shifted = (bits >> 1) | (bits & 0x8000_0000);
    (MAGIC as u32).wrapping_sub(shifted)
}

/// Positive normal floats spanning 2^-20 ..= 2^20.
fn arb_positive() -> impl Strategy<Value = f32> {
    (-20.0f64..=20.0).prop_map(|e| 2f64.powf(e) as f32)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        ..ProptestConfig::default()
    })]

    /// Relative error stays under 0.2% across forty octaves.
    #[test]
    fn relative_error_is_bounded(x in arb_positive()) {
        let exact = rsqrt_reference(x);
        let err = (approximate(x) as f64 - exact).abs() / exact;
        prop_assert!(err <= 2e-3, "approximate({}) rel_error = {}", x, err);
    }

    /// Larger inputs give strictly smaller results.
    ///
    /// Adjacent floats can round to the same output, so the pair is kept at
    /// least 0.1% apart.
    #[test]
    fn approximate_is_decreasing(b in arb_positive(), factor in 1.001f32..1000.0) {
        let a = b * factor;
        prop_assert!(a > b);
        prop_assert!(
            approximate(a) < approximate(b),
            "approximate({}) = {} not below approximate({}) = {}",
            a, approximate(a), b, approximate(b)
        );
    }

    /// A second Newton-Raphson step never makes the result worse, up to
    /// f32 rounding in the step itself.
    #[test]
    fn extra_newton_step_reduces_error(x in arb_positive()) {
        let exact = rsqrt_reference(x);
        let once = approximate(x);
        let twice = newton_step(x, once);

        let err_once = (once as f64 - exact).abs();
        let err_twice = (twice as f64 - exact).abs();
        let slack = 2.0 * f32::EPSILON as f64 * exact;
        prop_assert!(
            err_twice <= err_once + slack,
            "x = {}: one step err = {}, two steps err = {}",
            x, err_once, err_twice
        );
    }

    /// The estimate matches the textbook subtraction bit-for-bit, negative
    /// and non-finite bit patterns included.
    #[test]
    fn estimate_is_bit_exact(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        prop_assert_eq!(estimate(x).to_bits(), estimate_reference(x));
    }

    /// Refinement is a pure function of the estimate.
    #[test]
    fn approximate_composes_stages(x in arb_positive()) {
        prop_assert_eq!(
            approximate(x).to_bits(),
            newton_step(x, estimate(x)).to_bits()
        );
    }

    /// The checked wrapper agrees with the primitive on every positive finite input.
    #[test]
    fn checked_agrees_on_domain(bits in 1u32..0x7f80_0000) {
        let x = f32::from_bits(bits);
        let checked = try_approximate(x);
        prop_assert!(checked.is_ok(), "rejected {}", x);
        prop_assert_eq!(checked.unwrap_or(f32::NAN).to_bits(), approximate(x).to_bits());
    }

    /// The checked wrapper rejects every negative value.
    #[test]
    fn checked_rejects_negative(bits in 0x8000_0000u32..0xff80_0000) {
        let x = f32::from_bits(bits);
        prop_assert!(try_approximate(x).is_err(), "accepted {}", x);
    }

    /// No input, in or out of domain, panics.
    #[test]
    fn never_panics(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        let _ = approximate(x);
        let _ = try_approximate(x);
    }
}
