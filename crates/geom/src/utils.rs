//! Small helpers shared by the geometric types.

use crate::Scalar;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Tolerant equality, with the threshold scaled to the magnitude of the operands.
#[inline]
pub fn approx_eq<S: Scalar>(a: S, b: S) -> bool {
    (a - b).abs() <= S::epsilon_for(a.abs().max(b.abs()))
}

/// Whether `v` is within the base tolerance of zero.
#[inline]
pub fn approx_zero<S: Scalar>(v: S) -> bool {
    v.abs() <= S::EPSILON
}

/// `a <= b`, allowing `a` to exceed `b` by the comparison tolerance.
#[inline]
pub fn approx_le<S: Scalar>(a: S, b: S) -> bool {
    a <= b || approx_eq(a, b)
}

/// `a >= b`, allowing `a` to fall short of `b` by the comparison tolerance.
#[inline]
pub fn approx_ge<S: Scalar>(a: S, b: S) -> bool {
    a >= b || approx_eq(a, b)
}

#[test]
fn tolerant_comparisons() {
    assert!(approx_eq(1.0f32, 1.0 + 1e-6));
    assert!(!approx_eq(1.0f32, 1.1));
    assert!(approx_zero(1e-9f64));
    assert!(!approx_zero(0.1f64));

    assert!(approx_le(1.0f32 + 1e-6, 1.0));
    assert!(!approx_le(1.1f32, 1.0));
    assert!(approx_ge(1.0f32 - 1e-6, 1.0));

    assert_eq!(min_max(2.0f32, -3.0), (-3.0, 2.0));
    assert_eq!(min_max(-3.0f32, 2.0), (-3.0, 2.0));
}
