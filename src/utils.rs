//! Various math tools that are usually not very useful outside of this crate.

use crate::scalar::Scalar;
use crate::{vector, Vector};
use arrayvec::ArrayVec;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The vector `v` rotated by 90 degrees counter-clockwise.
#[inline]
pub fn tangent<S: Scalar>(v: Vector<S>) -> Vector<S> {
    vector(-v.y, v.x)
}

/// Express `v` in the frame whose x axis is the unit vector `basis`.
///
/// In other words, rotate `v` so that `basis` maps to the x axis. `basis` is
/// expected to be normalized.
#[inline]
pub fn rebase<S: Scalar>(v: Vector<S>, basis: Vector<S>) -> Vector<S> {
    vector(v.dot(basis), basis.cross(v))
}

/// Returns the maximum of `|3·t·(1-t)·(d0·(1-t) + d1·t)|` for t in [0, 1].
///
/// This is the deviation envelope of a cubic bézier segment whose interior
/// control points are displaced by `d0` and `d1` along a common axis: the
/// displacement of the curve itself never exceeds the returned value.
pub fn max_dev<S: Scalar>(d0: S, d1: S) -> S {
    let mut candidates: ArrayVec<S, 4> = ArrayVec::new();
    candidates.push(S::ZERO);
    candidates.push(S::ONE);

    if d0 == d1 {
        // The derived quadratic degenerates, the only interior critical
        // point is at t = 1/2.
        candidates.push(S::HALF);
    } else {
        let delta = d0 * d0 - d0 * d1 + d1 * d1;
        let t2 = S::ONE / (S::THREE * (d0 - d1));
        let t0 = (S::TWO * d0 - d1) * t2;
        if delta == S::ZERO {
            candidates.push(t0);
        } else if delta > S::ZERO {
            let t1 = delta.sqrt() * t2;
            candidates.push(t0 - t1);
            candidates.push(t0 + t1);
        }
    }

    let mut e = S::ZERO;
    for t in candidates {
        if t < S::ZERO || t > S::ONE {
            continue;
        }
        let ee = (S::THREE * t * (S::ONE - t) * (d0 * (S::ONE - t) + d1 * t)).abs();
        e = e.max(ee);
    }

    e
}

/// A fast approximation of [`max_dev`].
///
/// Cheap envelope that avoids the square root. It may over-estimate the exact
/// maximum, so it is only usable where an upper bound suffices.
pub fn max_dev_approx<S: Scalar>(d0: S, d1: S) -> S {
    let d0 = d0.abs();
    let d1 = d1.abs();
    let e0 = S::THREE / S::FOUR * d0.max(d1);
    let e1 = S::FOUR / S::NINE * (d0 + d1);
    e0.min(e1)
}

#[test]
fn max_dev_equal_displacements() {
    // d0 == d1 == d: the maximum is at t = 1/2 and equals 3/4·d.
    assert_eq!(max_dev(1.0f64, 1.0), 0.75);
    assert_eq!(max_dev(2.0f64, 2.0), 1.5);
    assert_eq!(max_dev(-1.0f64, -1.0), 0.75);
    assert_eq!(max_dev(0.0f64, 0.0), 0.0);
}

#[test]
fn max_dev_matches_sampling() {
    let cases: &[(f64, f64)] = &[
        (1.0, 0.0),
        (0.0, 1.0),
        (1.0, -1.0),
        (0.3, 0.7),
        (-2.5, 0.1),
        (10.0, 10.0),
        (1e-3, -1e-3),
    ];
    for &(d0, d1) in cases {
        let bound = max_dev(d0, d1);
        let mut sampled: f64 = 0.0;
        let mut t = 0.0;
        while t <= 1.0 {
            let v = (3.0 * t * (1.0 - t) * (d0 * (1.0 - t) + d1 * t)).abs();
            sampled = sampled.max(v);
            t += 1e-4;
        }
        assert!(bound >= sampled - 1e-9, "d0={:?} d1={:?}", d0, d1);
        assert!(bound <= sampled + 1e-6, "d0={:?} d1={:?}", d0, d1);
    }
}

#[test]
fn max_dev_approx_envelope() {
    assert_eq!(max_dev_approx(0.0f64, 0.0), 0.0);
    // The approximation never undershoots the exact bound by more than a
    // constant factor.
    let cases: &[(f64, f64)] = &[(1.0, 0.0), (1.0, 1.0), (0.2, 0.9), (-3.0, 0.5)];
    for &(d0, d1) in cases {
        let exact = max_dev(d0, d1);
        let approx = max_dev_approx(d0, d1);
        assert!(approx >= exact * 0.55, "d0={:?} d1={:?}", d0, d1);
    }
}

#[test]
fn rebase_frames() {
    let b = vector(0.0f64, 1.0);
    let v = rebase(vector(2.0, 3.0), b);
    assert!((v.x - 3.0).abs() < 1e-12);
    assert!((v.y + 2.0).abs() < 1e-12);

    // Rebasing on the x axis is the identity.
    let v = rebase(vector(2.0, 3.0), vector(1.0, 0.0));
    assert_eq!(v, vector(2.0, 3.0));
}
