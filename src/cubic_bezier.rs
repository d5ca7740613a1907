use crate::arc::Circle;
use crate::cubic_to_arcs::{cubic_to_arcs, ArcSegment};
use crate::line::LineSegment;
use crate::scalar::Scalar;
use crate::utils::tangent;
use crate::{Point, Vector};

use core::ops::Range;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:²
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    #[inline]
    fn derivative_coefficients(&self, t: S) -> (S, S, S, S) {
        let t2 = t * t;
        (
            -S::THREE * t2 + S::SIX * t - S::THREE,
            S::NINE * t2 - S::value(12.0) * t + S::THREE,
            -S::NINE * t2 + S::SIX * t,
            S::THREE * t2,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let (c0, c1, c2, c3) = self.derivative_coefficients(t);
        self.from.to_vector() * c0
            + self.ctrl1.to_vector() * c1
            + self.ctrl2.to_vector() * c2
            + self.to.to_vector() * c3
    }

    /// Sample the curve's second derivative at t (expecting t between 0 and 1).
    pub fn second_derivative(&self, t: S) -> Vector<S> {
        let c0 = S::SIX - S::SIX * t;
        let c1 = S::value(18.0) * t - S::value(12.0);
        let c2 = S::SIX - S::value(18.0) * t;
        let c3 = S::SIX * t;
        self.from.to_vector() * c0
            + self.ctrl1.to_vector() * c1
            + self.ctrl2.to_vector() * c2
            + self.to.to_vector() * c3
    }

    /// The signed curvature of the curve at t.
    ///
    /// Positive where the curve turns counter-clockwise. Returns zero at
    /// points where the derivative vanishes.
    pub fn curvature(&self, t: S) -> S {
        let prime = self.derivative(t);
        let prime2 = self.second_derivative(t);
        let len = prime.length();
        if len == S::ZERO {
            return S::ZERO;
        }

        prime.cross(prime2) / (len * len * len)
    }

    /// The circle matching the curve's position, tangent and curvature at t.
    ///
    /// Returns `None` where the curvature (or the derivative) vanishes and the
    /// best local approximation is a straight line instead.
    pub fn osculating_circle(&self, t: S) -> Option<Circle<S>> {
        let prime = self.derivative(t);
        let len = prime.length();
        if len == S::ZERO {
            return None;
        }

        let k = self.curvature(t);
        if k == S::ZERO {
            return None;
        }

        let center = self.sample(t) + tangent(prime) * (S::ONE / (k * len));

        Some(Circle {
            center,
            radius: (S::ONE / k).abs(),
        })
    }

    /// Return the sub-curve inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        let (t0, t1) = (t_range.start, t_range.end);
        let from = self.sample(t0);
        let to = self.sample(t1);

        // Derivative control polygon, scaled by the range.
        let d0 = self.ctrl1 - self.from;
        let d1 = self.ctrl2 - self.ctrl1;
        let d2 = self.to - self.ctrl2;

        let quadratic_sample = |t: S| {
            let one_t = S::ONE - t;
            d0 * one_t * one_t + d1 * S::TWO * one_t * t + d2 * t * t
        };

        let dt = t1 - t0;
        let ctrl1 = from + quadratic_sample(t0) * dt;
        let ctrl2 = to - quadratic_sample(t1) * dt;

        CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Return the curve before the split point.
    pub fn before_split(&self, t: S) -> CubicBezierSegment<S> {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;

        CubicBezierSegment {
            from: self.from,
            ctrl1: ctrl1a,
            ctrl2: ctrl1aa,
            to: ctrl1aa + (ctrl2aa - ctrl1aa) * t,
        }
    }

    /// Return the curve after the split point.
    pub fn after_split(&self, t: S) -> CubicBezierSegment<S> {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;

        CubicBezierSegment {
            from: ctrl1aa + (ctrl2aa - ctrl1aa) * t,
            ctrl1: ctrl2aa,
            ctrl2: ctrl3a,
            to: self.to,
        }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// Split this curve at t = 1/2.
    #[inline]
    pub fn halve(&self) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        self.split(S::HALF)
    }

    /// The line segment between the curve's endpoints.
    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Approximate the curve with a sequence of circular arcs, invoking a
    /// callback for each of them.
    ///
    /// The maximum distance between the curve and the emitted arcs is bounded
    /// by the tolerance threshold (up to the bounded imprecision of the cut
    /// point search, see [`mod@crate::cubic_to_arcs`]).
    pub fn for_each_arc<F>(&self, tolerance: S, callback: &mut F)
    where
        F: FnMut(&ArcSegment<S>),
    {
        cubic_to_arcs(self, tolerance, callback);
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn sample_endpoints() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 2.0),
        ctrl2: point(3.0, 2.0),
        to: point(4.0, 0.0),
    };

    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);
}

#[test]
fn split_matches_split_range() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 40.0),
        ctrl2: point(60.0, 40.0),
        to: point(100.0, 0.0),
    };

    let (left, right) = c.split(0.3);
    let left2 = c.split_range(0.0..0.3);
    let right2 = c.split_range(0.3..1.0);

    assert_eq!(left, c.before_split(0.3));
    assert_eq!(right, c.after_split(0.3));

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((left.sample(t) - left2.sample(t)).length() < 1e-9);
        assert!((right.sample(t) - right2.sample(t)).length() < 1e-9);
    }
}

#[test]
fn derivatives_match_finite_differences() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 0.0),
        to: point(100.0, 100.0),
    };

    let h = 1e-6;
    for i in 1..10 {
        let t = i as f64 / 10.0;
        let d = c.derivative(t);
        let fd = (c.sample(t + h) - c.sample(t - h)) / (2.0 * h);
        assert!((d - fd).length() < 1e-3);

        let d2 = c.second_derivative(t);
        let fd2 = (c.derivative(t + h) - c.derivative(t - h)) / (2.0 * h);
        assert!((d2 - fd2).length() < 1e-3);
    }
}

#[test]
fn osculating_circle_of_arc_like_curve() {
    // Cubic approximation of a unit quarter circle centered at the origin.
    let k = 4.0 / 3.0 * (std::f64::consts::FRAC_PI_8).tan();
    let c = CubicBezierSegment {
        from: point(1.0f64, 0.0),
        ctrl1: point(1.0, k),
        ctrl2: point(k, 1.0),
        to: point(0.0, 1.0),
    };

    let circle = c.osculating_circle(0.5).unwrap();
    assert!((circle.radius - 1.0).abs() < 1e-2);
    assert!((circle.center - point(0.0, 0.0)).length() < 1e-2);
    assert!(c.curvature(0.5) > 0.0);

    // A straight segment has no osculating circle.
    let flat = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };
    assert!(flat.osculating_circle(0.5).is_none());
}
