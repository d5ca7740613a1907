//! Circles and circular arc related maths and tools.

use crate::cubic_bezier::CubicBezierSegment;
use crate::scalar::Scalar;
use crate::utils::tangent;
use crate::{point, Angle, Point};

/// A circle defined by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Circle<S> {
    pub center: Point<S>,
    pub radius: S,
}

impl<S: Scalar> Circle<S> {
    /// The circle going through three points.
    ///
    /// Returns `None` if the points are collinear or not distinct, in which
    /// case no circle exists (the limit shape is a straight line).
    pub fn from_three_points(a: Point<S>, b: Point<S>, c: Point<S>) -> Option<Circle<S>> {
        let ab = b - a;
        let ac = c - a;

        let det = ab.cross(ac);
        if det.abs() <= S::EPSILON * ab.length() * ac.length() {
            return None;
        }

        let ab_len2 = ab.square_length();
        let ac_len2 = ac.square_length();
        let d = S::TWO * det;

        let center = point(
            a.x + (ac.y * ab_len2 - ab.y * ac_len2) / d,
            a.y + (ab.x * ac_len2 - ac.x * ab_len2) / d,
        );

        Some(Circle {
            center,
            radius: (a - center).length(),
        })
    }

    /// Distance of `p` to the circle's boundary, positive outside of the circle.
    #[inline]
    pub fn signed_distance_to_point(&self, p: Point<S>) -> S {
        (p - self.center).length() - self.radius
    }
}

/// A circular arc: the part of a circle's boundary swept from `start_angle` by
/// `sweep_angle` (counter-clockwise for positive sweeps).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radius: S,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
}

impl<S: Scalar> Arc<S> {
    /// The arc going from `from` to `to` through `via`.
    ///
    /// The through point selects which of the two arcs of the circumscribed
    /// circle is meant, and with it the sweep direction. Returns `None` if the
    /// three points are collinear or not distinct.
    pub fn through_point(from: Point<S>, via: Point<S>, to: Point<S>) -> Option<Arc<S>> {
        let circle = Circle::from_three_points(from, via, to)?;

        let a0 = angle_of(from, circle.center);
        let am = angle_of(via, circle.center);
        let a1 = angle_of(to, circle.center);

        let two_pi = S::TWO * S::PI();
        let ccw_sweep = positive_angle(a1 - a0);
        let ccw_via = positive_angle(am - a0);

        // Sweep counter-clockwise if that passes through the via point,
        // otherwise go the other way around.
        let sweep = if ccw_via <= ccw_sweep {
            ccw_sweep
        } else {
            ccw_sweep - two_pi
        };

        Some(Arc {
            center: circle.center,
            radius: circle.radius,
            start_angle: Angle::radians(a0),
            sweep_angle: Angle::radians(sweep),
        })
    }

    /// The circle this arc is part of.
    #[inline]
    pub fn circle(&self) -> Circle<S> {
        Circle {
            center: self.center,
            radius: self.radius,
        }
    }

    /// Sample the arc at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let angle = self.start_angle.radians + self.sweep_angle.radians * t;
        self.center + vector_on_circle(angle, self.radius)
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.sample(S::ZERO)
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.sample(S::ONE)
    }

    /// Approximate the arc with a single cubic bézier segment.
    ///
    /// Uses the classic construction offsetting the control points from the
    /// endpoints by `4/3·tan(sweep/4)` along the endpoint tangents. Returns
    /// the approximating curve together with an upper bound on its maximum
    /// radial deviation from the arc: `2/27·r·sin⁶(sweep/4)/cos²(sweep/4)`.
    pub fn to_cubic(&self) -> (CubicBezierSegment<S>, S) {
        let a4 = self.sweep_angle.radians / S::FOUR;
        let k = S::FOUR / S::THREE * a4.tan();

        let from = self.from();
        let to = self.to();

        let curve = CubicBezierSegment {
            from,
            ctrl1: from + tangent(from - self.center) * k,
            ctrl2: to - tangent(to - self.center) * k,
            to,
        };

        let sin_a4 = a4.sin();
        let cos_a4 = a4.cos();
        let sin2 = sin_a4 * sin_a4;
        let error =
            S::TWO / S::value(27.0) * self.radius * sin2 * sin2 * sin2 / (cos_a4 * cos_a4);

        (curve, error)
    }
}

#[inline]
fn angle_of<S: Scalar>(p: Point<S>, center: Point<S>) -> S {
    let v = p - center;
    v.y.atan2(v.x)
}

/// Normalize an angle into [0, 2π).
#[inline]
fn positive_angle<S: Scalar>(a: S) -> S {
    let two_pi = S::TWO * S::PI();
    let a = a % two_pi;
    if a < S::ZERO {
        a + two_pi
    } else {
        a
    }
}

#[inline]
fn vector_on_circle<S: Scalar>(angle: S, radius: S) -> crate::Vector<S> {
    crate::vector(angle.cos() * radius, angle.sin() * radius)
}

#[cfg(test)]
fn approx_eq<S: Scalar>(a: Point<S>, b: Point<S>, epsilon: S) -> bool {
    (a - b).length() < epsilon
}

#[test]
fn circle_through_three_points() {
    let circle = Circle::from_three_points(
        point(1.0f64, 0.0),
        point(0.0, 1.0),
        point(-1.0, 0.0),
    )
    .unwrap();

    assert!((circle.radius - 1.0).abs() < 1e-12);
    assert!(approx_eq(circle.center, point(0.0, 0.0), 1e-12));
    assert!((circle.signed_distance_to_point(point(2.0, 0.0)) - 1.0).abs() < 1e-12);
}

#[test]
fn circle_degenerate_inputs() {
    // Collinear points.
    assert!(Circle::from_three_points(
        point(0.0f64, 0.0),
        point(1.0, 1.0),
        point(2.0, 2.0),
    )
    .is_none());

    // Coincident points.
    let p = point(3.0f64, 4.0);
    assert!(Circle::from_three_points(p, p, p).is_none());
}

#[test]
fn arc_orientation() {
    // Upper half of the unit circle, going counter-clockwise.
    let ccw = Arc::through_point(point(1.0f64, 0.0), point(0.0, 1.0), point(-1.0, 0.0)).unwrap();
    assert!(ccw.sweep_angle.radians > 0.0);
    assert!((ccw.sweep_angle.radians - std::f64::consts::PI).abs() < 1e-12);
    assert!(approx_eq(ccw.sample(0.5), point(0.0, 1.0), 1e-9));

    // Lower half, going clockwise.
    let cw = Arc::through_point(point(1.0f64, 0.0), point(0.0, -1.0), point(-1.0, 0.0)).unwrap();
    assert!(cw.sweep_angle.radians < 0.0);
    assert!(approx_eq(cw.sample(0.5), point(0.0, -1.0), 1e-9));

    // Endpoints are preserved exactly in parameter space.
    assert!(approx_eq(ccw.from(), point(1.0, 0.0), 1e-12));
    assert!(approx_eq(ccw.to(), point(-1.0, 0.0), 1e-12));
}

#[test]
fn arc_through_collinear_points() {
    assert!(Arc::through_point(
        point(0.0f64, 0.0),
        point(5.0, 0.0),
        point(10.0, 0.0),
    )
    .is_none());
}

#[test]
fn quarter_circle_to_cubic() {
    let arc = Arc {
        center: point(0.0f64, 0.0),
        radius: 1.0,
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::radians(std::f64::consts::FRAC_PI_2),
    };

    let (curve, error) = arc.to_cubic();

    assert!(approx_eq(curve.from, point(1.0, 0.0), 1e-12));
    assert!(approx_eq(curve.to, point(0.0, 1.0), 1e-12));

    let k = 4.0 / 3.0 * (std::f64::consts::FRAC_PI_8).tan();
    assert!(approx_eq(curve.ctrl1, point(1.0, k), 1e-12));
    assert!(approx_eq(curve.ctrl2, point(k, 1.0), 1e-12));

    // The quarter circle approximation is known to be accurate to ~2.7e-4
    // of the radius, and the closed-form bound matches it.
    assert!(error > 0.0 && error < 3e-4);
    let mut worst: f64 = 0.0;
    for i in 0..=1000 {
        let t = i as f64 / 1000.0;
        let p = curve.sample(t);
        worst = worst.max((p.to_vector().length() - 1.0).abs());
    }
    assert!(worst <= error + 1e-12);
}

#[test]
fn clockwise_arc_to_cubic() {
    let arc = Arc::through_point(point(0.0f64, 0.0), point(5.0, -5.0), point(10.0, 0.0)).unwrap();
    let (curve, _) = arc.to_cubic();

    assert!(approx_eq(curve.from, point(0.0, 0.0), 1e-9));
    assert!(approx_eq(curve.to, point(10.0, 0.0), 1e-9));
    // The control points bend towards the through point.
    assert!(curve.ctrl1.y < 0.0);
    assert!(curve.ctrl2.y < 0.0);
}
