use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A line segment going from point `from` to point `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    #[inline]
    pub fn mid_point(&self) -> Point<S> {
        self.from.lerp(self.to, S::HALF)
    }

    /// The length of the segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    /// Distance of `p` to the infinite line going through this segment,
    /// positive if `p` is on the left of the line looking from `from`
    /// towards `to`.
    ///
    /// Returns the distance to `from` if the segment has zero length.
    pub fn signed_distance_to_point(&self, p: Point<S>) -> S {
        let v = self.to_vector();
        let len = v.length();
        if len == S::ZERO {
            return (p - self.from).length();
        }

        v.cross(p - self.from) / len
    }

    /// Absolute distance of `p` to the infinite line going through this segment.
    #[inline]
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        self.signed_distance_to_point(p).abs()
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn signed_distance() {
    let seg = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
    };

    assert!((seg.signed_distance_to_point(point(5.0, 3.0)) - 3.0).abs() < 1e-12);
    assert!((seg.signed_distance_to_point(point(5.0, -3.0)) + 3.0).abs() < 1e-12);
    assert_eq!(seg.signed_distance_to_point(point(3.0, 0.0)), 0.0);

    let degenerate = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(1.0, 1.0),
    };
    assert!((degenerate.signed_distance_to_point(point(4.0, 5.0)) - 5.0).abs() < 1e-12);
}

#[test]
fn basic_measures() {
    let seg = LineSegment {
        from: point(1.0f64, 2.0),
        to: point(4.0, 6.0),
    };
    assert_eq!(seg.length(), 5.0);
    assert_eq!(seg.square_length(), 25.0);
    assert_eq!(seg.mid_point(), point(2.5, 4.0));
    assert_eq!(seg.sample(0.0), seg.from);
    assert_eq!(seg.sample(1.0), seg.to);
}
