#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Approximation of cubic bézier curves with circular arc splines, on top of euclid.
//!
//! # Overview
//!
//! Replacing cubic bézier segments with sequences of circular arcs is useful to
//! rasterizers, stroking engines and anything else that finds arcs cheaper to
//! evaluate, offset or hit-test than cubics. This crate implements the maths to
//! do so adaptively: given a curve and a tolerance threshold, it produces an
//! ordered sequence of arcs covering the curve such that the maximum distance
//! between the curve and each arc stays below the tolerance.
//!
//! The approximation is driven by closed-form error bounds rather than dense
//! sampling: see [`cubic_to_arcs::arc_bezier_error_improved`] for the estimator
//! and [`cubic_to_arcs::cubic_to_arcs`] for the segmentation pipeline.
//!
//! The tolerance threshold is expressed in the same units as the curve's
//! coordinates. The smaller the tolerance, the more arcs are generated.
//!
//! # Example
//!
//! ```
//! use arc_spline::{point, ArcSegment, CubicBezierSegment};
//!
//! let curve = CubicBezierSegment {
//!     from: point(0.0f64, 0.0),
//!     ctrl1: point(0.0, 100.0),
//!     ctrl2: point(100.0, 0.0),
//!     to: point(100.0, 100.0),
//! };
//!
//! curve.for_each_arc(1.0, &mut |segment| match segment {
//!     ArcSegment::Arc(arc) => println!("arc of radius {}", arc.radius),
//!     ArcSegment::Line(line) => println!("flat piece of length {}", line.length()),
//! });
//! ```

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod cubic_bezier;
pub mod cubic_to_arcs;
mod line;
pub mod utils;

#[doc(inline)]
pub use crate::arc::{Arc, Circle};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::cubic_to_arcs::{cubic_to_arcs, cut_points, ArcSegment};
#[doc(inline)]
pub use crate::line::LineSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;
        const NINE: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
