//! Approximate a cubic bézier segment with a sequence of circular arcs.
//!
//! The maximum distance between a candidate arc and the curve is bounded with
//! closed-form estimates instead of dense sampling (see [`bezier_arc_error`]
//! and [`arc_bezier_error_improved`]). On top of the estimator, a bidirectional
//! binary search finds, for each side of the curve, the longest sub-range whose
//! arc fit stays under the tolerance, and a bounded refinement pass nudges the
//! resulting interior cut points to balance the per-segment errors.
//!
//! Both the bisection and the refinement run for a fixed number of iterations
//! rather than until convergence, so the worst-case cost per curve is bounded.
//! The flip side is that the error of an emitted arc can rest slightly above
//! the tolerance threshold: by no more than the estimator's variation over one
//! bisection-resolution unit of the parameter range.

use crate::arc::{Arc, Circle};
use crate::cubic_bezier::CubicBezierSegment;
use crate::line::LineSegment;
use crate::scalar::Scalar;
use crate::utils::{max_dev, min_max, rebase, tangent};
use crate::{vector, Point};

/// Number of halving steps performed by the cut point bisections.
const MAX_ITERATIONS: u32 = 20;

/// Number of refinement passes over the interior cut points.
const JIGGLE_PASSES: u32 = 10;

/// One piece of an arc spline: a circular arc, or a line segment where the
/// curve is locally flat (the infinite-radius case).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ArcSegment<S> {
    Arc(Arc<S>),
    Line(LineSegment<S>),
}

impl<S: Scalar> ArcSegment<S> {
    #[inline]
    pub fn from(&self) -> Point<S> {
        match self {
            ArcSegment::Arc(arc) => arc.from(),
            ArcSegment::Line(line) => line.from,
        }
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        match self {
            ArcSegment::Arc(arc) => arc.to(),
            ArcSegment::Line(line) => line.to,
        }
    }
}

/// An upper bound on the maximum distance between a curve and an arc sharing
/// its endpoints.
///
/// The bound is the sum of the arc's own approximation error `ea` (how far the
/// arc's canonical cubic approximation strays from the arc) and a control point
/// displacement term `eb`: the interior control point offsets between the two
/// cubics, rebased into the chord frame, bounded componentwise with
/// [`max_dev`], and folded into a worst-case radial displacement of the fitted
/// circle's boundary.
///
/// The arc and the curve sharing their endpoints is a precondition; it is
/// debug-asserted, not handled.
pub fn bezier_arc_error<S: Scalar>(curve: &CubicBezierSegment<S>, arc: &Arc<S>) -> S {
    let (approx, ea) = arc.to_cubic();

    let endpoint_epsilon = S::EPSILON * (S::ONE + arc.radius.abs());
    debug_assert!((approx.from - curve.from).length() <= endpoint_epsilon);
    debug_assert!((approx.to - curve.to).length() <= endpoint_epsilon);

    let v0 = approx.ctrl1 - curve.ctrl1;
    let v1 = approx.ctrl2 - curve.ctrl2;

    let chord = curve.to - curve.from;
    if chord.square_length() == S::ZERO {
        // No chord frame to rebase into; bound the displacements directly.
        return ea + max_dev(v0.length(), v1.length());
    }

    let basis = chord.normalize();
    let v0 = rebase(v0, basis);
    let v1 = rebase(v1, basis);
    let v = vector(max_dev(v0.x, v1.x), max_dev(v0.y, v1.y));

    let end_tangent = approx.to - approx.ctrl2;
    if end_tangent.square_length() == S::ZERO {
        // Zero sweep; the displacement folds into the bound as-is.
        return ea + v.length();
    }

    let u = rebase(v, rebase(end_tangent, basis).normalize());

    let r = arc.radius;
    let eb = ((r + u.x) * (r + u.x) + u.y * u.y).sqrt() - r;

    ea + eb
}

/// An upper bound on the maximum distance between a curve and the arc of
/// `circle` subtending the curve's endpoints.
///
/// Same error model as [`bezier_arc_error`], but it builds the canonical arc
/// approximation control points in place from the circle (quarter-angle
/// tangent-length construction). The sweep is the raw difference of the
/// endpoint angles: where the endpoints straddle the atan2 branch cut the
/// measured sweep is off by a full turn and the estimate explodes. The
/// estimate is only compared against a tolerance, so such candidates get
/// rejected instead of silently measured the short way around the circle.
/// The curve's endpoints lying on the circle is a precondition.
pub fn arc_bezier_error<S: Scalar>(curve: &CubicBezierSegment<S>, circle: &Circle<S>) -> S {
    let r0 = curve.from - circle.center;
    let r1 = curve.to - circle.center;

    let a0 = r0.y.atan2(r0.x);
    let a1 = r1.y.atan2(r1.x);
    let a4 = (a1 - a0) / S::FOUR;
    let k = S::FOUR / S::THREE * a4.tan();

    // Control points of the canonical cubic approximation of the arc.
    let ctrl1 = curve.from + tangent(r0) * k;
    let ctrl2 = curve.to - tangent(r1) * k;

    let sin_a4 = a4.sin();
    let cos_a4 = a4.cos();
    let sin2 = sin_a4 * sin_a4;
    let ea = S::TWO / S::value(27.0) * circle.radius * sin2 * sin2 * sin2 / (cos_a4 * cos_a4);

    // Radial direction at the middle of the arc. Equivalent to normalizing
    // r0 + r1, without the degenerate case of diametrically opposed endpoints.
    let mid_angle = a0 + S::TWO * a4;
    let basis = vector(mid_angle.cos(), mid_angle.sin());

    let v0 = rebase(ctrl1 - curve.ctrl1, basis);
    let v1 = rebase(ctrl2 - curve.ctrl2, basis);
    let v = vector(max_dev(v0.x, v1.x), max_dev(v0.y, v1.y));

    let u = rebase(v, rebase(r1, basis).normalize());

    let r = circle.radius;
    let eb = ((r + u.x) * (r + u.x) + u.y * u.y).sqrt() - r;

    ea + eb
}

/// An upper bound on the maximum distance between a curve and the arc fit
/// through its start point, mid point and end point.
///
/// Splits the curve at t = 1/2 and evaluates [`arc_bezier_error`] on each half
/// against the shared circle, keeping the worse of the two. This is tighter
/// than estimating the whole segment at once because it catches deviation that
/// is asymmetric around the mid point. This is the estimator driving the cut
/// point search.
///
/// Degenerate curves are special-cased: where the three points are collinear
/// the candidate "arc" is the chord and the bound is the deviation from it; a
/// zero-length curve yields zero error.
pub fn arc_bezier_error_improved<S: Scalar>(curve: &CubicBezierSegment<S>) -> S {
    let (first, second) = curve.halve();
    let mid = second.from;

    match Circle::from_three_points(curve.from, mid, curve.to) {
        Some(circle) => arc_bezier_error(&first, &circle).max(arc_bezier_error(&second, &circle)),
        None => chord_error(curve),
    }
}

/// Deviation bound of a curve from its chord, for the flat (infinite radius)
/// fallback.
fn chord_error<S: Scalar>(curve: &CubicBezierSegment<S>) -> S {
    let baseline = curve.baseline();
    if baseline.square_length() == S::ZERO {
        // Closed curve with a zero-length chord; bound the deviation from the
        // start point by the control point offsets.
        return max_dev(
            (curve.ctrl1 - curve.from).length(),
            (curve.ctrl2 - curve.from).length(),
        );
    }

    max_dev(
        baseline.signed_distance_to_point(curve.ctrl1),
        baseline.signed_distance_to_point(curve.ctrl2),
    )
}

/// Find the largest `end` in `[start, 1]` such that the arc fit error of the
/// sub-curve `[start, end]` stays under the tolerance.
///
/// If the whole remaining range fits, returns 1.0 right away. Otherwise runs
/// a fixed number of bisection steps, so the returned cut's error can rest
/// slightly above the tolerance.
pub fn find_cut_l<S: Scalar>(curve: &CubicBezierSegment<S>, start: S, tolerance: S) -> S {
    if arc_bezier_error_improved(&curve.split_range(start..S::ONE)) <= tolerance {
        return S::ONE;
    }

    let mut low = start;
    let mut high = S::ONE;
    let mut cut = (low + high) * S::HALF;

    for _ in 0..MAX_ITERATIONS {
        cut = (low + high) * S::HALF;
        let error = arc_bezier_error_improved(&curve.split_range(start..cut));

        if error == tolerance {
            return cut;
        }
        if error < tolerance {
            low = cut;
        } else {
            high = cut;
        }
    }

    cut
}

/// The mirror image of [`find_cut_l`]: find the smallest `start` in
/// `[0, end]` such that the arc fit error of `[start, end]` stays under the
/// tolerance.
pub fn find_cut_r<S: Scalar>(curve: &CubicBezierSegment<S>, end: S, tolerance: S) -> S {
    if arc_bezier_error_improved(&curve.split_range(S::ZERO..end)) <= tolerance {
        return S::ZERO;
    }

    let mut low = S::ZERO;
    let mut high = end;
    let mut cut = (low + high) * S::HALF;

    for _ in 0..MAX_ITERATIONS {
        cut = (low + high) * S::HALF;
        let error = arc_bezier_error_improved(&curve.split_range(cut..end));

        if error == tolerance {
            return cut;
        }
        if error < tolerance {
            high = cut;
        } else {
            low = cut;
        }
    }

    cut
}

/// Greedy left-to-right segmentation: each returned cut is the farthest
/// reachable parameter from the previous one. The sequence always ends at
/// exactly 1.0.
pub fn find_cut_points_l<S: Scalar>(curve: &CubicBezierSegment<S>, tolerance: S) -> Vec<S> {
    let mut cuts = Vec::new();
    let mut t = S::ZERO;
    while t < S::ONE {
        t = find_cut_l(curve, t, tolerance);
        cuts.push(t);
    }

    cuts
}

/// Greedy right-to-left segmentation; the symmetric counterpart of
/// [`find_cut_points_l`]. The sequence always starts at exactly 0.0.
pub fn find_cut_points_r<S: Scalar>(curve: &CubicBezierSegment<S>, tolerance: S) -> Vec<S> {
    let mut cuts = Vec::new();
    let mut t = S::ONE;
    while t > S::ZERO {
        t = find_cut_r(curve, t, tolerance);
        cuts.push(t);
    }
    cuts.reverse();

    cuts
}

/// One interior cut point: the admissible range it has to stay in, its current
/// position and the error of the segment ending at it.
#[derive(Copy, Clone, Debug, PartialEq)]
struct CutRange<S> {
    low: S,
    high: S,
    position: S,
    error: S,
}

/// Iteratively nudge the interior cut points to balance the errors of
/// adjacent segments.
///
/// The step factor is proportional to the error imbalance at the cut and
/// damped by the local curvature (the curve is less arc-like where it bends
/// hard, so large jumps are unreliable there). The formula is a heuristic:
/// the step is clamped to 1 and the position to its admissible range.
fn jiggle<S: Scalar>(
    curve: &CubicBezierSegment<S>,
    ranges: &mut [CutRange<S>],
    last_error: &mut S,
    tolerance: S,
) {
    let n = ranges.len();
    for _ in 0..JIGGLE_PASSES {
        for i in 0..n {
            let prev = if i == 0 { S::ZERO } else { ranges[i - 1].position };
            let next = if i + 1 < n { ranges[i + 1].position } else { S::ONE };

            let e_left = ranges[i].error;
            let e_right = if i + 1 < n { ranges[i + 1].error } else { *last_error };

            let curvature = curve.curvature(ranges[i].position);
            let damping = S::TWO.powf(S::ONE + curvature) * tolerance;
            let step = ((e_right - e_left).abs() / damping).min(S::ONE);

            // The cut must stay inside its admissible range and between its
            // neighbors.
            let low = ranges[i].low.max(prev);
            let high = ranges[i].high.min(next);

            // Move towards the worse segment, shrinking it.
            let position = if e_right > e_left {
                ranges[i].position + step * (high - ranges[i].position)
            } else {
                ranges[i].position - step * (ranges[i].position - low)
            };
            ranges[i].position = position.max(low).min(high);

            // Refresh the two segments meeting at the moved cut.
            ranges[i].error =
                arc_bezier_error_improved(&curve.split_range(prev..ranges[i].position));
            let right_error =
                arc_bezier_error_improved(&curve.split_range(ranges[i].position..next));
            if i + 1 < n {
                ranges[i + 1].error = right_error;
            } else {
                *last_error = right_error;
            }
        }
    }
}

/// The parameter partition `0 = t₀ < t₁ < … < tₙ = 1` of an arc spline
/// approximation of the curve within the tolerance threshold.
///
/// Runs both greedy segmentation passes, pairs their cuts into admissible
/// ranges, and refines the cut positions inside those ranges. The tolerance
/// must be positive.
pub fn cut_points<S: Scalar>(curve: &CubicBezierSegment<S>, tolerance: S) -> Vec<S> {
    debug_assert!(tolerance > S::ZERO);

    let left = find_cut_points_l(curve, tolerance);
    if left.len() == 1 {
        // The whole curve fits a single arc.
        return vec![S::ZERO, S::ONE];
    }

    let right = find_cut_points_r(curve, tolerance);

    let left_interior = &left[..left.len() - 1];
    let right_interior = &right[1..];

    let mut ranges: Vec<CutRange<S>> = Vec::with_capacity(left_interior.len());
    if left_interior.len() == right_interior.len() {
        // The i-th right-pass cut bounds the i-th interior cut from below,
        // the i-th left-pass cut from above.
        for (&high, &low) in left_interior.iter().zip(right_interior.iter()) {
            let (low, high) = min_max(low, high);
            ranges.push(CutRange {
                low,
                high,
                position: (low + high) * S::HALF,
                error: S::ZERO,
            });
        }
    } else {
        // The greedy passes disagree on the segment count; keep the
        // left-to-right cuts as fixed positions.
        for &cut in left_interior {
            ranges.push(CutRange {
                low: cut,
                high: cut,
                position: cut,
                error: S::ZERO,
            });
        }
    }

    let mut prev = S::ZERO;
    for range in &mut ranges {
        range.error = arc_bezier_error_improved(&curve.split_range(prev..range.position));
        prev = range.position;
    }
    let mut last_error = arc_bezier_error_improved(&curve.split_range(prev..S::ONE));

    jiggle(curve, &mut ranges, &mut last_error, tolerance);

    let mut cuts = Vec::with_capacity(ranges.len() + 2);
    cuts.push(S::ZERO);
    let mut last = S::ZERO;
    for range in &ranges {
        // Cut ranges can collapse; keep the partition strictly increasing.
        if last < range.position && range.position < S::ONE {
            cuts.push(range.position);
            last = range.position;
        }
    }
    cuts.push(S::ONE);

    cuts
}

/// Approximate the curve with a sequence of circular arcs, invoking a callback
/// for each of them.
///
/// The emitted segments cover the curve's parameter range in order, without
/// gaps or overlaps: each segment starts at the cut point the previous one
/// ended at. Arcs are built through the start, mid and end points of their
/// sub-curve; where those are collinear a line segment is emitted instead.
pub fn cubic_to_arcs<S, F>(curve: &CubicBezierSegment<S>, tolerance: S, callback: &mut F)
where
    S: Scalar,
    F: FnMut(&ArcSegment<S>),
{
    let cuts = cut_points(curve, tolerance);
    for window in cuts.windows(2) {
        let (t0, t1) = (window[0], window[1]);

        let from = curve.sample(t0);
        let mid = curve.sample((t0 + t1) * S::HALF);
        let to = curve.sample(t1);

        let segment = match Arc::through_point(from, mid, to) {
            Some(arc) => ArcSegment::Arc(arc),
            None => ArcSegment::Line(LineSegment { from, to }),
        };

        callback(&segment);
    }
}

#[cfg(test)]
use crate::point;
#[cfg(test)]
use crate::Angle;

#[cfg(test)]
fn s_curve() -> CubicBezierSegment<f64> {
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 0.0),
        to: point(100.0, 100.0),
    }
}

#[cfg(test)]
fn quarter_circle_curve() -> CubicBezierSegment<f64> {
    let k = 4.0 / 3.0 * (std::f64::consts::FRAC_PI_8).tan();
    CubicBezierSegment {
        from: point(100.0, 0.0),
        ctrl1: point(100.0, 100.0 * k),
        ctrl2: point(100.0 * k, 100.0),
        to: point(0.0, 100.0),
    }
}

#[test]
fn exact_arc_has_only_conversion_error() {
    let arc = Arc {
        center: point(0.0f64, 0.0),
        radius: 100.0,
        start_angle: Angle::radians(0.3),
        sweep_angle: Angle::radians(1.1),
    };
    let (curve, ea) = arc.to_cubic();

    // The displacement term vanishes when the curve is the arc's own
    // approximation.
    let error = bezier_arc_error(&curve, &arc);
    assert!((error - ea).abs() < 1e-9);
}

#[test]
fn estimate_bounds_sampled_deviation() {
    let curves = [s_curve(), quarter_circle_curve()];

    for curve in &curves {
        for &(t0, t1) in &[(0.0, 0.25), (0.1, 0.4), (0.5, 0.8), (0.25, 0.75)] {
            let sub = curve.split_range(t0..t1);
            let estimate = arc_bezier_error_improved(&sub);

            let mid = sub.sample(0.5);
            let circle = match Circle::from_three_points(sub.from, mid, sub.to) {
                Some(circle) => circle,
                None => continue,
            };

            // The radial deviation from the fitted circle never exceeds the
            // estimate (the distance to the arc is at least the distance to
            // its circle).
            let mut sampled: f64 = 0.0;
            for i in 0..=1000 {
                let t = i as f64 / 1000.0;
                let d = circle.signed_distance_to_point(sub.sample(t)).abs();
                sampled = sampled.max(d);
            }
            assert!(
                estimate >= sampled - 1e-9,
                "estimate {} sampled {} for range {}..{}",
                estimate,
                sampled,
                t0,
                t1
            );
        }
    }
}

#[test]
fn estimate_stays_pessimistic_across_the_angle_seam() {
    // The first half of this range subtends endpoint angles on opposite
    // sides of the atan2 branch cut. Measuring the sweep the short way
    // around would report a small error for a segment that strays almost a
    // full unit from its fitted circle.
    let sub = s_curve().split_range(0.0..0.25);
    let estimate = arc_bezier_error_improved(&sub);

    let mid = sub.sample(0.5);
    let circle = Circle::from_three_points(sub.from, mid, sub.to).unwrap();
    let mut sampled: f64 = 0.0;
    for i in 0..=1000 {
        let t = i as f64 / 1000.0;
        sampled = sampled.max(circle.signed_distance_to_point(sub.sample(t)).abs());
    }

    assert!(sampled > 0.9);
    assert!(estimate >= sampled);
    // Far above any reasonable tolerance, so the range gets subdivided.
    assert!(estimate > 100.0);
}

#[test]
fn improved_estimate_degenerate_curves() {
    // A zero-length curve has zero error.
    let p = point(10.0f64, 20.0);
    let degenerate = CubicBezierSegment {
        from: p,
        ctrl1: p,
        ctrl2: p,
        to: p,
    };
    assert_eq!(arc_bezier_error_improved(&degenerate), 0.0);

    // A straight curve deviates from its chord by nothing.
    let straight = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 2.0),
        to: point(3.0, 3.0),
    };
    assert!(arc_bezier_error_improved(&straight) < 1e-9);

    // A flat curve with displaced control points falls back to the chord
    // deviation bound.
    let flat = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 4.0),
        ctrl2: point(2.0, -4.0),
        to: point(3.0, 0.0),
    };
    let error = arc_bezier_error_improved(&flat);
    assert!(error > 0.0);

    let mut sampled: f64 = 0.0;
    let baseline = flat.baseline();
    for i in 0..=1000 {
        let t = i as f64 / 1000.0;
        sampled = sampled.max(baseline.distance_to_point(flat.sample(t)));
    }
    assert!(error >= sampled - 1e-9);
}

#[test]
fn single_arc_fast_path() {
    // An arc-like curve within a generous tolerance is not subdivided.
    let curve = quarter_circle_curve();
    assert_eq!(find_cut_l(&curve, 0.0, 1.0), 1.0);
    assert_eq!(cut_points(&curve, 1.0), vec![0.0, 1.0]);

    let mut count = 0;
    curve.for_each_arc(1.0, &mut |segment| {
        assert!(matches!(segment, ArcSegment::Arc(_)));
        count += 1;
    });
    assert_eq!(count, 1);
}

#[test]
fn greedy_passes_meet_the_ends() {
    let curve = s_curve();

    let left = find_cut_points_l(&curve, 1.0);
    assert_eq!(*left.last().unwrap(), 1.0);
    for window in left.windows(2) {
        assert!(window[0] < window[1]);
    }

    let right = find_cut_points_r(&curve, 1.0);
    assert_eq!(right[0], 0.0);
    for window in right.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn greedy_segments_within_tolerance() {
    let curve = s_curve();
    let tolerance = 1.0;

    let left = find_cut_points_l(&curve, tolerance);
    let mut t0 = 0.0;
    for &t1 in &left {
        let error = arc_bezier_error_improved(&curve.split_range(t0..t1));
        // The bisection stops after a fixed number of steps, which can leave
        // the error marginally above the threshold.
        assert!(error <= tolerance * 1.01, "error {} for {}..{}", error, t0, t1);
        t0 = t1;
    }
}

#[test]
fn s_curve_partition() {
    // An inflected S shape cannot be approximated by a single circle within
    // a tight tolerance.
    let curve = s_curve();
    let cuts = cut_points(&curve, 1.0);

    assert!(cuts.len() > 2);
    assert_eq!(cuts[0], 0.0);
    assert_eq!(*cuts.last().unwrap(), 1.0);
    for window in cuts.windows(2) {
        assert!(window[0] < window[1]);
    }

    for window in cuts.windows(2) {
        let error = arc_bezier_error_improved(&curve.split_range(window[0]..window[1]));
        assert!(
            error <= 1.5,
            "error {} for {}..{}",
            error,
            window[0],
            window[1]
        );
    }
}

#[test]
fn partition_is_deterministic() {
    let curve = s_curve();
    assert_eq!(cut_points(&curve, 1.0), cut_points(&curve, 1.0));
    assert_eq!(cut_points(&curve, 0.1), cut_points(&curve, 0.1));
}

#[test]
fn arcs_are_contiguous() {
    let curve = s_curve();

    let mut previous_end: Option<Point<f64>> = None;
    let mut count = 0;
    curve.for_each_arc(1.0, &mut |segment| {
        if let Some(end) = previous_end {
            // Both endpoints approximate the same cut point on the curve, up
            // to the rounding of the arc reconstruction.
            assert!((segment.from() - end).length() < 1e-9);
        }
        previous_end = Some(segment.to());
        count += 1;
    });

    assert!(count > 1);
}

#[test]
fn arcs_stay_close_to_the_curve() {
    let curve = s_curve();
    let tolerance = 1.0;
    let cuts = cut_points(&curve, tolerance);

    for window in cuts.windows(2) {
        let sub = curve.split_range(window[0]..window[1]);
        let mid = sub.sample(0.5);
        if let Some(arc) = Arc::through_point(sub.from, mid, sub.to) {
            let circle = arc.circle();
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let d = circle.signed_distance_to_point(sub.sample(t)).abs();
                assert!(d <= tolerance * 1.5, "radial deviation {}", d);
            }
        }
    }
}

#[test]
fn degenerate_curve_single_line() {
    let p = point(5.0f64, 5.0);
    let degenerate = CubicBezierSegment {
        from: p,
        ctrl1: p,
        ctrl2: p,
        to: p,
    };

    assert_eq!(cut_points(&degenerate, 0.01), vec![0.0, 1.0]);

    let mut segments = Vec::new();
    degenerate.for_each_arc(0.01, &mut |segment| segments.push(*segment));
    assert_eq!(segments.len(), 1);
    assert!(matches!(segments[0], ArcSegment::Line(_)));
}

#[test]
fn straight_curve_single_line() {
    let straight = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 0.0),
        ctrl2: point(20.0, 0.0),
        to: point(30.0, 0.0),
    };

    let mut segments = Vec::new();
    straight.for_each_arc(0.5, &mut |segment| segments.push(*segment));
    assert_eq!(segments.len(), 1);
    assert_eq!(
        segments[0],
        ArcSegment::Line(LineSegment {
            from: point(0.0, 0.0),
            to: point(30.0, 0.0),
        })
    );
}

#[test]
fn works_with_f32() {
    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 0.0),
        to: point(100.0, 100.0),
    };

    let mut count = 0;
    curve.for_each_arc(1.0, &mut |_| count += 1);
    assert!(count > 1);
}

#[test]
fn tighter_tolerance_more_arcs() {
    let curve = s_curve();
    let coarse = cut_points(&curve, 5.0).len();
    let fine = cut_points(&curve, 0.05).len();
    assert!(fine > coarse);
}
