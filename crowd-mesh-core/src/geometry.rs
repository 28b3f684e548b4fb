//! Pure planar predicates used by edge generation, triangulation and person routing.
//!
//! Nothing here owns state and nothing here fails: degenerate input (zero-area triangle,
//! zero-length segment) simply does not satisfy the predicate.

use crate::{coord::Coord, Scalar};

/// Returns twice the signed area of triangle `p0 p1 p2`, i.e. `(p1 - p0) x (p2 - p0)`.
///
/// Positive when the turn `p0 -> p1 -> p2` is counter-clockwise (in a y-up frame), negative
/// when clockwise and exactly zero when the points are collinear.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(4.0, 0.0);
/// assert_eq!(orientation(a, b, Coord::new(0.0, 3.0)), 12.0);
/// assert_eq!(orientation(a, b, Coord::new(0.0, -3.0)), -12.0);
/// assert_eq!(orientation(a, b, Coord::new(8.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orientation(p0: Coord, p1: Coord, p2: Coord) -> Scalar {
    (p1 - p0).cross(p2 - p0)
}

/// Tells if segments `a1 b1` and `a2 b2` properly cross each other.
///
/// Touching, collinear and shared-endpoint configurations are reported as not crossing.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let cross = segments_cross(
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 2.0),
///     Coord::new(0.0, 2.0),
///     Coord::new(2.0, 0.0),
/// );
/// assert!(cross);
/// // T-junction: endpoint of second segment lies on the first one.
/// let touch = segments_cross(
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(1.0, 0.0),
///     Coord::new(1.0, 1.0),
/// );
/// assert!(!touch);
/// ```
pub fn segments_cross(a1: Coord, b1: Coord, a2: Coord, b2: Coord) -> bool {
    let dir1 = orientation(a1, b1, a2) * orientation(a1, b1, b2);
    let dir2 = orientation(a2, b2, a1) * orientation(a2, b2, b1);
    dir1 < 0.0 && dir2 < 0.0
}

/// Tells if point lies inside triangle `v0 v1 v2` or on its boundary.
///
/// Uses barycentric coordinates, every coordinate must be in `[0, 1]`.
/// Zero-area triangles contain nothing.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(4.0, 0.0);
/// let c = Coord::new(0.0, 4.0);
/// assert!(point_in_triangle(Coord::new(1.0, 1.0), a, b, c));
/// assert!(point_in_triangle(Coord::new(2.0, 0.0), a, b, c));
/// assert!(!point_in_triangle(Coord::new(3.0, 3.0), a, b, c));
/// assert!(!point_in_triangle(a, a, b, Coord::new(8.0, 0.0)));
/// ```
pub fn point_in_triangle(p: Coord, v0: Coord, v1: Coord, v2: Coord) -> bool {
    let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if denom == 0.0 {
        return false;
    }
    let a = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / denom;
    let b = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / denom;
    let c = 1.0 - a - b;
    (0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b) && (0.0..=1.0).contains(&c)
}

/// Tells if point lies strictly inside the axis-aligned bounding box of a quad.
///
/// Exact only for axis-aligned rectangles, for rotated ones it over-approximates the shape with
/// its enclosing box.
pub fn point_in_axis_aligned_bounds_of_quad(p: Coord, quad: &[Coord; 4]) -> bool {
    let (min, max) = bounds(quad);
    p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y
}

/// Tells if point lies strictly inside a convex polygon, regardless of its winding.
///
/// Points on the polygon boundary are outside. Polygons with less than 3 points contain nothing.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let diamond = [
///     Coord::new(0.0, -2.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(0.0, 2.0),
///     Coord::new(-2.0, 0.0),
/// ];
/// assert!(point_in_convex_polygon(Coord::new(0.5, 0.5), &diamond));
/// // inside the bounding box but outside the rotated shape.
/// assert!(!point_in_convex_polygon(Coord::new(1.5, 1.5), &diamond));
/// assert!(point_in_axis_aligned_bounds_of_quad(Coord::new(1.5, 1.5), &diamond));
/// ```
pub fn point_in_convex_polygon(p: Coord, polygon: &[Coord]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut sign = 0.0;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let o = orientation(*a, b, p);
        if o == 0.0 || (sign != 0.0 && o.signum() != sign) {
            return false;
        }
        sign = o.signum();
    }
    true
}

/// Tells if point lies inside a convex polygon or on its boundary, regardless of its winding.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let square = [
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(2.0, 2.0),
///     Coord::new(0.0, 2.0),
/// ];
/// assert!(point_in_closed_convex_polygon(Coord::new(2.0, 1.0), &square));
/// assert!(!point_in_closed_convex_polygon(Coord::new(2.1, 1.0), &square));
/// ```
pub fn point_in_closed_convex_polygon(p: Coord, polygon: &[Coord]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let (mut left, mut right) = (false, false);
    for (i, a) in polygon.iter().enumerate() {
        let o = orientation(*a, polygon[(i + 1) % polygon.len()], p);
        left |= o > 0.0;
        right |= o < 0.0;
    }
    !(left && right)
}

/// Distance a point must keep from every side to count as deep inside a polygon.
const INSIDE_TOLERANCE: Scalar = 1e-9;

/// Returns the parameter range `(t0, t1)` of segment `from to` lying inside or on a convex
/// polygon, or `None` when they do not meet. Works for either winding.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let square = [
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(2.0, 2.0),
///     Coord::new(0.0, 2.0),
/// ];
/// let range = clip_segment_to_convex_polygon(Coord::new(-1.0, 1.0), Coord::new(3.0, 1.0), &square);
/// assert_eq!(range, Some((0.25, 0.75)));
/// assert_eq!(
///     clip_segment_to_convex_polygon(Coord::new(-1.0, 3.0), Coord::new(3.0, 3.0), &square),
///     None,
/// );
/// ```
pub fn clip_segment_to_convex_polygon(
    from: Coord,
    to: Coord,
    polygon: &[Coord],
) -> Option<(Scalar, Scalar)> {
    if polygon.len() < 3 {
        return None;
    }
    let winding = polygon_winding(polygon);
    let direction = to - from;
    let (mut t0, mut t1) = (0.0, 1.0);
    for (i, a) in polygon.iter().enumerate() {
        let side = polygon[(i + 1) % polygon.len()] - *a;
        let start = winding * side.cross(from - *a);
        let slope = winding * side.cross(direction);
        if slope == 0.0 {
            if start < 0.0 {
                return None;
            }
        } else if slope > 0.0 {
            t0 = Scalar::max(t0, -start / slope);
        } else {
            t1 = Scalar::min(t1, -start / slope);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((t0, t1))
}

/// Tells if some part of segment `from to` runs through the interior of a convex polygon.
///
/// Segments that only touch a corner or slide along a side do not pass through it, segments
/// lined up with a diagonal do.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let square = [
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(2.0, 2.0),
///     Coord::new(0.0, 2.0),
/// ];
/// let through = |a: (Scalar, Scalar), b: (Scalar, Scalar)| {
///     segment_passes_through_convex_polygon(a.into(), b.into(), &square)
/// };
/// assert!(through((-1.0, -1.0), (3.0, 3.0)));
/// assert!(!through((-1.0, 0.0), (3.0, 0.0)));
/// assert!(!through((-1.0, 1.0), (1.0, 3.0)));
/// ```
pub fn segment_passes_through_convex_polygon(from: Coord, to: Coord, polygon: &[Coord]) -> bool {
    let (t0, t1) = match clip_segment_to_convex_polygon(from, to, polygon) {
        Some(range) => range,
        None => return false,
    };
    if t1 <= t0 {
        return false;
    }
    let middle = from.lerp(to, (t0 + t1) * 0.5);
    let winding = polygon_winding(polygon);
    polygon.iter().enumerate().all(|(i, a)| {
        let side = polygon[(i + 1) % polygon.len()] - *a;
        winding * side.cross(middle - *a) > INSIDE_TOLERANCE * side.magnitude()
    })
}

/// Returns 1 for counter-clockwise (y-up) polygons and -1 otherwise.
fn polygon_winding(polygon: &[Coord]) -> Scalar {
    let area = polygon
        .iter()
        .enumerate()
        .map(|(i, a)| a.cross(polygon[(i + 1) % polygon.len()]))
        .sum::<Scalar>();
    if area >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Returns `(min, max)` corners of the axis-aligned bounds of given points.
pub fn bounds(points: &[Coord]) -> (Coord, Coord) {
    points.iter().fold(
        (
            Coord::new(Scalar::INFINITY, Scalar::INFINITY),
            Coord::new(Scalar::NEG_INFINITY, Scalar::NEG_INFINITY),
        ),
        |(min, max), p| {
            (
                Coord::new(min.x.min(p.x), min.y.min(p.y)),
                Coord::new(max.x.max(p.x), max.y.max(p.y)),
            )
        },
    )
}

/// Returns distance from point to the closest point of segment `a b`.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(10.0, 0.0);
/// assert_eq!(distance_point_to_segment(Coord::new(5.0, 3.0), a, b), 3.0);
/// assert_eq!(distance_point_to_segment(Coord::new(13.0, 4.0), a, b), 5.0);
/// assert_eq!(distance_point_to_segment(Coord::new(3.0, 4.0), a, a), 5.0);
/// ```
pub fn distance_point_to_segment(p: Coord, a: Coord, b: Coord) -> Scalar {
    let ab = b - a;
    let len_sq = ab.sqr_magnitude();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).max(0.0).min(1.0);
    p.distance(a + ab * t)
}
