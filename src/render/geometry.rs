//! Geometry kernel: vector helpers, clipping and curve evaluation
//!
//! All functions are pure. Points are `DVec2` in SVG space (Y-down); plain
//! addition and subtraction use glam's operators.

use glam::{DVec2, dvec2};

use crate::types::{BBox, ViewBox};

pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) * 0.5
}

/// Euclidean length, with 1 standing in for 0 so callers can divide by it.
pub fn guarded_length(v: DVec2) -> f64 {
    let len = v.length();
    if len == 0.0 { 1.0 } else { len }
}

/// Unit vector along `v`; the zero vector stays zero.
pub fn normalize(v: DVec2) -> DVec2 {
    v / guarded_length(v)
}

/// Left-hand normal of segment `a -> b`, scaled to `distance`.
///
/// In SVG space this is `(-dy, dx)`: for a segment pointing right the
/// result points down the screen. Swapping `a` and `b` negates it.
pub fn perpendicular_offset(a: DVec2, b: DVec2, distance: f64) -> DVec2 {
    let v = b - a;
    let len = guarded_length(v);
    dvec2(-v.y / len * distance, v.x / len * distance)
}

/// Point on the circle of `radius` around `center`, on the ray toward `toward`.
///
/// Both ends of every edge clip through this function, always stepping
/// outward from the center by `+radius`.
pub fn point_toward_on_circle(center: DVec2, toward: DVec2, radius: f64) -> DVec2 {
    center + normalize(toward - center) * radius
}

/// Point at `angle` radians (from +x, Y-down) on a circle.
pub fn point_on_circle(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + dvec2(angle.cos(), angle.sin()) * radius
}

/// Expand a box by `pad` on every side.
pub fn padded_bounds(bounds: &BBox, pad: f64) -> ViewBox {
    ViewBox {
        x: bounds.min.x - pad,
        y: bounds.min.y - pad,
        w: bounds.width() + pad * 2.0,
        h: bounds.height() + pad * 2.0,
    }
}

/// Order two endpoints so the second lies in the "greater" direction:
/// positive dx, or dx == 0 and positive dy. Returns the ordered pair and
/// whether the inputs were swapped.
pub fn canonical_pair(a: DVec2, b: DVec2) -> (DVec2, DVec2, bool) {
    let d = b - a;
    if d.x > 0.0 || (d.x == 0.0 && d.y >= 0.0) {
        (a, b, false)
    } else {
        (b, a, true)
    }
}

/// Quadratic Bézier point at parameter `t`.
pub fn quad_point(p0: DVec2, c: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t)
}

/// Cubic Bézier point at parameter `t`.
pub fn cubic_point(p0: DVec2, c1: DVec2, c2: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
}

/// Reflect `p` across the line through `a` and `b`.
pub fn reflect_across(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let dir = normalize(b - a);
    let rel = p - a;
    let along = dir * rel.dot(dir);
    a + along * 2.0 - rel
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: DVec2, expected: DVec2) {
        assert!(
            (actual - expected).length() < EPSILON,
            "point mismatch: {actual:?} != {expected:?}"
        );
    }

    #[test]
    fn zero_vector_length_is_one() {
        assert_eq!(guarded_length(DVec2::ZERO), 1.0);
        assert_eq!(normalize(DVec2::ZERO), DVec2::ZERO);
        assert_eq!(guarded_length(dvec2(3.0, 4.0)), 5.0);
    }

    #[test]
    fn perpendicular_is_left_hand_and_scaled() {
        let n = perpendicular_offset(dvec2(0.0, 0.0), dvec2(10.0, 0.0), 5.0);
        assert_close(n, dvec2(0.0, 5.0));
        let flipped = perpendicular_offset(dvec2(10.0, 0.0), dvec2(0.0, 0.0), 5.0);
        assert_close(flipped, dvec2(0.0, -5.0));
    }

    #[test]
    fn perpendicular_of_coincident_points_is_zero() {
        let p = dvec2(7.0, 7.0);
        assert_eq!(perpendicular_offset(p, p, 12.0), DVec2::ZERO);
    }

    #[test]
    fn circle_point_is_outward_at_radius() {
        let c = dvec2(100.0, 50.0);
        let p = point_toward_on_circle(c, dvec2(200.0, 150.0), 28.0);
        assert!((p.distance(c) - 28.0).abs() < EPSILON);
        assert!(p.x > c.x && p.y > c.y);
    }

    #[test]
    fn padded_bounds_grows_every_side() {
        let mut b = BBox::new();
        b.expand_point(dvec2(0.0, 0.0));
        b.expand_point(dvec2(10.0, 20.0));
        let vb = padded_bounds(&b, 5.0);
        assert_eq!(vb, ViewBox { x: -5.0, y: -5.0, w: 20.0, h: 30.0 });
    }

    #[test]
    fn canonical_pair_orders_by_direction() {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(-5.0, 3.0);
        assert_eq!(canonical_pair(a, b), (b, a, true));
        assert_eq!(canonical_pair(b, a), (b, a, false));
        let below = dvec2(0.0, 9.0);
        assert_eq!(canonical_pair(below, a), (a, below, true));
    }

    #[test]
    fn bezier_endpoints_and_midpoints() {
        let p0 = dvec2(0.0, 0.0);
        let c = dvec2(5.0, 10.0);
        let p1 = dvec2(10.0, 0.0);
        assert_close(quad_point(p0, c, p1, 0.0), p0);
        assert_close(quad_point(p0, c, p1, 1.0), p1);
        assert_close(quad_point(p0, c, p1, 0.5), dvec2(5.0, 5.0));
        let mid = cubic_point(p0, dvec2(0.0, 8.0), dvec2(10.0, 8.0), p1, 0.5);
        assert_close(mid, dvec2(5.0, 6.0));
    }

    #[test]
    fn reflection_across_horizontal_line() {
        let r = reflect_across(dvec2(3.0, 4.0), dvec2(0.0, 0.0), dvec2(10.0, 0.0));
        assert_close(r, dvec2(3.0, -4.0));
    }
}
