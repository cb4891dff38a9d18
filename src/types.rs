//! Numeric primitives shared by layout and rendering.
//!
//! Coordinates are plain SVG user units (Y grows downward). Points are
//! `glam::DVec2`; this module adds the bounding-box accumulator and the
//! finite-value checks the render entry point runs on caller input.

use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: dvec2(f64::INFINITY, f64::INFINITY),
            max: dvec2(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a square of half-size `half` around `center`
    pub fn expand_square(&mut self, center: DVec2, half: f64) {
        self.expand_point(center - DVec2::splat(half));
        self.expand_point(center + DVec2::splat(half));
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// The `viewBox` of the output document: origin plus extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ViewBox {
    /// Whether a circle lies strictly inside this box.
    pub fn contains_circle(&self, center: DVec2, radius: f64) -> bool {
        center.x - radius > self.x
            && center.y - radius > self.y
            && center.x + radius < self.x + self.w
            && center.y + radius < self.y + self.h
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finite_rejects_nan() {
        assert_eq!(check_finite(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn check_finite_rejects_infinity() {
        assert_eq!(check_finite(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_finite(f64::NEG_INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_finite(-3.5), Ok(-3.5));
    }

    #[test]
    fn new_bbox_is_empty() {
        let b = BBox::new();
        assert!(b.is_empty());
        assert_eq!(b.min, DVec2::INFINITY);
    }

    #[test]
    fn bbox_expand_square() {
        let mut b = BBox::new();
        b.expand_square(dvec2(0.0, 0.0), 10.0);
        b.expand_square(dvec2(100.0, 50.0), 5.0);
        assert!(!b.is_empty());
        assert_eq!(b.min, dvec2(-10.0, -10.0));
        assert_eq!(b.max, dvec2(105.0, 55.0));
        assert_eq!(b.width(), 115.0);
        assert_eq!(b.height(), 65.0);
    }

    #[test]
    fn viewbox_containment_is_strict() {
        let vb = ViewBox { x: 0.0, y: 0.0, w: 100.0, h: 100.0 };
        assert!(vb.contains_circle(dvec2(50.0, 50.0), 10.0));
        assert!(!vb.contains_circle(dvec2(10.0, 50.0), 10.0));
    }
}
