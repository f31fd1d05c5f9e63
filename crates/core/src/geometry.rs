//! Normalized annotation geometry
//!
//! All stored geometry lives in normalized page space: positions are
//! fractions (0..=1) of a page's native width/height at magnification 1.0,
//! so records stay valid across zoom changes and container resizes.

use serde::{Deserialize, Serialize};

/// A position in normalized page space
///
/// Both components are fractions of the page's native dimensions at
/// magnification 1.0. Points derived from pointer input are always clamped
/// to [0, 1]; a point is never stored in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point, clamping both components to [0, 1]
    pub fn clamped(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Create a point without clamping (for trusted, already-normalized data)
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Bounding geometry of an annotation in normalized page space
///
/// `x`/`y` are the top-left corner as fractions of the native page size;
/// `width`/`height` are normalized magnitudes and may nominally exceed 1.0
/// before creation-time clamping. `page_index` is 0-based and immutable once
/// the owning annotation exists — an annotation never migrates pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub page_index: u16,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, page_index: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
            page_index,
        }
    }

    /// Rectangle spanned by two corner points (any corner order)
    pub fn from_corners(a: Point, b: Point, page_index: u16) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
            page_index,
        }
    }

    /// Axis-aligned bound of an ordered point sequence
    ///
    /// Returns `None` for an empty sequence.
    pub fn bounding(points: &[Point], page_index: u16) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
            page_index,
        })
    }

    /// Check whether a normalized point lies inside this rectangle
    pub fn contains(&self, point: Point) -> bool {
        self.contains_with_tolerance(point, 0.0)
    }

    /// Containment with a tolerance inflation on every side
    ///
    /// Used for hit testing so hairline geometry (strikeouts, thin
    /// rectangles) stays selectable.
    pub fn contains_with_tolerance(&self, point: Point, tolerance: f32) -> bool {
        point.x >= self.x - tolerance
            && point.x <= self.x + self.width + tolerance
            && point.y >= self.y - tolerance
            && point.y <= self.y + self.height + tolerance
    }

    /// Smallest rectangle covering both `self` and `other`
    ///
    /// Page index is taken from `self`; callers only union rects of the
    /// same page.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = (self.x + self.width).max(other.x + other.width);
        let max_y = (self.y + self.height).max(other.y + other.height);
        Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
            page_index: self.page_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_point_stays_in_unit_square() {
        let p = Point::clamped(-0.5, 1.7);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 1.0);
    }

    #[test]
    fn rect_from_corners_normalizes_order() {
        let rect = Rect::from_corners(Point::new(0.5, 0.4), Point::new(0.2, 0.2), 0);
        assert_eq!(rect.x, 0.2);
        assert_eq!(rect.y, 0.2);
        assert!((rect.width - 0.3).abs() < 1e-6);
        assert!((rect.height - 0.2).abs() < 1e-6);
    }

    #[test]
    fn bounding_covers_all_points() {
        let points = vec![
            Point::new(0.3, 0.5),
            Point::new(0.1, 0.9),
            Point::new(0.7, 0.2),
        ];
        let rect = Rect::bounding(&points, 3).unwrap();
        assert_eq!(rect.x, 0.1);
        assert_eq!(rect.y, 0.2);
        assert!((rect.width - 0.6).abs() < 1e-6);
        assert!((rect.height - 0.7).abs() < 1e-6);
        assert_eq!(rect.page_index, 3);
    }

    #[test]
    fn bounding_of_empty_sequence_is_none() {
        assert!(Rect::bounding(&[], 0).is_none());
    }

    #[test]
    fn tolerance_inflates_hit_area() {
        let rect = Rect::new(0.4, 0.4, 0.2, 0.0, 0);
        let just_below = Point::new(0.5, 0.403);
        assert!(!rect.contains(just_below));
        assert!(rect.contains_with_tolerance(just_below, 0.01));
    }

    #[test]
    fn union_covers_both_rects() {
        let a = Rect::new(0.1, 0.1, 0.2, 0.2, 0);
        let b = Rect::new(0.5, 0.4, 0.1, 0.3, 0);
        let u = a.union(&b);
        assert_eq!(u.x, 0.1);
        assert_eq!(u.y, 0.1);
        assert!((u.width - 0.5).abs() < 1e-6);
        assert!((u.height - 0.6).abs() < 1e-6);
    }
}
