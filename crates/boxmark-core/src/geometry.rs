//! Rectangle geometry for gestures.
//!
//! Pure functions only: normalizing two pointer positions into a rectangle and
//! the offset arithmetic used when relocating a shape.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in surface coordinates.
///
/// `width` and `height` are never negative. A zero width or height is a legal,
/// degenerate rectangle (a click without movement).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance of the top edge from the surface origin.
    pub top: f64,
    /// Distance of the left edge from the surface origin.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            top: origin.y,
            left: origin.x,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The same size, moved so its top-left corner sits at `origin`.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self {
            top: origin.y,
            left: origin.x,
            width: self.width,
            height: self.height,
        }
    }

    /// Whether every field is a finite number.
    pub fn is_finite(&self) -> bool {
        [self.top, self.left, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Whether the rectangle has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    /// Check if a point lies inside the rectangle, edges included.
    ///
    /// `tolerance` grows the rectangle on every side before testing.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let r = self.as_kurbo().inflate(tolerance, tolerance);
        // kurbo's `contains` excludes the far edges
        point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
    }
}

/// Build the rectangle spanning two arbitrary corner points.
///
/// The result does not depend on which point came first, so a gesture dragged
/// up-left yields the same rectangle as one dragged down-right.
pub fn normalize(a: Point, b: Point) -> Rect {
    Rect {
        top: a.y.min(b.y),
        left: a.x.min(b.x),
        width: (a.x - b.x).abs(),
        height: (a.y - b.y).abs(),
    }
}

/// Position of `pointer` relative to the top-left corner of `rect`.
pub fn pointer_offset(rect: &Rect, pointer: Point) -> Vec2 {
    pointer - rect.origin()
}

/// Top-left corner a shape must take so that `offset` lands under `drop`.
pub fn drop_origin(drop: Point, offset: Vec2) -> Point {
    drop - offset
}

/// Whether both coordinates are finite numbers.
pub fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_down_right() {
        let rect = normalize(Point::new(50.0, 50.0), Point::new(150.0, 120.0));
        assert_eq!(
            rect,
            Rect {
                top: 50.0,
                left: 50.0,
                width: 100.0,
                height: 70.0
            }
        );
    }

    #[test]
    fn test_normalize_is_direction_independent() {
        let corners = [
            (Point::new(10.5, 80.25), Point::new(3.0, 7.75)),
            (Point::new(-4.0, 12.0), Point::new(9.0, -1.5)),
            (Point::new(0.1, 0.2), Point::new(0.3, 0.7)),
        ];
        for (a, b) in corners {
            let forward = normalize(a, b);
            let backward = normalize(b, a);
            assert_eq!(forward.top.to_bits(), backward.top.to_bits());
            assert_eq!(forward.left.to_bits(), backward.left.to_bits());
            assert_eq!(forward.width.to_bits(), backward.width.to_bits());
            assert_eq!(forward.height.to_bits(), backward.height.to_bits());
        }
    }

    #[test]
    fn test_normalize_mixed_directions() {
        // Dragged up-right: x grows, y shrinks
        let rect = normalize(Point::new(10.0, 90.0), Point::new(60.0, 40.0));
        assert_eq!(rect.origin(), Point::new(10.0, 40.0));
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_size_click() {
        let p = Point::new(30.0, 30.0);
        let rect = normalize(p, p);
        assert!(rect.is_degenerate());
        assert_eq!(rect.origin(), p);
    }

    #[test]
    fn test_offset_round_trip() {
        let rect = Rect::new(Point::new(50.0, 50.0), 100.0, 70.0);
        let offset = pointer_offset(&rect, Point::new(60.0, 55.0));
        assert_eq!(offset, Vec2::new(10.0, 5.0));
        assert_eq!(
            drop_origin(Point::new(200.0, 200.0), offset),
            Point::new(190.0, 195.0)
        );
    }

    #[test]
    fn test_with_origin_keeps_size() {
        let rect = Rect::new(Point::new(1.0, 2.0), 3.0, 4.0);
        let moved = rect.with_origin(Point::new(-10.0, 20.0));
        assert_eq!(moved.width, rect.width);
        assert_eq!(moved.height, rect.height);
        assert_eq!(moved.origin(), Point::new(-10.0, 20.0));
    }

    #[test]
    fn test_hit_test_includes_edges() {
        let rect = Rect::new(Point::new(0.0, 0.0), 100.0, 50.0);
        assert!(rect.hit_test(Point::new(0.0, 0.0), 0.0));
        assert!(rect.hit_test(Point::new(100.0, 50.0), 0.0));
        assert!(!rect.hit_test(Point::new(101.0, 25.0), 0.0));
        assert!(rect.hit_test(Point::new(104.0, 25.0), 5.0));
    }

    #[test]
    fn test_normalize_overflow_is_not_finite() {
        let rect = normalize(Point::new(-1.7e308, 0.0), Point::new(1.7e308, 10.0));
        assert!(rect.width.is_infinite());
        assert!(!rect.is_finite());
        assert!(normalize(Point::ZERO, Point::new(10.0, 10.0)).is_finite());
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(Point::new(1.0, 2.0)));
        assert!(!is_finite(Point::new(f64::NAN, 2.0)));
        assert!(!is_finite(Point::new(1.0, f64::INFINITY)));
    }
}
