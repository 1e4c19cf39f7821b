//! Screen-space geometry used for slot hit-testing
//!
//! Mirrors the small subset of an SDL-style rect API the inventory needs,
//! so the core does not depend on any particular windowing backend.

use serde::{Deserialize, Serialize};

/// A pointer position in screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Moves the point, stopping at the edges of the `i32` range
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// An axis-aligned screen region
///
/// The right and bottom edges are exclusive, so two adjacent slots never
/// both contain the same point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the same rect moved so its top-left corner is at `origin`
    pub fn moved_to(&self, origin: Point) -> Self {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_edges() {
        let rect = Rect::new(10, 20, 30, 40);

        assert!(rect.contains_point(Point::new(10, 20)));
        assert!(rect.contains_point(Point::new(39, 59)));
        assert!(!rect.contains_point(Point::new(40, 20)));
        assert!(!rect.contains_point(Point::new(10, 60)));
        assert!(!rect.contains_point(Point::new(9, 25)));
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        assert_eq!(Point::new(i32::MIN, 5).offset(-35, -35), Point::new(i32::MIN, -30));
        assert_eq!(Point::new(i32::MAX, 0).offset(1, 0).x, i32::MAX);

        let rect = Rect::new(i32::MAX - 5, i32::MAX, 70, 70);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
    }

    #[test]
    fn test_moved_to_keeps_size() {
        let rect = Rect::new(0, 0, 64, 32).moved_to(Point::new(5, -3));
        assert_eq!(rect, Rect::new(5, -3, 64, 32));
        assert_eq!(rect.top_left(), Point::new(5, -3));
    }
}
