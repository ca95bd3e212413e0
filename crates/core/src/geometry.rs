//! Pure hit-testing for the drop gesture.
//!
//! The presentation layer measures the drop zone's current on-screen
//! rectangle at release time and hands it in here together with the pointer
//! position; nothing in this module looks anything up.

use crate::model::GameSettings;

/// A pointer position in the same absolute coordinate space as [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its edges.
///
/// No well-formedness is enforced: a rect with `left > right` is not an
/// error, it just never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Classifies a drag-release point against a target rectangle, widening the
/// target by a symmetric tolerance buffer so near-misses still count as an
/// intentional drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZoneResolver {
    buffer: f64,
}

impl DropZoneResolver {
    /// Creates a resolver with an explicit buffer. The buffer is validated
    /// as part of [`GameSettings`]; values given here are taken as-is.
    #[must_use]
    pub fn new(buffer: f64) -> Self {
        Self { buffer }
    }

    #[must_use]
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.drop_buffer())
    }

    #[must_use]
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Returns true iff `point` lies within `target` expanded by the buffer
    /// on every side.
    #[must_use]
    pub fn is_within_target(&self, point: Point, target: Rect) -> bool {
        point.x >= target.left - self.buffer
            && point.x <= target.right + self.buffer
            && point.y >= target.top - self.buffer
            && point.y <= target.bottom + self.buffer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Rect {
        Rect::new(100.0, 200.0, 300.0, 400.0)
    }

    #[test]
    fn point_inside_rect_is_accepted() {
        let resolver = DropZoneResolver::new(0.0);
        assert!(resolver.is_within_target(Point::new(200.0, 300.0), target()));
    }

    #[test]
    fn point_exactly_on_buffered_edge_is_accepted() {
        let resolver = DropZoneResolver::new(150.0);
        // One point exactly `buffer` outside each of the four edges.
        assert!(resolver.is_within_target(Point::new(100.0 - 150.0, 300.0), target()));
        assert!(resolver.is_within_target(Point::new(300.0 + 150.0, 300.0), target()));
        assert!(resolver.is_within_target(Point::new(200.0, 200.0 - 150.0), target()));
        assert!(resolver.is_within_target(Point::new(200.0, 400.0 + 150.0), target()));
    }

    #[test]
    fn point_just_past_buffered_edge_is_rejected() {
        let resolver = DropZoneResolver::new(150.0);
        assert!(!resolver.is_within_target(Point::new(100.0 - 151.0, 300.0), target()));
        assert!(!resolver.is_within_target(Point::new(300.0 + 151.0, 300.0), target()));
        assert!(!resolver.is_within_target(Point::new(200.0, 200.0 - 151.0), target()));
        assert!(!resolver.is_within_target(Point::new(200.0, 400.0 + 151.0), target()));
    }

    #[test]
    fn buffered_corner_is_accepted() {
        let resolver = DropZoneResolver::new(100.0);
        assert!(resolver.is_within_target(Point::new(0.0, 100.0), target()));
    }

    #[test]
    fn zero_buffer_requires_exact_containment() {
        let resolver = DropZoneResolver::new(0.0);
        assert!(resolver.is_within_target(Point::new(100.0, 200.0), target()));
        assert!(!resolver.is_within_target(Point::new(99.9, 300.0), target()));
    }

    #[test]
    fn inverted_rect_never_matches_without_buffer() {
        let resolver = DropZoneResolver::new(0.0);
        let inverted = Rect::new(300.0, 400.0, 100.0, 200.0);
        assert!(!resolver.is_within_target(Point::new(200.0, 300.0), inverted));
    }

    #[test]
    fn resolver_uses_settings_buffer() {
        let settings = GameSettings::new(120.0, 10, 5).unwrap();
        let resolver = DropZoneResolver::from_settings(&settings);
        assert_eq!(resolver.buffer(), 120.0);
        assert!(resolver.is_within_target(Point::new(300.0 + 120.0, 300.0), target()));
        assert!(!resolver.is_within_target(Point::new(300.0 + 121.0, 300.0), target()));
    }
}
