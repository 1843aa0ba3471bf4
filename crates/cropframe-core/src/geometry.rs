//! Geometry primitives shared by the crop engines.
//!
//! # Coordinate System
//!
//! - [`Point`] values are page coordinates (absolute, scroll offset included),
//!   exactly as pointer events report them.
//! - [`Rect`] values are relative to the top-left corner of the displayed image.
//! - [`Bounds`] describes the displayed image itself: its page offset and its
//!   rendered size. Engines treat it as read-only input.
//!
//! All values are in CSS pixels and may be fractional.

use serde::{Deserialize, Serialize};

/// A rectangle in parent-relative pixels.
///
/// A well-formed crop satisfies `right >= left + min_width` and
/// `bottom >= top + min_height`. Clamping can break that (see
/// [`clamp_to_bounds`]), so consumers check [`Rect::is_degenerate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Rectangle anchored at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.height, size.width)
    }

    /// Width and height of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.right - self.left,
            height: self.bottom - self.top,
        }
    }

    /// Returns true if the rectangle has no positive area.
    pub fn is_degenerate(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Hit test with inclusive edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Same rectangle shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.top + dy, self.left + dx, self.bottom + dy, self.right + dx)
    }
}

/// A pointer position in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The displayed image a crop lives in.
///
/// `top`/`left` are the image's offset on the page, `width`/`height` its
/// rendered size. Measured at gesture start and again after a window resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// The parent-relative rectangle a crop must stay inside.
    pub fn extent(&self) -> Rect {
        Rect::new(0.0, 0.0, self.height, self.width)
    }

    /// Translate a page point into coordinates relative to the image.
    pub fn to_relative(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }
}

/// Width and height of `rect`.
#[inline]
pub fn size(rect: &Rect) -> Size {
    rect.size()
}

/// Clamp each edge of `rect` into the parent extent.
///
/// Only the edges are clamped independently: `top`/`left` are raised to 0 and
/// `bottom`/`right` are lowered to the parent height/width. A rectangle lying
/// entirely outside the parent comes back inverted. That output is kept as is.
pub fn clamp_to_bounds(rect: &Rect, bounds: &Bounds) -> Rect {
    Rect {
        top: rect.top.max(0.0),
        left: rect.left.max(0.0),
        bottom: rect.bottom.min(bounds.height),
        right: rect.right.min(bounds.width),
    }
}

/// Restrict `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: with `min > max` it yields `min`.
#[inline]
pub fn clamp_value(min: f64, max: f64, value: f64) -> f64 {
    value.min(max).max(min)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..400.0, 0.0f64..400.0)
            .prop_map(|(top, left, h, w)| Rect::new(top, left, top + h, left + w))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (0.0f64..1000.0, 0.0f64..1000.0, 1.0f64..800.0, 1.0f64..800.0)
            .prop_map(|(top, left, w, h)| Bounds::new(top, left, w, h))
    }

    proptest! {
        /// Property: translating a rectangle leaves its size unchanged.
        #[test]
        fn prop_size_translation_invariant(
            r in rect_strategy(),
            dx in -1000.0f64..1000.0,
            dy in -1000.0f64..1000.0,
        ) {
            let a = size(&r);
            let b = size(&r.translate(dx, dy));
            prop_assert!((a.width - b.width).abs() < 1e-6);
            prop_assert!((a.height - b.height).abs() < 1e-6);
        }

        /// Property: clamped edges never leave the parent extent.
        #[test]
        fn prop_clamp_containment(r in rect_strategy(), b in bounds_strategy()) {
            let c = clamp_to_bounds(&r, &b);
            prop_assert!(c.top >= 0.0);
            prop_assert!(c.left >= 0.0);
            prop_assert!(c.bottom <= b.height);
            prop_assert!(c.right <= b.width);
        }

        /// Property: clamping is idempotent.
        #[test]
        fn prop_clamp_idempotent(r in rect_strategy(), b in bounds_strategy()) {
            let once = clamp_to_bounds(&r, &b);
            prop_assert_eq!(clamp_to_bounds(&once, &b), once);
        }

        /// Property: clamp_value stays in range for ordered bounds.
        #[test]
        fn prop_clamp_value_in_range(
            min in -100.0f64..100.0,
            span in 0.0f64..100.0,
            value in -500.0f64..500.0,
        ) {
            let v = clamp_value(min, min + span, value);
            prop_assert!(v >= min && v <= min + span);
        }
    }
}
