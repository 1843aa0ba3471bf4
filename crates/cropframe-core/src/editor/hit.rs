//! Pointer-down classification.

use super::PointerTarget;
use crate::crop::Corner;
use crate::geometry::{Point, Rect};

/// Decide what a pointer-down at `point` grabbed.
///
/// `point` is relative to the displayed image. Handles take priority: a point
/// within reach of a corner on both axes grabs that corner, checked in
/// [`Corner::ALL`] order. Otherwise a point inside the crop (edges included)
/// grabs the body, and anything else lands on the image.
///
/// The reach on each axis is `handle_reach`, capped at a quarter of the crop's
/// extent on that axis so a small crop keeps a grabbable body.
pub fn classify_target(crop: &Rect, point: Point, handle_reach: f64) -> PointerTarget {
    let extent = crop.size();
    let reach_x = handle_reach.min(extent.width / 4.0).max(0.0);
    let reach_y = handle_reach.min(extent.height / 4.0).max(0.0);
    let near = |x: f64, y: f64| (point.x - x).abs() <= reach_x && (point.y - y).abs() <= reach_y;

    for corner in Corner::ALL {
        let (x, y) = corner_position(crop, corner);
        if near(x, y) {
            return PointerTarget::Handle(corner);
        }
    }

    if crop.contains(point) {
        PointerTarget::Frame
    } else {
        PointerTarget::Image
    }
}

fn corner_position(crop: &Rect, corner: Corner) -> (f64, f64) {
    match corner {
        Corner::Ne => (crop.right, crop.top),
        Corner::Nw => (crop.left, crop.top),
        Corner::Se => (crop.right, crop.bottom),
        Corner::Sw => (crop.left, crop.bottom),
    }
}
