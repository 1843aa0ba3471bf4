//! Drawing a new crop rectangle.

use super::Corner;
use crate::geometry::{clamp_to_bounds, Bounds, Point, Rect, Size};

/// Compute a new crop from a drag on the image surface.
///
/// The drag start becomes one corner of the rectangle and the rectangle grows
/// toward the quadrant the pointer moved into. Width and height are the
/// absolute drag distances, floored at `min` so even a click with no movement
/// yields a `min`-sized rectangle. The result is clamped into `parent`.
///
/// # Arguments
///
/// * `start` - Page point where the drag began
/// * `end` - Current page point of the pointer
/// * `parent` - Displayed image bounds measured at drag start
/// * `min` - Minimum crop size (normally [`super::MIN_CROP_SIZE`])
pub fn new_crop(start: Point, end: Point, parent: &Bounds, min: Size) -> Rect {
    let direction = Corner::from_drag(start, end);

    let width = (end.x - start.x).abs().max(min.width);
    let height = (end.y - start.y).abs().max(min.height);

    let anchor = parent.to_relative(start);
    let crop = anchored(direction, anchor, width, height);

    clamp_to_bounds(&crop, parent)
}

/// Rectangle with one corner pinned at `anchor`, extending toward `direction`.
fn anchored(direction: Corner, anchor: Point, width: f64, height: f64) -> Rect {
    match direction {
        Corner::Ne => Rect::new(anchor.y - height, anchor.x, anchor.y, anchor.x + width),
        Corner::Nw => Rect::new(anchor.y - height, anchor.x - width, anchor.y, anchor.x),
        Corner::Se => Rect::new(anchor.y, anchor.x, anchor.y + height, anchor.x + width),
        Corner::Sw => Rect::new(anchor.y, anchor.x - width, anchor.y + height, anchor.x),
    }
}
