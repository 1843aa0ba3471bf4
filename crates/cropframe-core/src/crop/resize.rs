//! Resizing a crop by dragging one of its corners.

use super::Corner;
use crate::geometry::{clamp_to_bounds, Bounds, Point, Rect, Size};

/// Compute the crop after dragging `corner` from `start` to `end`.
///
/// The two edges adjacent to the grabbed corner follow the signed pointer
/// delta; the other two stay pinned to `rect`. A moving edge stops `min` away
/// from the opposite edge, so dragging past the limit freezes the edge there
/// instead of flipping the rectangle. The result is clamped into `parent`.
///
/// `rect` must be the snapshot taken when the gesture started, not the
/// rectangle from the previous move tick.
pub fn resized_crop(
    rect: &Rect,
    corner: Corner,
    start: Point,
    end: Point,
    parent: &Bounds,
    min: Size,
) -> Rect {
    let diff_x = end.x - start.x;
    let diff_y = end.y - start.y;

    let top = || (rect.top + diff_y).min(rect.bottom - min.height);
    let bottom = || (rect.bottom + diff_y).max(rect.top + min.height);
    let left = || (rect.left + diff_x).min(rect.right - min.width);
    let right = || (rect.right + diff_x).max(rect.left + min.width);

    let resized = match corner {
        Corner::Ne => Rect::new(top(), rect.left, rect.bottom, right()),
        Corner::Nw => Rect::new(top(), left(), rect.bottom, rect.right),
        Corner::Se => Rect::new(rect.top, rect.left, bottom(), right()),
        Corner::Sw => Rect::new(rect.top, left(), bottom(), rect.right),
    };

    clamp_to_bounds(&resized, parent)
}
