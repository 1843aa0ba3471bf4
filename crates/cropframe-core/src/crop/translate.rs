//! Moving a crop without resizing it.

use crate::geometry::{clamp_value, Bounds, Point, Rect};

/// Compute the crop after dragging its body from `start` to `end`.
///
/// The size of `rect` is preserved; its top-left corner follows the pointer
/// delta but is held inside `[0, parent - size]` on each axis, so the crop
/// stops at the parent edges instead of shrinking. No further clamp is
/// applied.
///
/// A crop larger than its parent on some axis is pinned to 0 on that axis.
pub fn moved_crop(rect: &Rect, start: Point, end: Point, parent: &Bounds) -> Rect {
    let mouse_diff_x = end.x - start.x;
    let mouse_diff_y = end.y - start.y;

    let size = rect.size();
    let max_top = parent.height - size.height;
    let max_left = parent.width - size.width;

    let top = clamp_value(0.0, max_top, rect.top + mouse_diff_y);
    let left = clamp_value(0.0, max_left, rect.left + mouse_diff_x);

    Rect {
        top,
        left,
        bottom: top + size.height,
        right: left + size.width,
    }
}
