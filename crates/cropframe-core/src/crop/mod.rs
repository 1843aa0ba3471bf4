//! Crop engines: create, resize and move.
//!
//! Each engine is a pure function of the gesture start point, the live pointer
//! position, a snapshot of the rectangle taken at gesture start, and the parent
//! bounds. Replaying the same inputs always yields the same rectangle, so a
//! pointer-move tick never depends on the previous tick.
//!
//! # Engines
//!
//! - [`new_crop`] - draw a fresh rectangle anchored at the drag start
//! - [`resized_crop`] - drag one corner, the opposite corner stays pinned
//! - [`moved_crop`] - translate without changing size

mod create;
mod resize;
mod translate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Size};

pub use create::new_crop;
pub use resize::resized_crop;
pub use translate::moved_crop;

/// Smallest crop any engine produces (10x10 pixels).
pub const MIN_CROP_SIZE: Size = Size {
    width: 10.0,
    height: 10.0,
};

/// A rectangle corner.
///
/// Used both as the direction a new crop grows toward and as the resize handle
/// being dragged. Handles are identified by two-letter keys (`"ne"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    /// Top-right.
    Ne,
    /// Top-left.
    Nw,
    /// Bottom-right.
    Se,
    /// Bottom-left.
    Sw,
}

impl Corner {
    /// All corners, in the order the frame renders its handles.
    pub const ALL: [Corner; 4] = [Corner::Ne, Corner::Nw, Corner::Se, Corner::Sw];

    /// Direction of a drag from `start` to `end`.
    ///
    /// Ties on an axis resolve toward east/south.
    pub fn from_drag(start: Point, end: Point) -> Self {
        let east = end.x >= start.x;
        let south = end.y >= start.y;
        match (south, east) {
            (false, true) => Corner::Ne,
            (false, false) => Corner::Nw,
            (true, true) => Corner::Se,
            (true, false) => Corner::Sw,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::Ne => "ne",
            Corner::Nw => "nw",
            Corner::Se => "se",
            Corner::Sw => "sw",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a handle identifier is not one of the four corners.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown corner: {0:?} (expected ne, nw, se or sw)")]
pub struct ParseCornerError(pub String);

impl FromStr for Corner {
    type Err = ParseCornerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ne" => Ok(Corner::Ne),
            "nw" => Ok(Corner::Nw),
            "se" => Ok(Corner::Se),
            "sw" => Ok(Corner::Sw),
            other => Err(ParseCornerError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_from_drag() {
        let start = Point::new(50.0, 50.0);
        assert_eq!(Corner::from_drag(start, Point::new(60.0, 40.0)), Corner::Ne);
        assert_eq!(Corner::from_drag(start, Point::new(40.0, 40.0)), Corner::Nw);
        assert_eq!(Corner::from_drag(start, Point::new(60.0, 60.0)), Corner::Se);
        assert_eq!(Corner::from_drag(start, Point::new(40.0, 60.0)), Corner::Sw);
    }

    #[test]
    fn test_corner_ties_default_to_south_east() {
        let start = Point::new(50.0, 50.0);
        assert_eq!(Corner::from_drag(start, start), Corner::Se);
        assert_eq!(Corner::from_drag(start, Point::new(50.0, 20.0)), Corner::Ne);
        assert_eq!(Corner::from_drag(start, Point::new(20.0, 50.0)), Corner::Sw);
    }

    #[test]
    fn test_corner_parse_round_trip() {
        for corner in Corner::ALL {
            assert_eq!(corner.as_str().parse::<Corner>(), Ok(corner));
            assert_eq!(corner.to_string(), corner.as_str());
        }
    }

    #[test]
    fn test_corner_parse_unknown() {
        let err = "n".parse::<Corner>().unwrap_err();
        assert_eq!(err, ParseCornerError("n".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown corner: \"n\" (expected ne, nw, se or sw)"
        );
    }
}
