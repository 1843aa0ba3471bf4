//! The record of an in-progress pointer gesture.

use super::CropStatus;
use crate::crop::{moved_crop, new_crop, resized_crop, Corner};
use crate::geometry::{Bounds, Point, Rect, Size};

/// Which engine a gesture drives, with the state that engine needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    /// Drawing a new crop from the start point.
    Create,
    /// Translating `snapshot`.
    Move { snapshot: Rect },
    /// Dragging `corner` of `snapshot`.
    Resize { snapshot: Rect, corner: Corner },
}

/// Scratch state captured at pointer-down and dropped at pointer-up.
///
/// Every move tick is computed from this record and the live pointer position
/// alone, never from the previous tick's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    /// Page point of the pointer-down.
    pub start: Point,
    /// Displayed image bounds at pointer-down.
    pub parent: Bounds,
}

impl Gesture {
    pub fn new(kind: GestureKind, start: Point, parent: Bounds) -> Self {
        Self {
            kind,
            start,
            parent,
        }
    }

    /// The editor status while this gesture is active.
    pub fn status(&self) -> CropStatus {
        match self.kind {
            GestureKind::Create => CropStatus::Creating,
            GestureKind::Move { .. } => CropStatus::Moving,
            GestureKind::Resize { .. } => CropStatus::Resizing,
        }
    }

    /// Run the gesture's engine for the pointer at `current`.
    pub fn apply(&self, current: Point, min: Size) -> Rect {
        match self.kind {
            GestureKind::Create => new_crop(self.start, current, &self.parent, min),
            GestureKind::Move { snapshot } => {
                moved_crop(&snapshot, self.start, current, &self.parent)
            }
            GestureKind::Resize { snapshot, corner } => {
                resized_crop(&snapshot, corner, self.start, current, &self.parent, min)
            }
        }
    }
}
