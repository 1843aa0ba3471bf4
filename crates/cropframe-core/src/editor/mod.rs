//! Interactive crop editor.
//!
//! [`CropEditor`] is the single authority over which crop engine runs. It is
//! driven by pointer events (down/move/up) and a few external triggers:
//! loading an image, entering crop mode, confirming or cancelling the pending
//! crop, undo, and window resize.
//!
//! # States
//!
//! ```text
//!  None ──load──▶ Ready ──start_crop──▶ Cropping ──pointer_down──▶ Creating | Moving | Resizing
//!                   ▲                      │  ▲                          │
//!                   └──confirm / cancel────┘  └────────pointer_up────────┘
//! ```
//!
//! A window resize sends every state except `None` back to `Ready`.

mod gesture;
mod history;
mod hit;
mod machine;

use serde::{Deserialize, Serialize};

use crate::crop::Corner;

pub use gesture::{Gesture, GestureKind};
pub use history::ImageHistory;
pub use hit::classify_target;
pub use machine::CropEditor;

/// The editor's interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CropStatus {
    /// No image loaded.
    #[default]
    None,
    /// Image loaded, not cropping.
    Ready,
    /// Drawing a new crop.
    Creating,
    /// Crop drawn, waiting for the user to confirm or cancel.
    Cropping,
    /// Dragging the crop body.
    Moving,
    /// Dragging a crop corner.
    Resizing,
}

impl CropStatus {
    /// Returns true while a pointer gesture is in progress.
    pub fn is_gesture(self) -> bool {
        matches!(
            self,
            CropStatus::Creating | CropStatus::Moving | CropStatus::Resizing
        )
    }

    /// Returns true while the crop frame is on screen.
    pub fn is_cropping(self) -> bool {
        self == CropStatus::Cropping || self.is_gesture()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CropStatus::None => "NONE",
            CropStatus::Ready => "READY",
            CropStatus::Creating => "CREATING",
            CropStatus::Cropping => "CROPPING",
            CropStatus::Moving => "MOVING",
            CropStatus::Resizing => "RESIZING",
        }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The image surface outside the crop: draws a new crop.
    Image,
    /// The crop body: moves the crop.
    Frame,
    /// A corner handle: resizes the crop.
    Handle(Corner),
}
