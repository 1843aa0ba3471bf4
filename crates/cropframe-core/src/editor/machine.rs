//! The crop editor state machine.

use super::{CropStatus, Gesture, GestureKind, ImageHistory, PointerTarget};
use crate::crop::MIN_CROP_SIZE;
use crate::geometry::{Bounds, Point, Rect, Size};

/// Internal mode. The active gesture lives inside the mode so its scratch
/// state exists exactly while a gesture does.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    None,
    Ready,
    Cropping,
    Gesture(Gesture),
}

/// Owns the interaction mode, the crop rectangle and the image history.
///
/// `T` is whatever the host uses as an image artifact (encoded bytes, a URL,
/// a handle). The editor never inspects it.
///
/// Every operation returns whether it took effect. Events that do not apply
/// to the current mode are ignored, so hosts can forward raw input without
/// filtering it first.
#[derive(Debug, Clone)]
pub struct CropEditor<T> {
    mode: Mode,
    crop: Rect,
    min: Size,
    images: ImageHistory<T>,
}

impl<T> Default for CropEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CropEditor<T> {
    /// Create an editor with the default 10x10 minimum crop.
    pub fn new() -> Self {
        Self::with_min_size(MIN_CROP_SIZE)
    }

    pub fn with_min_size(min: Size) -> Self {
        Self {
            mode: Mode::None,
            crop: Rect::default(),
            min,
            images: ImageHistory::new(),
        }
    }

    pub fn status(&self) -> CropStatus {
        match self.mode {
            Mode::None => CropStatus::None,
            Mode::Ready => CropStatus::Ready,
            Mode::Cropping => CropStatus::Cropping,
            Mode::Gesture(gesture) => gesture.status(),
        }
    }

    /// The crop rectangle as of the last engine tick.
    pub fn crop(&self) -> Rect {
        self.crop
    }

    /// The active gesture, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        match &self.mode {
            Mode::Gesture(gesture) => Some(gesture),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&T> {
        self.images.current()
    }

    pub fn can_undo(&self) -> bool {
        self.images.can_undo()
    }

    /// True while the crop frame (and its confirm/cancel controls) is shown.
    pub fn is_cropping(&self) -> bool {
        self.status().is_cropping()
    }

    /// True when crop mode can be entered.
    pub fn can_start_crop(&self) -> bool {
        self.mode == Mode::Ready
    }

    /// The crop awaiting confirmation. Only set once the gesture has ended.
    pub fn pending_crop(&self) -> Option<Rect> {
        match self.mode {
            Mode::Cropping => Some(self.crop),
            _ => None,
        }
    }

    /// A new image finished loading. Works from any mode.
    pub fn load_image(&mut self, image: T) {
        self.images.load(image);
        self.transition(Mode::Ready);
    }

    /// Enter crop mode with the crop covering the whole displayed image.
    pub fn start_crop(&mut self, display: Size) -> bool {
        if self.mode != Mode::Ready {
            log::trace!("start_crop ignored in {:?}", self.status());
            return false;
        }
        self.crop = Rect::from_size(display);
        self.transition(Mode::Cropping);
        true
    }

    /// Begin a gesture on `target` at page point `at`.
    ///
    /// `parent` is the displayed image measured now; it stays fixed for the
    /// rest of the gesture.
    pub fn pointer_down(&mut self, target: PointerTarget, at: Point, parent: Bounds) -> bool {
        if self.mode != Mode::Cropping {
            log::trace!("pointer_down ignored in {:?}", self.status());
            return false;
        }

        let kind = match target {
            PointerTarget::Image => GestureKind::Create,
            PointerTarget::Frame => GestureKind::Move {
                snapshot: self.crop,
            },
            PointerTarget::Handle(corner) => GestureKind::Resize {
                snapshot: self.crop,
                corner,
            },
        };
        self.transition(Mode::Gesture(Gesture::new(kind, at, parent)));
        true
    }

    /// Feed the live pointer position to the active gesture.
    ///
    /// Returns the updated crop, or `None` when no gesture is active.
    pub fn pointer_move(&mut self, at: Point) -> Option<Rect> {
        let Mode::Gesture(gesture) = self.mode else {
            log::trace!("pointer_move ignored in {:?}", self.status());
            return None;
        };
        self.crop = gesture.apply(at, self.min);
        log::trace!("{:?} -> {:?}", gesture.status(), self.crop);
        Some(self.crop)
    }

    /// End the active gesture, keeping the crop from the last move tick.
    pub fn pointer_up(&mut self) -> bool {
        if !matches!(self.mode, Mode::Gesture(_)) {
            log::trace!("pointer_up ignored in {:?}", self.status());
            return false;
        }
        self.transition(Mode::Cropping);
        true
    }

    /// Accept the pending crop. `cropped` is the image extracted from it.
    pub fn confirm(&mut self, cropped: T) -> bool {
        if self.mode != Mode::Cropping {
            log::trace!("confirm ignored in {:?}", self.status());
            return false;
        }
        self.images.commit(cropped);
        self.transition(Mode::Ready);
        true
    }

    /// Drop the pending crop and leave the image untouched.
    pub fn cancel(&mut self) -> bool {
        if self.mode != Mode::Cropping {
            log::trace!("cancel ignored in {:?}", self.status());
            return false;
        }
        self.transition(Mode::Ready);
        true
    }

    /// Restore the image from before the last confirmed crop.
    pub fn undo(&mut self) -> bool {
        if self.mode != Mode::Ready || !self.images.undo() {
            log::trace!("undo ignored in {:?}", self.status());
            return false;
        }
        log::debug!("restored previous image");
        true
    }

    /// The window changed size, so any measured parent bounds are stale.
    ///
    /// The crop value itself is kept.
    pub fn window_resized(&mut self) -> bool {
        if self.mode == Mode::None {
            log::trace!("window_resized ignored without an image");
            return false;
        }
        self.transition(Mode::Ready);
        true
    }

    fn transition(&mut self, next: Mode) {
        let from = self.status();
        self.mode = next;
        log::debug!("crop editor {:?} -> {:?}", from, self.status());
    }
}
