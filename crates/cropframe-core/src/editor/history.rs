//! Current image plus a single undo snapshot.

/// The image artifact pair.
///
/// Holds the current image and at most one previous image. Each committed
/// crop overwrites the snapshot (there is no stack), and undoing consumes it.
#[derive(Debug, Clone)]
pub struct ImageHistory<T> {
    current: Option<T>,
    previous: Option<T>,
}

impl<T> Default for ImageHistory<T> {
    fn default() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }
}

impl<T> ImageHistory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current image with a freshly loaded one, forgetting any snapshot.
    pub fn load(&mut self, image: T) {
        self.current = Some(image);
        self.previous = None;
    }

    /// Make `image` current and keep the old current image as the snapshot.
    pub fn commit(&mut self, image: T) {
        self.previous = self.current.replace(image);
    }

    /// Restore the snapshot. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.current = Some(previous);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let mut history: ImageHistory<&str> = ImageHistory::new();
        assert!(history.current().is_none());
        assert!(!history.can_undo());
        assert!(!history.undo());
    }

    #[test]
    fn test_commit_then_undo() {
        let mut history = ImageHistory::new();
        history.load("original");
        history.commit("cropped");
        assert_eq!(history.current(), Some(&"cropped"));
        assert!(history.can_undo());

        assert!(history.undo());
        assert_eq!(history.current(), Some(&"original"));
        assert!(!history.can_undo());
        assert!(!history.undo());
    }

    #[test]
    fn test_snapshot_is_overwritten_not_stacked() {
        let mut history = ImageHistory::new();
        history.load("a");
        history.commit("b");
        history.commit("c");
        assert!(history.undo());
        assert_eq!(history.current(), Some(&"b"));
        assert!(!history.undo());
    }

    #[test]
    fn test_load_clears_snapshot() {
        let mut history = ImageHistory::new();
        history.load("a");
        history.commit("b");
        history.load("fresh");
        assert_eq!(history.current(), Some(&"fresh"));
        assert!(!history.can_undo());
    }
}
