// src/lightbox/gallery.rs

/// One gallery entry, built from the page's thumbnail markup at
/// initialization and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub source: String,
    pub alt_text: String,
}

/// Keyboard input relevant to the lightbox. Anything else maps to `Other`
/// and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Where inside the open overlay a pointer activation landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Background,
    CloseControl,
    PreviousControl,
    NextControl,
    Content,
}

/// The lightbox controller: one enlarged image at a time out of a fixed
/// ordered set, toggling between closed and open for the page's lifetime.
///
/// `current_index` stays in `[0, len)` whenever the set is non-empty; every
/// navigation step wraps modulo the image count, and all navigation is a
/// no-op on an empty set.
#[derive(Debug)]
pub struct Gallery {
    images: Vec<ImageItem>,
    current_index: usize,
    is_open: bool,
}

impl Gallery {
    pub fn new(images: Vec<ImageItem>) -> Self {
        Self {
            images,
            current_index: 0,
            is_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The image on display, present only while open.
    pub fn current(&self) -> Option<&ImageItem> {
        if self.is_open {
            self.images.get(self.current_index)
        } else {
            None
        }
    }

    /// Page scroll is suppressed exactly while the overlay is open.
    pub fn scroll_suppressed(&self) -> bool {
        self.is_open
    }

    /// Activating the thumbnail at `index` opens the overlay on that image.
    /// Out-of-range indexes are ignored; thumbnails are the only entry
    /// point, so the guard is unreachable in practice.
    pub fn open(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.current_index = index;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn next(&mut self) {
        if !self.is_open || self.images.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    pub fn previous(&mut self) {
        if !self.is_open || self.images.is_empty() {
            return;
        }
        self.current_index = (self.current_index + self.images.len() - 1) % self.images.len();
    }

    /// Keyboard bindings are live only while the overlay is open.
    pub fn handle_key(&mut self, key: Key) {
        if !self.is_open {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }

    /// Pointer activations inside the open overlay. The control arms are
    /// matched before the background arm, so a click on a navigation
    /// control can never also count as a background click.
    pub fn handle_overlay_click(&mut self, target: OverlayTarget) {
        if !self.is_open {
            return;
        }
        match target {
            OverlayTarget::NextControl => self.next(),
            OverlayTarget::PreviousControl => self.previous(),
            OverlayTarget::CloseControl | OverlayTarget::Background => self.close(),
            OverlayTarget::Content => {}
        }
    }
}
