// src/lightbox/mod.rs
pub mod gallery;
pub mod swipe;
pub mod thumbnails;

pub use gallery::{Gallery, ImageItem, Key, OverlayTarget};
pub use swipe::{SwipeAction, SwipeTracker, SWIPE_THRESHOLD};
pub use thumbnails::index_thumbnails;
