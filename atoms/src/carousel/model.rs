use serde::Serialize;

use crate::fleet::ImageBucket;

/// Visual role of one carousel slot, assigned by circular distance from the
/// active item. Far slots exist so the transition animation has a
/// source/destination; Hidden slots are not rendered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotPosition {
    Center,
    Left,
    Right,
    FarLeft,
    FarRight,
    Hidden,
}

impl SlotPosition {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Center | Self::Left | Self::Right)
    }

    /// Only the visible slots take part in hit-testing.
    pub fn is_interactive(self) -> bool {
        self.is_visible()
    }
}

/// How many slots the layout renders: one on each side of center, or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    Three,
    Five,
}

impl WindowSize {
    pub fn side(self) -> i64 {
        match self {
            Self::Three => 1,
            Self::Five => 2,
        }
    }
}

/// Selection state for the hero's vessel carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryCarousel {
    pub active_index: usize,
    pub len: usize,
}

/// Category tabs of the detail view. Price and Service are not image
/// buckets themselves - they borrow the charter/services media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailCategory {
    Cabin,
    Deck,
    Yacht,
    Price,
    Service,
}

impl DetailCategory {
    /// Explicit category-to-bucket mapping. Deriving the key from the tab
    /// label invited typo bugs, so every arm is spelled out.
    pub fn bucket(self) -> ImageBucket {
        match self {
            Self::Cabin => ImageBucket::Cabin,
            Self::Deck => ImageBucket::Deck,
            Self::Yacht => ImageBucket::Yacht,
            Self::Price => ImageBucket::Charter,
            Self::Service => ImageBucket::Services,
        }
    }
}

/// Selection state for the per-vessel image carousel in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCarousel {
    pub category: DetailCategory,
    pub active_index: usize,
}

/// What a click on a detail slot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailClick {
    /// The slot was already centered - open the preview overlay.
    Preview,
    /// The slot rotated to center; no overlay.
    Rotated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Tracks one horizontal drag and fires at most one rotation for it, no
/// matter how many move events cross the threshold.
#[derive(Debug, Clone, Copy)]
pub struct SwipeGesture {
    pub origin_x: f32,
    pub fired: bool,
}
