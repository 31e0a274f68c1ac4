//! Tuning constants
//!
//! Defaults for carousel geometry, input feel and event rate limiting. Hosts
//! override them through `marquee-config`; everything that reads a default
//! reads it from here so rows stay consistent.

/// Card geometry used to size scroll steps.
pub mod layout {
    /// Width of one poster card in pixels.
    pub const CARD_WIDTH: f32 = 300.0;
    /// Horizontal gap between cards in pixels.
    pub const CARD_GAP: f32 = 8.0;
    /// Cards moved by one navigation button press.
    pub const ITEMS_PER_PAGE: usize = 6;
}

/// Drag and wheel feel.
pub mod input {
    /// Pixels of offset per pixel of mouse/pen travel.
    pub const POINTER_DRAG_SENSITIVITY: f32 = 1.5;
    /// Pixels of offset per pixel of finger travel.
    pub const TOUCH_DRAG_SENSITIVITY: f32 = 1.0;
}

/// Event rate limiting. Dropping intermediate events is always safe because
/// every recomputation starts from current layout.
pub mod timing {
    use std::time::Duration;

    /// Quiet period after the last resize before bounds are recomputed.
    pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
    /// Minimum spacing of page scroll handling (header and hero).
    pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);
    /// Quiet period after the last keystroke before a search runs.
    pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
}

/// Header and hero scroll thresholds.
pub mod page {
    /// Past this page offset the header gets its solid background.
    pub const HEADER_SOLID_AFTER: f32 = 50.0;
    /// Past this page offset scrolling down hides the header.
    pub const HEADER_HIDE_AFTER: f32 = 100.0;
    /// Sections count as active this many pixels before their top edge.
    pub const SECTION_ACTIVATION_MARGIN: f32 = 100.0;
    /// Hero controls fade out linearly over this many pixels.
    pub const HERO_FADE_DISTANCE: f32 = 300.0;
    /// Section highlighted when no other section contains the offset.
    pub const DEFAULT_SECTION: &str = "home";
}

/// Search behavior.
pub mod search {
    /// Queries shorter than this never run.
    pub const MIN_QUERY_CHARS: usize = 2;
}

/// Detail panel behavior.
pub mod detail {
    /// Number of "more like this" entries.
    pub const SIMILAR_COUNT: usize = 6;
    /// Genres shown on a card.
    pub const CARD_GENRES: usize = 3;
}
