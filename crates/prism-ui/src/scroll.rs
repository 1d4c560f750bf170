//! Scroll-driven navbar visibility for Prism
//!
//! [`ScrollWatcher`] translates a stream of scroll events into
//! discrete show/hide intents for the tab navbar, suppressing noise
//! from small scroll jitters. It owns exactly one piece of state, the
//! last observed vertical offset, and forwards intents to an injected
//! [`NavbarController`] without storing them.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum offset change before an intent fires (strict greater-than)
pub const SCROLL_THRESHOLD: f32 = 5.0;

/// Offset below which hiding is suppressed so the navbar stays
/// visible near the top of the content
pub const TOP_REGION: f32 = 100.0;

// =============================================================================
// Scroll Events
// =============================================================================

/// Content offset carried by a scroll event
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentOffset {
    /// Horizontal offset in pixels
    pub x: f32,
    /// Vertical offset in pixels
    pub y: f32,
}

/// Scroll event in the host UI framework's shape
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollEvent {
    /// Offset of the scrolled content
    pub content_offset: ContentOffset,
}

impl ScrollEvent {
    /// Event at a vertical offset
    pub fn vertical(y: f32) -> Self {
        Self {
            content_offset: ContentOffset { x: 0.0, y },
        }
    }
}

// =============================================================================
// Navbar Intents
// =============================================================================

/// One-way visibility signal emitted toward the navbar controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarIntent {
    /// Reveal the navbar
    Show,
    /// Hide the navbar
    Hide,
}

/// External collaborator that owns navbar visibility
#[cfg_attr(test, mockall::automock)]
pub trait NavbarController {
    /// Reveal the navbar
    fn show(&mut self);
    /// Hide the navbar
    fn hide(&mut self);
}

/// Default navbar controller tracking visibility for consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navbar {
    visible: bool,
}

impl Default for Navbar {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Navbar {
    /// Create a visible navbar
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visibility
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl NavbarController for Navbar {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

// =============================================================================
// Scroll Watcher
// =============================================================================

/// Tracks the last scroll offset and emits navbar visibility intents.
///
/// State lives in the watcher instance; a remounted view constructs a
/// fresh watcher (or calls [`ScrollWatcher::reset`]) and starts again
/// from offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollWatcher {
    last_scroll_y: f32,
    threshold: f32,
    top_region: f32,
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollWatcher {
    /// Watcher with the default threshold (5) and top region (100)
    pub fn new() -> Self {
        Self {
            last_scroll_y: 0.0,
            threshold: SCROLL_THRESHOLD,
            top_region: TOP_REGION,
        }
    }

    /// Override the jitter threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the top region below which hiding is suppressed
    pub fn with_top_region(mut self, top_region: f32) -> Self {
        self.top_region = top_region;
        self
    }

    /// Last observed vertical offset
    pub fn last_scroll_y(&self) -> f32 {
        self.last_scroll_y
    }

    /// Forget the scroll position, as on view remount
    pub fn reset(&mut self) {
        self.last_scroll_y = 0.0;
    }

    /// Process one vertical offset and return the intent it produces,
    /// if any.
    ///
    /// The last offset is updated on every call, whether or not the
    /// threshold was crossed, so deltas are always measured against
    /// the most recent event. Scrolling down only hides the navbar
    /// past the top region; scrolling up shows it at any position.
    pub fn on_scroll(&mut self, y: f32) -> Option<NavbarIntent> {
        let delta = y - self.last_scroll_y;

        let intent = if delta.abs() > self.threshold {
            if delta > 0.0 && y > self.top_region {
                Some(NavbarIntent::Hide)
            } else if delta < 0.0 {
                Some(NavbarIntent::Show)
            } else {
                None
            }
        } else {
            None
        };

        self.last_scroll_y = y;

        if let Some(intent) = intent {
            debug!(y, delta, ?intent, "navbar intent");
        }
        intent
    }

    /// Process a scroll event and forward any intent to the controller.
    pub fn handle(&mut self, event: &ScrollEvent, navbar: &mut dyn NavbarController) {
        match self.on_scroll(event.content_offset.y) {
            Some(NavbarIntent::Show) => navbar.show(),
            Some(NavbarIntent::Hide) => navbar.hide(),
            None => {}
        }
    }
}
