//! Application screens for Prism

use crate::navigation::Route;
use crate::theme::{Color, Theme};
use serde::{Deserialize, Serialize};

// =============================================================================
// Not-Found Screen
// =============================================================================

/// Static fallback screen shown for unmatched routes.
///
/// Renders a title, a short message, and one link back to the
/// application root; takes no parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundScreen {
    /// Headline
    pub title: String,
    /// Explanatory copy
    pub message: String,
    /// Label on the link back home
    pub link_label: String,
}

impl Default for NotFoundScreen {
    fn default() -> Self {
        Self {
            title: "This screen doesn't exist.".to_string(),
            message: "The page you're looking for may have moved or never existed.".to_string(),
            link_label: "Go to home screen".to_string(),
        }
    }
}

impl NotFoundScreen {
    /// Create the screen with its default copy
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the screen's single link navigates
    pub fn link_target(&self) -> Route {
        Route::Home
    }

    /// Compute the screen styles for the given theme
    pub fn computed_styles(&self, theme: &Theme) -> NotFoundStyles {
        NotFoundStyles {
            background: theme.colors.background.clone(),
            title_color: theme.colors.text.clone(),
            message_color: theme.colors.text_muted.clone(),
            link_color: theme.colors.primary.clone(),
        }
    }
}

/// Computed not-found screen styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundStyles {
    /// Screen background
    pub background: Color,
    /// Headline color
    pub title_color: Color,
    /// Message color
    pub message_color: Color,
    /// Link color
    pub link_color: Color,
}
