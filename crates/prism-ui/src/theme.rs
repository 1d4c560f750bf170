//! Theme system for Prism
//!
//! This module provides the static color configuration every visual
//! component consumes: semantic color roles, gradient presets, and the
//! light/dark theme definitions built from them.
//!
//! A [`Theme`] is constructed once at startup and handed to consumers
//! by reference; it is plain immutable data, not a module-level
//! singleton, so components stay pure and testable.
//!
//! # Usage
//!
//! ```rust
//! use prism_ui::theme::{Theme, ThemeName, get_theme};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let text = &theme.colors.text;
//! let muted = theme.color("textMuted");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string ("#0B1020") or an rgba string
/// ("rgba(255, 255, 255, 0.08)")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Build an rgba() string from RGB components and an alpha in 0.0-1.0
pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}

/// Re-emit a hex color as an rgba() string with the given alpha.
/// Non-hex input is returned unchanged.
pub fn with_alpha(color: &str, alpha: f32) -> Color {
    match parse_hex_color(color) {
        Some((r, g, b)) => rgba(r, g, b, alpha),
        None => color.to_string(),
    }
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Prism brand colors
pub mod brand {
    /// Primary brand color (electric indigo)
    pub const PRIMARY: &str = "#6C5CE7";

    /// Accent teal
    pub const ACCENT: &str = "#00CEC9";

    /// Danger red
    pub const DANGER: &str = "#FF5E57";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors for specific UI purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Main background color
    pub background: Color,
    /// Card/elevated surface color
    pub surface: Color,
    /// Surface raised above cards (sheets, popovers)
    pub surface_raised: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub text_muted: Color,
    /// Text color on inverted backgrounds
    pub text_inverted: Color,
    /// Primary action color
    pub primary: Color,
    /// Accent color
    pub accent: Color,
    /// Border color
    pub border: Color,
    /// Translucent overlay used by glass surfaces without native blur
    pub overlay: Color,
    /// Top-edge highlight on glass surfaces
    pub highlight: Color,
    /// Destructive/error color
    pub danger: Color,
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// An ordered sequence of color stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a new gradient with stops
    pub fn new(stops: Vec<(f32, &str)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(pos, color)| GradientStop {
                    position: pos,
                    color: color.to_string(),
                })
                .collect(),
        }
    }

    /// Ordered colors of the gradient, positions dropped
    pub fn colors(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.color.as_str()).collect()
    }
}

/// Gradient presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    /// Primary brand gradient (indigo to teal)
    pub primary: Gradient,
    /// Sheen laid over glass surfaces
    pub glass_sheen: Gradient,
    /// Dusk gradient for hero backdrops
    pub dusk: Gradient,
}

impl Default for Gradients {
    fn default() -> Self {
        Self {
            primary: Gradient::new(vec![
                (0.0, "#6C5CE7"), // Indigo
                (0.6, "#3E8BE7"), // Blue
                (1.0, "#00CEC9"), // Teal
            ]),
            glass_sheen: Gradient::new(vec![
                (0.0, "rgba(255, 255, 255, 0.25)"),
                (0.5, "rgba(255, 255, 255, 0.05)"),
                (1.0, "rgba(255, 255, 255, 0)"),
            ]),
            dusk: Gradient::new(vec![
                (0.0, "#0B1020"), // Night
                (0.5, "#2B2150"), // Violet
                (1.0, "#6C5CE7"), // Indigo
            ]),
        }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark theme (the app's default look)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Dark => write!(f, "Dark"),
            ThemeName::Light => write!(f, "Light"),
        }
    }
}

/// Errors produced by theme lookups and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The requested theme name is not defined
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

impl std::str::FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color scheme (light or dark)
    pub color_scheme: String,
    /// Semantic theme colors
    pub colors: SemanticColors,
    /// Gradient definitions
    pub gradients: Gradients,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }

    /// Look up a semantic color by its role name.
    ///
    /// Role names match the keys the original styling used
    /// ("background", "textMuted", "overlay", ...).
    pub fn color(&self, role: &str) -> Option<&Color> {
        let c = &self.colors;
        match role {
            "background" => Some(&c.background),
            "surface" => Some(&c.surface),
            "surfaceRaised" => Some(&c.surface_raised),
            "text" => Some(&c.text),
            "textMuted" => Some(&c.text_muted),
            "textInverted" => Some(&c.text_inverted),
            "primary" => Some(&c.primary),
            "accent" => Some(&c.accent),
            "border" => Some(&c.border),
            "overlay" => Some(&c.overlay),
            "highlight" => Some(&c.highlight),
            "danger" => Some(&c.danger),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        dark_theme()
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        color_scheme: "dark".to_string(),
        colors: SemanticColors {
            background: "#0B1020".to_string(),
            surface: "rgba(255, 255, 255, 0.06)".to_string(),
            surface_raised: "rgba(255, 255, 255, 0.10)".to_string(),
            text: "#F2F4FF".to_string(),
            text_muted: "#9AA3B8".to_string(),
            text_inverted: "#0B1020".to_string(),
            primary: "#6C5CE7".to_string(),
            accent: "#00CEC9".to_string(),
            border: "rgba(255, 255, 255, 0.12)".to_string(),
            overlay: "rgba(20, 25, 45, 0.55)".to_string(),
            highlight: "rgba(255, 255, 255, 0.25)".to_string(),
            danger: "#FF5E57".to_string(),
        },
        gradients: Gradients::default(),
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        color_scheme: "light".to_string(),
        colors: SemanticColors {
            background: "#F5F6FA".to_string(),
            surface: "rgba(255, 255, 255, 0.65)".to_string(),
            surface_raised: "#FFFFFF".to_string(),
            text: "#1B2030".to_string(),
            text_muted: "#5C6475".to_string(),
            text_inverted: "#FFFFFF".to_string(),
            primary: "#6C5CE7".to_string(),
            accent: "#00A8A3".to_string(),
            border: "rgba(27, 32, 48, 0.10)".to_string(),
            overlay: "rgba(255, 255, 255, 0.55)".to_string(),
            highlight: "rgba(255, 255, 255, 0.80)".to_string(),
            danger: "#E03E38".to_string(),
        },
        gradients: Gradients::default(),
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Dark => dark_theme(),
        ThemeName::Light => light_theme(),
    }
}
