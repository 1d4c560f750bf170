//! Presentational containers for Prism
//!
//! Components are serializable prop structs rendered by the host UI
//! layer. Each provides type-safe props with builder methods and a
//! theme-driven `computed_styles` function; none hold state or have
//! failure modes.
//!
//! # Available Components
//!
//! - [`GlassSurface`] - Frosted-glass container (blur + highlight + border)
//! - [`Card`] - Simple elevated surface

use crate::theme::{with_alpha, Color, Theme};
use crate::tokens::{blur, radius, spacing};
use prism_platform::Capabilities;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Opaque renderable content passed through to the host renderer
pub type Children = Vec<serde_json::Value>;

/// Style overrides that can be applied to any container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverrides {
    /// Margin around the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Background color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border width override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

fn is_default_style(style: &StyleOverrides) -> bool {
    style == &StyleOverrides::default()
}

// =============================================================================
// Glass Backdrop Strategy
// =============================================================================

/// How the translucent backdrop of a glass surface is realized.
///
/// Selected once at composition time from platform capabilities rather
/// than re-branched on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassBackdrop {
    /// The host provides a true backdrop-blur primitive
    NativeBlur,
    /// Translucent tint overlay approximating the frosted look
    TintOverlay,
}

impl GlassBackdrop {
    /// Pick the backdrop strategy for the given capabilities.
    pub fn for_capabilities(caps: Capabilities) -> Self {
        if caps.native_blur {
            GlassBackdrop::NativeBlur
        } else {
            GlassBackdrop::TintOverlay
        }
    }

    /// Pick the backdrop strategy for the build-target platform.
    pub fn detect() -> Self {
        Self::for_capabilities(Capabilities::detect())
    }
}

// =============================================================================
// Glass Surface Component
// =============================================================================

/// Frosted-glass container composing blur/overlay, highlight, and
/// border layers around child content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassSurface {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Child content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Children,
    /// Corner radius
    #[serde(default = "default_glass_radius")]
    pub radius: f32,
    /// Blur intensity
    #[serde(default = "default_glass_intensity")]
    pub intensity: f32,
    /// Additional style overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleOverrides,
}

fn default_glass_radius() -> f32 {
    radius::GLASS
}

fn default_glass_intensity() -> f32 {
    blur::REGULAR
}

impl Default for GlassSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl GlassSurface {
    /// Create a glass surface with default radius (28) and intensity (25)
    pub fn new() -> Self {
        Self {
            id: None,
            children: Vec::new(),
            radius: radius::GLASS,
            intensity: blur::REGULAR,
            style: StyleOverrides::default(),
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the corner radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the blur intensity
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set style overrides
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: serde_json::Value) -> Self {
        self.children.push(child);
        self
    }

    /// Compute the layered styles for this surface.
    ///
    /// The backdrop strategy is passed in so callers resolve it once
    /// per composition, not per render.
    pub fn computed_styles(&self, theme: &Theme, backdrop: GlassBackdrop) -> GlassStyles {
        let (blur_radius, overlay_color) = match backdrop {
            GlassBackdrop::NativeBlur => (Some(self.intensity), None),
            GlassBackdrop::TintOverlay => {
                // Deeper intensity reads as a more opaque tint.
                let alpha = (self.intensity / 100.0).clamp(0.0, 1.0);
                let tint = self
                    .style
                    .background_color
                    .clone()
                    .unwrap_or_else(|| theme.colors.overlay.clone());
                (None, Some(with_alpha(&tint, alpha)))
            }
        };

        GlassStyles {
            backdrop,
            blur_radius,
            overlay_color,
            background: theme.colors.surface.clone(),
            highlight_color: theme.colors.highlight.clone(),
            sheen: theme.gradients.glass_sheen.colors().into_iter().map(String::from).collect(),
            border_color: self
                .style
                .border_color
                .clone()
                .unwrap_or_else(|| theme.colors.border.clone()),
            border_width: self.style.border_width.unwrap_or(1.0),
            border_radius: self.style.border_radius.unwrap_or(self.radius),
            padding: self.style.padding.unwrap_or(spacing::LG),
            opacity: self.style.opacity.unwrap_or(1.0),
        }
    }
}

/// Computed glass surface styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassStyles {
    /// Backdrop strategy the styles were computed for
    pub backdrop: GlassBackdrop,
    /// Blur radius (native blur only)
    pub blur_radius: Option<f32>,
    /// Tint overlay color (overlay fallback only)
    pub overlay_color: Option<Color>,
    /// Surface fill behind the content
    pub background: Color,
    /// Top-edge highlight color
    pub highlight_color: Color,
    /// Sheen gradient colors, top to bottom
    pub sheen: Vec<Color>,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Content padding
    pub padding: f32,
    /// Overall opacity
    pub opacity: f32,
}

// =============================================================================
// Card Component
// =============================================================================

/// Simple elevated surface for grouping content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Child content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Children,
    /// Additional style overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleOverrides,
}

impl Card {
    /// Create a new card
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set style overrides
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: serde_json::Value) -> Self {
        self.children.push(child);
        self
    }

    /// Compute the card styles for the given theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        CardStyles {
            background: self
                .style
                .background_color
                .clone()
                .unwrap_or_else(|| theme.colors.surface.clone()),
            border_color: self
                .style
                .border_color
                .clone()
                .unwrap_or_else(|| theme.colors.border.clone()),
            border_width: self.style.border_width.unwrap_or(1.0),
            border_radius: self.style.border_radius.unwrap_or(radius::CARD),
            padding: self.style.padding.unwrap_or(spacing::LG),
            opacity: self.style.opacity.unwrap_or(1.0),
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Content padding
    pub padding: f32,
    /// Overall opacity
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_theme;
    use prism_platform::Platform;
    use serde_json::json;

    // ==========================================================================
    // Backdrop Strategy Tests
    // ==========================================================================

    #[test]
    fn test_backdrop_selection() {
        let ios = Capabilities::for_platform(Platform::Ios);
        let android = Capabilities::for_platform(Platform::Android);
        assert_eq!(
            GlassBackdrop::for_capabilities(ios),
            GlassBackdrop::NativeBlur
        );
        assert_eq!(
            GlassBackdrop::for_capabilities(android),
            GlassBackdrop::TintOverlay
        );
    }

    // ==========================================================================
    // Glass Surface Tests
    // ==========================================================================

    #[test]
    fn test_glass_surface_defaults() {
        let glass = GlassSurface::new();
        assert_eq!(glass.radius, 28.0);
        assert_eq!(glass.intensity, 25.0);
        assert!(glass.children.is_empty());
    }

    #[test]
    fn test_glass_surface_builder() {
        let glass = GlassSurface::new()
            .with_id("hero")
            .with_radius(16.0)
            .with_intensity(40.0)
            .with_child(json!({"type": "text", "content": "hello"}));
        assert_eq!(glass.id.as_deref(), Some("hero"));
        assert_eq!(glass.radius, 16.0);
        assert_eq!(glass.intensity, 40.0);
        assert_eq!(glass.children.len(), 1);
    }

    #[test]
    fn test_glass_styles_native_blur() {
        let theme = dark_theme();
        let styles = GlassSurface::new().computed_styles(&theme, GlassBackdrop::NativeBlur);
        assert_eq!(styles.backdrop, GlassBackdrop::NativeBlur);
        assert_eq!(styles.blur_radius, Some(25.0));
        assert_eq!(styles.overlay_color, None);
        assert_eq!(styles.border_radius, 28.0);
        assert_eq!(styles.highlight_color, theme.colors.highlight);
    }

    #[test]
    fn test_glass_styles_tint_overlay() {
        let theme = dark_theme();
        let styles = GlassSurface::new().computed_styles(&theme, GlassBackdrop::TintOverlay);
        assert_eq!(styles.backdrop, GlassBackdrop::TintOverlay);
        assert_eq!(styles.blur_radius, None);
        assert!(styles.overlay_color.is_some());
    }

    #[test]
    fn test_glass_styles_overrides_win() {
        let theme = dark_theme();
        let glass = GlassSurface::new().with_style(StyleOverrides {
            border_radius: Some(12.0),
            border_color: Some("#123456".to_string()),
            padding: Some(4.0),
            ..Default::default()
        });
        let styles = glass.computed_styles(&theme, GlassBackdrop::NativeBlur);
        assert_eq!(styles.border_radius, 12.0);
        assert_eq!(styles.border_color, "#123456");
        assert_eq!(styles.padding, 4.0);
    }

    // ==========================================================================
    // Card Tests
    // ==========================================================================

    #[test]
    fn test_card_styles_from_theme() {
        let theme = dark_theme();
        let styles = Card::new().computed_styles(&theme);
        assert_eq!(styles.background, theme.colors.surface);
        assert_eq!(styles.border_color, theme.colors.border);
        assert_eq!(styles.border_radius, radius::CARD);
        assert_eq!(styles.opacity, 1.0);
    }

    #[test]
    fn test_card_background_override() {
        let theme = dark_theme();
        let card = Card::new().with_style(StyleOverrides {
            background_color: Some("#FF00FF".to_string()),
            ..Default::default()
        });
        assert_eq!(card.computed_styles(&theme).background, "#FF00FF");
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_glass_surface_serialization() {
        let glass = GlassSurface::new().with_id("panel");
        let json = serde_json::to_string(&glass).unwrap();
        let parsed: GlassSurface = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, glass);
    }

    #[test]
    fn test_glass_surface_deserializes_defaults() {
        // Omitted radius/intensity fall back to 28 / 25
        let parsed: GlassSurface = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.radius, 28.0);
        assert_eq!(parsed.intensity, 25.0);
    }

    #[test]
    fn test_card_serialization_skips_defaults() {
        let json = serde_json::to_string(&Card::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
