//! Design tokens for Prism
//!
//! Named constants consumed by the components: corner radii, blur
//! intensities, spacing, and the layer opacities that make up the
//! glass effect.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 12px - Medium
    pub const MD: f32 = 12.0;
    /// 16px - Large
    pub const LG: f32 = 16.0;
    /// 24px - Extra large
    pub const XL: f32 = 24.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (8px)
    pub const SM: f32 = 8.0;
    /// Card radius (16px)
    pub const CARD: f32 = 16.0;
    /// Glass surface radius (28px)
    pub const GLASS: f32 = 28.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Blur Tokens
// =============================================================================

/// Blur intensity scale (maps to the host blur primitive's intensity)
pub mod blur {
    /// Subtle blur (15)
    pub const LIGHT: f32 = 15.0;
    /// Default glass blur (25)
    pub const REGULAR: f32 = 25.0;
    /// Heavy frosting (40)
    pub const HEAVY: f32 = 40.0;
}

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Layer opacities used by the glass composition
pub mod opacity {
    /// Tint overlay alpha at the default intensity
    pub const OVERLAY: f32 = 0.55;
    /// Top-edge highlight alpha
    pub const HIGHLIGHT: f32 = 0.25;
    /// Hairline border alpha
    pub const BORDER: f32 = 0.12;
}
