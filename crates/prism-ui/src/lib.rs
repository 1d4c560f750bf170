//! User interface building blocks for Prism
//!
//! This crate provides the presentational layer of the mobile app:
//! theming, design tokens, glass/card containers, the not-found
//! fallback screen, and the scroll-driven navbar visibility logic.
//!
//! # Design System
//!
//! The visual language is frosted glass over a night-sky palette:
//! - Primary: electric indigo (#6C5CE7)
//! - Accent: teal (#00CEC9)
//!
//! Components are headless prop structs. A [`theme::Theme`] plus a
//! [`components::GlassBackdrop`] (picked once from platform
//! capabilities) turn them into concrete style values; no rendering
//! framework is bound here.
//!
//! # Modules
//!
//! - [`theme`] - Color roles, gradients, and theme definitions
//! - [`tokens`] - Design tokens (spacing, radii, blur, opacities)
//! - [`components`] - Glass surface and card containers
//! - [`screens`] - Application screens
//! - [`navigation`] - Routes and the not-found fallback
//! - [`scroll`] - Scroll-driven navbar visibility
//!
//! # Example
//!
//! ```rust
//! use prism_ui::components::{GlassBackdrop, GlassSurface};
//! use prism_ui::scroll::{Navbar, ScrollEvent, ScrollWatcher};
//! use prism_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let styles = GlassSurface::new().computed_styles(&theme, GlassBackdrop::detect());
//! assert_eq!(styles.border_radius, 28.0);
//!
//! let mut watcher = ScrollWatcher::new();
//! let mut navbar = Navbar::new();
//! watcher.handle(&ScrollEvent::vertical(250.0), &mut navbar);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod scroll;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, Color, Gradient, GradientStop, Gradients,
    SemanticColors, Theme, ThemeError, ThemeName,
};

pub use tokens::{blur, opacity, radius, spacing};

pub use components::{
    Card, CardStyles, Children, ComponentId, GlassBackdrop, GlassStyles, GlassSurface,
    StyleOverrides,
};

pub use navigation::{Route, Router};

pub use screens::{NotFoundScreen, NotFoundStyles};

pub use scroll::{
    ContentOffset, Navbar, NavbarController, NavbarIntent, ScrollEvent, ScrollWatcher,
    SCROLL_THRESHOLD, TOP_REGION,
};
