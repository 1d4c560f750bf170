//! Platform detection for Prism
//!
//! This crate identifies the host platform and reports the rendering
//! capabilities the UI layer cares about, so that components can pick
//! a rendering strategy once at composition time instead of branching
//! per render.

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};

/// Host platforms the application ships on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS devices
    Ios,
    /// Android devices
    Android,
    /// macOS desktop
    Macos,
    /// Windows desktop
    Windows,
    /// Linux desktop
    Linux,
    /// Web (browser) host
    Web,
}

impl Platform {
    /// Detect the platform this build targets.
    pub fn current() -> Self {
        #[cfg(target_os = "ios")]
        {
            Platform::Ios
        }
        #[cfg(target_os = "android")]
        {
            Platform::Android
        }
        #[cfg(target_os = "macos")]
        {
            Platform::Macos
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(
            target_os = "ios",
            target_os = "android",
            target_os = "macos",
            target_os = "windows"
        )))]
        {
            Platform::Linux
        }
    }

    /// Whether the host exposes a true backdrop-blur primitive.
    ///
    /// Apple platforms render system vibrancy/blur natively; everywhere
    /// else the UI falls back to a translucent tint overlay.
    pub fn supports_native_blur(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Macos)
    }

    /// Whether this is a touch-first mobile platform.
    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Web => "web",
        };
        write!(f, "{}", name)
    }
}

/// Rendering capabilities derived from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// True backdrop blur is available.
    pub native_blur: bool,
}

impl Capabilities {
    /// Capabilities of the build-target platform.
    pub fn detect() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Capabilities of a specific platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            native_blur: platform.supports_native_blur(),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_blur_by_platform() {
        assert!(Platform::Ios.supports_native_blur());
        assert!(Platform::Macos.supports_native_blur());
        assert!(!Platform::Android.supports_native_blur());
        assert!(!Platform::Windows.supports_native_blur());
        assert!(!Platform::Linux.supports_native_blur());
        assert!(!Platform::Web.supports_native_blur());
    }

    #[test]
    fn test_is_mobile() {
        assert!(Platform::Ios.is_mobile());
        assert!(Platform::Android.is_mobile());
        assert!(!Platform::Macos.is_mobile());
        assert!(!Platform::Web.is_mobile());
    }

    #[test]
    fn test_capabilities_for_platform() {
        assert!(Capabilities::for_platform(Platform::Ios).native_blur);
        assert!(!Capabilities::for_platform(Platform::Android).native_blur);
    }

    #[test]
    fn test_detect_matches_current() {
        assert_eq!(
            Capabilities::detect(),
            Capabilities::for_platform(Platform::current())
        );
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Ios.to_string(), "ios");
        assert_eq!(Platform::Android.to_string(), "android");
    }

    #[test]
    fn test_platform_serialization() {
        let json = serde_json::to_string(&Platform::Ios).unwrap();
        assert_eq!(json, "\"ios\"");
        let parsed: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Platform::Ios);
    }
}
