//! Navigation routes for Prism
//!
//! A minimal route layer: typed routes with URL paths, and a router
//! whose miss case is the not-found fallback screen.

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All navigable routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Application root
    #[default]
    Home,
    /// Fallback for unmatched paths
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::NotFound => "/not-found",
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Resolves URL paths to routes, falling back to [`Route::NotFound`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    /// Create a router
    pub fn new() -> Self {
        Self
    }

    /// Match a path to a route; anything unrecognized is `NotFound`
    pub fn match_path(&self, path: &str) -> Route {
        // Query strings don't affect matching
        let pathname = path.split('?').next().unwrap_or(path);
        let trimmed = pathname.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/not-found" => Route::NotFound,
            _ => Route::NotFound,
        }
    }
}
