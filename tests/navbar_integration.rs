//! End-to-end scenario: a feed screen composed of glass surfaces whose
//! navbar reacts to the user's scrolling.

use prism_platform::{Capabilities, Platform};
use prism_ui::components::{GlassBackdrop, GlassSurface};
use prism_ui::navigation::{Route, Router};
use prism_ui::screens::NotFoundScreen;
use prism_ui::scroll::{Navbar, NavbarController, ScrollEvent, ScrollWatcher};
use prism_ui::theme::{get_theme, ThemeName};

/// Drive a scroll session and check the navbar ends up where a user
/// would expect it.
#[test]
fn navbar_follows_scroll_direction() {
    let mut watcher = ScrollWatcher::new();
    let mut navbar = Navbar::new();

    // Reading down the feed: small settle jitters, then real scrolling.
    let downward = [0.0, 3.0, 40.0, 90.0, 160.0, 400.0];
    for y in downward {
        watcher.handle(&ScrollEvent::vertical(y), &mut navbar);
    }
    assert!(!navbar.is_visible(), "navbar should hide while reading down");

    // Flick back up: navbar returns immediately, even before the top.
    watcher.handle(&ScrollEvent::vertical(250.0), &mut navbar);
    assert!(navbar.is_visible(), "navbar should show on upward scroll");

    // Position tracking survived the whole session.
    assert_eq!(watcher.last_scroll_y(), 250.0);
}

#[test]
fn navbar_stays_visible_near_top() {
    let mut watcher = ScrollWatcher::new();
    let mut navbar = Navbar::new();

    // Scrolling around within the top region never hides the navbar.
    for y in [0.0, 30.0, 80.0, 100.0, 60.0, 95.0] {
        watcher.handle(&ScrollEvent::vertical(y), &mut navbar);
    }
    assert!(navbar.is_visible());
}

#[test]
fn remounted_screen_starts_from_origin() {
    let mut watcher = ScrollWatcher::new();
    let mut navbar = Navbar::new();

    watcher.handle(&ScrollEvent::vertical(500.0), &mut navbar);
    assert!(!navbar.is_visible());

    // Navigating away and back remounts the screen.
    watcher.reset();
    navbar.show();

    // First event after remount is measured against 0 again, so a
    // position inside the top region cannot hide the bar.
    watcher.handle(&ScrollEvent::vertical(80.0), &mut navbar);
    assert!(navbar.is_visible());
}

#[test]
fn glass_feed_renders_on_every_platform() {
    let theme = get_theme(ThemeName::Dark);
    let surface = GlassSurface::new().with_id("feed-header");

    for platform in [Platform::Ios, Platform::Android, Platform::Web] {
        let backdrop = GlassBackdrop::for_capabilities(Capabilities::for_platform(platform));
        let styles = surface.computed_styles(&theme, backdrop);

        // Exactly one backdrop layer is active.
        assert_ne!(styles.blur_radius.is_some(), styles.overlay_color.is_some());
        assert_eq!(styles.border_radius, 28.0);
    }
}

#[test]
fn bad_deep_link_lands_on_not_found() {
    let router = Router::new();
    let route = router.match_path("/profile/ghost/post/42");
    assert_eq!(route, Route::NotFound);

    // The fallback screen links straight back to the root.
    let screen = NotFoundScreen::new();
    assert_eq!(screen.link_target(), Route::Home);
    assert_eq!(screen.link_target().to_path(), "/");

    let styles = screen.computed_styles(&get_theme(ThemeName::Dark));
    assert_eq!(styles.link_color, "#6C5CE7");
}
