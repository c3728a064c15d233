//! Page chrome decisions, independent of the DOM.
//!
//! The DOM wiring in `page` only looks things up and applies what these
//! functions return, so the behavior is testable on the host.

use std::fmt;

/// Class on `<body>` that marks the light theme.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// `localStorage` key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTORS: &str =
    ".section-container, .hero-content, .hero-image, .skill-card, .project-card";

/// Fraction of a reveal target that must be visible before it activates.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Scroll offset (px) past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

pub const CONTACT_PLACEHOLDER: &str = "Thank you! This is a placeholder. In a real website, this would send an email or save to a database.";

/// Storage handle if the page may use it.
///
/// Access throws in sandboxed frames or with cookies blocked. The theme
/// toggle then still works, it just does not persist.
pub fn usable_storage<S, E: fmt::Debug>(access: Result<Option<S>, E>) -> Option<S> {
    match access {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable, theme will not persist: {:?}", e);
            None
        }
    }
}

/// Inline style for one hamburger bar. `None` leaves the property alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

/// Style of the hamburger bar at `index` for an open or closed menu.
///
/// Open turns the three bars into an "X"; closed resets every bar.
pub fn bar_style(index: usize, menu_open: bool) -> BarStyle {
    if !menu_open {
        return BarStyle {
            transform: Some("none"),
            opacity: Some("1"),
        };
    }
    match index {
        0 => BarStyle {
            transform: Some("rotate(-45deg) translate(-5px, 6px)"),
            opacity: None,
        },
        1 => BarStyle {
            transform: None,
            opacity: Some("0"),
        },
        2 => BarStyle {
            transform: Some("rotate(45deg) translate(-5px, -6px)"),
            opacity: None,
        },
        _ => BarStyle::default(),
    }
}

/// Header inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub box_shadow: &'static str,
    pub padding: &'static str,
}

/// Header style for the given vertical scroll offset.
pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        NavbarStyle {
            box_shadow: "0 5px 20px rgba(0,0,0,0.2)",
            padding: "15px 10%",
        }
    } else {
        NavbarStyle {
            box_shadow: "none",
            padding: "20px 10%",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_menu_forms_cross() {
        assert_eq!(
            bar_style(0, true).transform,
            Some("rotate(-45deg) translate(-5px, 6px)")
        );
        assert_eq!(bar_style(1, true), BarStyle { transform: None, opacity: Some("0") });
        assert_eq!(
            bar_style(2, true).transform,
            Some("rotate(45deg) translate(-5px, -6px)")
        );
        assert_eq!(bar_style(3, true), BarStyle::default());
    }

    #[test]
    fn test_closed_menu_resets_all_bars() {
        for index in 0..4 {
            let style = bar_style(index, false);
            assert_eq!(style.transform, Some("none"));
            assert_eq!(style.opacity, Some("1"));
        }
    }

    #[test]
    fn test_blocked_storage_is_skipped() {
        let blocked: Result<Option<u8>, &str> = Err("SecurityError");
        assert_eq!(usable_storage(blocked), None);
        assert_eq!(usable_storage::<u8, &str>(Ok(None)), None);
        assert_eq!(usable_storage::<u8, &str>(Ok(Some(7))), Some(7));
    }

    #[test]
    fn test_navbar_threshold() {
        assert_eq!(navbar_style(0.0).padding, "20px 10%");
        assert_eq!(navbar_style(50.0).box_shadow, "none");
        assert_eq!(navbar_style(50.5).padding, "15px 10%");
        assert_eq!(navbar_style(800.0).box_shadow, "0 5px 20px rgba(0,0,0,0.2)");
    }
}
