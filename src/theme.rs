//! Page theme and fill colors.
//!
//! The field never owns the theme. Hosts hand it a [`ThemeSource`] that is
//! queried on every draw call, so a theme flip shows up within one frame.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the stored preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored preference.
    ///
    /// Only `"light"` selects the light theme; anything else, including a
    /// missing value, is dark.
    pub fn from_preference(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live theme flag, read on every draw.
pub trait ThemeSource {
    fn current(&self) -> Theme;
}

impl ThemeSource for Theme {
    fn current(&self) -> Theme {
        *self
    }
}

impl ThemeSource for Cell<Theme> {
    fn current(&self) -> Theme {
        self.get()
    }
}

/// Straight-alpha RGBA color with 8-bit channels and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(255, 255, 255, 0.15)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Normalized `[r, g, b, a]` for GPU upload.
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}
