//! Field configuration.
//!
//! Serialized as JSON so the native viewer can load tuned values from disk.
//! The defaults reproduce the stock hero animation exactly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{Rgba, Theme};

/// Tunable constants of the particle field and its native viewer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Surface area (px²) per particle. Count is `floor(w * h / area)`.
    pub area_per_particle: f32,
    /// Pointer influence radius in pixels.
    pub max_influence_radius: f32,
    /// Fraction denominator of the rest-position easing (10 = 10% per frame).
    pub relax_divisor: f32,
    /// Scroll drift per frame, per scrolled pixel, at reference density.
    pub scroll_factor: f32,
    /// Density at which the scroll drift equals `scroll_factor`.
    pub density_reference: f32,
    /// Radius range `[min, max)`.
    pub radius_range: [f32; 2],
    /// Density range `[min, max)`.
    pub density_range: [f32; 2],
    pub light_fill: Rgba,
    pub dark_fill: Rgba,
    /// Native viewer clear color in light mode.
    pub light_background: Rgba,
    /// Native viewer clear color in dark mode.
    pub dark_background: Rgba,
    pub initial_theme: Theme,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 8000.0,
            max_influence_radius: 300.0,
            relax_divisor: 10.0,
            scroll_factor: 0.05,
            density_reference: 30.0,
            radius_range: [1.0, 3.0],
            density_range: [1.0, 31.0],
            light_fill: Rgba::new(0, 0, 0, 0.1),
            dark_fill: Rgba::new(255, 255, 255, 0.15),
            light_background: Rgba::new(245, 245, 247, 1.0),
            dark_background: Rgba::new(15, 15, 20, 1.0),
            initial_theme: Theme::Dark,
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl FieldConfig {
    /// Dot fill for the given theme.
    pub fn fill_for(&self, theme: Theme) -> Rgba {
        match theme {
            Theme::Light => self.light_fill,
            Theme::Dark => self.dark_fill,
        }
    }

    /// Viewer background for the given theme.
    pub fn background_for(&self, theme: Theme) -> Rgba {
        match theme {
            Theme::Light => self.light_background,
            Theme::Dark => self.dark_background,
        }
    }

    /// Number of particles for a surface of `width` x `height` pixels.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        let count = (width * height / self.area_per_particle).floor();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    /// Reject values that would make the simulation degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("area_per_particle", self.area_per_particle)?;
        positive("max_influence_radius", self.max_influence_radius)?;
        positive("relax_divisor", self.relax_divisor)?;
        positive("density_reference", self.density_reference)?;
        range("radius_range", self.radius_range)?;
        range("density_range", self.density_range)?;
        if self.radius_range[0] <= 0.0 {
            return Err(ConfigError::Invalid("radius_range must start above zero".into()));
        }
        if !self.scroll_factor.is_finite() {
            return Err(ConfigError::Invalid("scroll_factor must be finite".into()));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate configuration from a JSON file.
    ///
    /// Missing keys take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be a positive number, got {}", name, value)))
    }
}

fn range(name: &str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must satisfy min < max, got [{}, {}]", name, min, max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_particle_count() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(800.0, 600.0), 60);
        assert_eq!(config.particle_count(400.0, 300.0), 15);
        assert_eq!(config.particle_count(50.0, 50.0), 0);
        assert_eq!(config.particle_count(0.0, 600.0), 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FieldConfig::from_json(r#"{ "max_influence_radius": 150.0 }"#).unwrap();
        assert_eq!(config.max_influence_radius, 150.0);
        assert_eq!(config.area_per_particle, 8000.0);
        assert_eq!(config.initial_theme, Theme::Dark);
    }

    #[test]
    fn test_theme_json_is_lowercase() {
        let config = FieldConfig::from_json(r#"{ "initial_theme": "light" }"#).unwrap();
        assert_eq!(config.initial_theme, Theme::Light);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = FieldConfig {
            area_per_particle: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = FieldConfig {
            density_range: [5.0, 5.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(FieldConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("dotfield-config-{}.json", std::process::id()));
        let config = FieldConfig {
            scroll_factor: 0.02,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = FieldConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
