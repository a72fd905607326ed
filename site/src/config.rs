//! Tunable presentation parameters.
//!
//! Defaults reproduce the page as designed. The static exporter reads
//! overrides from TOML and embeds the effective config as JSON in the
//! prerendered document; the browser entry point reads it back with
//! [`SiteConfig::from_json_str`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Element id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Largest sphere segment count whose vertex count still fits `u16` indices.
pub const MAX_SEGMENTS: u32 = 254;

/// Errors raised while reading or validating a [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Root configuration structure
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub hero_fade: FadeConfig,
    pub reveal: RevealConfig,
    pub scene: SceneConfig,
}

/// Scroll-linked fade of the hero block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Scroll progress where the fade starts
    pub start: f64,
    /// Scroll progress where the fade ends
    pub end: f64,
    /// Opacity reached at `end`
    pub end_opacity: f64,
    /// Scale reached at `end`
    pub end_scale: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 0.2,
            end_opacity: 0.0,
            end_scale: 0.8,
        }
    }
}

/// Entrance animations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay added per list index, in seconds
    pub stagger_secs: f64,
    /// Transition duration, in seconds
    pub duration_secs: f64,
    /// Fraction of a block that must be visible to trigger
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_secs: 0.1,
            duration_secs: 0.5,
            threshold: 0.1,
        }
    }
}

/// A light with a position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub intensity: f32,
    /// CSS hex colour
    pub color: String,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 5.0],
            intensity: 1.0,
            color: "#ffffff".into(),
        }
    }
}

/// The hero's 3D shape, camera and lights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Rotation about x, radians per second
    pub rotation_rate_x: f32,
    /// Rotation about y, radians per second
    pub rotation_rate_y: f32,
    pub radius: f32,
    pub scale: f32,
    /// Width and height segments of the UV sphere
    pub segments: u32,
    /// Surface colour (CSS hex)
    pub color: String,
    /// Vertex displacement amplitude, relative to the radius
    pub distort: f32,
    pub distort_speed: f32,
    pub float_speed: f32,
    pub float_intensity: f32,
    pub rotation_intensity: f32,
    pub camera_position: [f32; 3],
    /// Vertical field of view, degrees
    pub fov_degrees: f32,
    pub ambient_intensity: f32,
    pub directional: LightConfig,
    pub point: LightConfig,
    /// Orbit radians per viewport height dragged, divided by 2π
    pub rotate_speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotation_rate_x: 0.2,
            rotation_rate_y: 0.3,
            radius: 1.0,
            scale: 2.5,
            segments: 100,
            color: "#4f46e5".into(),
            distort: 0.4,
            distort_speed: 2.0,
            float_speed: 2.0,
            float_intensity: 2.0,
            rotation_intensity: 1.0,
            camera_position: [0.0, 0.0, 5.0],
            fov_degrees: 75.0,
            ambient_intensity: 0.5,
            directional: LightConfig::default(),
            point: LightConfig {
                position: [-10.0, -10.0, -5.0],
                intensity: 0.5,
                color: "#4f46e5".into(),
            },
            rotate_speed: 1.0,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize for embedding in the prerendered document.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the page cannot render sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fade = &self.hero_fade;
        if !(fade.start >= 0.0 && fade.end <= 1.0 && fade.start < fade.end) {
            return Err(ConfigError::invalid(
                "hero_fade",
                format!(
                    "range must satisfy 0 <= start < end <= 1, got {}..{}",
                    fade.start, fade.end
                ),
            ));
        }
        if !(0.0..=1.0).contains(&fade.end_opacity) {
            return Err(ConfigError::invalid(
                "hero_fade.end_opacity",
                format!("{} is outside 0..=1", fade.end_opacity),
            ));
        }
        if fade.end_scale <= 0.0 {
            return Err(ConfigError::invalid(
                "hero_fade.end_scale",
                "must be positive",
            ));
        }

        let reveal = &self.reveal;
        if reveal.stagger_secs < 0.0 {
            return Err(ConfigError::invalid(
                "reveal.stagger_secs",
                "must not be negative",
            ));
        }
        if reveal.duration_secs < 0.0 {
            return Err(ConfigError::invalid(
                "reveal.duration_secs",
                "must not be negative",
            ));
        }
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(ConfigError::invalid(
                "reveal.threshold",
                format!("{} is outside 0..=1", reveal.threshold),
            ));
        }

        let scene = &self.scene;
        if !(3..=MAX_SEGMENTS).contains(&scene.segments) {
            return Err(ConfigError::invalid(
                "scene.segments",
                format!("{} is outside 3..={MAX_SEGMENTS}", scene.segments),
            ));
        }
        if !(scene.fov_degrees > 0.0 && scene.fov_degrees < 180.0) {
            return Err(ConfigError::invalid(
                "scene.fov_degrees",
                format!("{} is outside (0, 180)", scene.fov_degrees),
            ));
        }
        if scene.radius <= 0.0 || scene.scale <= 0.0 {
            return Err(ConfigError::invalid(
                "scene.radius",
                "radius and scale must be positive",
            ));
        }
        for (field, color) in [
            ("scene.color", &scene.color),
            ("scene.directional.color", &scene.directional.color),
            ("scene.point.color", &scene.point.color),
        ] {
            if crate::scene::parse_hex_color(color).is_err() {
                return Err(ConfigError::invalid(
                    field,
                    format!("`{color}` is not a #rrggbb colour"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json_str(r#"{"scene": {"rotation_rate_y": 0.6}}"#).unwrap();
        assert_eq!(config.scene.rotation_rate_y, 0.6);
        assert_eq!(config.scene.rotation_rate_x, 0.2);
        assert_eq!(config.hero_fade, FadeConfig::default());
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let config = SiteConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(SiteConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn rejects_inverted_fade_range() {
        let err =
            SiteConfig::from_json_str(r#"{"hero_fade": {"start": 0.5, "end": 0.2}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hero_fade", .. }));
    }

    #[test]
    fn rejects_too_many_segments() {
        let mut config = SiteConfig::default();
        config.scene.segments = MAX_SEGMENTS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scene.segments"));
    }

    #[test]
    fn rejects_bad_colour() {
        let mut config = SiteConfig::default();
        config.scene.point.color = "indigo".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "scene.point.color",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SiteConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
