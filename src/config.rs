use serde::{Deserialize, Serialize};

use crate::models::{RevealMotion, ScrollOptions, Theme};

/// Site settings bundled with the build.
const SITE_JSON: &str = include_str!("../config/site.json");

/// Errors that can occur while loading the site configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub duration_secs: f64,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
        }
    }
}

impl SmoothScrollConfig {
    pub fn options(&self) -> ScrollOptions {
        ScrollOptions {
            duration: self.duration_secs,
            smooth_wheel: self.smooth_wheel,
            wheel_multiplier: self.wheel_multiplier,
            ..ScrollOptions::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub offset_px: f64,
    pub transition_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            offset_px: 24.0,
            transition_secs: 0.8,
        }
    }
}

impl RevealConfig {
    pub fn motion(&self) -> RevealMotion {
        RevealMotion {
            offset_px: self.offset_px,
            transition_secs: self.transition_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset in pixels past which the header elevates.
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub scene_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            scene_url: "https://prod.spline.design/1VHYoewWfi45VYZ5/scene.splinecode".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub smooth_scroll: SmoothScrollConfig,
    pub reveal: RevealConfig,
    pub header: HeaderConfig,
    pub hero: HeroConfig,
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            smooth_scroll: SmoothScrollConfig::default(),
            reveal: RevealConfig::default(),
            header: HeaderConfig::default(),
            hero: HeroConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The config embedded at build time.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    /// Load the bundled config, falling back to defaults when it is unusable.
    pub fn load() -> Self {
        Self::bundled().unwrap_or_else(|e| {
            log::warn!("Using default site config: {e}");
            Self::default()
        })
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            });
        }
        if self.smooth_scroll.duration_secs <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "smooth_scroll.duration_secs",
                reason: "must be positive".into(),
            });
        }
        if self.smooth_scroll.wheel_multiplier < 0.0 {
            return Err(ConfigError::Invalid {
                field: "smooth_scroll.wheel_multiplier",
                reason: "must not be negative".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: "must be within 0..=1".into(),
            });
        }
        if self.reveal.transition_secs <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "reveal.transition_secs",
                reason: "must be positive".into(),
            });
        }
        if self.header.threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "header.threshold",
                reason: "must not be negative".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = SiteConfig::bundled().unwrap();
        assert_eq!(config.smooth_scroll.duration_secs, 1.2);
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.header.threshold, 0.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = SiteConfig::from_json(r#"{"reveal": {"threshold": 0.3}}"#).unwrap();
        assert_eq!(config.reveal.threshold, 0.3);
        assert_eq!(config.reveal.offset_px, 24.0);
        assert_eq!(config.smooth_scroll, SmoothScrollConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = SiteConfig::from_json(r#"{"reveal": {"threshold": 1.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "reveal.threshold", .. }));

        let err = SiteConfig::from_json(r#"{"smooth_scroll": {"duration_secs": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "smooth_scroll.duration_secs", .. }));

        let err = SiteConfig::from_json(r#"{"smooth_scroll": {"wheel_multiplier": -1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "smooth_scroll.wheel_multiplier", .. }));

        let err = SiteConfig::from_json(r#"{"reveal": {"transition_secs": -0.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "reveal.transition_secs", .. }));

        let err = SiteConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_scroll_options_keep_quadratic_easing() {
        let options = SiteConfig::default().smooth_scroll.options();
        assert_eq!(options.duration, 1.2);
        assert_eq!((options.easing)(0.5), 0.75);
    }
}
