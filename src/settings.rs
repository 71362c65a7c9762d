//! Court and tuning configuration
//!
//! Defaults come from `consts`. Overrides can be parsed from JSON; anything
//! left out keeps its default. Every config is validated before a `Game`
//! will run with it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Court geometry and per-tick tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_speed: f32,
    pub computer_speed: f32,
    pub computer_deadband: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_start_speed: f32,
    pub return_angle_factor: f32,
    pub serve_dy_range: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            player_speed: PLAYER_SPEED,
            computer_speed: COMPUTER_SPEED,
            computer_deadband: COMPUTER_DEADBAND,

            ball_size: BALL_SIZE,
            ball_start_speed: BALL_START_SPEED,
            return_angle_factor: RETURN_ANGLE_FACTOR,
            serve_dy_range: SERVE_DY_RANGE,
        }
    }
}

/// Reasons a configuration cannot describe a playable court
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value is infinite or NaN
    NotFinite { field: &'static str, value: f32 },
    /// A dimension that must be strictly positive is not
    NonPositive { field: &'static str, value: f32 },
    /// A speed or tolerance is negative
    Negative { field: &'static str, value: f32 },
    /// The paddle does not fit vertically inside the court
    PaddleTallerThanCourt { paddle_height: f32, court_height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field, value } => {
                write!(f, "{field} must be finite (got {value})")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            ConfigError::PaddleTallerThanCourt {
                paddle_height,
                court_height,
            } => write!(
                f,
                "paddle height {paddle_height} exceeds court height {court_height}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Center of the court
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Lowest y the player paddle may reach
    pub fn paddle_max_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Check that the geometry is playable and every value is finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("computer_speed", self.computer_speed),
            ("computer_deadband", self.computer_deadband),
            ("ball_size", self.ball_size),
            ("ball_start_speed", self.ball_start_speed),
            ("return_angle_factor", self.return_angle_factor),
            ("serve_dy_range", self.serve_dy_range),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // serve_dy_range bounds a half-open uniform draw, so it must be non-empty
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_start_speed", self.ball_start_speed),
            ("serve_dy_range", self.serve_dy_range),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("computer_speed", self.computer_speed),
            ("computer_deadband", self.computer_deadband),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.paddle_height > self.court_height {
            return Err(ConfigError::PaddleTallerThanCourt {
                paddle_height: self.paddle_height,
                court_height: self.court_height,
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse and validate, falling back to defaults on any problem
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    log::info!("Loaded court config {}x{}", config.court_width, config.court_height);
                    config
                }
                Err(e) => {
                    log::warn!("Invalid court config ({e}), using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Unreadable court config ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.paddle_max_y(), COURT_HEIGHT - PADDLE_HEIGHT);
        assert_eq!(config.center(), glam::Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "court_width": 640.0 }"#).unwrap();
        assert_eq!(config.court_width, 640.0);
        assert_eq!(config.court_height, COURT_HEIGHT);
        assert_eq!(config.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_bad_json_falls_back() {
        let config = Config::from_json_or_default("not json");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_geometry_falls_back() {
        let config = Config::from_json_or_default(r#"{ "paddle_height": 500.0 }"#);
        assert_eq!(config, Config::default());

        let err = Config {
            court_width: 0.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositive {
                field: "court_width",
                value: 0.0
            }
        );
        assert!(err.to_string().contains("court_width"));
    }

    #[test]
    fn test_overflowing_serve_range_rejected() {
        // 1e300 narrows to f32 infinity
        let config = Config::from_json(r#"{ "serve_dy_range": 1e300 }"#).unwrap();
        assert_eq!(config.serve_dy_range, f32::INFINITY);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "serve_dy_range",
                value: f32::INFINITY
            })
        );

        let config = Config::from_json_or_default(r#"{ "serve_dy_range": 1e300 }"#);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_every_field_must_be_finite() {
        let tuning = [
            Config {
                player_speed: f32::INFINITY,
                ..Default::default()
            },
            Config {
                computer_speed: f32::NAN,
                ..Default::default()
            },
            Config {
                computer_deadband: f32::NEG_INFINITY,
                ..Default::default()
            },
            Config {
                return_angle_factor: f32::INFINITY,
                ..Default::default()
            },
        ];
        for config in tuning {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NotFinite { .. })
            ));
        }
    }

    #[test]
    fn test_empty_serve_range_and_negative_speed_rejected() {
        let err = Config {
            serve_dy_range: 0.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositive {
                field: "serve_dy_range",
                value: 0.0
            }
        );

        let err = Config {
            computer_speed: -6.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Negative {
                field: "computer_speed",
                value: -6.0
            }
        );
    }
}
