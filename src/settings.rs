//! Game settings
//!
//! Loaded from a JSON file; every field falls back to the built-in default
//! when missing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::input::Controls;

/// Settings load/save failure
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Field, paddle and ball parameters for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Top/bottom of the field at ±this
    pub field_half_height: f64,
    /// Goal lines at ±this
    pub x_limit: f64,
    /// Paddle centers at ±this
    pub paddle_x: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Distance per frame
    pub paddle_speed: f64,
    pub ball_radius: f64,
    /// Distance per frame
    pub ball_speed: f64,
    /// Polygon subdivisions for the ball sprite
    pub ball_sides: u32,
    /// Initial serve direction, degrees counter-clockwise from +x
    pub serve_angle_deg: f64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            field_half_height: FIELD_HALF_HEIGHT,
            x_limit: X_LIMIT,
            paddle_x: PADDLE_X,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_sides: BALL_SIDES,
            serve_angle_deg: SERVE_ANGLE_DEG,
        }
    }
}

/// Texture file paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    pub paddle: PathBuf,
    pub ball: PathBuf,
    /// Horizontal strip of the digits 0-9
    pub digits: PathBuf,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            paddle: PathBuf::from("assets/wood.bmp"),
            ball: PathBuf::from("assets/ball.bmp"),
            digits: PathBuf::from("assets/num.bmp"),
        }
    }
}

/// Score display layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudSettings {
    /// Width and height of one digit
    pub digit_size: f64,
    /// Left score centered at (-x, y), right at (x, y)
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub atlas_columns: u32,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            digit_size: DIGIT_SIZE,
            anchor_x: SCORE_ANCHOR_X,
            anchor_y: SCORE_ANCHOR_Y,
            atlas_columns: DIGIT_ATLAS_COLUMNS,
        }
    }
}

/// All settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: MatchSettings,
    pub controls: Controls,
    pub textures: TextureSettings,
    pub hud: HudSettings,
    /// Frames the headless binary simulates
    pub headless_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: MatchSettings::default(),
            controls: Controls::default(),
            textures: TextureSettings::default(),
            hud: HudSettings::default(),
            headless_frames: HEADLESS_FRAMES,
        }
    }
}

impl Settings {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from a file, or use defaults when there is none or it is unreadable
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("{e}; using default settings");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp out-of-range values, warning about each one
    pub fn validated(mut self) -> Self {
        let defaults = MatchSettings::default();
        let game = &mut self.game;

        if !(MIN_POLYGON_SIDES..=MAX_POLYGON_SIDES).contains(&game.ball_sides) {
            let sides = game.ball_sides.clamp(MIN_POLYGON_SIDES, MAX_POLYGON_SIDES);
            log::warn!("ball_sides {} out of range, using {}", game.ball_sides, sides);
            game.ball_sides = sides;
        }

        for (name, value, fallback) in [
            ("field_half_height", &mut game.field_half_height, defaults.field_half_height),
            ("x_limit", &mut game.x_limit, defaults.x_limit),
            ("paddle_width", &mut game.paddle_width, defaults.paddle_width),
            ("paddle_height", &mut game.paddle_height, defaults.paddle_height),
            ("ball_radius", &mut game.ball_radius, defaults.ball_radius),
        ] {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("{name} must be positive (got {value}), using {fallback}");
                *value = fallback;
            }
        }

        for (name, value, fallback) in [
            ("paddle_speed", &mut game.paddle_speed, defaults.paddle_speed),
            ("ball_speed", &mut game.ball_speed, defaults.ball_speed),
            ("paddle_x", &mut game.paddle_x, defaults.paddle_x),
        ] {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("{name} must be non-negative (got {value}), using {fallback}");
                *value = fallback;
            }
        }

        if !game.serve_angle_deg.is_finite() {
            log::warn!("serve_angle_deg must be finite, using {}", defaults.serve_angle_deg);
            game.serve_angle_deg = defaults.serve_angle_deg;
        }

        if game.ball_radius >= game.field_half_height {
            log::warn!(
                "ball_radius {} does not fit the field, using {}",
                game.ball_radius,
                defaults.ball_radius
            );
            game.ball_radius = defaults.ball_radius.min(game.field_half_height / 2.0);
        }

        if self.hud.atlas_columns < DIGIT_ATLAS_COLUMNS {
            log::warn!(
                "atlas_columns {} cannot hold the digits 0-9, using {DIGIT_ATLAS_COLUMNS}",
                self.hud.atlas_columns
            );
            self.hud.atlas_columns = DIGIT_ATLAS_COLUMNS;
        }

        if self.headless_frames == 0 {
            log::warn!("headless_frames must be at least 1, using {HEADLESS_FRAMES}");
            self.headless_frames = HEADLESS_FRAMES;
        }

        self
    }
}
