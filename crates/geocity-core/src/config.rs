//! Tunable constants and their TOML configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::evaluator::TOLERANCE_DEG;

/// Default width of the exclusion zone around 0° and ±90°.
pub const GUARD_DEG: f64 = 10.0;
/// Default points awarded (and made possible) per answered round.
pub const SCORE_INCREMENT: u32 = 10;
/// Default lower bound of generated intersecting angles.
pub const ANGLE_MIN: i32 = -80;
/// Default number of integers in the intersecting range (`[-80, 79]`).
pub const ANGLE_SPAN: u32 = 160;
/// Default cap on rejection-sampling draws per question.
pub const MAX_ATTEMPTS: u32 = 64;

/// Environment variable overriding [`GeoConfig::score_increment`].
pub const SCORE_INCREMENT_ENV: &str = "GEOCITY_SCORE_INCREMENT";

/// Top-level geocity configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Half-width of the tolerance band used by the evaluator, in degrees.
    #[serde(default = "default_tolerance")]
    pub tolerance_deg: f64,
    /// Half-width of the degeneracy guard around 0° and ±90°.
    #[serde(default = "default_guard")]
    pub guard_deg: f64,
    /// Points per answered round.
    #[serde(default = "default_increment")]
    pub score_increment: u32,
    /// Smallest generated intersecting angle.
    #[serde(default = "default_angle_min")]
    pub angle_min: i32,
    /// Number of candidate integers starting at `angle_min`.
    #[serde(default = "default_angle_span")]
    pub angle_span: u32,
    /// Draws before rejection sampling falls back to a fixed valid angle.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_tolerance() -> f64 {
    TOLERANCE_DEG
}
fn default_guard() -> f64 {
    GUARD_DEG
}
fn default_increment() -> u32 {
    SCORE_INCREMENT
}
fn default_angle_min() -> i32 {
    ANGLE_MIN
}
fn default_angle_span() -> u32 {
    ANGLE_SPAN
}
fn default_max_attempts() -> u32 {
    MAX_ATTEMPTS
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: default_tolerance(),
            guard_deg: default_guard(),
            score_increment: default_increment(),
            angle_min: default_angle_min(),
            angle_span: default_angle_span(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl GeoConfig {
    /// Exclusive upper bound of generated intersecting angles.
    pub fn angle_max(&self) -> i32 {
        self.angle_min.saturating_add_unsigned(self.angle_span)
    }

    /// Whether `angle` falls inside the guard around 0°, 90° or −90°.
    pub fn is_degenerate(&self, angle: i32) -> bool {
        let a = f64::from(angle);
        a.abs() < self.guard_deg
            || (a - 90.0).abs() < self.guard_deg
            || (a + 90.0).abs() < self.guard_deg
    }

    /// Smallest angle in the range that clears the guard, if any.
    pub fn first_valid_angle(&self) -> Option<i32> {
        (self.angle_min..self.angle_max()).find(|&a| !self.is_degenerate(a))
    }

    /// Check every field, including that intersecting questions can be
    /// generated at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance_deg.is_finite() && self.tolerance_deg > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tolerance_deg));
        }
        if !(self.guard_deg.is_finite() && self.guard_deg >= 0.0) {
            return Err(ConfigError::InvalidGuard(self.guard_deg));
        }
        if self.score_increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if self.angle_span == 0 {
            return Err(ConfigError::EmptySpan);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.first_valid_angle().is_none() {
            return Err(ConfigError::NoValidIntersectingAngle {
                min: self.angle_min,
                max: self.angle_max(),
                guard: self.guard_deg,
            });
        }
        Ok(())
    }

    /// Apply overrides looked up through `get` (the environment in practice).
    fn apply_overrides<F>(&mut self, get: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = get(SCORE_INCREMENT_ENV) {
            self.score_increment = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {SCORE_INCREMENT_ENV}: '{raw}'"))?;
        }
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `geocity.toml` in the current directory
/// 2. `~/.config/geocity/config.toml`
///
/// Environment variable override: `GEOCITY_SCORE_INCREMENT`.
pub fn load_config() -> Result<GeoConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GeoConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("geocity.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GeoConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;

    match &config_path {
        Some(path) => tracing::debug!("loaded config from {}", path.display()),
        None => tracing::debug!("no config file found, using defaults"),
    }
    Ok(config)
}

/// Parse a TOML string into a config without validating it.
pub fn parse_config_str(content: &str) -> Result<GeoConfig> {
    toml::from_str(content).context("invalid config TOML")
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("geocity"))
}
