//! Configuration for the joystick demo
//!
//! Loaded from a YAML file. Every field has a default, so an empty file (or
//! a missing one) yields two 100/40 joysticks in a 400x700 window.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::canvas::JoystickStyle;
use crate::error::RadiusKind;
use crate::joystick::{Joystick, DEFAULT_PIVOT_RADIUS, DEFAULT_STICK_RADIUS};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub style: JoystickStyle,
    #[serde(default = "default_joysticks")]
    pub joysticks: Vec<JoystickConfig>,
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

/// Initial radii of one joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct JoystickConfig {
    #[serde(default = "default_pivot_radius")]
    pub pivot_radius: u32,
    #[serde(default = "default_stick_radius")]
    pub stick_radius: u32,
}

/// Semantic problems in an otherwise well-formed config
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("at least one joystick must be configured")]
    NoJoysticks,
    #[error("joystick {index}: {kind} radius must be greater than zero")]
    ZeroRadius { index: usize, kind: RadiusKind },
    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

impl DemoConfig {
    /// Load configuration from file with validation
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load configuration, falling back to defaults if the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml maps an empty document to unit, not to an empty mapping
        let config: DemoConfig = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).context("Failed to parse YAML config")?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for correctness
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.joysticks.is_empty() {
            return Err(ConfigError::NoJoysticks);
        }

        for (index, joystick) in self.joysticks.iter().enumerate() {
            if joystick.pivot_radius == 0 {
                return Err(ConfigError::ZeroRadius {
                    index,
                    kind: RadiusKind::Pivot,
                });
            }
            if joystick.stick_radius == 0 {
                return Err(ConfigError::ZeroRadius {
                    index,
                    kind: RadiusKind::Stick,
                });
            }
        }

        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }

        Ok(())
    }

    /// Replace the joystick list with `count` copies of the first entry
    pub fn with_count(mut self, count: usize) -> Self {
        let template = self.joysticks.first().copied().unwrap_or_default();
        self.joysticks = vec![template; count];
        self
    }

    /// Build the configured joysticks, styled
    pub fn build_joysticks(&self) -> Result<Vec<Joystick>> {
        self.joysticks
            .iter()
            .enumerate()
            .map(|(index, cfg)| {
                Joystick::new(cfg.pivot_radius, cfg.stick_radius)
                    .map(|joystick| joystick.with_style(self.style))
                    .with_context(|| format!("Failed to create joystick {}", index))
            })
            .collect()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            style: JoystickStyle::default(),
            joysticks: default_joysticks(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            pivot_radius: default_pivot_radius(),
            stick_radius: default_stick_radius(),
        }
    }
}

fn default_joysticks() -> Vec<JoystickConfig> { vec![JoystickConfig::default(); 2] }
fn default_title() -> String { "Joystick example".to_string() }
fn default_width() -> f32 { 400.0 }
fn default_height() -> f32 { 700.0 }
fn default_pivot_radius() -> u32 { DEFAULT_PIVOT_RADIUS }
fn default_stick_radius() -> u32 { DEFAULT_STICK_RADIUS }
