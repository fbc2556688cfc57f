use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationConfig, RevealMode};
use crate::director::CinematicScript;
use crate::math::AABB;
use crate::navigation::NavigationConfig;

/// Initial camera placement and its movement limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub bounds: AABB,
    pub max_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            bounds: AABB::new(
                Vec3::new(-16.6564, 1.5543, -20.506),
                Vec3::new(27.2437, 18.518449, 19.3505),
            ),
            max_height: 18.518449,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    pub presentation: CinematicScript,
    /// Ferris wheel rotation center
    pub wheel_pivot: Vec3,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            navigation: NavigationConfig::default(),
            animation: AnimationConfig::default(),
            presentation: CinematicScript::default(),
            wheel_pivot: Vec3::new(18.0, 8.3, -12.0),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse viewer config")
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize viewer config")
    }

    /// Reveal variant override; ramped reveals span the whole reveal phase
    pub fn with_reveal(mut self, instant: bool) -> Self {
        self.presentation.reveal_mode = if instant {
            RevealMode::Instant
        } else {
            RevealMode::ramped()
        };
        self
    }
}
