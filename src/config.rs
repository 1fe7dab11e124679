use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MarkerStyle {
    pub size: f32,
    pub alpha: f32,
    #[serde(default)]
    pub pulse: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "MarkerConfig::default_robot")]
    pub robot: MarkerStyle,
    #[serde(default = "MarkerConfig::default_goal")]
    pub goal: MarkerStyle,
    #[serde(default = "MarkerConfig::default_station")]
    pub station: MarkerStyle,
}

impl MarkerConfig {
    const fn default_robot() -> MarkerStyle {
        MarkerStyle { size: 1.0, alpha: 0.9, pulse: false }
    }

    const fn default_goal() -> MarkerStyle {
        MarkerStyle { size: 1.0, alpha: 0.8, pulse: true }
    }

    const fn default_station() -> MarkerStyle {
        MarkerStyle { size: 1.0, alpha: 0.8, pulse: true }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            robot: Self::default_robot(),
            goal: Self::default_goal(),
            station: Self::default_station(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavConfig {
    /// Model name to look up inside pose-feed batches.
    #[serde(default = "NavConfig::default_robot_model")]
    pub robot_model: String,
    /// Per-axis click tolerance for station selection, in map units.
    #[serde(default = "NavConfig::default_hit_tolerance")]
    pub hit_tolerance: f32,
    /// Vertical offset of a station label above its marker, in map units.
    #[serde(default = "NavConfig::default_label_offset")]
    pub label_offset: f32,
    #[serde(default)]
    pub markers: MarkerConfig,
}

impl NavConfig {
    fn default_robot_model() -> String {
        "mobile_base".to_string()
    }

    const fn default_hit_tolerance() -> f32 {
        0.2
    }

    const fn default_label_offset() -> f32 {
        1.5
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[nav] Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            robot_model: Self::default_robot_model(),
            hit_tolerance: Self::default_hit_tolerance(),
            label_offset: Self::default_label_offset(),
            markers: MarkerConfig::default(),
        }
    }
}
