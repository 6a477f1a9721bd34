//! Configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::stroke::StrokeStyle;
use crate::types::{CanvasSize, WHITE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub brush: BrushConfig,
    pub camera: CameraConfig,
    pub output: OutputConfig,
}

/// Drawing canvas size; landmarks are projected onto this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

/// Stroke widths in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub draw_width: f32,
    pub erase_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Show the live camera behind the toolbar
    pub enabled: bool,
    /// Device index (0 = default webcam)
    pub index: u32,
    pub fps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `S` writes PNG snapshots
    pub save_dir: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 640, height: 480 }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self { draw_width: 5.0, erase_width: 20.0 }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { enabled: true, index: 0, fps: 30 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { save_dir: PathBuf::from(".") }
    }
}

impl AppConfig {
    /// Returns the first out-of-range field as an error.
    pub fn validate(&self) -> Result<(), Error> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::Config(format!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        for (name, w) in [("draw_width", self.brush.draw_width), ("erase_width", self.brush.erase_width)] {
            if !w.is_finite() || w <= 0.0 {
                return Err(Error::Config(format!("{name} must be a positive number, got {w}")));
            }
        }
        if self.camera.fps == 0 {
            return Err(Error::Config("camera fps must be > 0".to_string()));
        }
        Ok(())
    }

    /// Load and validate a TOML file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas.width, self.canvas.height)
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            draw_width: self.brush.draw_width,
            erase_width: self.brush.erase_width,
            background: WHITE,
        }
    }
}
