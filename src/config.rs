//! Canvas configuration.
//!
//! YAML-based configuration for the canvas size, background and the initial
//! render state. Every field is optional; missing fields take the defaults
//! of the original window (1170x525, transparent background).

use crate::align::{Align, TextAlign};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::state::{LineMode, RenderState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color the framebuffer is cleared to, as `[r, g, b, a]`.
    #[serde(default)]
    pub background: Rgba,

    /// Initial stroke weight.
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: u32,

    /// Initial line algorithm.
    #[serde(default)]
    pub line_mode: LineMode,

    /// Initial image anchor.
    #[serde(default)]
    pub image_align: Align,

    /// Initial text anchor.
    #[serde(default)]
    pub text_align: TextAlign,

    /// Initial text size.
    #[serde(default = "default_text_size")]
    pub text_size: u32,

    /// Directory sprites are loaded from.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

fn default_width() -> u32 {
    1170
}
fn default_height() -> u32 {
    525
}
fn default_stroke_weight() -> u32 {
    1
}
fn default_text_size() -> u32 {
    24
}
fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: Rgba::TRANSPARENT,
            stroke_weight: default_stroke_weight(),
            line_mode: LineMode::default(),
            image_align: Align::default(),
            text_align: TextAlign::default(),
            text_size: default_text_size(),
            asset_dir: default_asset_dir(),
        }
    }
}

impl CanvasConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file cannot be read, or a
    /// parse error as for [`CanvasConfig::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Render state seeded from this configuration.
    ///
    /// Fill and stroke stay transparent.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState {
            stroke_weight: self.stroke_weight.max(1),
            line_mode: self.line_mode,
            image_align: self.image_align,
            text_align: self.text_align,
            text_size: self.text_size,
            ..RenderState::default()
        }
    }
}
