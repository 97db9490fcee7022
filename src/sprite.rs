//! Sprite images.
//!
//! [`ImageSource`] is the boundary the canvas draws images through.
//! [`SpriteCache`] implements it by decoding PNG files from an asset directory
//! on first use and keeping them for the lifetime of the cache.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::output::read_png;
use crate::surface::Surface;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A named collection of images that can be drawn onto a surface.
pub trait ImageSource {
    /// Pixel size of an image, or `None` when it cannot be loaded.
    fn dimensions(&mut self, name: &str) -> Option<(u32, u32)>;

    /// Draw an image scaled into `rect` with its alpha multiplied by `alpha / 255`.
    ///
    /// Images that cannot be loaded are skipped.
    fn draw<S: Surface>(&mut self, name: &str, surface: &mut S, rect: Rect, alpha: u8);
}

/// PNG sprites loaded lazily from an asset directory.
///
/// Failed loads are remembered, so a missing file is reported once and then
/// skipped silently on every later draw.
#[derive(Debug, Default)]
pub struct SpriteCache {
    asset_dir: PathBuf,
    images: HashMap<String, Option<Framebuffer>>,
}

impl SpriteCache {
    /// Create an empty cache reading from `asset_dir`.
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            images: HashMap::new(),
        }
    }

    /// Directory sprite names are resolved against.
    #[must_use]
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Register an in-memory image under `name`, replacing any cached entry.
    pub fn insert(&mut self, name: impl Into<String>, image: Framebuffer) {
        self.images.insert(name.into(), Some(image));
    }

    /// Number of names looked up so far, including failed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing has been looked up yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Look up an image, loading it on first use.
    pub fn get(&mut self, name: &str) -> Option<&Framebuffer> {
        if !self.images.contains_key(name) {
            let path = self.asset_dir.join(name);
            let loaded = match read_png(&path) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("image '{name}' could not load from {}: {e}", path.display());
                    None
                }
            };
            self.images.insert(name.to_string(), loaded);
        }
        self.images.get(name).and_then(Option::as_ref)
    }
}

impl ImageSource for SpriteCache {
    fn dimensions(&mut self, name: &str) -> Option<(u32, u32)> {
        self.get(name).map(|img| (img.width(), img.height()))
    }

    fn draw<S: Surface>(&mut self, name: &str, surface: &mut S, rect: Rect, alpha: u8) {
        if let Some(image) = self.get(name) {
            blit_scaled(image, surface, rect, alpha);
        }
    }
}

/// Nearest-neighbour scale `image` into `rect`, modulating its alpha.
pub fn blit_scaled<S: Surface>(image: &Framebuffer, surface: &mut S, rect: Rect, alpha: u8) {
    if rect.is_empty() || alpha == 0 {
        return;
    }
    let (sw, sh) = (u64::from(image.width()), u64::from(image.height()));
    let (dw, dh) = (rect.w as u64, rect.h as u64);

    for dy in 0..dh {
        let sy = (dy * sh / dh) as u32;
        for dx in 0..dw {
            let sx = (dx * sw / dw) as u32;
            let Some(px) = image.get_pixel(sx, sy) else {
                continue;
            };
            let a = (u16::from(px.a) * u16::from(alpha) + 127) / 255;
            let color = Rgba::new(px.r, px.g, px.b, a as u8);
            surface.put_pixel(rect.x + dx as i32, rect.y + dy as i32, color);
        }
    }
}
