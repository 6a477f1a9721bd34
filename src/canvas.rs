// The persistent drawing surface. Strokes accumulate here across frames;
// only `clear()` wipes it. Saved images come straight from this buffer.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{Rgb as ImageRgb, RgbImage};
use log::info;

use crate::draw::draw_thick_line;
use crate::error::Error;
use crate::stroke::LineSegment;
use crate::types::{FrameBuffer, Rgb};

pub struct DrawingCanvas {
    buffer: FrameBuffer,
    background: Rgb,
}

impl DrawingCanvas {
    /// A fresh canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Self { buffer: FrameBuffer::filled(width, height, background), background }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Paint one round-capped segment.
    pub fn apply(&mut self, seg: &LineSegment) {
        draw_thick_line(&mut self.buffer, seg.from.x, seg.from.y, seg.to.x, seg.to.y, seg.width, seg.color);
    }

    pub fn clear(&mut self) {
        self.buffer.fill(self.background);
    }

    /// Convert to an `image` buffer (0x00RRGGBB -> RGB8).
    pub fn to_image(&self) -> RgbImage {
        let fb = &self.buffer;
        RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
            let px = fb.pixels[y as usize * fb.width + x as usize];
            ImageRgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
        })
    }

    /// Write the canvas to `path` as PNG.
    pub fn save_png_to(&self, path: &Path) -> Result<(), Error> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)?;
        info!("Saved drawing to {}", path.display());
        Ok(())
    }

    /// Write `air-canvas-<unix millis>.png` into `dir`, creating it if needed.
    pub fn save_png(&self, dir: &Path) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(dir)?;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let path = dir.join(format!("air-canvas-{millis}.png"));
        self.save_png_to(&path)?;
        Ok(path)
    }
}
