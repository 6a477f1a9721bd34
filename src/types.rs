// Core types shared by the classifier, the accumulator and the renderer.

/// Packed 0x00RRGGBB, the pixel format minifb displays.
pub type Rgb = u32;

pub const WHITE: Rgb = 0x00_FF_FF_FF;
pub const BLACK: Rgb = 0x00_00_00_00;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<Rgb>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of the given size filled with one color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A position in canvas pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions the landmarks are projected onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width: width as f32, height: height as f32 }
    }
}
