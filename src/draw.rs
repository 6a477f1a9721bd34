// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the camera view and the drawing canvas side by side.
// 2) Lines, thick round-capped strokes, rectangles and dots on a FrameBuffer.
// 3) A tiny 5x7 bitmap font to render HUD text on top of the video.

use crate::error::Error;
use crate::types::{BLACK, FrameBuffer, Rgb};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the given size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Without a camera nothing else paces the loop.
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, `None` while the pointer is outside.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: when pressed, the drawing canvas goes back to plain white.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Saves the drawing canvas to a PNG.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, lines, shapes, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: Rgb) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Walk the Bresenham line from (x0,y0) to (x1,y1), calling `plot` per pixel.
fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Filled disc centered at (cx,cy). Radius is in pixels, may be fractional.
pub fn fill_circle(fb: &mut FrameBuffer, cx: f32, cy: f32, radius: f32, color: Rgb) {
    let r2 = radius * radius;
    let x_min = (cx - radius).floor() as i32;
    let x_max = (cx + radius).ceil() as i32;
    let y_min = (cy - radius).floor() as i32;
    let y_max = (cy + radius).ceil() as i32;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            // sample at the pixel center
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// A line `width` pixels wide with round caps and joins: a disc of
/// diameter `width` stamped at every step of the centre line.
pub fn draw_thick_line(fb: &mut FrameBuffer, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgb) {
    let radius = (width * 0.5).max(0.5);
    bresenham(
        x0.round() as i32,
        y0.round() as i32,
        x1.round() as i32,
        y1.round() as i32,
        |x, y| fill_circle(fb, x as f32, y as f32, radius, color),
    );
}

/// Solid axis-aligned rectangle.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// Rectangle outline `thickness` pixels wide, centred on the edges.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: Rgb) {
    let half = thickness / 2;
    let (ox, oy) = (x - half, y - half);
    let (ow, oh) = (w + thickness, h + thickness);
    fill_rect(fb, ox, oy, ow, thickness, color);                  // top
    fill_rect(fb, ox, oy + oh - thickness, ow, thickness, color); // bottom
    fill_rect(fb, ox, oy, thickness, oh, color);                  // left
    fill_rect(fb, ox + ow - thickness, oy, thickness, oh, color); // right
}

/// Copy `src` into `dst` with its top-left corner at (x,y). Clipped.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, x: usize, y: usize) {
    if x >= dst.width || y >= dst.height {
        return;
    }
    let w = src.width.min(dst.width - x);
    let h = src.height.min(dst.height - y);
    for row in 0..h {
        let s = row * src.width;
        let d = (y + row) * dst.width + x;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}

/// Fill `dst` with `src` flipped left-right and scaled (nearest neighbour)
/// to `dst`'s size. Visual: the selfie-style preview.
pub fn blit_mirrored_scaled(dst: &mut FrameBuffer, src: &FrameBuffer) {
    if src.width == 0 || src.height == 0 {
        dst.fill(BLACK);
        return;
    }
    for y in 0..dst.height {
        let sy = y * src.height / dst.height;
        for x in 0..dst.width {
            let sx = (dst.width - 1 - x) * src.width / dst.width;
            dst.pixels[y * dst.width + x] = src.pixels[sy * src.width + sx];
        }
    }
}

/* ---------- 5x7 bitmap font (digits, A-Z and a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap. Lowercase letters render as uppercase.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: the glyph in `color` with a 1-pixel `shadow` offset for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: Rgb, shadow: Rgb) {
    if let Some(rows) = glyph5x7(ch) {
        for (pass_color, offset) in [(shadow, 1), (color, 0)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + offset, y + ry as i32 + offset, pass_color);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs with a black shadow.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, color: Rgb) {
    draw_text_shadowed(fb, x, y, text, color, BLACK);
}

/// Same as [`draw_text_5x7`] with a caller-chosen shadow color.
pub fn draw_text_shadowed(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: Rgb, shadow: Rgb) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, shadow);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
