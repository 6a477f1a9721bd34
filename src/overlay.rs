// Everything drawn on top of the camera preview, plus the side-by-side
// window composite. Nothing here touches the drawing canvas buffer, so
// saved images contain strokes only.

use crate::canvas::DrawingCanvas;
use crate::draw::{blit, draw_text_5x7, draw_text_shadowed, fill_circle, fill_rect, stroke_rect};
use crate::gesture::to_pixel;
use crate::hand::{HandFrame, INDEX_TIP};
use crate::session::Session;
use crate::toolbar::REGION_SIZE;
use crate::types::{BLACK, FrameBuffer, Rgb, WHITE};

const LANDMARK_COLOR: Rgb = 0x00_00_FF_00;
const FINGERTIP_COLOR: Rgb = 0x00_FF_00_FF;
const BORDER_ACTIVE: Rgb = BLACK;
const BORDER_IDLE: Rgb = 0x00_66_66_66;

/// Toolbar swatches; the active one gets a heavier black border.
pub fn draw_toolbar(view: &mut FrameBuffer, session: &Session) {
    let size = REGION_SIZE as i32;
    for region in session.toolbar().regions() {
        let (x, y) = (region.x as i32, region.y as i32);
        fill_rect(view, x, y, size, size, region.color);
        let active = region.active_color() == session.active();
        let (border, thickness) = if active { (BORDER_ACTIVE, 4) } else { (BORDER_IDLE, 2) };
        stroke_rect(view, x, y, size, size, thickness, border);
        if region.eraser {
            draw_text_shadowed(view, x + 15, y + 27, "ERASE", BLACK, region.color);
        }
    }
}

/// Every landmark as a small green dot, the index tip as a larger magenta one.
pub fn draw_hand(view: &mut FrameBuffer, hand: &HandFrame, session: &Session) {
    let size = session.size();
    for lm in hand.landmarks() {
        let p = to_pixel(*lm, size);
        fill_circle(view, p.x, p.y, 3.0, LANDMARK_COLOR);
    }
    let tip = to_pixel(hand.get(INDEX_TIP), size);
    fill_circle(view, tip.x, tip.y, 8.0, FINGERTIP_COLOR);
}

/// Status line for the camera side, e.g. `FPS: 30 | HAND | DRAW`.
pub fn status_text(session: &Session, fps: f32) -> String {
    let hand = if session.hand_detected() { "HAND" } else { "NO HAND" };
    let mode = if session.drawing() { " | DRAW" } else { "" };
    format!("FPS: {:.0} | {}{}", fps, hand, mode)
}

/// Camera view on the left, drawing canvas on the right, HUD text on top.
pub fn compose(screen: &mut FrameBuffer, view: &FrameBuffer, canvas: &DrawingCanvas, session: &Session, fps: f32) {
    blit(screen, view, 0, 0);
    blit(screen, canvas.buffer(), view.width, 0);

    let hud_y = view.height as i32 - 14;
    draw_text_5x7(screen, 8, hud_y, &status_text(session, fps), WHITE);

    let tool = session.active_name();
    let tool_x = (view.width + canvas.buffer().width) as i32 - 8 - 6 * tool.len() as i32;
    draw_text_shadowed(screen, tool_x, 8, tool, BLACK, 0x00_C0_C0_C0);
    draw_text_shadowed(screen, view.width as i32 + 8, hud_y, "C: CLEAR  S: SAVE  ESC: QUIT", BLACK, 0x00_C0_C0_C0);
}
