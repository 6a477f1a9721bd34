//! Turns classified frames into strokes or toolbar selections.
//!
//! The accumulator keeps a single piece of state: the fingertip position
//! from the previous frame, present only while consecutive frames are
//! `Drawing`. Any other frame drops it, so a stroke never bridges a gap.

use crate::gesture::{Classification, GestureState};
use crate::toolbar::{ActiveColor, Toolbar};
use crate::types::{Point, Rgb, WHITE};

/// Widths and the erase color. Caps and joins are always round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub draw_width: f32,
    pub erase_width: f32,
    pub background: Rgb,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { draw_width: 5.0, erase_width: 20.0, background: WHITE }
    }
}

impl StrokeStyle {
    fn resolve(&self, active: ActiveColor) -> (Rgb, f32) {
        if active.eraser {
            (self.background, self.erase_width)
        } else {
            (active.color, self.draw_width)
        }
    }
}

/// A round-capped line to paint onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub color: Rgb,
    pub width: f32,
}

/// What one frame did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeEvent {
    /// No hand, or the stroke was otherwise interrupted.
    Lifted,
    /// Selecting frame. `hit` is the toolbar region under the fingertip;
    /// `changed` is false when that region was already active.
    Selection { hit: Option<usize>, changed: bool },
    /// First drawing frame after a gap: position recorded, nothing drawn.
    Started(Point),
    Segment(LineSegment),
}

#[derive(Debug, Default)]
pub struct StrokeAccumulator {
    style: StrokeStyle,
    last_point: Option<Point>,
}

impl StrokeAccumulator {
    pub fn new(style: StrokeStyle) -> Self {
        Self { style, last_point: None }
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Forget the previous point. The next drawing frame starts a new stroke.
    pub fn reset(&mut self) {
        self.last_point = None;
    }

    /// Advance by one classified frame.
    ///
    /// Selection and drawing never happen in the same frame. Selection is
    /// not debounced: it fires on every frame the fingertip stays inside a
    /// region, and re-assigning the same color changes nothing.
    pub fn accumulate(
        &mut self,
        frame: &Classification,
        toolbar: &Toolbar,
        active: &mut ActiveColor,
    ) -> StrokeEvent {
        match (frame.state, frame.fingertip) {
            (GestureState::Selecting, Some(tip)) => {
                self.last_point = None;
                let hit = toolbar.hit_test(tip);
                let mut changed = false;
                if let Some(region) = hit.map(|i| toolbar.regions()[i]) {
                    let picked = region.active_color();
                    changed = picked != *active;
                    *active = picked;
                }
                StrokeEvent::Selection { hit, changed }
            }
            (GestureState::Drawing, Some(tip)) => {
                let event = match self.last_point {
                    Some(from) => {
                        let (color, width) = self.style.resolve(*active);
                        StrokeEvent::Segment(LineSegment { from, to: tip, color, width })
                    }
                    None => StrokeEvent::Started(tip),
                };
                self.last_point = Some(tip);
                event
            }
            // Idle, or a classification without a fingertip.
            _ => {
                self.last_point = None;
                StrokeEvent::Lifted
            }
        }
    }
}
