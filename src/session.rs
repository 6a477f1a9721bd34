//! One drawing session: classifier + accumulator + the state they share.
//!
//! The interactive loop and the headless replayer both push frames through
//! [`Session::process`]; neither touches the accumulator directly.

use log::{debug, info};

use crate::gesture::{Classification, GestureState, classify};
use crate::hand::HandFrame;
use crate::stroke::{StrokeAccumulator, StrokeEvent, StrokeStyle};
use crate::toolbar::{ActiveColor, Toolbar};
use crate::types::CanvasSize;

/// Result of one frame, kept for the overlay renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutcome {
    pub classification: Classification,
    pub event: StrokeEvent,
}

pub struct Session {
    size: CanvasSize,
    toolbar: Toolbar,
    active: ActiveColor,
    strokes: StrokeAccumulator,
    last: Option<FrameOutcome>,
}

impl Session {
    pub fn new(size: CanvasSize, style: StrokeStyle) -> Self {
        Self {
            size,
            toolbar: Toolbar::default(),
            active: ActiveColor::default(),
            strokes: StrokeAccumulator::new(style),
            last: None,
        }
    }

    /// Classify and accumulate one frame. `None` means no hand this frame.
    pub fn process(&mut self, frame: Option<&HandFrame>) -> FrameOutcome {
        let classification = classify(frame, self.size);
        let event = self.strokes.accumulate(&classification, &self.toolbar, &mut self.active);

        if let StrokeEvent::Selection { hit: Some(i), changed: true } = event {
            info!("Selected {}", self.toolbar.regions()[i].name);
        }
        if self.drawing() != (classification.state == GestureState::Drawing) {
            debug!("Gesture: {:?}", classification.state);
        }

        let outcome = FrameOutcome { classification, event };
        self.last = Some(outcome);
        outcome
    }

    /// Drop stroke continuity, e.g. after the canvas was wiped.
    pub fn break_stroke(&mut self) {
        self.strokes.reset();
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn active(&self) -> ActiveColor {
        self.active
    }

    pub fn strokes(&self) -> &StrokeAccumulator {
        &self.strokes
    }

    pub fn hand_detected(&self) -> bool {
        self.last.is_some_and(|o| o.classification.state != GestureState::Idle)
    }

    pub fn drawing(&self) -> bool {
        self.last.is_some_and(|o| o.classification.state == GestureState::Drawing)
    }

    /// Name of the active tool for the HUD.
    pub fn active_name(&self) -> &'static str {
        self.toolbar.name_of(self.active).unwrap_or("CUSTOM")
    }
}
