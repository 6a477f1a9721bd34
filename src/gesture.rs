//! Per-frame gesture classification.
//!
//! A frame is **Drawing** when only the index finger is up: index tip above
//! its knuckle (MCP), middle/ring/pinky tips below their middle joints
//! (PIP). Anything else with a hand in view is **Selecting**. The thumb is
//! ignored, and so is hand rotation: the test only compares y values.

use crate::hand::{
    HandFrame, INDEX_MCP, INDEX_TIP, Landmark, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP,
    RING_PIP, RING_TIP,
};
use crate::types::{CanvasSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Selecting,
    Drawing,
}

/// Output of [`classify`]. `fingertip` is `None` only for `Idle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub state: GestureState,
    pub fingertip: Option<Point>,
}

impl Classification {
    pub const IDLE: Self = Self { state: GestureState::Idle, fingertip: None };
}

/// Project a normalized landmark onto the canvas, mirrored horizontally
/// like a front-facing camera preview.
#[inline]
pub fn to_pixel(landmark: Landmark, size: CanvasSize) -> Point {
    Point::new(size.width - landmark.x * size.width, landmark.y * size.height)
}

/// Classify one frame. Pure: no state survives between calls.
pub fn classify(frame: Option<&HandFrame>, size: CanvasSize) -> Classification {
    let Some(hand) = frame else {
        return Classification::IDLE;
    };

    // y grows downwards, so "above" means a smaller y.
    let index_extended = hand.get(INDEX_TIP).y < hand.get(INDEX_MCP).y;
    let middle_folded = hand.get(MIDDLE_TIP).y > hand.get(MIDDLE_PIP).y;
    let ring_folded = hand.get(RING_TIP).y > hand.get(RING_PIP).y;
    let pinky_folded = hand.get(PINKY_TIP).y > hand.get(PINKY_PIP).y;

    let state = if index_extended && middle_folded && ring_folded && pinky_folded {
        GestureState::Drawing
    } else {
        GestureState::Selecting
    };

    Classification { state, fingertip: Some(to_pixel(hand.get(INDEX_TIP), size)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{LANDMARK_COUNT, MIDDLE_MCP, PINKY_MCP, RING_MCP, THUMB_TIP};

    const SIZE: CanvasSize = CanvasSize { width: 640.0, height: 480.0 };

    /// Knuckles at y=0.6, middle joints at y=0.5. Each tip's y is given.
    fn hand(index_tip: f32, middle_tip: f32, ring_tip: f32, pinky_tip: f32) -> HandFrame {
        let mut raw = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        for mcp in [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP] {
            raw[mcp].y = 0.6;
        }
        raw[INDEX_TIP] = Landmark::new(0.4, index_tip);
        raw[MIDDLE_TIP].y = middle_tip;
        raw[RING_TIP].y = ring_tip;
        raw[PINKY_TIP].y = pinky_tip;
        HandFrame::from_landmarks(&raw).unwrap()
    }

    #[test]
    fn no_hand_is_idle_without_fingertip() {
        let c = classify(None, SIZE);
        assert_eq!(c.state, GestureState::Idle);
        assert!(c.fingertip.is_none());
    }

    #[test]
    fn pointing_index_is_drawing() {
        let c = classify(Some(&hand(0.2, 0.55, 0.7, 0.9)), SIZE);
        assert_eq!(c.state, GestureState::Drawing);
    }

    #[test]
    fn open_hand_is_selecting() {
        let c = classify(Some(&hand(0.2, 0.3, 0.3, 0.4)), SIZE);
        assert_eq!(c.state, GestureState::Selecting);
    }

    #[test]
    fn fist_is_selecting() {
        let c = classify(Some(&hand(0.8, 0.8, 0.8, 0.8)), SIZE);
        assert_eq!(c.state, GestureState::Selecting);
    }

    #[test]
    fn any_extra_finger_breaks_drawing() {
        assert_eq!(classify(Some(&hand(0.2, 0.3, 0.7, 0.7)), SIZE).state, GestureState::Selecting);
        assert_eq!(classify(Some(&hand(0.2, 0.7, 0.3, 0.7)), SIZE).state, GestureState::Selecting);
        assert_eq!(classify(Some(&hand(0.2, 0.7, 0.7, 0.3)), SIZE).state, GestureState::Selecting);
    }

    #[test]
    fn ties_are_not_extended_or_folded() {
        // index tip level with its knuckle
        assert_eq!(classify(Some(&hand(0.6, 0.7, 0.7, 0.7)), SIZE).state, GestureState::Selecting);
        // middle tip level with its middle joint
        assert_eq!(classify(Some(&hand(0.2, 0.5, 0.7, 0.7)), SIZE).state, GestureState::Selecting);
    }

    #[test]
    fn thumb_is_ignored() {
        let mut raw = hand(0.2, 0.7, 0.7, 0.7).landmarks().to_vec();
        raw[THUMB_TIP].y = 0.0;
        let frame = HandFrame::from_landmarks(&raw).unwrap();
        assert_eq!(classify(Some(&frame), SIZE).state, GestureState::Drawing);
    }

    #[test]
    fn fingertip_is_mirrored_index_tip() {
        let c = classify(Some(&hand(0.25, 0.7, 0.7, 0.7)), SIZE);
        let tip = c.fingertip.unwrap();
        assert_eq!(tip.x, 640.0 - 0.4 * 640.0);
        assert_eq!(tip.y, 0.25 * 480.0);
    }

    #[test]
    fn mirroring_quarter_width() {
        let p = to_pixel(Landmark::new(0.25, 0.5), SIZE);
        assert_eq!(p, Point::new(480.0, 240.0));
    }
}
