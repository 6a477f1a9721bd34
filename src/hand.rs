//! Hand landmarks as delivered by the external tracker.
//!
//! Indices follow the MediaPipe Hands layout: wrist first, then four
//! joints per finger from the knuckle outwards.

use serde::{Deserialize, Serialize};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One normalized landmark. `x`/`y` are in [0,1] of the camera image;
/// `z` is relative depth and unused by the classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    fn in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y) && self.z.is_finite()
    }
}

/// Exactly 21 landmarks for one detected hand.
///
/// Only constructible through [`HandFrame::from_landmarks`], so a value of
/// this type always has the right count and in-range coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct HandFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    /// Validate raw tracker output. Wrong count, NaN or out-of-range
    /// coordinates give `None`, which downstream reads as "no hand".
    pub fn from_landmarks(raw: &[Landmark]) -> Option<Self> {
        let landmarks: [Landmark; LANDMARK_COUNT] = raw.try_into().ok()?;
        if !landmarks.iter().all(Landmark::in_range) {
            return None;
        }
        Some(Self { landmarks })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }
}
