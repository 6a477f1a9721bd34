//! # air_canvas
//!
//! Finger painting from hand landmarks. An external tracker (MediaPipe
//! Hands or anything that speaks the same JSON) reports 21 landmarks per
//! frame; this crate decides whether the hand is pointing (draw) or open
//! (pick a color from the toolbar) and paints strokes onto a canvas.
//!
//! ## Gestures
//!
//! | Pose | Effect |
//! |---|---|
//! | Index up, middle/ring/pinky curled | Draw with the index fingertip |
//! | Anything else | Stop drawing; hovering a swatch selects it |
//! | No hand | Stop drawing |
//!
//! ## Keys
//!
//! | Key | Action |
//! |---|---|
//! | `C` | Clear the canvas |
//! | `S` | Save the canvas as `air-canvas-<millis>.png` |
//! | `Esc` | Quit |

pub mod app;
pub mod camera;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod fps;
pub mod gesture;
pub mod hand;
pub mod overlay;
pub mod session;
pub mod source;
pub mod stroke;
pub mod toolbar;
pub mod types;

pub use error::Error;
