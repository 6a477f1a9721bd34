//! Application loops: the interactive window and the headless replayer.
//!
//! Both are single-threaded and frame-synchronous. Each landmark frame is
//! classified, accumulated and painted before the next one is taken.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::camera::CameraCapture;
use crate::canvas::DrawingCanvas;
use crate::config::AppConfig;
use crate::draw::{Drawer, blit_mirrored_scaled};
use crate::error::Error;
use crate::fps::FpsCounter;
use crate::hand::HandFrame;
use crate::overlay::{compose, draw_hand, draw_toolbar};
use crate::session::Session;
use crate::source::{
    FrameFeed, FrameInput, LandmarkStream, SimInput, SimPose, SimSource, StreamSource,
    spawn_frame_source,
};
use crate::stroke::StrokeEvent;
use crate::types::{BLACK, FrameBuffer, WHITE};

/// Where landmark frames come from in the interactive app.
#[derive(Clone, Debug)]
pub enum SourceKind {
    /// Mouse simulator: hold the left button to draw.
    Sim,
    /// JSON lines from an external tracker piped into stdin.
    Stdin,
    /// A recorded JSON-lines file, replayed at `fps`.
    File { path: PathBuf, fps: u32 },
}

/// Totals reported after a replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub frames: usize,
    pub segments: usize,
    pub selections: usize,
}

/// Push one frame through the session and onto the canvas.
fn step(session: &mut Session, canvas: &mut DrawingCanvas, frame: Option<&HandFrame>) -> StrokeEvent {
    let outcome = session.process(frame);
    if let StrokeEvent::Segment(seg) = &outcome.event {
        canvas.apply(seg);
    }
    outcome.event
}

/// Render every frame of a JSON-lines stream onto a fresh canvas.
pub fn replay_stream<R: Read>(cfg: &AppConfig, input: R) -> (DrawingCanvas, ReplayStats) {
    let mut session = Session::new(cfg.canvas_size(), cfg.stroke_style());
    let mut canvas = DrawingCanvas::new(cfg.canvas.width, cfg.canvas.height, WHITE);
    let mut stats = ReplayStats::default();

    for frame in LandmarkStream::new(BufReader::new(input)) {
        stats.frames += 1;
        match step(&mut session, &mut canvas, frame.as_ref()) {
            StrokeEvent::Segment(_) => stats.segments += 1,
            StrokeEvent::Selection { hit: Some(_), changed: true } => stats.selections += 1,
            _ => {}
        }
    }
    (canvas, stats)
}

/// `replay` subcommand: file in, PNG out.
pub fn replay(cfg: &AppConfig, input: &Path, output: &Path) -> Result<ReplayStats, Error> {
    let file = File::open(input).map_err(|e| Error::Source(format!("{}: {e}", input.display())))?;
    let (canvas, stats) = replay_stream(cfg, file);
    info!(
        "Replayed {} frames: {} segments, {} color changes",
        stats.frames, stats.segments, stats.selections
    );
    canvas.save_png_to(output)?;
    Ok(stats)
}

fn open_feed(kind: &SourceKind) -> Result<(FrameFeed, Option<Sender<SimInput>>), Error> {
    match kind {
        SourceKind::Sim => {
            let (tx, rx) = mpsc::channel();
            info!("Simulator: hold the left mouse button over the camera view to draw");
            Ok((spawn_frame_source(SimSource { rx }), Some(tx)))
        }
        SourceKind::Stdin => {
            info!("Reading landmark frames from stdin");
            let reader = Box::new(BufReader::new(std::io::stdin()));
            Ok((spawn_frame_source(StreamSource::new(reader, None)), None))
        }
        SourceKind::File { path, fps } => {
            let file = File::open(path).map_err(|e| Error::Source(format!("{}: {e}", path.display())))?;
            info!("Replaying {} at {} fps", path.display(), fps);
            let pace = Duration::from_secs_f64(1.0 / (*fps).max(1) as f64);
            let reader = Box::new(BufReader::new(file));
            Ok((spawn_frame_source(StreamSource::new(reader, Some(pace))), None))
        }
    }
}

/// Map the window pointer to simulator input. Only the camera view (left
/// half) counts; positions are unmirrored back to tracker coordinates.
fn sim_input(drawer: &Drawer, view_w: usize, view_h: usize) -> SimInput {
    match drawer.mouse_pos() {
        Some((mx, my)) if (mx as usize) < view_w && (my as usize) < view_h => {
            let pose = if drawer.left_mouse_down() { SimPose::Point } else { SimPose::Open };
            SimInput::Pointer {
                x: (view_w as f32 - mx) / view_w as f32,
                y: my / view_h as f32,
                pose,
            }
        }
        _ => SimInput::Away,
    }
}

/// Interactive loop: camera preview + toolbar on the left, canvas on the right.
pub fn run(cfg: &AppConfig, kind: SourceKind) -> Result<(), Error> {
    let (w, h) = (cfg.canvas.width, cfg.canvas.height);

    let mut camera = if cfg.camera.enabled {
        Some(CameraCapture::open(&cfg.camera, w as u32, h as u32)?)
    } else {
        info!("Camera disabled; preview is black");
        None
    };

    let (mut feed, mut sim_tx) = open_feed(&kind)?;
    let mut drawer = Drawer::new("Air Canvas", w * 2, h)?;

    let mut session = Session::new(cfg.canvas_size(), cfg.stroke_style());
    let mut canvas = DrawingCanvas::new(w, h, WHITE);
    let mut view = FrameBuffer::filled(w, h, BLACK);
    let mut screen = FrameBuffer::filled(w * 2, h, BLACK);
    let mut fps = FpsCounter::new(Instant::now());
    let mut hand: FrameInput = None;

    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Base image: mirrored live camera, or black.
        match camera.as_mut() {
            Some(cam) => blit_mirrored_scaled(&mut view, &cam.next_frame()?),
            None => view.fill(BLACK),
        }

        // 2) Keys
        if drawer.c_pressed_once() {
            canvas.clear();
            session.break_stroke();
            info!("Canvas cleared");
        }
        if drawer.s_pressed_once() {
            if let Err(e) = canvas.save_png(&cfg.output.save_dir) {
                error!("Save failed: {e}");
            }
        }

        // 3) Simulator input goes out; at most one landmark frame comes back.
        let sim_gone = sim_tx.as_ref().is_some_and(|tx| tx.send(sim_input(&drawer, w, h)).is_err());
        if sim_gone {
            debug!("Simulator thread gone; no more pointer input");
            sim_tx = None;
        }
        if let Some(frame) = feed.latest() {
            step(&mut session, &mut canvas, frame.as_ref());
            hand = frame;
            fps.tick(Instant::now());
        }

        // 4) Overlays and present.
        draw_toolbar(&mut view, &session);
        if let Some(hand) = &hand {
            draw_hand(&mut view, hand, &session);
        }
        compose(&mut screen, &view, &canvas, &session, fps.fps());
        drawer.present(&screen)?;
    }

    Ok(())
}
