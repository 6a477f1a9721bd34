//! Landmark frame sources.
//!
//! A source produces a lazy, possibly endless sequence of
//! `Option<HandFrame>` (a hand, or nothing this frame). Consumers don't need
//! to know whether frames come from an external tracker process, a recorded
//! file or the mouse simulator.
//!
//! Live sources run on their own thread and push into a one-slot channel
//! with `try_send`: if the consumer hasn't taken the previous frame yet the
//! new one is dropped at the source. Nothing queues up behind a slow frame.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::hand::{
    HandFrame, INDEX_DIP, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, Landmark, MIDDLE_MCP,
    PINKY_MCP, RING_MCP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};

/// `None` = no hand detected this frame.
pub type FrameInput = Option<HandFrame>;

// ════════════════════════════════════════════════════════════════════════════
// JSON lines
// ════════════════════════════════════════════════════════════════════════════

/// One line of tracker output. Field names follow the MediaPipe results
/// object so a tracker can dump it as is.
#[derive(Debug, Default, Deserialize)]
struct TrackerMessage {
    #[serde(default, rename = "multiHandLandmarks", alias = "hands")]
    hands: Vec<Vec<Landmark>>,
}

/// Parse one JSON line. Only the first hand counts. Anything unusable is
/// "no hand" rather than an error.
pub fn parse_line(line: &str) -> FrameInput {
    let msg: TrackerMessage = match serde_json::from_str(line) {
        Ok(m) => m,
        Err(e) => {
            warn!("Ignoring malformed landmark line: {e}");
            return None;
        }
    };
    let first = msg.hands.first()?;
    let frame = HandFrame::from_landmarks(first);
    if frame.is_none() {
        warn!("Ignoring hand with {} landmarks or out-of-range coordinates", first.len());
    }
    frame
}

/// Iterator over the frames of a JSON-lines stream. Ends at EOF or on a
/// read error; blank lines are skipped. A line that isn't UTF-8 is a
/// frame with no hand, like any other unparsable line.
pub struct LandmarkStream<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LandmarkStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new() }
    }
}

impl<R: BufRead> Iterator for LandmarkStream<R> {
    type Item = FrameInput;

    fn next(&mut self) -> Option<FrameInput> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!("Landmark stream read failed: {e}");
                    return None;
                }
            }
            let line = match std::str::from_utf8(&self.buf) {
                Ok(text) => text.trim(),
                Err(e) => {
                    warn!("Ignoring landmark line that is not UTF-8: {e}");
                    return Some(None);
                }
            };
            if !line.is_empty() {
                return Some(parse_line(line));
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FrameSource trait + spawn helper
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can push frames into a [`FrameSink`].
pub trait FrameSource: Send + 'static {
    fn run(self: Box<Self>, sink: FrameSink);
}

/// Producer half handed to a running source.
pub struct FrameSink {
    tx: SyncSender<FrameInput>,
    dropped: u64,
}

impl FrameSink {
    /// Offer a frame. Returns false once the consumer has gone away.
    pub fn offer(&mut self, frame: FrameInput) -> bool {
        match self.tx.try_send(frame) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                debug!("Consumer busy, dropped frame ({} so far)", self.dropped);
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// Consumer half: the newest frame, if one arrived since the last call.
pub struct FrameFeed {
    rx: Receiver<FrameInput>,
    closed: bool,
}

impl FrameFeed {
    /// Non-blocking. Outer `None` means nothing new this tick.
    pub fn latest(&mut self) -> Option<FrameInput> {
        match self.rx.try_recv() {
            Ok(frame) => Some(frame),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.closed {
                    info!("Landmark source finished");
                    self.closed = true;
                }
                None
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Blocking iteration, for consumers that want to wait for every frame.
impl Iterator for FrameFeed {
    type Item = FrameInput;

    fn next(&mut self) -> Option<FrameInput> {
        self.rx.recv().ok()
    }
}

/// A connected sink/feed pair with a one-frame slot.
pub fn frame_channel() -> (FrameSink, FrameFeed) {
    let (tx, rx) = mpsc::sync_channel(1);
    (FrameSink { tx, dropped: 0 }, FrameFeed { rx, closed: false })
}

/// Spawn a frame source on its own thread and return the receiving end.
pub fn spawn_frame_source<S: FrameSource>(source: S) -> FrameFeed {
    let (sink, feed) = frame_channel();
    thread::spawn(move || Box::new(source).run(sink));
    feed
}

// ════════════════════════════════════════════════════════════════════════════
// StreamSource — tracker process on stdin, or a recorded file
// ════════════════════════════════════════════════════════════════════════════

/// Pushes a [`LandmarkStream`]. With `pace` set, waits that long between
/// frames (for recordings); without it, forwards as fast as lines arrive.
pub struct StreamSource {
    reader: Box<dyn BufRead + Send>,
    pace: Option<Duration>,
}

impl StreamSource {
    pub fn new(reader: Box<dyn BufRead + Send>, pace: Option<Duration>) -> Self {
        Self { reader, pace }
    }
}

impl FrameSource for StreamSource {
    fn run(self: Box<Self>, mut sink: FrameSink) {
        let StreamSource { reader, pace } = *self;
        let mut count = 0u64;
        for frame in LandmarkStream::new(reader) {
            count += 1;
            if !sink.offer(frame) {
                return;
            }
            if let Some(pace) = pace {
                thread::sleep(pace);
            }
        }
        info!("Landmark stream ended after {count} frames ({} dropped)", sink.dropped());
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimSource — mouse-driven hand (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Hand pose the simulator builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimPose {
    /// Index up, other fingers curled: draws.
    Point,
    /// All fingers up: selects.
    Open,
}

/// Raw pointer state from the window, already normalized to the camera
/// image (unmirrored, like tracker output).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    Pointer { x: f32, y: f32, pose: SimPose },
    /// Pointer left the camera view.
    Away,
}

/// Translates [`SimInput`] from the window into synthetic hand frames.
pub struct SimSource {
    pub rx: Receiver<SimInput>,
}

impl FrameSource for SimSource {
    fn run(self: Box<Self>, mut sink: FrameSink) {
        for input in self.rx {
            let frame = match input {
                SimInput::Pointer { x, y, pose } => synthetic_hand(x, y, pose),
                SimInput::Away => None,
            };
            if !sink.offer(frame) {
                return;
            }
        }
    }
}

/// Build a plausible right hand whose index tip sits at (`x`, `y`).
/// Coordinates are clamped to the unit square, so near the bottom edge a
/// pointing pose can degrade to a selecting one. NaN input gives `None`.
pub fn synthetic_hand(x: f32, y: f32, pose: SimPose) -> Option<HandFrame> {
    let mut raw = [Landmark::default(); LANDMARK_COUNT];
    let mut set = |i: usize, dx: f32, dy: f32| {
        raw[i] = Landmark::new((x + dx).clamp(0.0, 1.0), (y + dy).clamp(0.0, 1.0));
    };

    set(WRIST, 0.06, 0.35);
    set(THUMB_CMC, 0.12, 0.30);
    set(THUMB_MCP, 0.15, 0.25);
    set(THUMB_IP, 0.17, 0.21);
    set(THUMB_TIP, 0.19, 0.18);

    set(INDEX_MCP, 0.0, 0.20);
    set(INDEX_PIP, 0.0, 0.13);
    set(INDEX_DIP, 0.0, 0.07);
    set(INDEX_TIP, 0.0, 0.0);

    for (finger, mcp) in [MIDDLE_MCP, RING_MCP, PINKY_MCP].into_iter().enumerate() {
        let dx = 0.04 * (finger as f32 + 1.0);
        set(mcp, dx, 0.20);
        set(mcp + 1, dx, 0.13);
        match pose {
            SimPose::Open => {
                set(mcp + 2, dx, 0.08);
                set(mcp + 3, dx, 0.03);
            }
            SimPose::Point => {
                set(mcp + 2, dx, 0.17);
                set(mcp + 3, dx, 0.19);
            }
        }
    }

    HandFrame::from_landmarks(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureState, classify};
    use crate::types::CanvasSize;
    use std::io::Cursor;

    fn line_with(n: usize, x: f32) -> String {
        let pts: Vec<String> = (0..n).map(|_| format!(r#"{{"x":{x},"y":0.5,"z":-0.01}}"#)).collect();
        format!(r#"{{"multiHandLandmarks":[[{}]]}}"#, pts.join(","))
    }

    #[test]
    fn parses_first_hand() {
        let frame = parse_line(&line_with(21, 0.3)).unwrap();
        assert_eq!(frame.get(0).x, 0.3);
        assert_eq!(frame.get(0).z, -0.01);
    }

    #[test]
    fn hands_alias_and_missing_z() {
        let pts = vec![r#"{"x":0.1,"y":0.2}"#; 21].join(",");
        let frame = parse_line(&format!(r#"{{"hands":[[{pts}]]}}"#)).unwrap();
        assert_eq!(frame.get(20), Landmark::new(0.1, 0.2));
    }

    #[test]
    fn unusable_lines_mean_no_hand() {
        assert!(parse_line(r#"{"multiHandLandmarks":[]}"#).is_none());
        assert!(parse_line("{}").is_none());
        assert!(parse_line("not json").is_none());
        assert!(parse_line(&line_with(20, 0.3)).is_none());
        assert!(parse_line(&line_with(21, 1.5)).is_none());
    }

    #[test]
    fn stream_skips_blank_lines_and_keeps_empty_frames() {
        let text = format!("{}\n\n{{}}\n   \ngarbage\n{}\n", line_with(21, 0.2), line_with(21, 0.4));
        let frames: Vec<FrameInput> = LandmarkStream::new(Cursor::new(text)).collect();
        assert_eq!(frames.len(), 4);
        assert!(frames[0].is_some());
        assert!(frames[1].is_none());
        assert!(frames[2].is_none());
        assert_eq!(frames[3].as_ref().unwrap().get(0).x, 0.4);
    }

    #[test]
    fn non_utf8_line_is_no_hand_and_stream_continues() {
        let mut bytes = format!("{}\n", line_with(21, 0.2)).into_bytes();
        bytes.extend_from_slice(b"\xff\xfe\n");
        bytes.extend_from_slice(format!("{}\n{}\n", line_with(21, 0.4), line_with(21, 0.6)).as_bytes());
        let frames: Vec<FrameInput> = LandmarkStream::new(Cursor::new(bytes)).collect();
        assert_eq!(frames.len(), 4);
        assert!(frames[1].is_none());
        assert_eq!(frames[2].as_ref().unwrap().get(0).x, 0.4);
        assert_eq!(frames[3].as_ref().unwrap().get(0).x, 0.6);
    }

    #[test]
    fn full_slot_drops_at_the_source() {
        let (mut sink, mut feed) = frame_channel();
        assert!(sink.offer(None));
        assert!(sink.offer(synthetic_hand(0.5, 0.3, SimPose::Open)));
        assert_eq!(sink.dropped(), 1);
        // the first frame is what's waiting
        assert_eq!(feed.latest(), Some(None));
        assert_eq!(feed.latest(), None);
        drop(sink);
        assert_eq!(feed.latest(), None);
        assert!(feed.is_closed());
    }

    #[test]
    fn sink_reports_disconnected_consumer() {
        let (mut sink, feed) = frame_channel();
        drop(feed);
        assert!(!sink.offer(None));
    }

    #[test]
    fn stream_source_delivers_through_the_feed() {
        let text = format!("{}\n{}\n", line_with(21, 0.2), line_with(21, 0.4));
        let source = StreamSource::new(Box::new(Cursor::new(text)), None);
        // blocking iteration: the producer waits on nothing, so some frames
        // may be dropped, but whatever arrives is in order and valid
        let frames: Vec<FrameInput> = spawn_frame_source(source).collect();
        assert!(!frames.is_empty());
        assert!(frames.iter().all(Option::is_some));
    }

    #[test]
    fn sim_source_translates_pointer_input() {
        let (tx, rx) = mpsc::channel();
        let mut feed = spawn_frame_source(SimSource { rx });
        tx.send(SimInput::Away).unwrap();
        let first = feed.next().unwrap();
        assert!(first.is_none());
        tx.send(SimInput::Pointer { x: 0.5, y: 0.3, pose: SimPose::Point }).unwrap();
        let second = feed.next().unwrap().unwrap();
        assert_eq!(second.get(INDEX_TIP), Landmark::new(0.5, 0.3));
        drop(tx);
        assert!(feed.next().is_none());
    }

    #[test]
    fn sim_source_hangs_up_once_the_feed_is_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(spawn_frame_source(SimSource { rx }));
        // the first input reaches a closed sink and stops the thread
        let hung_up = (0..200).any(|_| {
            let failed = tx.send(SimInput::Away).is_err();
            thread::sleep(Duration::from_millis(5));
            failed
        });
        assert!(hung_up);
    }

    #[test]
    fn synthetic_poses_classify_as_intended() {
        let size = CanvasSize::new(640, 480);
        let point = synthetic_hand(0.5, 0.3, SimPose::Point);
        let open = synthetic_hand(0.5, 0.3, SimPose::Open);
        assert_eq!(classify(point.as_ref(), size).state, GestureState::Drawing);
        assert_eq!(classify(open.as_ref(), size).state, GestureState::Selecting);
    }

    #[test]
    fn synthetic_hand_survives_the_corners() {
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (0.99, 0.01)] {
            let frame = synthetic_hand(x, y, SimPose::Point).unwrap();
            assert!(frame.landmarks().iter().all(|l| (0.0..=1.0).contains(&l.x)));
        }
        assert!(synthetic_hand(f32::NAN, 0.5, SimPose::Open).is_none());
    }
}
