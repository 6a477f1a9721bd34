//! End-to-end frame sequences through `Session` and `DrawingCanvas`.

use air_canvas::canvas::DrawingCanvas;
use air_canvas::gesture::GestureState;
use air_canvas::hand::{
    HandFrame, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT, Landmark, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP,
    PINKY_TIP, RING_MCP, RING_TIP,
};
use air_canvas::session::Session;
use air_canvas::stroke::{LineSegment, StrokeEvent, StrokeStyle};
use air_canvas::toolbar::REGIONS;
use air_canvas::types::{CanvasSize, Point, WHITE};

// 640x512 keeps every pixel position below exactly representable after
// the normalize/denormalize round trip.
const W: f32 = 640.0;
const H: f32 = 512.0;

#[derive(Clone, Copy)]
enum Pose {
    Pointing,
    Open,
}

fn hand_at(px: f32, py: f32, pose: Pose) -> HandFrame {
    let mut raw = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    for mcp in [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP] {
        raw[mcp].y = 0.9;
    }
    let tip_y = match pose {
        Pose::Pointing => 0.95,
        Pose::Open => 0.05,
    };
    for tip in [MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        raw[tip].y = tip_y;
    }
    raw[INDEX_TIP] = Landmark::new((W - px) / W, py / H);
    HandFrame::from_landmarks(&raw).expect("valid test hand")
}

fn session() -> Session {
    Session::new(CanvasSize { width: W, height: H }, StrokeStyle::default())
}

#[test]
fn draw_draw_then_open_hand() {
    let mut s = session();

    let f1 = s.process(Some(&hand_at(100.0, 100.0, Pose::Pointing)));
    assert_eq!(f1.classification.state, GestureState::Drawing);
    assert_eq!(f1.event, StrokeEvent::Started(Point::new(100.0, 100.0)));
    assert_eq!(s.strokes().last_point(), Some(Point::new(100.0, 100.0)));

    let f2 = s.process(Some(&hand_at(120.0, 110.0, Pose::Pointing)));
    assert_eq!(
        f2.event,
        StrokeEvent::Segment(LineSegment {
            from: Point::new(100.0, 100.0),
            to: Point::new(120.0, 110.0),
            color: REGIONS[0].color,
            width: 5.0,
        })
    );
    assert_eq!(s.strokes().last_point(), Some(Point::new(120.0, 110.0)));

    let f3 = s.process(Some(&hand_at(200.0, 50.0, Pose::Open)));
    assert_eq!(f3.classification.state, GestureState::Selecting);
    assert_eq!(s.strokes().last_point(), None);
    // (200, 50) sits on the green swatch
    assert_eq!(f3.event, StrokeEvent::Selection { hit: Some(2), changed: true });
    assert_eq!(s.active_name(), "GREEN");
}

#[test]
fn strokes_land_on_the_canvas_and_clear_breaks_them() {
    let mut s = session();
    let mut canvas = DrawingCanvas::new(W as usize, H as usize, WHITE);

    paint(&mut s, &mut canvas, 300.0, 300.0, Pose::Pointing);
    paint(&mut s, &mut canvas, 340.0, 300.0, Pose::Pointing);
    assert_eq!(canvas.buffer().get(320, 300), Some(REGIONS[0].color));

    canvas.clear();
    s.break_stroke();
    assert_eq!(canvas.buffer().get(320, 300), Some(WHITE));

    let next = s.process(Some(&hand_at(360.0, 300.0, Pose::Pointing)));
    assert!(matches!(next.event, StrokeEvent::Started(_)));
}

fn paint(s: &mut Session, canvas: &mut DrawingCanvas, x: f32, y: f32, pose: Pose) {
    if let StrokeEvent::Segment(seg) = s.process(Some(&hand_at(x, y, pose))).event {
        canvas.apply(&seg);
    }
}

#[test]
fn eraser_wipes_previous_strokes() {
    let mut s = session();
    let mut canvas = DrawingCanvas::new(W as usize, H as usize, WHITE);

    paint(&mut s, &mut canvas, 300.0, 300.0, Pose::Pointing);
    paint(&mut s, &mut canvas, 400.0, 300.0, Pose::Pointing);
    assert_eq!(canvas.buffer().get(350, 300), Some(REGIONS[0].color));
    assert_eq!(canvas.buffer().get(350, 301), Some(REGIONS[0].color));

    // open hand over the eraser swatch
    paint(&mut s, &mut canvas, 330.0, 50.0, Pose::Open);
    assert!(s.active().eraser);

    paint(&mut s, &mut canvas, 300.0, 300.0, Pose::Pointing);
    paint(&mut s, &mut canvas, 400.0, 300.0, Pose::Pointing);
    assert_eq!(canvas.buffer().get(350, 300), Some(WHITE));
    assert_eq!(canvas.buffer().get(350, 301), Some(WHITE));
}

#[test]
fn lost_hand_mid_stroke_does_not_bridge_the_gap() {
    let mut s = session();
    s.process(Some(&hand_at(100.0, 400.0, Pose::Pointing)));
    let gap = s.process(None);
    assert_eq!(gap.classification.state, GestureState::Idle);
    assert_eq!(gap.event, StrokeEvent::Lifted);
    let resumed = s.process(Some(&hand_at(500.0, 100.0, Pose::Pointing)));
    assert_eq!(resumed.event, StrokeEvent::Started(Point::new(500.0, 100.0)));
}

#[test]
fn malformed_frames_fail_open_to_idle() {
    let mut too_few = vec![Landmark::new(0.5, 0.5); 20];
    assert!(HandFrame::from_landmarks(&too_few).is_none());
    too_few.push(Landmark::new(f32::NAN, 0.5));
    assert!(HandFrame::from_landmarks(&too_few).is_none());

    let mut s = session();
    s.process(Some(&hand_at(100.0, 400.0, Pose::Pointing)));
    // whatever the tracker sent, it became `None` before reaching the session
    let out = s.process(HandFrame::from_landmarks(&too_few).as_ref());
    assert_eq!(out.classification.state, GestureState::Idle);
    assert_eq!(s.strokes().last_point(), None);
}
