// Opens a webcam for the live preview behind the toolbar.
// The hand tracker runs elsewhere; this feed is only what the user sees.

use crate::config::CameraConfig;
use crate::error::Error;
use crate::types::FrameBuffer;

use log::info;
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

pub struct CameraCapture {
    cam: Camera,
}

impl CameraCapture {
    /// Open the configured device near the requested resolution and start streaming.
    pub fn open(cfg: &CameraConfig, width: u32, height: u32) -> Result<Self, Error> {
        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            cfg.fps,
        );
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(CameraIndex::Index(cfg.index), req)
            .map_err(|e| Error::CameraInit(format!("Create camera {}: {e}", cfg.index)))?;
        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The stream may settle on a different resolution; the preview rescales.
        let actual = cam.resolution();
        info!("Camera {} streaming at {}x{}", cfg.index, actual.width(), actual.height());

        Ok(Self { cam })
    }

    /// Block until the next frame and convert it to 0x00RRGGBB pixels.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        let (w, h) = rgb_img.dimensions();
        let pixels = rgb_img
            .pixels()
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
            .collect();

        Ok(FrameBuffer { width: w as usize, height: h as usize, pixels })
    }
}
