// One error type for the whole app.
// Every variant states *where* things went wrong.
// The gesture core never produces these: bad landmark input just means "no hand".
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("Config error: {0}")]
    Config(String), // Config file unreadable or out of range
    #[error("Landmark source error: {0}")]
    Source(String), // Could not open the landmark stream
    #[error("Image export error: {0}")]
    Export(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
