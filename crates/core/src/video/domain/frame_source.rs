use crate::shared::frame::Frame;

/// Pulls single frames from a live source such as a webcam.
///
/// Opening happens at construction, releasing when the value is dropped;
/// the capture session holds a `FrameSource` only while capturing. A read
/// failure is transient — the caller decides whether to retry, skip, or
/// treat a persistent failure as a dead camera.
pub trait FrameSource: Send {
    /// Reads exactly one frame. Blocks until a frame is available or the
    /// source reports an error.
    fn read(&mut self) -> Result<Frame, Box<dyn std::error::Error>>;
}
