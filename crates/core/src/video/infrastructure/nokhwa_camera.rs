use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use crate::shared::frame::Frame;
use crate::video::domain::frame_source::FrameSource;

/// Webcam frame source backed by the nokhwa crate.
///
/// The device is opened and its stream started at construction; dropping
/// the value stops the stream and releases the device.
pub struct NokhwaCamera {
    camera: Camera,
    frame_index: usize,
}

// Safety: NokhwaCamera is only used from a single thread at a time. The
// capture backend inside `Camera` is never shared across threads.
unsafe impl Send for NokhwaCamera {}

impl NokhwaCamera {
    /// Opens the camera at the given device index and starts streaming.
    pub fn open(index: u32) -> Result<Self, Box<dyn std::error::Error>> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(index), requested)?;
        camera.open_stream()?;
        log::info!(
            "camera {} opened: {} ({}x{})",
            index,
            camera.info().human_name(),
            camera.resolution().width(),
            camera.resolution().height()
        );
        Ok(Self {
            camera,
            frame_index: 0,
        })
    }
}

impl FrameSource for NokhwaCamera {
    fn read(&mut self) -> Result<Frame, Box<dyn std::error::Error>> {
        let buffer = self.camera.frame()?;
        let decoded = buffer.decode_image::<RgbFormat>()?;
        let (width, height) = (decoded.width(), decoded.height());
        let frame = Frame::new(decoded.into_raw(), width, height, self.frame_index);
        self.frame_index += 1;
        Ok(frame)
    }
}

impl Drop for NokhwaCamera {
    fn drop(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            log::warn!("failed to stop camera stream: {e}");
        }
    }
}
