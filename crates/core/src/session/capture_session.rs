use crate::session::frame_processor::FrameProcessor;
use crate::session::score_accumulator::ScoreAccumulator;
use crate::video::domain::frame_source::FrameSource;

/// Builds a camera on demand, so the session can release and reopen the
/// device across start/stop cycles.
pub type CameraFactory =
    Box<dyn Fn() -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> + Send>;

/// The single owner of the camera resource and capture flags.
///
/// Constructed once at process start and handed to the HTTP layer as
/// shared state; there is no global. The camera is opened lazily (on
/// start or first frame pull) and dropped on stop.
pub struct CaptureSession {
    capturing: bool,
    current_dance: Option<String>,
    camera: Option<Box<dyn FrameSource>>,
    camera_factory: CameraFactory,
    processor: FrameProcessor,
    accumulator: ScoreAccumulator,
}

impl CaptureSession {
    pub fn new(
        camera_factory: CameraFactory,
        processor: FrameProcessor,
        accumulator: ScoreAccumulator,
    ) -> Self {
        Self {
            capturing: false,
            current_dance: None,
            camera: None,
            camera_factory,
            processor,
            accumulator,
        }
    }

    /// Begins a capture run for the given dance.
    ///
    /// Idempotent: a second start is not an error, but it resets the
    /// accumulated scores. A camera-open failure is logged, not returned;
    /// the session then yields no frames until a later open succeeds.
    pub fn start(&mut self, dance_id: &str) {
        self.ensure_camera();
        self.capturing = true;
        self.current_dance = Some(dance_id.to_string());
        self.accumulator.reset();
        log::info!("capture started for dance {dance_id}");
    }

    /// Ends the capture run and releases the camera.
    ///
    /// Safe to call at any time, including before any start. Returns the
    /// final score: the integer mean of the accumulated scores, 0 when
    /// nothing was recorded.
    pub fn stop(&mut self) -> u32 {
        self.capturing = false;
        self.camera = None;
        let score = self.accumulator.finalize();
        log::info!("capture stopped, final score {score}");
        score
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn current_dance(&self) -> Option<&str> {
        self.current_dance.as_deref()
    }

    /// Pulls, processes, and scores exactly one frame.
    ///
    /// `None` when not capturing, when the camera cannot be opened, or on
    /// a frame-read failure (transient, no retry — the streaming caller
    /// just skips this iteration). A persistent stream of `None` is the
    /// degraded-camera signal; there is no in-band error object.
    pub fn next_jpeg(&mut self) -> Option<Vec<u8>> {
        if !self.capturing {
            return None;
        }

        self.ensure_camera();
        let camera = self.camera.as_mut()?;

        let mut frame = match camera.read() {
            Ok(frame) => frame,
            Err(e) => {
                log::debug!("frame read failed: {e}");
                return None;
            }
        };

        match self.processor.process(&mut frame) {
            Ok((jpeg, landmarks)) => {
                self.accumulator
                    .record(landmarks.as_ref(), self.current_dance.as_deref());
                Some(jpeg)
            }
            Err(e) => {
                log::warn!("frame encoding failed: {e}");
                None
            }
        }
    }

    fn ensure_camera(&mut self) {
        if self.camera.is_some() {
            return;
        }
        match (self.camera_factory)() {
            Ok(camera) => self.camera = Some(camera),
            Err(e) => log::warn!("camera open failed: {e}"),
        }
    }

    #[cfg(test)]
    fn recorded_scores(&self) -> usize {
        self.accumulator.len()
    }
}
