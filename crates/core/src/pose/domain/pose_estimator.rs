use crate::pose::domain::landmarks::PoseLandmarks;
use crate::shared::frame::Frame;

/// Domain interface for single-person pose estimation.
///
/// Maps one RGB frame to zero or one skeletons. A pose-less frame is
/// `Ok(None)`, not an error. Implementations may be stateful (model
/// sessions, temporal smoothing), hence `&mut self`.
pub trait PoseEstimator: Send {
    fn estimate(&mut self, frame: &Frame) -> Result<Option<PoseLandmarks>, Box<dyn std::error::Error>>;
}
