use crate::pose::domain::landmarks::PoseLandmarks;
use crate::pose::domain::pose_estimator::PoseEstimator;
use crate::pose::domain::skeleton_renderer;
use crate::shared::frame::Frame;
use crate::video::infrastructure::jpeg::encode_jpeg;

/// Per-frame transform: estimate pose, overlay the skeleton, JPEG-encode.
///
/// Stateless apart from the estimator it owns. An estimator failure is
/// treated like a pose-less frame: the frame passes through unannotated.
pub struct FrameProcessor {
    estimator: Box<dyn PoseEstimator>,
}

impl FrameProcessor {
    pub fn new(estimator: Box<dyn PoseEstimator>) -> Self {
        Self { estimator }
    }

    /// Processes one frame in place and returns its JPEG encoding along
    /// with the detected landmarks, if any.
    pub fn process(
        &mut self,
        frame: &mut Frame,
    ) -> Result<(Vec<u8>, Option<PoseLandmarks>), Box<dyn std::error::Error>> {
        let landmarks = match self.estimator.estimate(frame) {
            Ok(landmarks) => landmarks,
            Err(e) => {
                log::debug!("pose estimation failed on frame {}: {e}", frame.index());
                None
            }
        };

        if let Some(ref landmarks) = landmarks {
            skeleton_renderer::draw_landmarks(frame, landmarks);
        }

        let jpeg = encode_jpeg(frame)?;
        Ok((jpeg, landmarks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::domain::landmarks::Landmark;

    struct StubEstimator {
        result: Option<PoseLandmarks>,
        fail: bool,
    }

    impl PoseEstimator for StubEstimator {
        fn estimate(
            &mut self,
            _frame: &Frame,
        ) -> Result<Option<PoseLandmarks>, Box<dyn std::error::Error>> {
            if self.fail {
                return Err("model exploded".into());
            }
            Ok(self.result.clone())
        }
    }

    fn blank_frame() -> Frame {
        Frame::new(vec![0u8; 32 * 32 * 3], 32, 32, 0)
    }

    fn full_pose() -> PoseLandmarks {
        PoseLandmarks::new(vec![
            Landmark {
                x: 0.5,
                y: 0.5,
                z: 0.0,
                visibility: 1.0,
            };
            33
        ])
    }

    #[test]
    fn test_pose_found_annotates_and_returns_landmarks() {
        let mut processor = FrameProcessor::new(Box::new(StubEstimator {
            result: Some(full_pose()),
            fail: false,
        }));
        let mut frame = blank_frame();
        let (jpeg, landmarks) = processor.process(&mut frame).unwrap();
        assert!(!jpeg.is_empty());
        assert!(landmarks.is_some());
        // Overlay modified the frame in place
        assert!(frame.data().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_no_pose_passes_frame_through_unannotated() {
        let mut processor = FrameProcessor::new(Box::new(StubEstimator {
            result: None,
            fail: false,
        }));
        let mut frame = blank_frame();
        let (jpeg, landmarks) = processor.process(&mut frame).unwrap();
        assert!(!jpeg.is_empty());
        assert!(landmarks.is_none());
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_estimator_error_is_treated_as_no_pose() {
        let mut processor = FrameProcessor::new(Box::new(StubEstimator {
            result: None,
            fail: true,
        }));
        let mut frame = blank_frame();
        let (jpeg, landmarks) = processor.process(&mut frame).unwrap();
        assert!(!jpeg.is_empty());
        assert!(landmarks.is_none());
    }
}
