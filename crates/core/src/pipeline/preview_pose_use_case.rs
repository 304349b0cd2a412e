use std::fs;
use std::path::Path;

use crate::pose::domain::pose_estimator::PoseEstimator;
use crate::pose::domain::skeleton_renderer;
use crate::shared::frame::Frame;
use crate::video::infrastructure::jpeg::encode_jpeg;

/// The pose-overlay watch loop, rendered headless: annotate every frame
/// from a camera or video and save numbered JPEGs to a directory.
pub struct PreviewPoseUseCase {
    estimator: Box<dyn PoseEstimator>,
}

impl PreviewPoseUseCase {
    pub fn new(estimator: Box<dyn PoseEstimator>) -> Self {
        Self { estimator }
    }

    /// Consumes `frames` until exhaustion or `limit`, writing
    /// `frame_00000.jpg`-style files into `output_dir`. Frames that fail
    /// to decode are skipped, matching the live loop's behavior. Returns
    /// the number of frames written.
    pub fn run(
        &mut self,
        frames: &mut dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>>,
        output_dir: &Path,
        limit: Option<usize>,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        fs::create_dir_all(output_dir)?;

        let mut written = 0;
        for result in frames {
            if limit.is_some_and(|n| written >= n) {
                break;
            }
            let mut frame = match result {
                Ok(frame) => frame,
                Err(e) => {
                    log::debug!("skipping unreadable frame: {e}");
                    continue;
                }
            };

            match self.estimator.estimate(&frame) {
                Ok(Some(pose)) => skeleton_renderer::draw_landmarks(&mut frame, &pose),
                Ok(None) => {}
                Err(e) => log::debug!("pose estimation failed on frame {}: {e}", frame.index()),
            }

            let path = output_dir.join(format!("frame_{:05}.jpg", frame.index()));
            fs::write(&path, encode_jpeg(&frame)?)?;
            written += 1;
        }

        log::info!("wrote {written} annotated frame(s) to {}", output_dir.display());
        Ok(written)
    }
}
