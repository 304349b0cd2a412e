//! Deterministic stand-ins for the reader and estimator seams.

use std::path::Path;

use crate::pose::domain::landmarks::{Landmark, PoseLandmarks};
use crate::pose::domain::pose_estimator::PoseEstimator;
use crate::shared::constants::LANDMARK_COUNT;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;

/// Synthesizes `total` tiny frames at a fixed fps.
pub struct StubReader {
    total: usize,
    fps: f64,
}

impl StubReader {
    pub fn new(total: usize, fps: f64) -> Self {
        Self { total, fps }
    }
}

impl VideoReader for StubReader {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        Ok(VideoMetadata {
            width: 8,
            height: 8,
            fps: self.fps,
            total_frames: self.total,
            codec: "stub".to_string(),
            source_path: Some(path.to_path_buf()),
        })
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        let total = self.total;
        Box::new((0..total).map(|i| Ok(Frame::new(vec![0u8; 8 * 8 * 3], 8, 8, i))))
    }

    fn close(&mut self) {}
}

/// Estimator whose output is a pure function of the frame index, so an
/// extract-then-compare round trip over the same frames is exact.
pub struct StubEstimator {
    detect: bool,
    x_offset: f64,
}

impl StubEstimator {
    pub fn detect_all() -> Self {
        Self {
            detect: true,
            x_offset: 0.0,
        }
    }

    pub fn detect_none() -> Self {
        Self {
            detect: false,
            x_offset: 0.0,
        }
    }

    /// Displaces every landmark along x, for known-distance comparisons.
    pub fn with_x_offset(mut self, offset: f64) -> Self {
        self.x_offset = offset;
        self
    }

    pub fn pose_for_frame(index: usize, x_offset: f64) -> PoseLandmarks {
        PoseLandmarks::new(
            (0..LANDMARK_COUNT)
                .map(|i| Landmark {
                    x: 0.1 + index as f64 * 0.001 + i as f64 * 0.002 + x_offset,
                    y: 0.2 + i as f64 * 0.003,
                    z: -0.05 + i as f64 * 0.001,
                    visibility: 0.9,
                })
                .collect(),
        )
    }
}

impl PoseEstimator for StubEstimator {
    fn estimate(
        &mut self,
        frame: &Frame,
    ) -> Result<Option<PoseLandmarks>, Box<dyn std::error::Error>> {
        if !self.detect {
            return Ok(None);
        }
        Ok(Some(Self::pose_for_frame(frame.index(), self.x_offset)))
    }
}
