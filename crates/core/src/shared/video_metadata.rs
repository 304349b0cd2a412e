use std::path::PathBuf;

use crate::shared::constants::SAMPLE_RATE_HZ;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}

impl VideoMetadata {
    /// Frame step for the ~10 Hz landmark sampling cadence.
    ///
    /// Rounds fps / 10 to the nearest integer and never returns 0, so a
    /// sub-5-fps source still samples every frame.
    pub fn sample_interval(&self) -> usize {
        ((self.fps / SAMPLE_RATE_HZ).round() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn meta(fps: f64) -> VideoMetadata {
        VideoMetadata {
            width: 640,
            height: 480,
            fps,
            total_frames: 100,
            codec: "h264".to_string(),
            source_path: None,
        }
    }

    #[rstest]
    #[case::thirty_fps(30.0, 3)]
    #[case::rounds_up(25.0, 3)]
    #[case::rounds_down(24.0, 2)]
    #[case::low_fps_clamps_to_one(4.0, 1)]
    #[case::zero_fps_clamps_to_one(0.0, 1)]
    fn test_sample_interval(#[case] fps: f64, #[case] expected: usize) {
        assert_eq!(meta(fps).sample_interval(), expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let m = meta(24.0);
        assert_eq!(m, m.clone());
    }
}
