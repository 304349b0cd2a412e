use std::path::Path;

use crate::pipeline::landmark_table::LandmarkTableWriter;
use crate::pose::domain::pose_estimator::PoseEstimator;
use crate::video::domain::video_reader::VideoReader;

/// Samples a video at ~10 Hz and dumps every detected pose to a landmark
/// table, one row per landmark.
pub struct ExtractLandmarksUseCase {
    reader: Box<dyn VideoReader>,
    estimator: Box<dyn PoseEstimator>,
}

impl ExtractLandmarksUseCase {
    pub fn new(reader: Box<dyn VideoReader>, estimator: Box<dyn PoseEstimator>) -> Self {
        Self { reader, estimator }
    }

    /// Runs the extraction. Returns the number of sampled frames that had
    /// a detectable pose (frames without one leave no rows).
    pub fn execute(
        &mut self,
        video: &Path,
        table: &Path,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let metadata = self.reader.open(video)?;
        let interval = metadata.sample_interval();
        log::info!(
            "extracting landmarks from {} at every {interval} frame(s)",
            video.display()
        );

        let mut writer = LandmarkTableWriter::create(table)?;
        let mut sampled = 0;

        let Self {
            reader, estimator, ..
        } = self;
        for result in reader.frames() {
            let frame = result?;
            if frame.index() % interval != 0 {
                continue;
            }
            if let Some(pose) = estimator.estimate(&frame)? {
                writer.write_pose(frame.index(), &pose)?;
                sampled += 1;
            }
        }
        writer.finish()?;

        self.reader.close();
        log::info!("wrote {sampled} sampled frame(s) to {}", table.display());
        Ok(sampled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::landmark_table::read_grouped;
    use crate::pipeline::test_support::{StubEstimator, StubReader};

    #[test]
    fn test_samples_every_nth_frame() {
        // 30 fps -> every 3rd frame; 10 frames -> indices 0, 3, 6, 9.
        let mut use_case = ExtractLandmarksUseCase::new(
            Box::new(StubReader::new(10, 30.0)),
            Box::new(StubEstimator::detect_all()),
        );
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("out.csv");
        let sampled = use_case
            .execute(Path::new("stub.mp4"), &table)
            .unwrap();
        assert_eq!(sampled, 4);
        let grouped = read_grouped(&table).unwrap();
        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_poseless_frames_leave_no_rows() {
        let mut use_case = ExtractLandmarksUseCase::new(
            Box::new(StubReader::new(6, 30.0)),
            Box::new(StubEstimator::detect_none()),
        );
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("out.csv");
        let sampled = use_case.execute(Path::new("stub.mp4"), &table).unwrap();
        assert_eq!(sampled, 0);
        assert!(read_grouped(&table).unwrap().is_empty());
    }

    #[test]
    fn test_low_fps_samples_every_frame() {
        let mut use_case = ExtractLandmarksUseCase::new(
            Box::new(StubReader::new(4, 3.0)),
            Box::new(StubEstimator::detect_all()),
        );
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("out.csv");
        assert_eq!(use_case.execute(Path::new("stub.mp4"), &table).unwrap(), 4);
    }
}
