use std::path::Path;

use crate::pipeline::landmark_table;
use crate::pose::domain::pose_estimator::PoseEstimator;
use crate::video::domain::video_reader::VideoReader;

/// Re-runs pose estimation over a video at the table's sampling cadence
/// and measures how far each live landmark drifted from its saved one.
pub struct ComparePosesUseCase {
    reader: Box<dyn VideoReader>,
    estimator: Box<dyn PoseEstimator>,
}

impl ComparePosesUseCase {
    pub fn new(reader: Box<dyn VideoReader>, estimator: Box<dyn PoseEstimator>) -> Self {
        Self { reader, estimator }
    }

    /// Returns the mean Euclidean (x, y, z) distance across every landmark
    /// of every sampled frame present in the table, or `f64::INFINITY`
    /// when no sampled frame matched — "no comparable data".
    pub fn execute(
        &mut self,
        video: &Path,
        table: &Path,
    ) -> Result<f64, Box<dyn std::error::Error>> {
        let saved = landmark_table::read_grouped(table)?;
        let metadata = self.reader.open(video)?;
        let interval = metadata.sample_interval();

        let mut total_distance = 0.0;
        let mut count: usize = 0;

        let Self {
            reader, estimator, ..
        } = self;
        for result in reader.frames() {
            let frame = result?;
            if frame.index() % interval != 0 {
                continue;
            }
            let Some(pose) = estimator.estimate(&frame)? else {
                continue;
            };
            let Some(rows) = saved.get(&frame.index()) else {
                continue;
            };
            // Landmarks are matched positionally; rows were written in
            // landmark order.
            for (live, row) in pose.landmarks().iter().zip(rows) {
                total_distance += live.distance_to(&row.position());
                count += 1;
            }
        }
        self.reader.close();

        if count == 0 {
            log::warn!("no sampled frames overlapped the table");
            return Ok(f64::INFINITY);
        }
        Ok(total_distance / count as f64)
    }
}
