//! BlazePose single-person landmark model via ONNX Runtime (`ort`).
//!
//! Produces the full 33-joint skeleton with per-joint visibility, or `None`
//! when the model's pose-presence score falls below the threshold.

use std::path::Path;

use crate::pose::domain::landmarks::{Landmark, PoseLandmarks};
use crate::pose::domain::pose_estimator::PoseEstimator;
use crate::shared::constants::{LANDMARK_COUNT, POSE_INPUT_SIZE, POSE_PRESENCE_THRESHOLD};
use crate::shared::frame::Frame;

/// Values per raw landmark record: x, y, z, visibility, presence.
const VALUES_PER_LANDMARK: usize = 5;

/// BlazePose estimator backed by an ONNX Runtime session.
pub struct OnnxBlazeposeEstimator {
    session: ort::session::Session,
    presence_threshold: f32,
}

impl OnnxBlazeposeEstimator {
    /// Load a BlazePose landmark ONNX model.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        Ok(Self {
            session,
            presence_threshold: POSE_PRESENCE_THRESHOLD,
        })
    }

    pub fn with_presence_threshold(mut self, threshold: f32) -> Self {
        self.presence_threshold = threshold;
        self
    }
}

impl PoseEstimator for OnnxBlazeposeEstimator {
    fn estimate(
        &mut self,
        frame: &Frame,
    ) -> Result<Option<PoseLandmarks>, Box<dyn std::error::Error>> {
        // A zero-dimension frame has no pixels to pose-estimate.
        if frame.width() == 0 || frame.height() == 0 {
            return Ok(None);
        }

        // 1. Preprocess: resize to 256x256, normalize to [0,1], NHWC
        let input_tensor = preprocess(frame, POSE_INPUT_SIZE);

        // 2. Inference
        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;

        // BlazePose landmark model outputs:
        // - landmarks: [1, 195] (39 records x 5 values; first 33 are joints)
        // - pose presence score: [1, 1]
        if outputs.len() < 2 {
            return Err(
                format!("BlazePose model expected 2 outputs, got {}", outputs.len()).into(),
            );
        }

        let raw = outputs[0].try_extract_array::<f32>()?;
        let presence = outputs[1].try_extract_array::<f32>()?;
        let raw_data = raw.as_slice().ok_or("Cannot get landmark slice")?;
        let presence = presence
            .as_slice()
            .and_then(|s| s.first().copied())
            .ok_or("Cannot get presence score")?;

        if sigmoid(presence) < self.presence_threshold {
            return Ok(None);
        }

        if raw_data.len() < LANDMARK_COUNT * VALUES_PER_LANDMARK {
            return Err(format!(
                "BlazePose output too short: {} values for {} landmarks",
                raw_data.len(),
                LANDMARK_COUNT
            )
            .into());
        }

        // 3. Decode: coordinates are in input-tensor pixels; normalize to
        // [0,1] so they scale to any frame size. z shares the x scale.
        let size = POSE_INPUT_SIZE as f64;
        let landmarks = (0..LANDMARK_COUNT)
            .map(|i| {
                let rec = &raw_data[i * VALUES_PER_LANDMARK..];
                Landmark {
                    x: rec[0] as f64 / size,
                    y: rec[1] as f64 / size,
                    z: rec[2] as f64 / size,
                    visibility: sigmoid(rec[3]) as f64,
                }
            })
            .collect();

        Ok(Some(PoseLandmarks::new(landmarks)))
    }
}

/// Resize frame to `size × size` and normalize to [0,1] NHWC float32.
fn preprocess(frame: &Frame, size: u32) -> ndarray::Array4<f32> {
    let src = frame.as_ndarray();
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;
    let s = size as usize;

    let mut tensor = ndarray::Array4::<f32>::zeros((1, s, s, 3));
    if src_h == 0 || src_w == 0 {
        return tensor;
    }

    for y in 0..s {
        let src_y = (((y as f64 + 0.5) * src_h as f64 / s as f64) as usize).min(src_h - 1);
        for x in 0..s {
            let src_x = (((x as f64 + 0.5) * src_w as f64 / s as f64) as usize).min(src_w - 1);
            for c in 0..3 {
                tensor[[0, y, x, c]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    tensor
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
