pub const POSE_MODEL_NAME: &str = "pose_landmark_full.onnx";
pub const POSE_MODEL_URL: &str =
    "https://github.com/dancetrack/dancetrack/releases/download/v0.1.0/pose_landmark_full.onnx";

/// Side length of the square model input.
pub const POSE_INPUT_SIZE: u32 = 256;

/// Landmarks in one BlazePose skeleton.
pub const LANDMARK_COUNT: usize = 33;

/// Pose-presence score below which a frame is treated as pose-less.
pub const POSE_PRESENCE_THRESHOLD: f32 = 0.5;

/// Joints below this visibility are not drawn.
pub const DRAW_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Placeholder dance score range, half-open: [60, 100).
pub const SCORE_MIN: u32 = 60;
pub const SCORE_MAX: u32 = 100;

/// Landmark sampling rate for the offline table, in samples per second.
pub const SAMPLE_RATE_HZ: f64 = 10.0;
