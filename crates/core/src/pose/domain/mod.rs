pub mod landmarks;
pub mod pose_estimator;
pub mod skeleton;
pub mod skeleton_renderer;
