pub mod ffmpeg_reader;
pub mod jpeg;
pub mod nokhwa_camera;
