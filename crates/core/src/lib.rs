//! Core library for dancetrack: pose estimation over live and recorded
//! video, skeleton overlay, capture-session scoring, and the offline
//! landmark extraction/comparison pipeline.
//!
//! Layers follow a domain/infrastructure split per concern: `domain` holds
//! traits and pure types, `infrastructure` binds them to ffmpeg, nokhwa,
//! ONNX Runtime, and the filesystem.

pub mod pipeline;
pub mod pose;
pub mod session;
pub mod shared;
pub mod video;
