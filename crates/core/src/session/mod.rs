pub mod capture_session;
pub mod frame_processor;
pub mod score_accumulator;
pub mod score_policy;
