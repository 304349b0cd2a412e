pub mod model_resolver;
pub mod onnx_blazepose_estimator;
