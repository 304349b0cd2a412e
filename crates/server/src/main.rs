mod routes;
mod state;
mod stream;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};

use dancetrack_core::pose::infrastructure::model_resolver;
use dancetrack_core::pose::infrastructure::onnx_blazepose_estimator::OnnxBlazeposeEstimator;
use dancetrack_core::session::capture_session::{CameraFactory, CaptureSession};
use dancetrack_core::session::frame_processor::FrameProcessor;
use dancetrack_core::session::score_accumulator::ScoreAccumulator;
use dancetrack_core::session::score_policy::RandomScorePolicy;
use dancetrack_core::shared::constants::{POSE_MODEL_NAME, POSE_MODEL_URL};
use dancetrack_core::video::domain::frame_source::FrameSource;
use dancetrack_core::video::infrastructure::nokhwa_camera::NokhwaCamera;

/// Pose-overlay capture server with a browser-facing MJPEG feed.
#[derive(Parser)]
#[command(name = "dancetrack-server")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Camera device index.
    #[arg(long, default_value = "0")]
    camera: u32,

    /// Path to a BlazePose ONNX model (skips cache lookup and download).
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let session = build_session(&cli)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(cli.port, session))
}

async fn serve(port: u16, session: CaptureSession) -> Result<(), Box<dyn std::error::Error>> {
    // The reference deployment fronts a browser UI on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(state::shared(session)).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("dancetrack server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("dancetrack server shutting down");
        })
        .await?;
    Ok(())
}

fn build_session(cli: &Cli) -> Result<CaptureSession, Box<dyn std::error::Error>> {
    let model_path = match &cli.model {
        Some(path) => path.clone(),
        None => model_resolver::resolve(POSE_MODEL_NAME, POSE_MODEL_URL, None)?,
    };
    let estimator = OnnxBlazeposeEstimator::new(&model_path)?;

    let camera_index = cli.camera;
    let factory: CameraFactory = Box::new(move || {
        Ok(Box::new(NokhwaCamera::open(camera_index)?) as Box<dyn FrameSource>)
    });

    Ok(CaptureSession::new(
        factory,
        FrameProcessor::new(Box::new(estimator)),
        ScoreAccumulator::new(Box::new(RandomScorePolicy)),
    ))
}
