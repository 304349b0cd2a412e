use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dancetrack_core::pipeline::compare_poses_use_case::ComparePosesUseCase;
use dancetrack_core::pipeline::extract_landmarks_use_case::ExtractLandmarksUseCase;
use dancetrack_core::pipeline::preview_pose_use_case::PreviewPoseUseCase;
use dancetrack_core::pose::domain::pose_estimator::PoseEstimator;
use dancetrack_core::pose::infrastructure::model_resolver;
use dancetrack_core::pose::infrastructure::onnx_blazepose_estimator::OnnxBlazeposeEstimator;
use dancetrack_core::shared::constants::{POSE_MODEL_NAME, POSE_MODEL_URL};
use dancetrack_core::video::domain::video_reader::VideoReader;
use dancetrack_core::video::infrastructure::ffmpeg_reader::FfmpegReader;

/// Pose landmark extraction and comparison for dance videos.
#[derive(Parser)]
#[command(name = "dancetrack")]
struct Cli {
    /// Path to a BlazePose ONNX model (skips cache lookup and download).
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample a video at ~10 Hz and save detected landmarks to a table.
    Extract {
        /// Input video file.
        video: PathBuf,

        /// Output landmark table (CSV).
        table: PathBuf,
    },

    /// Compare a video against a saved landmark table.
    Compare {
        /// Input video file.
        video: PathBuf,

        /// Landmark table to compare against.
        table: PathBuf,
    },

    /// Write pose-annotated frames from a video to a directory.
    Preview {
        /// Input video file.
        video: PathBuf,

        /// Directory for annotated JPEG frames.
        out_dir: PathBuf,

        /// Stop after this many frames.
        #[arg(long)]
        limit: Option<usize>,
    },
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
    let estimator = build_estimator(cli.model.as_deref())?;

    match cli.command {
        Command::Extract { video, table } => {
            let mut use_case =
                ExtractLandmarksUseCase::new(Box::new(FfmpegReader::new()), estimator);
            let sampled = use_case.execute(&video, &table)?;
            println!("Extracted {sampled} sampled frame(s) to {}", table.display());
        }
        Command::Compare { video, table } => {
            let mut use_case = ComparePosesUseCase::new(Box::new(FfmpegReader::new()), estimator);
            let distance = use_case.execute(&video, &table)?;
            if distance.is_infinite() {
                println!("Average distance: inf (no comparable frames)");
            } else {
                println!("Average distance: {distance:.6}");
            }
        }
        Command::Preview {
            video,
            out_dir,
            limit,
        } => {
            let mut reader = FfmpegReader::new();
            reader.open(&video)?;
            let mut use_case = PreviewPoseUseCase::new(estimator);
            let mut frames = reader.frames();
            let written = use_case.run(frames.as_mut(), &out_dir, limit)?;
            println!("Wrote {written} annotated frame(s) to {}", out_dir.display());
        }
    }
    Ok(())
}

fn build_estimator(
    model: Option<&std::path::Path>,
) -> Result<Box<dyn PoseEstimator>, Box<dyn std::error::Error>> {
    let model_path = match model {
        Some(path) => path.to_path_buf(),
        None => model_resolver::resolve(POSE_MODEL_NAME, POSE_MODEL_URL, None)?,
    };
    Ok(Box::new(OnnxBlazeposeEstimator::new(&model_path)?))
}
