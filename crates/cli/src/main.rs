use std::path::PathBuf;
use std::process;

use clap::Parser;

use facegreet_core::detection::domain::feature_extractor::FeatureExtractor;
use facegreet_core::detection::domain::region_detector::RegionDetector;
use facegreet_core::detection::infrastructure::cascade_resolver;
use facegreet_core::detection::infrastructure::haar_cascade_detector::HaarCascadeDetector;
use facegreet_core::pipeline::greet_loop_use_case::{GreetLoopUseCase, StopReason};
use facegreet_core::rendering::compositor::Compositor;
use facegreet_core::shared::constants::{
    EYE_CASCADE_FILE, FACE_CASCADE_FILE, SMILE_CASCADE_FILE, WINDOW_NAME,
};
use facegreet_core::video::domain::frame_sink::FrameSink;
use facegreet_core::video::domain::frame_source::FrameSource;
use facegreet_core::video::infrastructure::camera_source::CameraSource;
use facegreet_core::video::infrastructure::window_sink::WindowSink;

/// Interactive webcam greeter: smile with open eyes to be welcomed.
#[derive(Parser)]
#[command(name = "facegreet")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value = "0")]
    camera: i32,

    /// Directory containing the Haar cascade XML files.
    #[arg(long)]
    cascade_dir: Option<PathBuf>,
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
    validate(&cli)?;

    // Detector construction is fatal before the loop ever starts.
    let extractor = build_extractor(&cli)?;

    let source: Box<dyn FrameSource> = Box::new(CameraSource::open(cli.camera)?);
    let sink: Box<dyn FrameSink> = Box::new(WindowSink::open(WINDOW_NAME)?);

    print_banner();

    let mut use_case = GreetLoopUseCase::new(source, sink, extractor, Compositor::new());
    let (summary, reason) = use_case.execute()?;

    if reason == StopReason::SourceExhausted {
        log::error!("camera stopped producing frames");
    }

    println!();
    println!("Run statistics:");
    println!("Total elapsed: {:.2} s", summary.elapsed_secs);
    println!("Frames processed: {}", summary.frames);
    println!("Average FPS: {:.2}", summary.average_fps);

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.camera < 0 {
        return Err(format!("Camera index must be non-negative, got {}", cli.camera).into());
    }
    if let Some(dir) = &cli.cascade_dir {
        if !dir.is_dir() {
            return Err(format!("Cascade directory not found: {}", dir.display()).into());
        }
    }
    Ok(())
}

fn build_extractor(cli: &Cli) -> Result<FeatureExtractor, Box<dyn std::error::Error>> {
    let face = load_detector(FACE_CASCADE_FILE, cli)?;
    let eye = load_detector(EYE_CASCADE_FILE, cli)?;
    let smile = load_detector(SMILE_CASCADE_FILE, cli)?;
    Ok(FeatureExtractor::new(face, eye, smile))
}

fn load_detector(
    name: &str,
    cli: &Cli,
) -> Result<Box<dyn RegionDetector>, Box<dyn std::error::Error>> {
    let path = cascade_resolver::resolve(name, cli.cascade_dir.as_deref())?;
    log::info!("Loading cascade: {}", path.display());
    Ok(Box::new(HaarCascadeDetector::from_file(&path)?))
}

fn print_banner() {
    println!("Face greeter activated");
    println!("Instructions:");
    println!("  - step closer to the camera");
    println!("  - smile");
    println!("  - open your eyes");
    println!("  - press 'q' to quit");
    println!("  - the frame rate is shown in the top-left corner");
}
