use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use tryon_core::detection::infrastructure::cached_face_detector::CachedFaceDetector;
use tryon_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use tryon_core::overlay::domain::overlay_style::OverlayStyle;
use tryon_core::overlay::infrastructure::frame_catalog::list_frames;
use tryon_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use tryon_core::pipeline::place_overlay_use_case::PlaceOverlayUseCase;
use tryon_core::placement::domain::face_selection::FaceSelection;
use tryon_core::placement::domain::placement_config::PlacementConfig;
use tryon_core::shared::constants::IMAGE_EXTENSIONS;
use tryon_core::PlacementCalculator;

/// Compute eyewear overlay placement for a photo.
#[derive(Parser)]
#[command(name = "tryon-place")]
struct Cli {
    /// Input photo.
    input: PathBuf,

    /// JSON file with detector output: {"faces": [...], "eyes": [...]}.
    #[arg(long)]
    detections: PathBuf,

    /// Placement config file (defaults to the per-user config).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Face selection policy: first, largest or centered.
    #[arg(long)]
    face_selection: Option<String>,

    /// Eye-line height as a fraction of face height (0.0-1.0).
    #[arg(long)]
    eye_line_offset: Option<f64>,

    /// Multiplier applied to face width (e.g. 1.05 for slightly wider frames).
    #[arg(long)]
    width_factor: Option<f64>,

    /// Overlay opacity in percent (0-100).
    #[arg(long, default_value = "100")]
    opacity: u32,

    /// Print the overlay style instead of the raw placement.
    #[arg(long)]
    style: bool,

    /// Directory of overlay frame assets to list alongside the result.
    #[arg(long)]
    frames_dir: Option<PathBuf>,
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

    let config = build_config(&cli)?;
    log::info!(
        "Placing with '{}' face selection, eye line {}, width factor {}",
        config.face_selection,
        config.eye_line_offset,
        config.width_factor
    );

    let mut use_case = PlaceOverlayUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(CachedFaceDetector::from_path(&cli.detections)?),
        PlacementCalculator::new(config),
        Box::new(StdoutPipelineLogger::new()),
    );
    let placement = use_case.execute(&cli.input)?;

    let mut output = if cli.style {
        serde_json::to_value(OverlayStyle::for_outcome(placement.as_ref(), cli.opacity))?
    } else {
        serde_json::to_value(placement)?
    };
    if let Some(dir) = &cli.frames_dir {
        output = serde_json::json!({
            "placement": output,
            "frames": list_frames(dir)?,
        });
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Config file (explicit or per-user) overlaid with command-line flags.
fn build_config(cli: &Cli) -> Result<PlacementConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => PlacementConfig::load(path)?,
        None => PlacementConfig::load_default(),
    };
    if let Some(policy) = &cli.face_selection {
        config.face_selection = policy.parse::<FaceSelection>()?;
    }
    if let Some(offset) = cli.eye_line_offset {
        config.eye_line_offset = offset;
    }
    if let Some(factor) = cli.width_factor {
        config.width_factor = factor;
    }
    config.validate()?;
    Ok(config)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_image(&cli.input) {
        return Err(format!(
            "Input must be an image ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.input.display()
        )
        .into());
    }
    if !cli.detections.exists() {
        return Err(format!(
            "Detections file not found: {}",
            cli.detections.display()
        )
        .into());
    }
    if cli.opacity > 100 {
        return Err(format!("Opacity must be between 0 and 100, got {}", cli.opacity).into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
