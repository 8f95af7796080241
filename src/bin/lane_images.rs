use lane_detector::config::batch::{load_config, BatchConfig};
use lane_detector::diagnostics::LaneReport;
use lane_detector::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use lane_detector::{LaneDetector, LaneResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let detector = LaneDetector::new(config.pipeline.clone()).map_err(|e| e.to_string())?;
    let inputs = list_images(&config.input_dir)?;
    log::info!(
        "processing {} images from {}",
        inputs.len(),
        config.input_dir.display()
    );

    let start = Instant::now();
    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = inputs
        .par_iter()
        .map(|path| process_one(&detector, &config, path))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = inputs
        .iter()
        .map(|path| process_one(&detector, &config, path))
        .collect();

    let mut entries = Vec::with_capacity(outcomes.len());
    let mut failed = 0usize;
    for (path, outcome) in inputs.iter().zip(outcomes) {
        match outcome {
            Ok(report) => entries.push(ImageEntry {
                image: file_name(path),
                report,
            }),
            Err(err) => {
                log::warn!("{}: {err}", path.display());
                failed += 1;
            }
        }
    }

    if let Some(report_path) = &config.report_json {
        write_json_file(report_path, &entries).map_err(|e| e.to_string())?;
        println!("Saved report to {}", report_path.display());
    }
    println!(
        "Processed {} of {} images into {} in {:.1} ms",
        entries.len(),
        inputs.len(),
        config.output_dir.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if failed > 0 {
        return Err(format!("{failed} image(s) failed"));
    }
    Ok(())
}

fn process_one(
    detector: &LaneDetector,
    config: &BatchConfig,
    path: &Path,
) -> LaneResult<LaneReport> {
    let image = load_rgb_image(path)?;
    let report = detector.process_with_diagnostics(&image.as_frame()?);
    let out_path = config.output_dir.join(file_name(path));
    save_rgb_image(&report.output, &out_path)?;
    log::debug!(
        "{} -> {} lanes={}",
        path.display(),
        out_path.display(),
        report.result.found()
    );
    Ok(report)
}

fn list_images(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();
    paths.sort();
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn usage() -> String {
    "Usage: lane_images <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageEntry {
    image: String,
    report: LaneReport,
}
