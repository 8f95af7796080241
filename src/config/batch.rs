use crate::detector::PipelineConfig;
use crate::error::LaneResult;
use crate::image::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `lane_images` batch tool.
#[derive(Clone, Debug, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Per-image reports as pretty JSON; skipped when absent.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

pub fn load_config(path: &Path) -> LaneResult<BatchConfig> {
    let config: BatchConfig = read_json_file(path)?;
    config.pipeline.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_section_is_optional() {
        let cfg: BatchConfig =
            serde_json::from_str(r#"{ "input_dir": "in", "output_dir": "out" }"#).unwrap();
        assert_eq!(cfg.input_dir, PathBuf::from("in"));
        assert!(cfg.report_json.is_none());
        assert_eq!(cfg.pipeline, PipelineConfig::default());
    }

    #[test]
    fn pipeline_overrides_are_applied() {
        let cfg: BatchConfig = serde_json::from_str(
            r#"{
                "input_dir": "in",
                "output_dir": "out",
                "report_json": "out/report.json",
                "pipeline": { "line": { "thickness": 4 }, "roi_apex_offset": 30 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.pipeline.line.thickness, 4);
        assert_eq!(cfg.pipeline.line.color, [255, 0, 0]);
        assert_eq!(cfg.pipeline.roi_apex_offset, 30);
        assert_eq!(cfg.report_json, Some(PathBuf::from("out/report.json")));
    }
}
