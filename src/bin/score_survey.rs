//! Scores a survey answered outside the TUI.
//!
//! Reads a JSON survey (`{"name", "age", "gender", "answers": {FEATURE: label}}`),
//! scores it with the artifacts in `WELLBEING_ARTIFACT_DIR` and prints the
//! assessment as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin score_survey -- <survey.json>
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use wellbeing::adapters::sanitize::SanitizingMakeWriter;
use wellbeing::application::ArtifactPredictionService;
use wellbeing::config::AppConfig;
use wellbeing::SurveyResponse;

fn main() -> Result<()> {
    // stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(SanitizingMakeWriter::new(std::io::stderr))
        .init();

    let path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Usage: score_survey <survey.json>"))?;

    let text =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let response: SurveyResponse =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    let config = AppConfig::from_env();
    let service = ArtifactPredictionService::from_artifact_dir(&config.artifact_dir);
    let assessment = service.assess(&response)?;

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}
