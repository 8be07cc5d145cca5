use super::{load_metrics, load_prediction, write_report};
use crate::io::output::{OutputFormat, Report};
use crate::risk::compose_assessment;
use anyhow::Result;
use std::path::PathBuf;

pub struct AssessConfig {
    pub metrics: PathBuf,
    pub prediction: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_assess(config: AssessConfig) -> Result<()> {
    let metrics = load_metrics(&config.metrics)?;
    let prediction = load_prediction(&config.prediction)?;
    log::info!(
        "composing assessment, external score {:.0}",
        prediction.overall_score()
    );

    let assessment = compose_assessment(&metrics, &prediction);
    write_report(
        &Report::Assessment(assessment),
        config.format,
        config.output.as_deref(),
    )
}
