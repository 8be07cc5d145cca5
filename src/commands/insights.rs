use super::{load_metrics, load_prediction, write_report};
use crate::io::output::{OutputFormat, Report};
use crate::risk::insights::derive_insights;
use anyhow::Result;
use std::path::PathBuf;

pub struct InsightsConfig {
    pub metrics: PathBuf,
    pub prediction: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_insights(config: InsightsConfig) -> Result<()> {
    let metrics = load_metrics(&config.metrics)?;
    let prediction = load_prediction(&config.prediction)?;

    let insights = derive_insights(&metrics, &prediction);
    write_report(
        &Report::Insights(insights),
        config.format,
        config.output.as_deref(),
    )
}
