use super::{load_metrics, write_report};
use crate::io::output::{OutputFormat, Report};
use crate::recommendations::generate_recommendations;
use anyhow::Result;
use std::path::PathBuf;

pub struct RecommendConfig {
    pub metrics: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_recommend(config: RecommendConfig) -> Result<()> {
    let metrics = load_metrics(&config.metrics)?;

    let recommendations = generate_recommendations(&metrics);
    log::info!("{} recommendation(s) fired", recommendations.len());
    write_report(
        &Report::Recommendations(recommendations),
        config.format,
        config.output.as_deref(),
    )
}
