//! CLI command implementations.
//!
//! Each command loads input records from disk, runs the pure engine, and
//! hands the result to the selected output writer. The external predictor's
//! response is read from a file the caller obtained themselves; when that
//! collaborator failed, the failure surfaces here as a missing or unreadable
//! file instead of being papered over with a locally invented score.

pub mod assess;
pub mod insights;
pub mod recommend;

pub use assess::run_assess;
pub use insights::run_insights;
pub use recommend::run_recommend;

use crate::core::{BusinessMetrics, Prediction};
use crate::io;
use crate::io::output::{create_file_writer, create_writer, OutputFormat, OutputWriter, Report};
use crate::normalize::normalize_metrics;
use anyhow::{Context, Result};
use std::path::Path;

pub(crate) fn load_metrics(path: &Path) -> Result<BusinessMetrics> {
    let content = io::read_file(path)
        .with_context(|| format!("failed to read metrics file {}", path.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("metrics file {} is not valid JSON", path.display()))?;
    let metrics = normalize_metrics(&raw)?;
    log::debug!("normalized metrics: {metrics:?}");
    Ok(metrics)
}

pub(crate) fn load_prediction(path: &Path) -> Result<Prediction> {
    let content = io::read_file(path)
        .with_context(|| format!("failed to read prediction file {}", path.display()))?;
    let prediction: Prediction = serde_json::from_str(&content)
        .with_context(|| format!("prediction file {} is not a valid predictor response", path.display()))?;
    Ok(prediction)
}

pub(crate) fn write_report(
    report: &Report,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let mut writer: Box<dyn OutputWriter> = match output {
        Some(path) => create_file_writer(format, path)?,
        None => create_writer(format),
    };
    writer.write_report(report)
}
