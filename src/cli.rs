use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(about = "Small-business risk scoring and insight derivation engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose a risk assessment from a metrics snapshot and an external prediction
    Assess {
        /// Path to the business metrics JSON record
        metrics: PathBuf,

        /// Path to the external predictor's response ({"risk_score", "risk_level"})
        #[arg(short, long)]
        prediction: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Derive performance insights from a metrics snapshot
    Insights {
        /// Path to the business metrics JSON record
        metrics: PathBuf,

        /// Path to the external predictor's response ({"risk_score", "risk_level"})
        #[arg(short, long)]
        prediction: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate prioritized recommendations from a metrics snapshot
    Recommend {
        /// Path to the business metrics JSON record
        metrics: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
