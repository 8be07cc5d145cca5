use anyhow::Result;
use clap::Parser;
use riskmap::cli::{Cli, Commands};
use riskmap::commands::{
    assess::AssessConfig, insights::InsightsConfig, recommend::RecommendConfig, run_assess,
    run_insights, run_recommend,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            metrics,
            prediction,
            format,
            output,
        } => run_assess(AssessConfig {
            metrics,
            prediction,
            format,
            output,
        }),
        Commands::Insights {
            metrics,
            prediction,
            format,
            output,
        } => run_insights(InsightsConfig {
            metrics,
            prediction,
            format,
            output,
        }),
        Commands::Recommend {
            metrics,
            format,
            output,
        } => run_recommend(RecommendConfig {
            metrics,
            format,
            output,
        }),
    }
}
