// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod normalize;
pub mod recommendations;
pub mod risk;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    errors::EngineError, BusinessMetrics, FactorName, FactorScore, ImpactTier, Insights,
    KeyMetrics, Prediction, Priority, Recommendation, RecommendationCategory, RiskAssessment,
    RiskFactorInsight, RiskFactorInsights, RiskLevel, Trend, TrendSummary,
};

pub use crate::normalize::normalize_metrics;

pub use crate::scoring::{
    business_maturity_score, debt_management_score, financial_health_score,
    innovation_capacity_score, market_position_score,
};

pub use crate::risk::{build_risk_factors, compose_assessment, insights::derive_insights};

pub use crate::recommendations::generate_recommendations;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};
