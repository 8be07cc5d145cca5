pub mod insights;

use crate::core::{BusinessMetrics, FactorName, FactorScore, Prediction, RiskAssessment};
use crate::scoring;
use chrono::Utc;
use im::Vector;

/// Builds the ordered factor breakdown used to explain an overall risk
/// score. The order is a display contract: Financial Health, Debt
/// Management, Business Maturity, Market Position, Innovation Capacity.
pub fn build_risk_factors(metrics: &BusinessMetrics) -> Vector<FactorScore> {
    [
        (
            FactorName::FinancialHealth,
            scoring::financial_health_score(metrics),
        ),
        (
            FactorName::DebtManagement,
            scoring::debt_management_score(metrics),
        ),
        (
            FactorName::BusinessMaturity,
            scoring::business_maturity_score(metrics),
        ),
        (
            FactorName::MarketPosition,
            scoring::market_position_score(metrics),
        ),
        (
            FactorName::InnovationCapacity,
            scoring::innovation_capacity_score(metrics),
        ),
    ]
    .into_iter()
    .map(|(name, health)| FactorScore::from_health(name, health))
    .collect()
}

/// Combines the externally supplied prediction with the locally computed
/// factor breakdown.
///
/// No reconciliation happens between the two: the headline number always
/// comes from the predictor, and the factor list is explanatory. The
/// predictor's risk level string is passed through untouched.
pub fn compose_assessment(metrics: &BusinessMetrics, prediction: &Prediction) -> RiskAssessment {
    RiskAssessment {
        overall_risk_score: prediction.overall_score(),
        risk_level: prediction.risk_level.clone(),
        factors: build_risk_factors(metrics),
        last_updated: Utc::now(),
    }
}
