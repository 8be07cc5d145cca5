pub mod errors;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Normalized snapshot of a business's metrics.
///
/// Produced by [`crate::normalize::normalize_metrics`]; after normalization
/// every field is present and finite. All values are non-negative except
/// `cash_flow`, which may be negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetrics {
    pub revenue: f64,
    pub expenses: f64,
    /// Monthly net cash flow; the only field allowed to go negative.
    pub cash_flow: f64,
    pub debt: f64,
    pub assets: f64,
    pub employee_count: f64,
    pub years_in_business: f64,
    pub market_growth: f64,
    pub competition_level: f64,  // 1-10 scale
    pub customer_retention: f64, // 0-100 percentage
    pub digital_presence: f64,   // 1-10 scale
    pub innovation_score: f64,   // 1-10 scale
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorName {
    #[serde(rename = "Financial Health")]
    FinancialHealth,
    #[serde(rename = "Debt Management")]
    DebtManagement,
    #[serde(rename = "Business Maturity")]
    BusinessMaturity,
    #[serde(rename = "Market Position")]
    MarketPosition,
    #[serde(rename = "Innovation Capacity")]
    InnovationCapacity,
}

impl FactorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorName::FinancialHealth => "Financial Health",
            FactorName::DebtManagement => "Debt Management",
            FactorName::BusinessMaturity => "Business Maturity",
            FactorName::MarketPosition => "Market Position",
            FactorName::InnovationCapacity => "Innovation Capacity",
        }
    }

    /// Static explanation weight per factor. Assigned by name, never
    /// computed from the score.
    pub fn impact_tier(&self) -> ImpactTier {
        match self {
            FactorName::FinancialHealth | FactorName::DebtManagement => ImpactTier::High,
            FactorName::BusinessMaturity | FactorName::MarketPosition => ImpactTier::Medium,
            FactorName::InnovationCapacity => ImpactTier::Low,
        }
    }
}

impl std::fmt::Display for FactorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

/// One entry of the factor breakdown: a health score and its inverted risk
/// score under a fixed impact tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub name: FactorName,
    pub health_score: f64,
    pub risk_score: f64,
    pub impact_tier: ImpactTier,
}

impl FactorScore {
    pub fn from_health(name: FactorName, health_score: f64) -> Self {
        Self {
            name,
            health_score,
            risk_score: 100.0 - health_score,
            impact_tier: name.impact_tier(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,    // overall score < 40
    Medium, // 40-69
    High,   // >= 70
}

impl RiskLevel {
    /// Classifies a 0-100 overall risk score.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Response envelope of the external predictor collaborator. The engine
/// never produces one of these itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Risk probability in [0, 1].
    pub risk_score: f64,
    /// Headline classification, passed through opaquely.
    pub risk_level: String,
}

impl Prediction {
    /// The 0-100 overall score used everywhere downstream.
    pub fn overall_score(&self) -> f64 {
        (self.risk_score * 100.0).round().clamp(0.0, 100.0)
    }
}

/// Composed assessment: the externally supplied overall score plus the
/// locally computed factor breakdown. The two are allowed to diverge; the
/// breakdown explains the headline number, it does not produce it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk_score: f64,
    pub risk_level: String,
    pub factors: Vector<FactorScore>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Neutral,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorInsight {
    pub score: f64,
    pub trend: Trend,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorInsights {
    pub financial: RiskFactorInsight,
    pub operational: RiskFactorInsight,
    pub market: RiskFactorInsight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub risk_score: f64,
    pub improvement: String,
    pub forecast: String,
}

/// Derived 0-100 performance indicators. Each reuses a factor scoring
/// formula, with small bonus terms layered on efficiency and stability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub profitability: f64,
    pub efficiency: f64,
    pub stability: f64,
    pub growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub risk_factors: RiskFactorInsights,
    pub trends: TrendSummary,
    pub key_metrics: KeyMetrics,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Financial,
    #[serde(rename = "Business Development")]
    BusinessDevelopment,
    #[serde(rename = "Digital Transformation")]
    DigitalTransformation,
    #[serde(rename = "Market Strategy")]
    MarketStrategy,
    #[serde(rename = "Customer Retention")]
    CustomerRetention,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Financial => "Financial",
            RecommendationCategory::BusinessDevelopment => "Business Development",
            RecommendationCategory::DigitalTransformation => "Digital Transformation",
            RecommendationCategory::MarketStrategy => "Market Strategy",
            RecommendationCategory::CustomerRetention => "Customer Retention",
        }
    }
}

/// A single prioritized recommendation. Recomputed fresh on every call;
/// never mutated in place, never cached by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub impact: Priority,
    pub timeframe: String,
    pub action: String,
}
