//! Derivation of the performance insight bundle.
//!
//! The insight path reuses the factor scoring functions directly, so the
//! numbers shown in insight views are always identical to the factor
//! breakdown computed for an assessment of the same metrics.

use crate::core::{
    BusinessMetrics, Insights, KeyMetrics, Prediction, RiskFactorInsight, RiskFactorInsights,
    Trend, TrendSummary,
};
use crate::scoring;

/// Benchmark for the revenue-per-employee efficiency bonus.
const REVENUE_PER_EMPLOYEE_BENCHMARK: f64 = 500_000.0;

const FINANCIAL_POSITIVE: &str = "Positive cash flow indicates good financial health";
const FINANCIAL_NEGATIVE: &str = "Negative cash flow requires immediate attention";
const OPERATIONAL_ESTABLISHED: &str = "Established business with good operational stability";
const OPERATIONAL_GROWING: &str = "Growing business with room for operational improvements";
const MARKET_GROWING: &str = "Operating in a growth market with good opportunities";
const MARKET_FLAT: &str = "Market conditions require strategic positioning";

const IMPROVEMENT_MANAGEABLE: &str = "Risk level is manageable with proper attention";
const IMPROVEMENT_URGENT: &str = "Risk level requires immediate action";
const FORECAST_LOW: &str = "Low risk expected to continue";
const FORECAST_MODERATE: &str = "Moderate risk - monitor closely";
const FORECAST_HIGH: &str = "High risk - implement mitigation strategies immediately";

/// Derives the full insight bundle from normalized metrics and the external
/// prediction.
pub fn derive_insights(metrics: &BusinessMetrics, prediction: &Prediction) -> Insights {
    Insights {
        risk_factors: derive_risk_factors(metrics),
        trends: derive_trends(prediction),
        key_metrics: derive_key_metrics(metrics),
    }
}

fn derive_risk_factors(metrics: &BusinessMetrics) -> RiskFactorInsights {
    let cash_positive = metrics.cash_flow > 0.0;
    let established = metrics.years_in_business > 3.0;
    let growth_market = metrics.market_growth > 5.0;

    RiskFactorInsights {
        financial: RiskFactorInsight {
            score: 100.0 - scoring::financial_health_score(metrics),
            trend: if cash_positive {
                Trend::Positive
            } else {
                Trend::Negative
            },
            description: if cash_positive {
                FINANCIAL_POSITIVE.to_string()
            } else {
                FINANCIAL_NEGATIVE.to_string()
            },
        },
        operational: RiskFactorInsight {
            score: 100.0 - scoring::business_maturity_score(metrics),
            trend: if established {
                Trend::Positive
            } else {
                Trend::Neutral
            },
            description: if established {
                OPERATIONAL_ESTABLISHED.to_string()
            } else {
                OPERATIONAL_GROWING.to_string()
            },
        },
        market: RiskFactorInsight {
            score: 100.0 - scoring::market_position_score(metrics),
            trend: if growth_market {
                Trend::Positive
            } else {
                Trend::Neutral
            },
            description: if growth_market {
                MARKET_GROWING.to_string()
            } else {
                MARKET_FLAT.to_string()
            },
        },
    }
}

fn derive_trends(prediction: &Prediction) -> TrendSummary {
    let score = prediction.overall_score();
    let forecast = if score < 30.0 {
        FORECAST_LOW
    } else if score < 70.0 {
        FORECAST_MODERATE
    } else {
        FORECAST_HIGH
    };

    TrendSummary {
        risk_score: score,
        improvement: if score < 50.0 {
            IMPROVEMENT_MANAGEABLE.to_string()
        } else {
            IMPROVEMENT_URGENT.to_string()
        },
        forecast: forecast.to_string(),
    }
}

fn derive_key_metrics(metrics: &BusinessMetrics) -> KeyMetrics {
    let maturity = scoring::business_maturity_score(metrics);

    // Revenue-per-employee bonus, up to 20 points against the benchmark.
    // Zero headcount yields no bonus rather than an undefined ratio.
    let efficiency_bonus = if metrics.employee_count > 0.0 {
        (metrics.revenue / metrics.employee_count / REVENUE_PER_EMPLOYEE_BENCHMARK * 20.0)
            .min(20.0)
    } else {
        0.0
    };

    // Longevity bonus layered on debt health, up to 20 points.
    let maturity_bonus = (metrics.years_in_business * 2.0).min(20.0);

    KeyMetrics {
        profitability: scoring::financial_health_score(metrics),
        efficiency: (maturity + efficiency_bonus).min(100.0),
        stability: (scoring::debt_management_score(metrics) + maturity_bonus).min(100.0),
        growth: scoring::market_position_score(metrics),
    }
}
