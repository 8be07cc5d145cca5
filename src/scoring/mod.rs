//! Pure factor scoring functions.
//!
//! Every formula lives here exactly once. The risk factor breakdown and the
//! insight derivation both call these functions, so the two call sites can
//! never drift apart numerically.
//!
//! All scorers map a normalized [`BusinessMetrics`] to a 0-100 health score
//! where higher is better. Inversion to risk happens downstream.

use crate::core::BusinessMetrics;

/// Debt-to-asset bands: first threshold the ratio fits under wins.
const DEBT_RATIO_BANDS: &[(f64, f64)] = &[(0.3, 100.0), (0.5, 80.0), (0.7, 60.0), (1.0, 40.0)];

/// Years-in-business bands: first threshold the age clears wins.
const MATURITY_BANDS: &[(f64, f64)] = &[(10.0, 100.0), (5.0, 80.0), (3.0, 60.0), (1.0, 40.0)];

/// First-matching-band lookup shared by the stepped scorers.
fn banded_score(value: f64, bands: &[(f64, f64)], matches: fn(f64, f64) -> bool, floor: f64) -> f64 {
    bands
        .iter()
        .find(|(threshold, _)| matches(value, *threshold))
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}

/// Composite of four indicators worth up to 25 points each: positive
/// liquidity, profitability, cash-flow coverage of monthly revenue, and
/// profit margin.
pub fn financial_health_score(metrics: &BusinessMetrics) -> f64 {
    let liquidity = if metrics.cash_flow > 0.0 { 25.0 } else { 0.0 };
    let profitable = if metrics.revenue > metrics.expenses {
        25.0
    } else {
        0.0
    };

    // Zero revenue makes both ratio terms undefined; they contribute
    // nothing rather than poisoning the score with NaN.
    let (coverage, margin) = if metrics.revenue > 0.0 {
        let monthly_revenue = metrics.revenue / 12.0;
        (
            (metrics.cash_flow / monthly_revenue * 25.0).clamp(0.0, 25.0),
            ((metrics.revenue - metrics.expenses) / metrics.revenue * 25.0).clamp(0.0, 25.0),
        )
    } else {
        (0.0, 0.0)
    };

    (liquidity + profitable + coverage + margin).clamp(0.0, 100.0)
}

/// Coarse, explainable leverage bands rather than a continuous penalty.
/// A business with no recorded assets counts as fully leveraged.
pub fn debt_management_score(metrics: &BusinessMetrics) -> f64 {
    let ratio = if metrics.assets > 0.0 {
        metrics.debt / metrics.assets
    } else {
        1.0
    };
    banded_score(ratio, DEBT_RATIO_BANDS, |value, threshold| value <= threshold, 20.0)
}

pub fn business_maturity_score(metrics: &BusinessMetrics) -> f64 {
    banded_score(
        metrics.years_in_business,
        MATURITY_BANDS,
        |value, threshold| value >= threshold,
        20.0,
    )
}

/// Four capped sub-terms: market growth (30), digital presence (25),
/// inverted competitive pressure (25), customer retention (20).
pub fn market_position_score(metrics: &BusinessMetrics) -> f64 {
    let growth = (metrics.market_growth * 3.0).clamp(0.0, 30.0);
    let digital = (metrics.digital_presence * 2.5).clamp(0.0, 25.0);
    let competition = ((10.0 - metrics.competition_level) * 2.5).clamp(0.0, 25.0);
    let retention = (metrics.customer_retention * 0.2).clamp(0.0, 20.0);

    // The caps sum to 100 today; the outer clamp stays so a future weight
    // change cannot push the score out of range.
    (growth + digital + competition + retention).clamp(0.0, 100.0)
}

pub fn innovation_capacity_score(metrics: &BusinessMetrics) -> f64 {
    (metrics.innovation_score * 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> BusinessMetrics {
        BusinessMetrics {
            revenue: 1_000_000.0,
            expenses: 700_000.0,
            cash_flow: 50_000.0,
            debt: 200_000.0,
            assets: 1_000_000.0,
            employee_count: 10.0,
            years_in_business: 5.0,
            market_growth: 5.0,
            competition_level: 5.0,
            customer_retention: 80.0,
            digital_presence: 6.0,
            innovation_score: 5.0,
        }
    }

    #[test]
    fn financial_health_worked_example() {
        // 25 (liquidity) + 25 (profitable) + 15 (coverage) + 7.5 (margin)
        assert_eq!(financial_health_score(&metrics()), 72.5);
    }

    #[test]
    fn financial_health_zero_revenue_is_defined() {
        let mut m = metrics();
        m.revenue = 0.0;
        let score = financial_health_score(&m);
        assert!(score.is_finite());
        // Only the liquidity indicator can contribute.
        assert_eq!(score, 25.0);
    }

    #[test]
    fn debt_band_edges() {
        let cases = [
            (0.0, 100.0),
            (0.3, 100.0),
            (0.5, 80.0),
            (0.7, 60.0),
            (1.0, 40.0),
            (1.5, 20.0),
        ];
        for (ratio, expected) in cases {
            let mut m = metrics();
            m.assets = 1000.0;
            m.debt = ratio * 1000.0;
            assert_eq!(debt_management_score(&m), expected, "ratio {ratio}");
        }
    }

    #[test]
    fn zero_assets_is_worst_case_leverage() {
        let mut m = metrics();
        m.assets = 0.0;
        m.debt = 0.0;
        // ratio treated as 1.0, which lands in the 40-point band
        assert_eq!(debt_management_score(&m), 40.0);
    }

    #[test]
    fn maturity_band_edges() {
        let cases = [
            (0.0, 20.0),
            (0.9, 20.0),
            (1.0, 40.0),
            (3.0, 60.0),
            (5.0, 80.0),
            (10.0, 100.0),
            (25.0, 100.0),
        ];
        for (years, expected) in cases {
            let mut m = metrics();
            m.years_in_business = years;
            assert_eq!(business_maturity_score(&m), expected, "years {years}");
        }
    }

    #[test]
    fn market_position_worked_example() {
        // 15 (growth) + 15 (digital) + 12.5 (competition) + 16 (retention)
        assert_eq!(market_position_score(&metrics()), 58.5);
    }

    #[test]
    fn market_position_sub_terms_are_capped() {
        let mut m = metrics();
        m.market_growth = 1000.0;
        m.digital_presence = 1000.0;
        m.competition_level = -1000.0;
        m.customer_retention = 10_000.0;
        assert_eq!(market_position_score(&m), 100.0);
    }
}
