use riskmap::*;

fn baseline() -> BusinessMetrics {
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
fn test_worked_scenario_health_scores() {
    let m = baseline();

    assert_eq!(financial_health_score(&m), 72.5);
    assert_eq!(debt_management_score(&m), 100.0); // ratio 0.2
    assert_eq!(business_maturity_score(&m), 80.0); // 5 years
    assert_eq!(market_position_score(&m), 58.5);
    assert_eq!(innovation_capacity_score(&m), 50.0);
}

#[test]
fn test_zero_revenue_never_produces_nan() {
    let mut m = baseline();
    m.revenue = 0.0;
    m.expenses = 0.0;

    let score = financial_health_score(&m);
    assert!(score.is_finite());
    assert!((0.0..=100.0).contains(&score));
}

#[test]
fn test_all_scores_stay_in_range() {
    let extremes = [-1e9, -1.0, 0.0, 0.5, 1.0, 3.0, 10.0, 1e6, 1e12];

    for &revenue in &extremes {
        for &cash_flow in &extremes {
            for &years in &extremes {
                let mut m = baseline();
                m.revenue = revenue;
                m.cash_flow = cash_flow;
                m.years_in_business = years;

                for score in [
                    financial_health_score(&m),
                    debt_management_score(&m),
                    business_maturity_score(&m),
                    market_position_score(&m),
                    innovation_capacity_score(&m),
                ] {
                    assert!(
                        (0.0..=100.0).contains(&score),
                        "score {score} out of range for revenue={revenue} cashFlow={cash_flow} years={years}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_cash_flow_monotonicity() {
    // Increasing cash flow from negative to positive never lowers the score.
    let steps = [-100_000.0, -1_000.0, 0.0, 1_000.0, 50_000.0, 200_000.0];
    let mut previous = f64::MIN;
    for &cash_flow in &steps {
        let mut m = baseline();
        m.cash_flow = cash_flow;
        let score = financial_health_score(&m);
        assert!(
            score >= previous,
            "score dropped from {previous} to {score} at cashFlow={cash_flow}"
        );
        previous = score;
    }
}

#[test]
fn test_maturity_monotonicity() {
    let mut previous = f64::MIN;
    for years in 0..30 {
        let mut m = baseline();
        m.years_in_business = f64::from(years);
        let score = business_maturity_score(&m);
        assert!(score >= previous, "maturity dropped at {years} years");
        previous = score;
    }
}

#[test]
fn test_scorers_are_idempotent() {
    let m = baseline();
    assert_eq!(financial_health_score(&m), financial_health_score(&m));
    assert_eq!(debt_management_score(&m), debt_management_score(&m));
    assert_eq!(business_maturity_score(&m), business_maturity_score(&m));
    assert_eq!(market_position_score(&m), market_position_score(&m));
    assert_eq!(
        innovation_capacity_score(&m),
        innovation_capacity_score(&m)
    );
}

#[test]
fn test_debt_scorer_uses_worst_case_when_assets_are_zero() {
    let mut m = baseline();
    m.assets = 0.0;
    m.debt = 0.0;
    // Full-leverage fallback lands in the ratio <= 1.0 band.
    assert_eq!(debt_management_score(&m), 40.0);
}
