use riskmap::normalize::REQUIRED_FIELDS;
use riskmap::*;
use serde_json::json;

#[test]
fn test_complete_record_passes_through() {
    let raw = json!({
        "revenue": 1_000_000.0,
        "expenses": 700_000.0,
        "cashFlow": 50_000.0,
        "debt": 200_000.0,
        "assets": 1_000_000.0,
        "employeeCount": 10,
        "yearsInBusiness": 5,
        "marketGrowth": 5,
        "competitionLevel": 5,
        "customerRetention": 80,
        "digitalPresence": 6,
        "innovationScore": 5
    });

    let m = normalize_metrics(&raw).unwrap();
    assert_eq!(m.revenue, 1_000_000.0);
    assert_eq!(m.cash_flow, 50_000.0);
    assert_eq!(m.years_in_business, 5.0);
    assert_eq!(m.customer_retention, 80.0);
}

#[test]
fn test_optional_fields_default() {
    let raw = json!({
        "revenue": 100.0,
        "expenses": 50.0,
        "cashFlow": 10.0,
        "employeeCount": 2,
        "yearsInBusiness": 1
    });

    let m = normalize_metrics(&raw).unwrap();
    assert_eq!(m.market_growth, 0.0);
    assert_eq!(m.competition_level, 5.0);
    assert_eq!(m.customer_retention, 0.0);
    assert_eq!(m.digital_presence, 5.0);
    assert_eq!(m.innovation_score, 5.0);
    assert_eq!(m.debt, 0.0);
    assert_eq!(m.assets, 0.0);
}

#[test]
fn test_missing_required_fields_are_all_reported() {
    let err = normalize_metrics(&json!({})).unwrap_err();
    assert_eq!(err.missing_fields(), &REQUIRED_FIELDS);
}

#[test]
fn test_non_numeric_required_field_is_reported() {
    let raw = json!({
        "revenue": "a lot",
        "expenses": 50.0,
        "cashFlow": 10.0,
        "employeeCount": 2,
        "yearsInBusiness": 1
    });

    let err = normalize_metrics(&raw).unwrap_err();
    assert_eq!(err.missing_fields(), &["revenue"]);
}

#[test]
fn test_null_required_field_is_reported() {
    let raw = json!({
        "revenue": 100.0,
        "expenses": null,
        "cashFlow": 10.0,
        "employeeCount": 2,
        "yearsInBusiness": 1
    });

    let err = normalize_metrics(&raw).unwrap_err();
    assert_eq!(err.missing_fields(), &["expenses"]);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let raw = json!({
        "revenue": 100.0,
        "expenses": 50.0,
        "cashFlow": 10.0,
        "employeeCount": 2,
        "yearsInBusiness": 1,
        "industryType": "manufacturing",
        "location": "Nagpur",
        "profit": 50.0
    });

    assert!(normalize_metrics(&raw).is_ok());
}

#[test]
fn test_negative_cash_flow_is_accepted() {
    let raw = json!({
        "revenue": 100.0,
        "expenses": 150.0,
        "cashFlow": -50.0,
        "employeeCount": 2,
        "yearsInBusiness": 1
    });

    let m = normalize_metrics(&raw).unwrap();
    assert_eq!(m.cash_flow, -50.0);
}

#[test]
fn test_validation_error_message_names_fields() {
    let err = normalize_metrics(&json!({ "revenue": 1 })).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cashFlow"));
    assert!(message.contains("yearsInBusiness"));
    assert!(!message.contains("revenue,"));
}
