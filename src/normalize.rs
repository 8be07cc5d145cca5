//! Validation and defaulting of raw business metrics records.
//!
//! The input contract is a flat JSON object. Five fields are required and
//! must be finite numbers; the rest default when absent or unusable.
//! Unknown extra fields are ignored.

use crate::core::errors::EngineError;
use crate::core::BusinessMetrics;
use serde_json::Value;

/// Fields that must be present as finite numbers, in input-contract
/// spelling. Validation reports every offender, not just the first.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "revenue",
    "expenses",
    "cashFlow",
    "employeeCount",
    "yearsInBusiness",
];

/// Optional fields and the default each takes when absent.
pub const OPTIONAL_DEFAULTS: [(&str, f64); 7] = [
    ("debt", 0.0),
    ("assets", 0.0),
    ("marketGrowth", 0.0),
    ("competitionLevel", 5.0),
    ("customerRetention", 0.0),
    ("digitalPresence", 5.0),
    ("innovationScore", 5.0),
];

/// Validates a raw metrics record and fills defaults for optional fields.
///
/// Fails with [`EngineError::Validation`] listing every required field that
/// is absent or not a finite number. Never fails for out-of-range optional
/// values; the scorers clamp those.
pub fn normalize_metrics(raw: &Value) -> Result<BusinessMetrics, EngineError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| finite_number(raw, field).is_none())
        .map(|field| (*field).to_string())
        .collect();

    match (
        finite_number(raw, "revenue"),
        finite_number(raw, "expenses"),
        finite_number(raw, "cashFlow"),
        finite_number(raw, "employeeCount"),
        finite_number(raw, "yearsInBusiness"),
    ) {
        (
            Some(revenue),
            Some(expenses),
            Some(cash_flow),
            Some(employee_count),
            Some(years_in_business),
        ) if missing.is_empty() => {
            let defaulted: Vec<&str> = OPTIONAL_DEFAULTS
                .iter()
                .filter(|(field, _)| finite_number(raw, field).is_none())
                .map(|(field, _)| *field)
                .collect();
            if !defaulted.is_empty() {
                log::debug!("applying defaults for: {}", defaulted.join(", "));
            }

            Ok(BusinessMetrics {
                revenue,
                expenses,
                cash_flow,
                employee_count,
                years_in_business,
                debt: optional(raw, "debt"),
                assets: optional(raw, "assets"),
                market_growth: optional(raw, "marketGrowth"),
                competition_level: optional(raw, "competitionLevel"),
                customer_retention: optional(raw, "customerRetention"),
                digital_presence: optional(raw, "digitalPresence"),
                innovation_score: optional(raw, "innovationScore"),
            })
        }
        _ => Err(EngineError::validation(missing)),
    }
}

fn finite_number(raw: &Value, field: &str) -> Option<f64> {
    raw.get(field)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
}

fn optional(raw: &Value, field: &str) -> f64 {
    match finite_number(raw, field) {
        Some(value) => value,
        None => default_for(field),
    }
}

fn default_for(field: &str) -> f64 {
    OPTIONAL_DEFAULTS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, default)| *default)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn applies_documented_defaults() {
        let raw = json!({
            "revenue": 1_000_000,
            "expenses": 700_000,
            "cashFlow": 50_000,
            "employeeCount": 10,
            "yearsInBusiness": 5
        });

        let metrics = normalize_metrics(&raw).unwrap();
        assert_eq!(metrics.debt, 0.0);
        assert_eq!(metrics.assets, 0.0);
        assert_eq!(metrics.market_growth, 0.0);
        assert_eq!(metrics.competition_level, 5.0);
        assert_eq!(metrics.customer_retention, 0.0);
        assert_eq!(metrics.digital_presence, 5.0);
        assert_eq!(metrics.innovation_score, 5.0);
    }

    #[test]
    fn reports_every_missing_required_field() {
        let raw = json!({ "revenue": 100.0, "cashFlow": "not a number" });

        let err = normalize_metrics(&raw).unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &["expenses", "cashFlow", "employeeCount", "yearsInBusiness"]
        );
    }

    #[test]
    fn non_object_input_is_all_missing() {
        let err = normalize_metrics(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.missing_fields().len(), REQUIRED_FIELDS.len());
    }

    #[test]
    fn ignores_unknown_fields() {
        let raw = json!({
            "revenue": 100.0,
            "expenses": 50.0,
            "cashFlow": 10.0,
            "employeeCount": 2,
            "yearsInBusiness": 1,
            "industryType": "retail",
            "location": "Pune"
        });

        assert!(normalize_metrics(&raw).is_ok());
    }
}
