//! Settings Loading Integration Test
//!
//! Loads settings documents from disk and checks key reporting for missing
//! and invalid values.

use catalyst_decay::DecayKind;
use catalyst_ports::AnalysisError;
use catalyst_price_analyzer::WindowSize;
use catalyst_runner::{AnalysisRun, AnalysisSettings, RunnerError};
use chrono::Duration;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

fn document() -> Value {
    json!({
        "price": {
            "min_absolute_delta": null,
            "min_percent_delta": 0.1,
            "window_size": 2,
            "magnitude_thresholds": {
                "minor_upper": "0.05",
                "significant_upper": 0.2
            }
        },
        "event": {
            "window_before": "1h",
            "window_after": 3600,
            "score_decay": "linear",
            "correlated_threshold": 0.5,
            "weak_threshold": 0.2
        }
    })
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn missing_key(value: &Value) -> String {
    match AnalysisSettings::from_value(value).unwrap_err() {
        AnalysisError::MissingConfig(key) => key,
        other => panic!("expected MissingConfig, got {:?}", other),
    }
}

fn invalid_key(value: &Value) -> String {
    match AnalysisSettings::from_value(value).unwrap_err() {
        AnalysisError::InvalidConfig { key, .. } => key,
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let file = write_temp(&document().to_string());

    let settings = AnalysisSettings::from_file(file.path()).unwrap();

    assert_eq!(settings.price.min_absolute_delta, None);
    assert_eq!(settings.price.min_percent_delta, Some(dec!(0.1)));
    assert_eq!(settings.price.window_size, WindowSize::Points(2));
    assert_eq!(settings.price.magnitude_thresholds.minor_upper, dec!(0.05));
    assert_eq!(settings.price.magnitude_thresholds.significant_upper, dec!(0.2));

    assert_eq!(settings.event.window_before, Duration::hours(1));
    assert_eq!(settings.event.window_after, Duration::hours(1));
    assert_eq!(settings.event.score_decay, DecayKind::Linear);
    assert_eq!(settings.event.correlated_threshold, dec!(0.5));
    assert_eq!(settings.event.weak_threshold, dec!(0.2));
    // optional keys fall back to defaults
    assert_eq!(settings.event.magnitude_weights.major, dec!(1.0));
    assert!(settings.event.category_weights.is_empty());
    assert_eq!(settings.event.sentiment_mismatch_factor, dec!(1));
    assert!(!settings.event.sentiment_agreement_scaling);
}

#[test]
fn test_optional_sections() {
    let mut doc = document();
    doc["price"]["window_size"] = json!("4h");
    doc["price"]["volatility_multiplier"] = json!(2.5);
    doc["event"]["score_decay"] = json!({"kind": "exponential", "half_life": "30m"});
    doc["event"]["magnitude_weights"] = json!({"minor": 0.1});
    doc["event"]["category_weights"] = json!({"ETF": 1.5, "REGULATION": "1.2"});
    doc["event"]["sentiment_mismatch_factor"] = json!(0.5);
    doc["event"]["sentiment_agreement_scaling"] = json!(true);

    let settings = AnalysisSettings::from_value(&doc).unwrap();

    assert_eq!(settings.price.window_size, WindowSize::Span(Duration::hours(4)));
    assert_eq!(settings.price.volatility_multiplier, Some(dec!(2.5)));
    assert_eq!(
        settings.event.score_decay,
        DecayKind::Exponential {
            half_life: Duration::minutes(30)
        }
    );
    assert_eq!(settings.event.magnitude_weights.minor, dec!(0.1));
    assert_eq!(settings.event.magnitude_weights.significant, dec!(0.6));
    assert_eq!(settings.event.category_weight("ETF"), dec!(1.5));
    assert_eq!(settings.event.category_weight("REGULATION"), dec!(1.2));
    assert_eq!(settings.event.sentiment_mismatch_factor, dec!(0.5));
    assert!(settings.event.sentiment_agreement_scaling);
}

#[test]
fn test_missing_keys_are_named() {
    let mut doc = document();
    doc["price"].as_object_mut().unwrap().remove("min_percent_delta");
    assert_eq!(missing_key(&doc), "price.min_percent_delta");

    let mut doc = document();
    doc["price"]["magnitude_thresholds"]
        .as_object_mut()
        .unwrap()
        .remove("significant_upper");
    assert_eq!(missing_key(&doc), "price.magnitude_thresholds.significant_upper");

    let mut doc = document();
    doc["event"].as_object_mut().unwrap().remove("window_after");
    assert_eq!(missing_key(&doc), "event.window_after");

    let mut doc = document();
    doc.as_object_mut().unwrap().remove("event");
    assert_eq!(missing_key(&doc), "event");
}

#[test]
fn test_invalid_values_are_named() {
    let mut doc = document();
    doc["event"]["window_before"] = json!("-2h");
    assert_eq!(invalid_key(&doc), "event.window_before");

    let mut doc = document();
    doc["price"]["window_size"] = json!(1);
    assert_eq!(invalid_key(&doc), "price.window_size");

    let mut doc = document();
    doc["event"]["window_after"] = json!("soon");
    assert_eq!(invalid_key(&doc), "event.window_after");

    let mut doc = document();
    doc["price"]["min_percent_delta"] = json!(null);
    assert_eq!(invalid_key(&doc), "price.min_percent_delta");

    let mut doc = document();
    doc["event"]["category_weights"] = json!({"ETF": "heavy"});
    assert_eq!(invalid_key(&doc), "event.category_weights.ETF");

    let mut doc = document();
    doc["event"]["sentiment_agreement_scaling"] = json!("yes");
    assert_eq!(invalid_key(&doc), "event.sentiment_agreement_scaling");
}

/// Durations chrono cannot represent are config errors, not crashes
#[test]
fn test_out_of_range_durations_rejected() {
    let mut doc = document();
    doc["event"]["window_before"] = json!("999999999999d");
    assert_eq!(invalid_key(&doc), "event.window_before");

    let mut doc = document();
    doc["event"]["window_after"] = json!(9223372036854775807i64);
    assert_eq!(invalid_key(&doc), "event.window_after");

    let mut doc = document();
    doc["event"]["score_decay"] = json!({"kind": "exponential", "half_life": "99999999999999h"});
    assert_eq!(invalid_key(&doc), "event.score_decay.half_life");

    let mut doc = document();
    doc["price"]["window_size"] = json!("999999999999d");
    let err = AnalysisSettings::from_json(&doc.to_string()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_file_errors() {
    let err = AnalysisSettings::from_file("/nonexistent/catalyst/settings.json").unwrap_err();
    assert!(matches!(err, RunnerError::Io { .. }));
    assert_eq!(err.exit_code(), 4);

    let file = write_temp("{ not json");
    let err = AnalysisSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, RunnerError::Parse { .. }));

    let file = write_temp("{}");
    let err = AnalysisSettings::from_file(file.path()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_run_inputs_from_files() {
    let prices = write_temp(
        r#"[
            {"timestamp": "2024-11-04T00:00:00Z", "value": 100},
            {"timestamp": "2024-11-04T01:00:00Z", "value": "101.5"}
        ]"#,
    );
    let events = write_temp(
        r#"[
            {"id": "e1", "timestamp": "2024-11-04T00:30:00Z", "category": "ETF",
             "description": "approval", "source": "wire", "sentiment": 0.8}
        ]"#,
    );

    let run = AnalysisRun::from_files("BTC-USD", prices.path(), events.path()).unwrap();

    assert_eq!(run.instrument, "BTC-USD");
    assert_eq!(run.prices.len(), 2);
    assert_eq!(run.prices[1].value, dec!(101.5));
    assert_eq!(run.events[0].source.as_deref(), Some("wire"));
    assert_eq!(run.events[0].sentiment, Some(dec!(0.8)));

    let broken = write_temp(r#"[{"timestamp": "yesterday", "value": 1}]"#);
    let err = AnalysisRun::from_files("BTC-USD", broken.path(), events.path()).unwrap_err();
    assert!(matches!(err, RunnerError::Parse { .. }));
}
