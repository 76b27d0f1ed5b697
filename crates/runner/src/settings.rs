//! Settings loading
//!
//! A settings document is JSON with one section per analyzer:
//!
//! ```json
//! {
//!   "price": {
//!     "min_absolute_delta": null,
//!     "min_percent_delta": 0.1,
//!     "window_size": 2,
//!     "magnitude_thresholds": { "minor_upper": 0.05, "significant_upper": 0.2 }
//!   },
//!   "event": {
//!     "window_before": "1h",
//!     "window_after": "1h",
//!     "score_decay": "linear",
//!     "correlated_threshold": 0.5,
//!     "weak_threshold": 0.2
//!   }
//! }
//! ```
//!
//! Missing keys are reported by their dotted path (`price.window_size`).
//! Decimals are JSON numbers or strings. Durations are whole seconds or
//! strings with an `ms`, `s`, `m`, `h` or `d` suffix.

use catalyst_decay::DecayKind;
use catalyst_event_analyzer::{EventAnalyzerConfig, MagnitudeWeights};
use catalyst_ports::{AnalysisError, AnalysisResult};
use catalyst_price_analyzer::{MagnitudeThresholds, PriceAnalyzerConfig, WindowSize};
use chrono::Duration;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::error::{RunnerError, RunnerResult};

/// Configuration for both analyzers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub price: PriceAnalyzerConfig,
    pub event: EventAnalyzerConfig,
}

impl AnalysisSettings {
    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> RunnerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> RunnerResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|source| RunnerError::Parse {
            what: "settings".to_string(),
            source,
        })?;

        Ok(Self::from_value(&value)?)
    }

    /// Build settings from an already parsed document
    pub fn from_value(value: &Value) -> AnalysisResult<Self> {
        let root = Section::root(value)?;
        let settings = Self {
            price: parse_price(&root.child("price")?)?,
            event: parse_event(&root.child("event")?)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        self.price.validate()?;
        self.event.validate()
    }
}

fn parse_price(section: &Section<'_>) -> AnalysisResult<PriceAnalyzerConfig> {
    let thresholds = section.child("magnitude_thresholds")?;

    Ok(PriceAnalyzerConfig {
        min_absolute_delta: section.nullable_decimal("min_absolute_delta")?,
        min_percent_delta: section.nullable_decimal("min_percent_delta")?,
        volatility_multiplier: match section.optional("volatility_multiplier") {
            None | Some(Value::Null) => None,
            Some(value) => Some(parse_decimal(&section.key("volatility_multiplier"), value)?),
        },
        window_size: parse_window_size(
            &section.key("window_size"),
            section.required("window_size")?,
        )?,
        magnitude_thresholds: MagnitudeThresholds {
            minor_upper: thresholds.decimal("minor_upper")?,
            significant_upper: thresholds.decimal("significant_upper")?,
        },
    })
}

fn parse_event(section: &Section<'_>) -> AnalysisResult<EventAnalyzerConfig> {
    let defaults = EventAnalyzerConfig::default();

    let magnitude_weights = match section.optional_child("magnitude_weights")? {
        Some(weights) => {
            let fallback = MagnitudeWeights::default();
            MagnitudeWeights {
                minor: weights.decimal_or("minor", fallback.minor)?,
                significant: weights.decimal_or("significant", fallback.significant)?,
                major: weights.decimal_or("major", fallback.major)?,
            }
        }
        None => defaults.magnitude_weights,
    };

    let category_weights = match section.optional_child("category_weights")? {
        Some(weights) => weights
            .map
            .iter()
            .map(|(category, value)| {
                parse_decimal(&weights.key(category), value).map(|w| (category.clone(), w))
            })
            .collect::<AnalysisResult<HashMap<String, Decimal>>>()?,
        None => defaults.category_weights,
    };

    Ok(EventAnalyzerConfig {
        window_before: section.duration("window_before")?,
        window_after: section.duration("window_after")?,
        score_decay: parse_decay(
            &section.key("score_decay"),
            section.required("score_decay")?,
        )?,
        correlated_threshold: section.decimal("correlated_threshold")?,
        weak_threshold: section.decimal("weak_threshold")?,
        magnitude_weights,
        category_weights,
        sentiment_mismatch_factor: section
            .decimal_or("sentiment_mismatch_factor", defaults.sentiment_mismatch_factor)?,
        sentiment_agreement_scaling: section
            .bool_or("sentiment_agreement_scaling", defaults.sentiment_agreement_scaling)?,
    })
}

/// A JSON object and its dotted path from the document root
struct Section<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    fn root(value: &'a Value) -> AnalysisResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                path: String::new(),
                map,
            }),
            _ => Err(AnalysisError::invalid_config(
                "settings",
                "document must be a JSON object",
            )),
        }
    }

    fn key(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    fn optional(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name)
    }

    fn required(&self, name: &str) -> AnalysisResult<&'a Value> {
        self.optional(name)
            .ok_or_else(|| AnalysisError::MissingConfig(self.key(name)))
    }

    fn child(&self, name: &str) -> AnalysisResult<Section<'a>> {
        let value = self.required(name)?;
        self.as_section(name, value)
    }

    fn optional_child(&self, name: &str) -> AnalysisResult<Option<Section<'a>>> {
        match self.optional(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.as_section(name, value).map(Some),
        }
    }

    fn as_section(&self, name: &str, value: &'a Value) -> AnalysisResult<Section<'a>> {
        match value {
            Value::Object(map) => Ok(Section {
                path: self.key(name),
                map,
            }),
            other => Err(AnalysisError::invalid_config(
                self.key(name),
                format!("expected an object, got {}", other),
            )),
        }
    }

    fn decimal(&self, name: &str) -> AnalysisResult<Decimal> {
        parse_decimal(&self.key(name), self.required(name)?)
    }

    fn decimal_or(&self, name: &str, default: Decimal) -> AnalysisResult<Decimal> {
        match self.optional(name) {
            None => Ok(default),
            Some(value) => parse_decimal(&self.key(name), value),
        }
    }

    /// Required key whose explicit `null` disables the setting
    fn nullable_decimal(&self, name: &str) -> AnalysisResult<Option<Decimal>> {
        match self.required(name)? {
            Value::Null => Ok(None),
            value => parse_decimal(&self.key(name), value).map(Some),
        }
    }

    fn bool_or(&self, name: &str, default: bool) -> AnalysisResult<bool> {
        match self.optional(name) {
            None => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(AnalysisError::invalid_config(
                self.key(name),
                format!("expected true or false, got {}", other),
            )),
        }
    }

    fn duration(&self, name: &str) -> AnalysisResult<Duration> {
        parse_duration(&self.key(name), self.required(name)?)
    }
}

fn parse_decimal(key: &str, value: &Value) -> AnalysisResult<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(AnalysisError::invalid_config(
                key,
                format!("expected a decimal, got {}", other),
            ));
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| AnalysisError::invalid_config(key, format!("not a decimal: {}", text)))
}

fn parse_duration(key: &str, value: &Value) -> AnalysisResult<Duration> {
    match value {
        Value::Number(n) => n.as_i64().and_then(Duration::try_seconds).ok_or_else(|| {
            AnalysisError::invalid_config(key, format!("expected whole seconds in range, got {}", n))
        }),
        Value::String(s) => parse_duration_str(s)
            .ok_or_else(|| AnalysisError::invalid_config(key, format!("not a duration: {}", s))),
        other => Err(AnalysisError::invalid_config(
            key,
            format!("expected a duration, got {}", other),
        )),
    }
}

/// `"90s"`, `"15m"`, `"1h"`, `"2d"`, `"500ms"`; a bare number is seconds
///
/// Amounts outside chrono's range are rejected rather than truncated.
fn parse_duration_str(text: &str) -> Option<Duration> {
    let text = text.trim();
    let split = text
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (amount, unit) = text.split_at(split);
    let amount: i64 = amount.parse().ok()?;

    match unit.trim() {
        "ms" => Duration::try_milliseconds(amount),
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        _ => None,
    }
}

fn parse_window_size(key: &str, value: &Value) -> AnalysisResult<WindowSize> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|points| WindowSize::Points(points as usize))
            .ok_or_else(|| {
                AnalysisError::invalid_config(key, format!("expected a point count, got {}", n))
            }),
        Value::String(_) => parse_duration(key, value).map(WindowSize::Span),
        other => Err(AnalysisError::invalid_config(
            key,
            format!("expected a point count or a duration, got {}", other),
        )),
    }
}

fn parse_decay(key: &str, value: &Value) -> AnalysisResult<DecayKind> {
    let (kind, half_life) = match value {
        Value::String(kind) => (kind.as_str(), None),
        Value::Object(map) => match map.get("kind") {
            Some(Value::String(kind)) => (kind.as_str(), map.get("half_life")),
            _ => return Err(AnalysisError::MissingConfig(format!("{}.kind", key))),
        },
        other => {
            return Err(AnalysisError::invalid_config(
                key,
                format!("expected a decay name or object, got {}", other),
            ));
        }
    };

    match kind {
        "linear" => Ok(DecayKind::Linear),
        "step" => Ok(DecayKind::Step),
        "exponential" => {
            let half_life_key = format!("{}.half_life", key);
            let half_life =
                half_life.ok_or_else(|| AnalysisError::MissingConfig(half_life_key.clone()))?;
            Ok(DecayKind::Exponential {
                half_life: parse_duration(&half_life_key, half_life)?,
            })
        }
        other => Err(AnalysisError::invalid_config(
            key,
            format!("unknown decay '{}', expected linear, exponential or step", other),
        )),
    }
}
