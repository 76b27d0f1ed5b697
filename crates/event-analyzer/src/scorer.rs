use catalyst_core::{MarketEvent, PriceMovement};
use catalyst_decay::{ScoreDecay, create_decay};
use rust_decimal::Decimal;

use crate::config::EventAnalyzerConfig;
use crate::matcher::Candidate;

/// Turns matched candidates into a clamped impact score
pub struct ImpactScorer {
    decay: Box<dyn ScoreDecay>,
}

impl ImpactScorer {
    pub fn new(config: &EventAnalyzerConfig) -> Self {
        Self {
            decay: create_decay(&config.score_decay),
        }
    }

    /// Create a scorer around a custom decay function
    pub fn with_decay(decay: Box<dyn ScoreDecay>) -> Self {
        Self { decay }
    }

    pub fn decay_name(&self) -> &str {
        self.decay.name()
    }

    /// Contribution of one candidate before clamping
    pub fn contribution(
        &self,
        event: &MarketEvent,
        candidate: &Candidate<'_>,
        config: &EventAnalyzerConfig,
    ) -> Decimal {
        let movement = candidate.movement;
        let magnitude = config.magnitude_weights.weight(movement.magnitude_class);
        let decay = self.decay.weight(candidate.distance, candidate.window);

        magnitude
            .saturating_mul(decay)
            .saturating_mul(config.category_weight(&event.category))
            .saturating_mul(sentiment_factor(event, movement, config))
    }

    /// Sum of contributions, capped to [0, 1]
    pub fn score(
        &self,
        event: &MarketEvent,
        candidates: &[Candidate<'_>],
        config: &EventAnalyzerConfig,
    ) -> Decimal {
        candidates
            .iter()
            .map(|c| self.contribution(event, c, config))
            .fold(Decimal::ZERO, Decimal::saturating_add)
            .clamp(Decimal::ZERO, Decimal::ONE)
    }
}

fn sentiment_factor(
    event: &MarketEvent,
    movement: &PriceMovement,
    config: &EventAnalyzerConfig,
) -> Decimal {
    match event.sentiment {
        Some(sentiment) if movement.direction.conflicts_with_sentiment(sentiment) => {
            config.sentiment_mismatch_factor
        }
        Some(sentiment)
            if config.sentiment_agreement_scaling
                && movement.direction.agrees_with_sentiment(sentiment) =>
        {
            sentiment.abs().min(Decimal::ONE)
        }
        _ => Decimal::ONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::{MagnitudeClass, PricePoint, Timestamp};
    use catalyst_decay::DecayKind;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn t(minutes: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn up_move(class: MagnitudeClass) -> PriceMovement {
        PriceMovement::new(
            PricePoint::new(t(0), dec!(100)),
            PricePoint::new(t(10), dec!(110)),
            class,
        )
    }

    fn candidate(movement: &PriceMovement, distance_min: i64) -> Candidate<'_> {
        Candidate {
            movement,
            distance: Duration::minutes(distance_min),
            window: Duration::minutes(60),
        }
    }

    fn event() -> MarketEvent {
        MarketEvent::new("e1", t(5), "NEWS", "headline")
    }

    #[test]
    fn test_linear_contribution() {
        let config = EventAnalyzerConfig::default();
        let scorer = ImpactScorer::new(&config);
        let major = up_move(MagnitudeClass::Major);
        let minor = up_move(MagnitudeClass::Minor);

        assert_eq!(scorer.contribution(&event(), &candidate(&major, 0), &config), dec!(1));
        assert_eq!(scorer.contribution(&event(), &candidate(&major, 30), &config), dec!(0.5));
        assert_eq!(scorer.contribution(&event(), &candidate(&minor, 0), &config), dec!(0.3));
    }

    #[test]
    fn test_score_is_clamped() {
        let config = EventAnalyzerConfig::default();
        let scorer = ImpactScorer::new(&config);
        let major = up_move(MagnitudeClass::Major);
        let significant = up_move(MagnitudeClass::Significant);

        let candidates = vec![candidate(&major, 0), candidate(&significant, 0)];
        assert_eq!(scorer.score(&event(), &candidates, &config), Decimal::ONE);
        assert_eq!(scorer.score(&event(), &[], &config), Decimal::ZERO);
    }

    #[test]
    fn test_step_decay() {
        let config = EventAnalyzerConfig {
            score_decay: DecayKind::Step,
            ..Default::default()
        };
        let scorer = ImpactScorer::new(&config);
        let significant = up_move(MagnitudeClass::Significant);

        assert_eq!(scorer.decay_name(), "step");
        assert_eq!(
            scorer.contribution(&event(), &candidate(&significant, 59), &config),
            dec!(0.6)
        );
    }

    #[test]
    fn test_sentiment_mismatch() {
        let config = EventAnalyzerConfig {
            sentiment_mismatch_factor: dec!(0.5),
            ..Default::default()
        };
        let scorer = ImpactScorer::new(&config);
        let major = up_move(MagnitudeClass::Major);

        let bearish = event().with_sentiment(dec!(-0.8));
        let bullish = event().with_sentiment(dec!(0.8));
        let neutral = event();

        assert_eq!(scorer.contribution(&bearish, &candidate(&major, 0), &config), dec!(0.5));
        assert_eq!(scorer.contribution(&bullish, &candidate(&major, 0), &config), dec!(1));
        assert_eq!(scorer.contribution(&neutral, &candidate(&major, 0), &config), dec!(1));
    }

    #[test]
    fn test_sentiment_agreement_scaling() {
        let config = EventAnalyzerConfig {
            sentiment_mismatch_factor: dec!(0.5),
            sentiment_agreement_scaling: true,
            ..Default::default()
        };
        let scorer = ImpactScorer::new(&config);
        let major = up_move(MagnitudeClass::Major);

        let mild = event().with_sentiment(dec!(0.6));
        let bearish = event().with_sentiment(dec!(-0.8));
        let neutral = event().with_sentiment(Decimal::ZERO);

        assert_eq!(scorer.contribution(&mild, &candidate(&major, 0), &config), dec!(0.6));
        assert_eq!(scorer.contribution(&mild, &candidate(&major, 30), &config), dec!(0.3));
        // mismatch and neutral are unaffected by agreement scaling
        assert_eq!(scorer.contribution(&bearish, &candidate(&major, 0), &config), dec!(0.5));
        assert_eq!(scorer.contribution(&neutral, &candidate(&major, 0), &config), dec!(1));

        let off = EventAnalyzerConfig::default();
        assert_eq!(scorer.contribution(&mild, &candidate(&major, 0), &off), dec!(1));
    }

    #[test]
    fn test_huge_weights_saturate() {
        let mut config = EventAnalyzerConfig::default();
        config.category_weights.insert("ETF".to_string(), Decimal::MAX);
        let scorer = ImpactScorer::new(&config);
        let major = up_move(MagnitudeClass::Major);
        let significant = up_move(MagnitudeClass::Significant);

        let etf = MarketEvent::new("e2", t(5), "ETF", "approval");
        let candidates = vec![candidate(&major, 0), candidate(&significant, 0)];
        assert!(scorer.contribution(&etf, &candidates[1], &config) > Decimal::ONE);
        assert_eq!(scorer.score(&etf, &candidates, &config), Decimal::ONE);
    }

    #[test]
    fn test_category_weight_scales_contribution() {
        let mut config = EventAnalyzerConfig::default();
        config.category_weights.insert("ETF".to_string(), dec!(1.5));
        let scorer = ImpactScorer::new(&config);
        let minor = up_move(MagnitudeClass::Minor);

        let etf = MarketEvent::new("e2", t(5), "ETF", "approval");
        assert_eq!(scorer.contribution(&etf, &candidate(&minor, 0), &config), dec!(0.45));
    }
}
