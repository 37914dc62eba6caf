//! Suitability of the chosen options strategy under the current read.

use crate::domain::horizon::{HorizonAnalysis, clamp_confidence};
use crate::domain::input::AnalysisInput;
use crate::domain::market::{Direction, StrategyKind, VixLevel};
use crate::domain::trap::{Probability, TrapAnalysis};
use serde::{Deserialize, Serialize};

pub const FAVORABLE_SCORE: i32 = 65;
pub const ACCEPTABLE_SCORE: i32 = 45;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyFit {
    pub score: i32,
    pub recommendation: String,
    pub adjustments: Vec<String>,
}

pub fn score_strategy_fit(
    input: &AnalysisInput,
    short_term: &HorizonAnalysis,
    medium_term: &HorizonAnalysis,
    trap: &TrapAnalysis,
) -> StrategyFit {
    let mut score = 50;
    let mut adjustments = Vec::new();

    let tiers: [&str; 3] = match input.strategy {
        StrategyKind::Ipmcc => {
            match input.vix_level {
                VixLevel::Elevated | VixLevel::High => score += 15,
                VixLevel::Low => {
                    score -= 10;
                    adjustments.push(
                        "Low IV - sell short calls closer to the money for adequate premium"
                            .to_string(),
                    );
                }
                VixLevel::Extreme => {}
            }
            if short_term.direction == Direction::Bullish
                && medium_term.direction != Direction::Bearish
            {
                score += 20;
            }
            if let Some(days) = input.earnings_within(14) {
                adjustments.push(format!(
                    "Earnings in {days} days - roll the short call past earnings or skip this cycle"
                ));
            }
            [
                "Favorable for IPMCC - sell weekly calls against the LEAP",
                "Acceptable for IPMCC - keep short strikes conservative",
                "Consider alternative - IPMCC conditions are unfavorable",
            ]
        }
        StrategyKind::OneOneTwo => {
            if short_term.direction == medium_term.direction && short_term.confidence >= 60 {
                score += 25;
            }
            if input.vix_level == VixLevel::Low {
                score += 10;
                adjustments.push("Low VIX - put spread debit is cheap".to_string());
            }
            if trap.probability == Probability::High {
                score -= 15;
                adjustments.push(
                    "High trap probability - widen the naked put strikes or reduce size"
                        .to_string(),
                );
            }
            [
                "Favorable for 112 - timeframes aligned for the put ratio",
                "Acceptable for 112 - size down and keep strikes wide",
                "Consider alternative - 112 setup lacks alignment",
            ]
        }
        StrategyKind::Strangle => {
            match input.vix_level {
                VixLevel::High | VixLevel::Extreme => score += 25,
                VixLevel::Low => {
                    score -= 20;
                    adjustments
                        .push("Low IV - strangle premium may not justify the risk".to_string());
                }
                VixLevel::Elevated => {}
            }
            if let Some(days) = input.earnings_within(7) {
                score += 15;
                adjustments.push(format!(
                    "Earnings in {days} days - enter before the event to capture IV crush"
                ));
            }
            if short_term.direction == Direction::Neutral {
                score += 10;
            }
            [
                "Favorable for strangle - rich premium and range-bound bias",
                "Acceptable for strangle - manage the tested side early",
                "Consider alternative - strangle premium is insufficient",
            ]
        }
    };

    let score = clamp_confidence(score);
    let recommendation = if score >= FAVORABLE_SCORE {
        tiers[0]
    } else if score >= ACCEPTABLE_SCORE {
        tiers[1]
    } else {
        tiers[2]
    };

    StrategyFit {
        score,
        recommendation: recommendation.to_string(),
        adjustments,
    }
}
