//! Cross-horizon aggregation into one call.

use crate::domain::horizon::{HorizonAnalysis, clamp_confidence};
use crate::domain::market::Direction;
use serde::{Deserialize, Serialize};

const SHORT_WEIGHT: f64 = 0.4;
const MEDIUM_WEIGHT: f64 = 0.35;
const LONG_WEIGHT: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalVerdict {
    pub direction: Direction,
    pub thesis: String,
    pub invalidation_price: f64,
    pub confidence_overall: i32,
}

/// Number of equal direction pairs among the three horizons: 0, 1 or 3.
pub fn alignment_count(
    short_term: &HorizonAnalysis,
    medium_term: &HorizonAnalysis,
    long_term: &HorizonAnalysis,
) -> u8 {
    u8::from(short_term.direction == medium_term.direction)
        + u8::from(short_term.direction == long_term.direction)
        + u8::from(medium_term.direction == long_term.direction)
}

pub fn alignment_multiplier(alignment: u8) -> f64 {
    match alignment {
        0 => 0.75,
        1 => 0.9,
        _ => 1.1,
    }
}

/// Stop level below (bullish), above (bearish) or just under (neutral) spot.
pub fn invalidation_price(current_price: f64, direction: Direction) -> f64 {
    let factor = match direction {
        Direction::Bullish => 0.95,
        Direction::Bearish => 1.05,
        Direction::Neutral => 0.97,
    };
    round_cents(current_price * factor)
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn aggregate_verdict(
    short_term: &HorizonAnalysis,
    medium_term: &HorizonAnalysis,
    long_term: &HorizonAnalysis,
    current_price: f64,
) -> FinalVerdict {
    let alignment = alignment_count(short_term, medium_term, long_term);
    let dominant = dominant_horizon(short_term, medium_term, long_term);

    let direction = if alignment >= 2 {
        short_term.direction
    } else {
        dominant.direction
    };

    let weighted = (f64::from(short_term.confidence) * SHORT_WEIGHT
        + f64::from(medium_term.confidence) * MEDIUM_WEIGHT
        + f64::from(long_term.confidence) * LONG_WEIGHT)
        .round();
    let confidence_overall =
        clamp_confidence((weighted * alignment_multiplier(alignment)).round() as i32);

    let thesis = if alignment >= 2 {
        let mut ranked = [short_term, medium_term, long_term];
        // Stable sort keeps short > medium > long among equal confidences.
        ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        format!(
            "All timeframes align {}: {} and {}",
            direction, ranked[0].key_driver, ranked[1].key_driver
        )
    } else {
        format!(
            "Mixed signals - Short: {}, Medium: {}, Long: {}. Trade the dominant {} timeframe with defined risk",
            short_term.direction,
            medium_term.direction,
            long_term.direction,
            dominant.timeframe.label().to_lowercase()
        )
    };

    FinalVerdict {
        direction,
        thesis,
        invalidation_price: invalidation_price(current_price, direction),
        confidence_overall,
    }
}

/// Highest-confidence horizon; ties resolve short, then medium, then long.
fn dominant_horizon<'a>(
    short_term: &'a HorizonAnalysis,
    medium_term: &'a HorizonAnalysis,
    long_term: &'a HorizonAnalysis,
) -> &'a HorizonAnalysis {
    if short_term.confidence >= medium_term.confidence
        && short_term.confidence >= long_term.confidence
    {
        short_term
    } else if medium_term.confidence >= long_term.confidence {
        medium_term
    } else {
        long_term
    }
}
