//! Per-timeframe directional analysis.
//!
//! Three independent analyzers share one output shape. Each accumulates its
//! confidence adjustments additively from a fixed starting value and clamps
//! to [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`] exactly once, after all rules have
//! been applied. Several medium- and long-term rules read the direction set by
//! an earlier rule, so rule order within each analyzer is significant.

use crate::domain::input::AnalysisInput;
use crate::domain::market::{
    Direction, GrowthTrend, InsiderActivity, MarginTrend, Valuation, VixLevel, YieldTrend,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_CONFIDENCE: i32 = 20;
pub const MAX_CONFIDENCE: i32 = 95;

/// Bound a raw accumulated score to the published confidence range.
pub fn clamp_confidence(raw: i32) -> i32 {
    raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Timeframe {
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::ShortTerm => "Short-term",
            Timeframe::MediumTerm => "Medium-term",
            Timeframe::LongTerm => "Long-term",
        }
    }

    pub fn span(&self) -> &'static str {
        match self {
            Timeframe::ShortTerm => "1-4 weeks",
            Timeframe::MediumTerm => "1-6 months",
            Timeframe::LongTerm => "1 year",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonAnalysis {
    pub timeframe: Timeframe,
    pub direction: Direction,
    pub confidence: i32,
    pub key_driver: String,
    pub technical_context: String,
    pub risks: Vec<String>,
    pub verdict: String,
}

/// 1-4 weeks: follows the technical signal, discounted for event and
/// volatility risk.
pub fn analyze_short_term(input: &AnalysisInput) -> HorizonAnalysis {
    let direction = input.technical_signal;
    let mut confidence = 60;
    let mut key_driver = "Technical momentum".to_string();
    let mut risks = Vec::new();

    if let Some(days) = input.earnings_within(7) {
        confidence -= 15;
        key_driver = "Pre-earnings positioning".to_string();
        risks.push(format!("Earnings in {days} days - binary event risk"));
    }

    if let Some(days) = input.fomc_within(5) {
        confidence -= 10;
        risks.push(format!("FOMC in {days} days - rate decision volatility"));
    }

    match input.vix_level {
        VixLevel::Extreme => {
            confidence -= 20;
            risks.push("Extreme VIX - unpredictable price action".to_string());
        }
        VixLevel::High => {
            confidence -= 10;
            risks.push("High VIX - elevated volatility".to_string());
        }
        VixLevel::Low | VixLevel::Elevated => {}
    }

    if input.technical_signal != input.market_trend {
        confidence -= 15;
        risks.push(format!(
            "Divergence: technical signal is {} while the market trend is {}",
            input.technical_signal, input.market_trend
        ));
    }

    let confidence = clamp_confidence(confidence);

    let verdict = if risks.len() > 2 {
        "High uncertainty - reduce position size"
    } else if confidence >= 70 {
        "Favorable setup for short-term trade"
    } else {
        "Proceed with caution"
    };

    HorizonAnalysis {
        timeframe: Timeframe::ShortTerm,
        direction,
        confidence,
        key_driver,
        technical_context: format!(
            "{} technical signal against a {} market, VIX {}",
            capitalize(input.technical_signal.as_str()),
            input.market_trend,
            input.vix_level
        ),
        risks,
        verdict: verdict.to_string(),
    }
}

/// 1-6 months: sector flows first, then earnings momentum, margins and rates.
pub fn analyze_medium_term(input: &AnalysisInput) -> HorizonAnalysis {
    let mut direction = Direction::Neutral;
    let mut confidence = 50;
    let mut key_driver = "Sector rotation".to_string();
    let mut risks = Vec::new();

    match input.sector_rotation {
        Direction::Bullish => {
            direction = Direction::Bullish;
            confidence += 15;
            key_driver = "Sector rotation - capital flowing into the sector".to_string();
        }
        Direction::Bearish => {
            direction = Direction::Bearish;
            confidence += 15;
            key_driver = "Sector rotation - capital flowing out of the sector".to_string();
        }
        Direction::Neutral => {}
    }

    match input.earnings_growth {
        GrowthTrend::Accelerating => match direction {
            Direction::Bullish => confidence += 15,
            Direction::Bearish => confidence -= 10,
            Direction::Neutral => {
                direction = Direction::Bullish;
                confidence += 10;
            }
        },
        GrowthTrend::Decelerating => {
            match direction {
                Direction::Bearish => confidence += 15,
                Direction::Bullish => confidence -= 10,
                Direction::Neutral => {
                    direction = Direction::Bearish;
                    confidence += 10;
                }
            }
            risks.push("Earnings growth decelerating".to_string());
        }
        GrowthTrend::Stable => {}
    }

    if input.margin_trend == MarginTrend::Compressing {
        confidence -= 10;
        risks.push("Margin compression pressuring profitability".to_string());
    }

    if input.bond_yields == YieldTrend::Rising {
        if direction == Direction::Bullish {
            confidence -= 10;
        }
        risks.push("Rising bond yields - headwind for valuations".to_string());
    }

    let confidence = clamp_confidence(confidence);
    let verdict = match direction {
        Direction::Bullish if confidence >= 60 => "Favorable medium-term outlook",
        Direction::Bearish if confidence >= 60 => "Caution - headwinds building",
        _ => "Mixed signals - monitor sector flows",
    };

    HorizonAnalysis {
        timeframe: Timeframe::MediumTerm,
        direction,
        confidence,
        key_driver,
        technical_context: format!(
            "Sector rotation {}, earnings {}, margins {}, bond yields {}",
            input.sector_rotation, input.earnings_growth, input.margin_trend, input.bond_yields
        ),
        risks,
        verdict: verdict.to_string(),
    }
}

/// 1 year: valuation against history, adjusted by insiders and revenue.
pub fn analyze_long_term(input: &AnalysisInput) -> HorizonAnalysis {
    let mut direction = Direction::Neutral;
    let mut confidence = 50;
    let mut key_driver = "Valuation mean reversion".to_string();
    let mut risks = Vec::new();

    // Mixed P/E vs P/S readings leave the horizon neutral.
    match (input.pe_vs_historical, input.ps_vs_historical) {
        (Valuation::Below, Valuation::Below) => {
            direction = Direction::Bullish;
            confidence += 20;
            key_driver = "Valuation mean reversion - multiples below historical averages"
                .to_string();
        }
        (Valuation::Above, Valuation::Above) => {
            direction = Direction::Bearish;
            confidence += 15;
            key_driver = "Valuation mean reversion - multiples above historical averages"
                .to_string();
            risks.push("Valuation contraction risk - P/E and P/S above history".to_string());
        }
        _ => {}
    }

    match input.insider_activity {
        InsiderActivity::Buying => {
            confidence += if direction == Direction::Bullish { 10 } else { 5 };
        }
        InsiderActivity::Selling => {
            if direction == Direction::Bullish {
                confidence -= 10;
            }
            risks.push("Insider selling".to_string());
        }
        InsiderActivity::Neutral => {}
    }

    if input.revenue_growth == GrowthTrend::Decelerating {
        if direction == Direction::Bullish {
            confidence -= 15;
        }
        risks.push("Revenue growth decelerating".to_string());
    }

    let confidence = clamp_confidence(confidence);
    let verdict = match direction {
        Direction::Bullish if confidence >= 60 => "Long-term accumulation zone",
        Direction::Bearish if confidence >= 60 => "Avoid long-term positions",
        _ => "Fair value - no strong edge",
    };

    HorizonAnalysis {
        timeframe: Timeframe::LongTerm,
        direction,
        confidence,
        key_driver,
        technical_context: format!(
            "P/E {} and P/S {} historical average, insider activity {}, revenue {}",
            input.pe_vs_historical,
            input.ps_vs_historical,
            input.insider_activity,
            input.revenue_growth
        ),
        risks,
        verdict: verdict.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
