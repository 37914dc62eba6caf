//! False-breakout risk: how strongly the fundamentals argue against the
//! technical signal.

use crate::domain::input::AnalysisInput;
use crate::domain::market::{
    Direction, GrowthTrend, InsiderActivity, MarginTrend, Valuation, YieldTrend,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapType {
    BearTrap,
    BullTrap,
}

impl fmt::Display for TrapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrapType::BearTrap => f.write_str("bear_trap"),
            TrapType::BullTrap => f.write_str("bull_trap"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Probability {
    Low,
    Medium,
    High,
}

impl Probability {
    pub fn from_reason_count(count: usize) -> Self {
        match count {
            0 => Probability::Low,
            1 | 2 => Probability::Medium,
            _ => Probability::High,
        }
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probability::Low => f.write_str("low"),
            Probability::Medium => f.write_str("medium"),
            Probability::High => f.write_str("high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapAnalysis {
    #[serde(rename = "type")]
    pub trap_type: TrapType,
    pub description: String,
    pub catalyst: String,
    pub probability: Probability,
    pub reasons: Vec<String>,
}

/// A bullish signal is checked for bearish headwinds; anything else
/// (bearish or neutral) is checked for bullish catalysts.
pub fn analyze_trap(input: &AnalysisInput) -> TrapAnalysis {
    let trap_type = if input.technical_signal == Direction::Bullish {
        TrapType::BearTrap
    } else {
        TrapType::BullTrap
    };

    let reasons = match trap_type {
        TrapType::BearTrap => headwinds(input),
        TrapType::BullTrap => tailwinds(input),
    };

    let description = match (trap_type, reasons.is_empty()) {
        (TrapType::BearTrap, true) => "No fundamental headwinds detected".to_string(),
        (TrapType::BullTrap, true) => "No bullish catalysts detected".to_string(),
        (TrapType::BearTrap, false) => {
            format!("Bullish setup faces headwinds: {}", reasons.join(", "))
        }
        (TrapType::BullTrap, false) => {
            format!("Bearish setup may reverse on: {}", reasons.join(", "))
        }
    };

    let catalyst = if let Some(days) = input.earnings_within(14) {
        format!("Earnings in {days} days could trigger a reversal")
    } else if let (TrapType::BearTrap, Some(days)) = (trap_type, input.fomc_within(7)) {
        format!("FOMC in {days} days could trigger a reversal")
    } else {
        match trap_type {
            TrapType::BearTrap => "Monitor sector rotation for confirmation".to_string(),
            TrapType::BullTrap => "Watch for reversal above resistance".to_string(),
        }
    };

    TrapAnalysis {
        trap_type,
        description,
        catalyst,
        probability: Probability::from_reason_count(reasons.len()),
        reasons,
    }
}

fn headwinds(input: &AnalysisInput) -> Vec<String> {
    let mut reasons = Vec::new();
    if input.earnings_growth == GrowthTrend::Decelerating {
        reasons.push("earnings decelerating".to_string());
    }
    if input.margin_trend == MarginTrend::Compressing {
        reasons.push("margins compressing".to_string());
    }
    if input.sector_rotation == Direction::Bearish {
        reasons.push("sector rotating out".to_string());
    }
    if input.bond_yields == YieldTrend::Rising {
        reasons.push("bond yields rising".to_string());
    }
    if input.insider_activity == InsiderActivity::Selling {
        reasons.push("insiders selling".to_string());
    }
    reasons
}

fn tailwinds(input: &AnalysisInput) -> Vec<String> {
    let mut reasons = Vec::new();
    if input.earnings_growth == GrowthTrend::Accelerating {
        reasons.push("earnings accelerating".to_string());
    }
    if input.margin_trend == MarginTrend::Expanding {
        reasons.push("margins expanding".to_string());
    }
    if input.sector_rotation == Direction::Bullish {
        reasons.push("sector rotating in".to_string());
    }
    if input.insider_activity == InsiderActivity::Buying {
        reasons.push("insiders buying".to_string());
    }
    if input.pe_vs_historical == Valuation::Below {
        reasons.push("P/E below historical average".to_string());
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::StrategyKind;

    fn bullish_signal() -> AnalysisInput {
        let mut input = AnalysisInput::neutral("TSLA", StrategyKind::Strangle, 250.0);
        input.technical_signal = Direction::Bullish;
        input
    }

    #[test]
    fn bullish_signal_checks_for_bear_trap() {
        let t = analyze_trap(&bullish_signal());
        assert_eq!(t.trap_type, TrapType::BearTrap);
        assert_eq!(t.probability, Probability::Low);
        assert_eq!(t.description, "No fundamental headwinds detected");
        assert_eq!(t.catalyst, "Monitor sector rotation for confirmation");
    }

    #[test]
    fn neutral_signal_checks_for_bull_trap() {
        let input = AnalysisInput::neutral("TSLA", StrategyKind::Strangle, 250.0);
        let t = analyze_trap(&input);
        assert_eq!(t.trap_type, TrapType::BullTrap);
        assert_eq!(t.description, "No bullish catalysts detected");
        assert_eq!(t.catalyst, "Watch for reversal above resistance");
    }

    #[test]
    fn headwinds_accumulate_to_high() {
        let mut input = bullish_signal();
        input.earnings_growth = GrowthTrend::Decelerating;
        input.margin_trend = MarginTrend::Compressing;
        input.bond_yields = YieldTrend::Rising;
        let t = analyze_trap(&input);
        assert_eq!(t.reasons.len(), 3);
        assert_eq!(t.probability, Probability::High);
        assert_eq!(
            t.description,
            "Bullish setup faces headwinds: earnings decelerating, margins compressing, bond yields rising"
        );
    }

    #[test]
    fn one_or_two_reasons_is_medium() {
        let mut input = AnalysisInput::neutral("TSLA", StrategyKind::Strangle, 250.0);
        input.technical_signal = Direction::Bearish;
        input.insider_activity = InsiderActivity::Buying;
        assert_eq!(analyze_trap(&input).probability, Probability::Medium);
        input.pe_vs_historical = Valuation::Below;
        let t = analyze_trap(&input);
        assert_eq!(t.probability, Probability::Medium);
        assert_eq!(t.reasons, vec!["insiders buying", "P/E below historical average"]);
    }

    #[test]
    fn bull_trap_ignores_bearish_conditions() {
        let mut input = AnalysisInput::neutral("TSLA", StrategyKind::Strangle, 250.0);
        input.technical_signal = Direction::Bearish;
        input.bond_yields = YieldTrend::Rising;
        input.insider_activity = InsiderActivity::Selling;
        assert!(analyze_trap(&input).reasons.is_empty());
    }

    #[test]
    fn earnings_catalyst_takes_priority_over_fomc() {
        let mut input = bullish_signal();
        input.days_to_earnings = Some(14);
        input.days_to_fomc = Some(2);
        assert!(analyze_trap(&input).catalyst.starts_with("Earnings in 14 days"));
    }

    #[test]
    fn fomc_catalyst_only_for_bear_trap() {
        let mut input = bullish_signal();
        input.days_to_fomc = Some(7);
        assert!(analyze_trap(&input).catalyst.starts_with("FOMC in 7 days"));

        input.technical_signal = Direction::Bearish;
        assert_eq!(
            analyze_trap(&input).catalyst,
            "Watch for reversal above resistance"
        );
    }

    #[test]
    fn probability_tiers() {
        assert_eq!(Probability::from_reason_count(0), Probability::Low);
        assert_eq!(Probability::from_reason_count(1), Probability::Medium);
        assert_eq!(Probability::from_reason_count(2), Probability::Medium);
        assert_eq!(Probability::from_reason_count(3), Probability::High);
        assert_eq!(Probability::from_reason_count(5), Probability::High);
    }
}
