//! The caller-supplied assessment of a ticker.

use crate::domain::market::{
    Direction, GrowthTrend, InsiderActivity, MarginTrend, StrategyKind, Valuation, VixLevel,
    YieldTrend,
};
use serde::{Deserialize, Serialize};

/// Everything the engine knows about a ticker. Assumed already validated:
/// `current_price` is positive and the ticker is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub ticker: String,
    pub strategy: StrategyKind,
    pub technical_signal: Direction,
    pub current_price: f64,
    pub sector_rotation: Direction,
    pub bond_yields: YieldTrend,
    pub vix_level: VixLevel,
    pub market_trend: Direction,
    pub earnings_growth: GrowthTrend,
    pub revenue_growth: GrowthTrend,
    pub margin_trend: MarginTrend,
    pub insider_activity: InsiderActivity,
    pub pe_vs_historical: Valuation,
    pub ps_vs_historical: Valuation,
    /// `None` when the date is unknown.
    pub days_to_earnings: Option<u32>,
    pub days_to_fomc: Option<u32>,
    #[serde(default)]
    pub other_catalysts: String,
}

impl AnalysisInput {
    /// A neutral assessment: every qualitative field at its middle value and
    /// no known events.
    pub fn neutral(ticker: &str, strategy: StrategyKind, current_price: f64) -> Self {
        Self {
            ticker: ticker.to_string(),
            strategy,
            technical_signal: Direction::Neutral,
            current_price,
            sector_rotation: Direction::Neutral,
            bond_yields: YieldTrend::Stable,
            vix_level: VixLevel::Elevated,
            market_trend: Direction::Neutral,
            earnings_growth: GrowthTrend::Stable,
            revenue_growth: GrowthTrend::Stable,
            margin_trend: MarginTrend::Stable,
            insider_activity: InsiderActivity::Neutral,
            pe_vs_historical: Valuation::At,
            ps_vs_historical: Valuation::At,
            days_to_earnings: None,
            days_to_fomc: None,
            other_catalysts: String::new(),
        }
    }

    /// Earnings date is known and at most `days` away.
    pub fn earnings_within(&self, days: u32) -> Option<u32> {
        self.days_to_earnings.filter(|&d| d <= days)
    }

    /// FOMC date is known and at most `days` away.
    pub fn fomc_within(&self, days: u32) -> Option<u32> {
        self.days_to_fomc.filter(|&d| d <= days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_windows_are_inclusive() {
        let mut input = AnalysisInput::neutral("AAPL", StrategyKind::Ipmcc, 100.0);
        input.days_to_earnings = Some(7);
        input.days_to_fomc = Some(15);
        assert_eq!(input.earnings_within(7), Some(7));
        assert_eq!(input.earnings_within(6), None);
        assert_eq!(input.fomc_within(14), None);
        assert_eq!(input.fomc_within(15), Some(15));
    }

    #[test]
    fn unknown_dates_never_fall_inside_a_window() {
        let input = AnalysisInput::neutral("AAPL", StrategyKind::Ipmcc, 100.0);
        assert_eq!(input.earnings_within(u32::MAX), None);
        assert_eq!(input.fomc_within(u32::MAX), None);
    }

    #[test]
    fn deserializes_with_missing_other_catalysts() {
        let json = r#"{
            "ticker": "MSFT", "strategy": "112", "technical_signal": "bearish",
            "current_price": 410.5, "sector_rotation": "neutral", "bond_yields": "rising",
            "vix_level": "high", "market_trend": "bearish", "earnings_growth": "stable",
            "revenue_growth": "stable", "margin_trend": "stable", "insider_activity": "neutral",
            "pe_vs_historical": "above", "ps_vs_historical": "above",
            "days_to_earnings": null, "days_to_fomc": 3
        }"#;
        let input: AnalysisInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.strategy, StrategyKind::OneOneTwo);
        assert_eq!(input.days_to_fomc, Some(3));
        assert!(input.other_catalysts.is_empty());
    }
}
