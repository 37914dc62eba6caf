#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::io::Write;
use tradelab::domain::input::AnalysisInput;
use tradelab::domain::market::{
    Direction, GrowthTrend, InsiderActivity, MarginTrend, StrategyKind, Valuation, VixLevel,
    YieldTrend,
};

/// A fixed analysis time so full outputs compare equal.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 15, 13, 30, 0).unwrap()
}

/// Neutral IPMCC assessment at $100 with a calm (low) VIX.
pub fn base_input() -> AnalysisInput {
    let mut input = AnalysisInput::neutral("AAPL", StrategyKind::Ipmcc, 100.0);
    input.vix_level = VixLevel::Low;
    input
}

/// Bullish breakout into earnings with extreme VIX against a bearish tape.
pub fn stressed_breakout() -> AnalysisInput {
    AnalysisInput {
        ticker: "AAPL".to_string(),
        strategy: StrategyKind::Ipmcc,
        technical_signal: Direction::Bullish,
        current_price: 100.0,
        sector_rotation: Direction::Neutral,
        bond_yields: YieldTrend::Stable,
        vix_level: VixLevel::Extreme,
        market_trend: Direction::Bearish,
        earnings_growth: GrowthTrend::Stable,
        revenue_growth: GrowthTrend::Stable,
        margin_trend: MarginTrend::Stable,
        insider_activity: InsiderActivity::Neutral,
        pe_vs_historical: Valuation::At,
        ps_vs_historical: Valuation::At,
        days_to_earnings: Some(5),
        days_to_fomc: None,
        other_catalysts: String::new(),
    }
}

/// Cheap on both multiples with insiders buying; everything else neutral.
pub fn undervalued_with_insider_buying() -> AnalysisInput {
    let mut input = AnalysisInput::neutral("AAPL", StrategyKind::Ipmcc, 100.0);
    input.pe_vs_historical = Valuation::Below;
    input.ps_vs_historical = Valuation::Below;
    input.insider_activity = InsiderActivity::Buying;
    input
}

/// Every horizon bullish: trend-following technicals, inflows and cheap
/// multiples.
pub fn fully_bullish() -> AnalysisInput {
    let mut input = AnalysisInput::neutral("MSFT", StrategyKind::OneOneTwo, 100.0);
    input.technical_signal = Direction::Bullish;
    input.market_trend = Direction::Bullish;
    input.sector_rotation = Direction::Bullish;
    input.pe_vs_historical = Valuation::Below;
    input.ps_vs_historical = Valuation::Below;
    input
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
