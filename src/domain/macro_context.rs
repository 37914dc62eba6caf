//! Macro backdrop summary attached to every analysis.
//!
//! Informational only: nothing here feeds back into the horizon, fit or
//! verdict numbers.

use crate::domain::input::AnalysisInput;
use crate::domain::market::{Direction, VixLevel, YieldTrend};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mag 7 plus Broadcom; these names move the index.
pub const MAG8_TICKERS: &[&str] = &["NVDA", "AAPL", "MSFT", "AMZN", "META", "GOOGL", "TSLA", "AVGO"];

pub const INDEX_TICKERS: &[&str] = &["SPX", "SPY", "QQQ", "NDX", "IWM", "$SPX.X", "$NDX.X"];

const GROWTH_SECTOR_ETFS: &[&str] = &["XLK", "XLY", "XLC"];

const SECTOR_ETFS: &[(&str, &[&str])] = &[
    ("XLK", &["AAPL", "NVDA", "MSFT", "AVGO", "AMD", "INTC", "CRM", "ORCL", "ADBE", "CSCO"]),
    ("XLY", &["AMZN", "TSLA", "HD", "MCD", "NKE", "SBUX", "TGT", "LOW"]),
    ("XLC", &["GOOGL", "GOOG", "META", "NFLX", "DIS", "CMCSA", "VZ", "T"]),
    ("XLV", &["UNH", "JNJ", "LLY", "PFE", "ABBV", "MRK", "TMO"]),
    ("XLF", &["JPM", "BAC", "WFC", "GS", "MS", "V", "MA", "AXP"]),
    ("XLE", &["XOM", "CVX", "COP", "SLB", "EOG"]),
    ("XLI", &["CAT", "BA", "HON", "UPS", "RTX", "GE", "DE"]),
    ("XLP", &["PG", "KO", "PEP", "COST", "WMT"]),
    ("XLU", &["NEE", "DUK", "SO"]),
    ("XLRE", &["AMT", "PLD", "SPG"]),
    ("XLB", &["LIN", "APD", "ECL"]),
];

/// Days within which an earnings or FOMC date counts as a binary event.
pub const BINARY_EVENT_DAYS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Index,
    SingleStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroStatus {
    Clear,
    Caution,
    HighRisk,
}

impl fmt::Display for MacroStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroStatus::Clear => f.write_str("clear"),
            MacroStatus::Caution => f.write_str("caution"),
            MacroStatus::HighRisk => f.write_str("high_risk"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroContext {
    pub asset_type: AssetType,
    pub is_mag8: bool,
    pub sector_etf: String,
    pub sector_name: String,
    pub vix_level: VixLevel,
    pub bond_yields: YieldTrend,
    pub market_trend: Direction,
    pub sector_rotation: Direction,
    pub has_binary_event: bool,
    /// Hold message when a binary event invalidates the technical setup.
    pub event_override: Option<String>,
    pub adjustment: i32,
    pub warnings: Vec<String>,
    pub status: MacroStatus,
    pub summary: String,
}

pub fn asset_type(ticker: &str) -> AssetType {
    let upper = ticker.trim().to_uppercase();
    if INDEX_TICKERS.contains(&upper.as_str()) {
        AssetType::Index
    } else {
        AssetType::SingleStock
    }
}

pub fn is_mag8(ticker: &str) -> bool {
    MAG8_TICKERS.contains(&ticker.trim().to_uppercase().as_str())
}

/// Sector ETF for a ticker; SPY when the ticker is not mapped.
pub fn sector_etf(ticker: &str) -> &'static str {
    let upper = ticker.trim().to_uppercase();
    SECTOR_ETFS
        .iter()
        .find(|(_, members)| members.contains(&upper.as_str()))
        .map(|(etf, _)| *etf)
        .unwrap_or("SPY")
}

pub fn sector_name(etf: &str) -> &'static str {
    match etf {
        "XLK" => "Technology",
        "XLF" => "Financials",
        "XLY" => "Consumer Disc.",
        "XLV" => "Healthcare",
        "XLE" => "Energy",
        "XLC" => "Communication",
        "XLI" => "Industrials",
        "XLP" => "Consumer Staples",
        "XLU" => "Utilities",
        "XLRE" => "Real Estate",
        "XLB" => "Materials",
        "SPY" => "S&P 500",
        _ => "Unknown",
    }
}

pub fn summarize_macro(input: &AnalysisInput) -> MacroContext {
    let asset_type = asset_type(&input.ticker);
    let etf = sector_etf(&input.ticker);
    let mut warnings = Vec::new();
    let mut adjustment = 0;
    let mut blocking = Vec::new();

    if let Some(days) = input.fomc_within(BINARY_EVENT_DAYS) {
        warnings.push(format!("FOMC in {days} days - binary event risk"));
        blocking.push(format!("FOMC Meeting in {days} days"));
        adjustment -= 20;
    }
    if let Some(days) = input.earnings_within(BINARY_EVENT_DAYS) {
        blocking.push(format!("Earnings Report in {days} days"));
    }

    match input.vix_level {
        VixLevel::Extreme => {
            warnings.push("VIX extreme (>30) - unpredictable price action".to_string());
            adjustment -= 15;
        }
        VixLevel::High => {
            warnings.push("VIX high (20-30) - elevated volatility".to_string());
            adjustment -= 5;
        }
        VixLevel::Low | VixLevel::Elevated => {}
    }

    if asset_type == AssetType::SingleStock {
        if input.sector_rotation == Direction::Bearish {
            warnings.push(format!("Sector ({etf}) underperforming - fighting the tide"));
            adjustment -= 15;
        }
        if input.bond_yields == YieldTrend::Rising && GROWTH_SECTOR_ETFS.contains(&etf) {
            warnings.push("Rising yields - headwind for growth stocks".to_string());
            adjustment -= 5;
        }
    }

    let has_binary_event = !blocking.is_empty();
    let event_override = has_binary_event.then(|| {
        format!(
            "HOLD/WAIT: technical setup invalid due to: {}",
            blocking.join(", ")
        )
    });

    let status = if has_binary_event {
        MacroStatus::HighRisk
    } else if adjustment <= -20 {
        MacroStatus::Caution
    } else {
        MacroStatus::Clear
    };

    let summary = format!(
        "VIX {}, bond yields {}, market {}, {} sector ({}) rotation {} - macro {}",
        input.vix_level,
        input.bond_yields,
        input.market_trend,
        sector_name(etf),
        etf,
        input.sector_rotation,
        status
    );

    MacroContext {
        asset_type,
        is_mag8: is_mag8(&input.ticker),
        sector_etf: etf.to_string(),
        sector_name: sector_name(etf).to_string(),
        vix_level: input.vix_level,
        bond_yields: input.bond_yields,
        market_trend: input.market_trend,
        sector_rotation: input.sector_rotation,
        has_binary_event,
        event_override,
        adjustment,
        warnings,
        status,
        summary,
    }
}
