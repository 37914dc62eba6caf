//! Assessment file validation.
//!
//! Checks every field of an assessment file before an
//! [`AnalysisInput`](crate::domain::input::AnalysisInput) is built from it,
//! so that the engine only ever sees validated input.

use crate::domain::error::{TradelabError, ValueParseError};
use crate::domain::market::{
    Direction, GrowthTrend, InsiderActivity, MarginTrend, StrategyKind, Valuation, VixLevel,
    YieldTrend,
};
use crate::ports::config_port::ConfigPort;
use std::str::FromStr;

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), TradelabError> {
    validate_ticker(config)?;
    require_enum::<StrategyKind>(config, "analysis", "strategy")?;
    require_enum::<Direction>(config, "analysis", "technical_signal")?;
    validate_current_price(config)?;
    validate_macro(config)?;
    validate_fundamentals(config)?;
    read_enum::<Valuation>(config, "valuation", "pe_vs_historical")?;
    read_enum::<Valuation>(config, "valuation", "ps_vs_historical")?;
    read_days(config, "events", "days_to_earnings")?;
    read_days(config, "events", "days_to_fomc")?;
    validate_report(config)?;
    Ok(())
}

fn validate_ticker(config: &dyn ConfigPort) -> Result<(), TradelabError> {
    match config.get_string("analysis", "ticker") {
        Some(t) if !t.trim().is_empty() => Ok(()),
        _ => Err(TradelabError::ConfigMissing {
            section: "analysis".to_string(),
            key: "ticker".to_string(),
        }),
    }
}

fn validate_current_price(config: &dyn ConfigPort) -> Result<(), TradelabError> {
    match read_number(config, "analysis", "current_price")? {
        None => Err(TradelabError::ConfigMissing {
            section: "analysis".to_string(),
            key: "current_price".to_string(),
        }),
        Some(price) if price <= 0.0 || !price.is_finite() => Err(TradelabError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "current_price".to_string(),
            reason: "current_price must be positive".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

fn validate_macro(config: &dyn ConfigPort) -> Result<(), TradelabError> {
    read_enum::<Direction>(config, "macro", "sector_rotation")?;
    read_enum::<YieldTrend>(config, "macro", "bond_yields")?;
    read_enum::<VixLevel>(config, "macro", "vix_level")?;
    read_enum::<Direction>(config, "macro", "market_trend")?;

    if let Some(vix) = read_number(config, "macro", "vix")? {
        if vix < 0.0 {
            return Err(TradelabError::ConfigInvalid {
                section: "macro".to_string(),
                key: "vix".to_string(),
                reason: "vix must be non-negative".to_string(),
            });
        }
    }
    read_number(config, "macro", "spy_change_pct")?;
    Ok(())
}

fn validate_fundamentals(config: &dyn ConfigPort) -> Result<(), TradelabError> {
    read_enum::<GrowthTrend>(config, "fundamentals", "earnings_growth")?;
    read_enum::<GrowthTrend>(config, "fundamentals", "revenue_growth")?;
    read_enum::<MarginTrend>(config, "fundamentals", "margin_trend")?;
    read_enum::<InsiderActivity>(config, "fundamentals", "insider_activity")?;
    Ok(())
}

fn validate_report(config: &dyn ConfigPort) -> Result<(), TradelabError> {
    match config.get_string("report", "format") {
        None => Ok(()),
        Some(f) if matches!(f.trim().to_lowercase().as_str(), "text" | "json") => Ok(()),
        Some(f) => Err(TradelabError::ConfigInvalid {
            section: "report".to_string(),
            key: "format".to_string(),
            reason: format!("unknown report format '{f}' (expected text or json)"),
        }),
    }
}

/// Parse an optional enum field. Absent or blank values yield `None`.
pub fn read_enum<T>(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<T>, TradelabError>
where
    T: FromStr<Err = ValueParseError>,
{
    match config.get_string(section, key) {
        Some(v) if !v.trim().is_empty() => Ok(Some(v.parse::<T>()?)),
        _ => Ok(None),
    }
}

/// Parse a required enum field.
pub fn require_enum<T>(config: &dyn ConfigPort, section: &str, key: &str) -> Result<T, TradelabError>
where
    T: FromStr<Err = ValueParseError>,
{
    read_enum(config, section, key)?.ok_or_else(|| TradelabError::ConfigMissing {
        section: section.to_string(),
        key: key.to_string(),
    })
}

/// Parse an optional floating point field.
pub fn read_number(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<f64>, TradelabError> {
    match config.get_string(section, key) {
        Some(v) if !v.trim().is_empty() => {
            v.trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| TradelabError::ConfigInvalid {
                    section: section.to_string(),
                    key: key.to_string(),
                    reason: format!("'{v}' is not a number"),
                })
        }
        _ => Ok(None),
    }
}

/// Parse a days-until field: a non-negative integer, or `unknown`/absent.
pub fn read_days(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<u32>, TradelabError> {
    let Some(raw) = config.get_string(section, key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("unknown") {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TradelabError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("'{value}' must be a non-negative whole number of days or 'unknown'"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    const MINIMAL: &str = r#"
[analysis]
ticker = AAPL
strategy = ipmcc
technical_signal = bullish
current_price = 187.5
"#;

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn minimal_config_is_valid() {
        assert!(validate_analysis_config(&adapter(MINIMAL)).is_ok());
    }

    #[test]
    fn missing_ticker() {
        let cfg = adapter("[analysis]\nstrategy = ipmcc\ntechnical_signal = bullish\ncurrent_price = 1\n");
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigMissing { key, .. } if key == "ticker"));
    }

    #[test]
    fn missing_strategy() {
        let cfg = adapter("[analysis]\nticker = AAPL\ntechnical_signal = bullish\ncurrent_price = 1\n");
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigMissing { key, .. } if key == "strategy"));
    }

    #[test]
    fn unknown_strategy() {
        let cfg = adapter(&MINIMAL.replace("ipmcc", "iron_condor"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ValueParse(e) if e.kind == "strategy"));
    }

    #[test]
    fn non_positive_price() {
        let cfg = adapter(&MINIMAL.replace("187.5", "0"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigInvalid { key, .. } if key == "current_price"));
    }

    #[test]
    fn non_numeric_price() {
        let cfg = adapter(&MINIMAL.replace("187.5", "cheap"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigInvalid { key, .. } if key == "current_price"));
    }

    #[test]
    fn bad_optional_enum() {
        let cfg = adapter(&format!("{MINIMAL}\n[macro]\nbond_yields = soaring\n"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ValueParse(e) if e.value == "soaring"));
    }

    #[test]
    fn negative_vix() {
        let cfg = adapter(&format!("{MINIMAL}\n[macro]\nvix = -3\n"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigInvalid { key, .. } if key == "vix"));
    }

    #[test]
    fn days_accept_unknown_and_integers() {
        let cfg = adapter("[events]\ndays_to_earnings = unknown\ndays_to_fomc = 9\n");
        assert_eq!(read_days(&cfg, "events", "days_to_earnings").unwrap(), None);
        assert_eq!(read_days(&cfg, "events", "days_to_fomc").unwrap(), Some(9));
        assert_eq!(read_days(&cfg, "events", "missing").unwrap(), None);
    }

    #[test]
    fn days_reject_negative() {
        let cfg = adapter(&format!("{MINIMAL}\n[events]\ndays_to_earnings = -2\n"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigInvalid { key, .. } if key == "days_to_earnings"));
    }

    #[test]
    fn unknown_report_format() {
        let cfg = adapter(&format!("{MINIMAL}\n[report]\nformat = pdf\n"));
        let err = validate_analysis_config(&cfg).unwrap_err();
        assert!(matches!(err, TradelabError::ConfigInvalid { key, .. } if key == "format"));
    }
}
