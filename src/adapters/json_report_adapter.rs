//! JSON report adapter implementing ReportPort.

use crate::domain::analysis::FullAnalysis;
use crate::domain::error::TradelabError;
use crate::ports::report_port::ReportPort;

pub struct JsonReportAdapter {
    pretty: bool,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonReportAdapter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportPort for JsonReportAdapter {
    fn render(&self, analysis: &FullAnalysis) -> Result<String, TradelabError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(analysis)
        } else {
            serde_json::to_string(analysis)
        };
        let mut json = rendered.map_err(|e| TradelabError::Report {
            reason: e.to_string(),
        })?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze_at;
    use crate::domain::input::AnalysisInput;
    use crate::domain::market::{Direction, StrategyKind};
    use chrono::{TimeZone, Utc};

    fn sample() -> FullAnalysis {
        let mut input = AnalysisInput::neutral("AMD", StrategyKind::OneOneTwo, 160.0);
        input.technical_signal = Direction::Bearish;
        analyze_at(&input, Utc.with_ymd_and_hms(2026, 2, 10, 16, 0, 0).unwrap())
    }

    #[test]
    fn json_uses_wire_names() {
        let json = JsonReportAdapter::new(false).render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ticker"], "AMD");
        assert_eq!(value["strategy"], "112");
        assert_eq!(value["trap_analysis"]["type"], "bull_trap");
        assert_eq!(value["short_term"]["direction"], "bearish");
        assert_eq!(value["timestamp"], "2026-02-10T16:00:00Z");
        assert!(value["final_verdict"]["invalidation_price"].is_number());
    }

    #[test]
    fn json_reads_back_into_an_analysis() {
        let analysis = sample();
        let json = JsonReportAdapter::default().render(&analysis).unwrap();
        let back: FullAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp, analysis.timestamp);
        assert_eq!(back.short_term, analysis.short_term);
        assert_eq!(back.trap_analysis, analysis.trap_analysis);
        assert_eq!(back.strategy_fit, analysis.strategy_fit);
        assert_eq!(back.catalysts, analysis.catalysts);
        approx::assert_relative_eq!(
            back.final_verdict.invalidation_price,
            analysis.final_verdict.invalidation_price
        );
    }

    #[test]
    fn compact_is_single_line() {
        let json = JsonReportAdapter::new(false).render(&sample()).unwrap();
        assert_eq!(json.lines().count(), 1);
    }
}
