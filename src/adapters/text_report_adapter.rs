//! Plain-text report adapter implementing ReportPort.
//!
//! Renders a fixed-width, sectioned console report.

use std::fmt::Write;

use crate::domain::analysis::FullAnalysis;
use crate::domain::error::TradelabError;
use crate::domain::horizon::HorizonAnalysis;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn render(&self, analysis: &FullAnalysis) -> Result<String, TradelabError> {
        render_text(analysis).map_err(|e| TradelabError::Report {
            reason: e.to_string(),
        })
    }
}

fn render_text(a: &FullAnalysis) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let v = &a.final_verdict;

    writeln!(
        out,
        "=== {} | {} | {} ===",
        a.ticker,
        a.strategy.display_name(),
        a.timestamp.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out)?;
    writeln!(out, "Final Verdict:    {} ({}% confidence)", v.direction, v.confidence_overall)?;
    writeln!(out, "Thesis:           {}", v.thesis)?;
    writeln!(out, "Invalidation:     ${:.2}", v.invalidation_price)?;

    for h in a.horizons() {
        writeln!(out)?;
        write_horizon(&mut out, h)?;
    }

    let t = &a.trap_analysis;
    writeln!(out)?;
    writeln!(out, "=== Trap Analysis ===")?;
    writeln!(out, "Type:             {}", t.trap_type)?;
    writeln!(out, "Probability:      {}", t.probability)?;
    writeln!(out, "Description:      {}", t.description)?;
    writeln!(out, "Catalyst:         {}", t.catalyst)?;

    let f = &a.strategy_fit;
    writeln!(out)?;
    writeln!(out, "=== Strategy Fit: {} ===", a.strategy.display_name())?;
    writeln!(out, "Score:            {}/100", f.score)?;
    writeln!(out, "Recommendation:   {}", f.recommendation)?;
    for adj in &f.adjustments {
        writeln!(out, "  - {}", adj)?;
    }

    writeln!(out)?;
    writeln!(out, "=== Catalysts ===")?;
    if a.catalysts.is_empty() {
        writeln!(out, "  (none within window)")?;
    }
    for c in &a.catalysts {
        writeln!(
            out,
            "  {:<10} {:<20} impact {:<6} {:<8} {}",
            c.date, c.event, c.impact, c.direction, c.description
        )?;
    }

    let m = &a.macro_context;
    writeln!(out)?;
    writeln!(out, "=== Macro Context ===")?;
    writeln!(out, "{}", m.summary)?;
    if let Some(ref hold) = m.event_override {
        writeln!(out, "{}", hold)?;
    }
    for w in &m.warnings {
        writeln!(out, "  ! {}", w)?;
    }

    Ok(out)
}

fn write_horizon(out: &mut String, h: &HorizonAnalysis) -> std::fmt::Result {
    writeln!(out, "=== {} ({}) ===", h.timeframe.label(), h.timeframe.span())?;
    writeln!(out, "Direction:        {} ({}%)", h.direction, h.confidence)?;
    writeln!(out, "Key Driver:       {}", h.key_driver)?;
    writeln!(out, "Context:          {}", h.technical_context)?;
    writeln!(out, "Verdict:          {}", h.verdict)?;
    for risk in &h.risks {
        writeln!(out, "  ! {}", risk)?;
    }
    Ok(())
}
