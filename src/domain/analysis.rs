//! The full multi-horizon analysis pipeline.
//!
//! Catalysts, macro context and the three horizons read the raw input; the
//! trap and strategy-fit stages read the horizons; the verdict aggregates all
//! three horizons. Every stage is a pure function, so [`analyze`] may be
//! called concurrently from any number of threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::catalyst::{Catalyst, collect_catalysts};
use crate::domain::horizon::{
    HorizonAnalysis, analyze_long_term, analyze_medium_term, analyze_short_term,
};
use crate::domain::input::AnalysisInput;
use crate::domain::macro_context::{MacroContext, summarize_macro};
use crate::domain::market::StrategyKind;
use crate::domain::strategy_fit::{StrategyFit, score_strategy_fit};
use crate::domain::trap::{TrapAnalysis, analyze_trap};
use crate::domain::verdict::{FinalVerdict, aggregate_verdict};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub ticker: String,
    pub strategy: StrategyKind,
    pub timestamp: DateTime<Utc>,
    pub short_term: HorizonAnalysis,
    pub medium_term: HorizonAnalysis,
    pub long_term: HorizonAnalysis,
    pub trap_analysis: TrapAnalysis,
    pub catalysts: Vec<Catalyst>,
    pub macro_context: MacroContext,
    pub strategy_fit: StrategyFit,
    pub final_verdict: FinalVerdict,
}

impl FullAnalysis {
    pub fn horizons(&self) -> [&HorizonAnalysis; 3] {
        [&self.short_term, &self.medium_term, &self.long_term]
    }
}

/// Analyze `input`, stamped with the current time.
pub fn analyze(input: &AnalysisInput) -> FullAnalysis {
    analyze_at(input, Utc::now())
}

/// Analyze `input` with a caller-supplied timestamp. Output is a pure
/// function of its arguments.
pub fn analyze_at(input: &AnalysisInput, timestamp: DateTime<Utc>) -> FullAnalysis {
    let catalysts = collect_catalysts(input);
    let macro_context = summarize_macro(input);

    let short_term = analyze_short_term(input);
    let medium_term = analyze_medium_term(input);
    let long_term = analyze_long_term(input);
    debug!(
        ticker = %input.ticker,
        short = short_term.confidence,
        medium = medium_term.confidence,
        long = long_term.confidence,
        "horizons scored"
    );

    let trap_analysis = analyze_trap(input);
    let strategy_fit = score_strategy_fit(input, &short_term, &medium_term, &trap_analysis);
    let final_verdict =
        aggregate_verdict(&short_term, &medium_term, &long_term, input.current_price);

    debug!(
        ticker = %input.ticker,
        strategy = %input.strategy,
        direction = %final_verdict.direction,
        confidence = final_verdict.confidence_overall,
        fit = strategy_fit.score,
        trap = %trap_analysis.probability,
        "analysis complete"
    );

    FullAnalysis {
        ticker: input.ticker.clone(),
        strategy: input.strategy,
        timestamp,
        short_term,
        medium_term,
        long_term,
        trap_analysis,
        catalysts,
        macro_context,
        strategy_fit,
        final_verdict,
    }
}
