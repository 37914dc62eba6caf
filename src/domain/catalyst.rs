//! Near-term event collection.

use crate::domain::input::AnalysisInput;
use crate::domain::market::{Direction, GrowthTrend, YieldTrend};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const EARNINGS_WINDOW_DAYS: u32 = 30;
pub const FOMC_WINDOW_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalyst {
    pub date: String,
    pub event: String,
    pub impact: Impact,
    pub direction: Direction,
    pub description: String,
}

/// Earnings, FOMC and free-text catalysts, in that order. Absent events are
/// skipped; the list is never sorted.
pub fn collect_catalysts(input: &AnalysisInput) -> Vec<Catalyst> {
    let mut catalysts = Vec::new();

    if let Some(days) = input.earnings_within(EARNINGS_WINDOW_DAYS) {
        let direction = match input.earnings_growth {
            GrowthTrend::Accelerating => Direction::Bullish,
            GrowthTrend::Decelerating => Direction::Bearish,
            GrowthTrend::Stable => Direction::Neutral,
        };
        catalysts.push(Catalyst {
            date: days_label(days),
            event: "Earnings Report".to_string(),
            impact: if days <= 7 { Impact::High } else { Impact::Medium },
            direction,
            description: format!(
                "Quarterly earnings with {} earnings growth",
                input.earnings_growth
            ),
        });
    }

    if let Some(days) = input.fomc_within(FOMC_WINDOW_DAYS) {
        let direction = if input.bond_yields == YieldTrend::Falling {
            Direction::Bullish
        } else {
            Direction::Bearish
        };
        catalysts.push(Catalyst {
            date: days_label(days),
            event: "FOMC Meeting".to_string(),
            impact: Impact::High,
            direction,
            description: format!("Fed rate decision with bond yields {}", input.bond_yields),
        });
    }

    if !input.other_catalysts.trim().is_empty() {
        catalysts.push(Catalyst {
            date: "TBD".to_string(),
            event: input.other_catalysts.clone(),
            impact: Impact::Medium,
            direction: Direction::Neutral,
            description: input.other_catalysts.clone(),
        });
    }

    catalysts
}

fn days_label(days: u32) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "In 1 day".to_string(),
        n => format!("In {n} days"),
    }
}
