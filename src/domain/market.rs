//! Qualitative market assessment vocabulary.
//!
//! Every enum here has a lowercase text form used by the assessment file, the
//! reports and serde. `FromStr` is case-insensitive and trims whitespace.

use crate::domain::error::ValueParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates `as_str`, `Display` and `FromStr` from a variant/text table.
macro_rules! text_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValueParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(ValueParseError::new(
                        $kind,
                        s,
                        &[$($text),+].join(", "),
                    )),
                }
            }
        }
    };
}

/// Directional bias of a signal, horizon or catalyst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

text_enum!(Direction, "direction", {
    Bullish => "bullish",
    Bearish => "bearish",
    Neutral => "neutral",
});

impl Direction {
    /// Market trend from a benchmark's daily percent change (±0.5% band).
    pub fn from_change_pct(change_pct: f64) -> Self {
        if change_pct > 0.5 {
            Direction::Bullish
        } else if change_pct < -0.5 {
            Direction::Bearish
        } else {
            Direction::Neutral
        }
    }
}

/// Options strategy archetype being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Income poor man's covered call: long LEAP call, weekly short calls.
    #[serde(rename = "ipmcc")]
    Ipmcc,
    /// 1-1-2 put ratio: one long put, one short put, two further-OTM short puts.
    #[serde(rename = "112")]
    OneOneTwo,
    #[serde(rename = "strangle")]
    Strangle,
}

text_enum!(StrategyKind, "strategy", {
    Ipmcc => "ipmcc",
    OneOneTwo => "112",
    Strangle => "strangle",
});

impl StrategyKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::Ipmcc => "IPMCC",
            StrategyKind::OneOneTwo => "112",
            StrategyKind::Strangle => "Strangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldTrend {
    Rising,
    Falling,
    Stable,
}

text_enum!(YieldTrend, "bond yields", {
    Rising => "rising",
    Falling => "falling",
    Stable => "stable",
});

/// VIX regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VixLevel {
    Low,
    Elevated,
    High,
    Extreme,
}

text_enum!(VixLevel, "vix level", {
    Low => "low",
    Elevated => "elevated",
    High => "high",
    Extreme => "extreme",
});

impl VixLevel {
    /// Classify a raw VIX print: <15 low, <20 elevated, <30 high, else extreme.
    pub fn from_index(vix: f64) -> Self {
        if vix < 15.0 {
            VixLevel::Low
        } else if vix < 20.0 {
            VixLevel::Elevated
        } else if vix < 30.0 {
            VixLevel::High
        } else {
            VixLevel::Extreme
        }
    }
}

/// Trend of earnings or revenue growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthTrend {
    Accelerating,
    Stable,
    Decelerating,
}

text_enum!(GrowthTrend, "growth trend", {
    Accelerating => "accelerating",
    Stable => "stable",
    Decelerating => "decelerating",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginTrend {
    Expanding,
    Stable,
    Compressing,
}

text_enum!(MarginTrend, "margin trend", {
    Expanding => "expanding",
    Stable => "stable",
    Compressing => "compressing",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsiderActivity {
    Buying,
    Selling,
    Neutral,
}

text_enum!(InsiderActivity, "insider activity", {
    Buying => "buying",
    Selling => "selling",
    Neutral => "neutral",
});

/// A valuation multiple relative to its own historical average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valuation {
    Below,
    At,
    Above,
}

text_enum!(Valuation, "valuation", {
    Below => "below",
    At => "at",
    Above => "above",
});
