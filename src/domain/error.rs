//! Domain error types.
//!
//! The analysis engine itself is total and never fails; these errors only
//! arise at the edges, when an assessment file is turned into an
//! [`AnalysisInput`](crate::domain::input::AnalysisInput) or a report is written.

/// A value that does not name a member of one of the assessment enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value '{value}' (expected one of: {expected})")]
pub struct ValueParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ValueParseError {
    pub fn new(kind: &'static str, value: &str, expected: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }
}

/// Top-level error type for tradelab.
#[derive(Debug, thiserror::Error)]
pub enum TradelabError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    ValueParse(#[from] ValueParseError),

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradelabError> for std::process::ExitCode {
    fn from(err: &TradelabError) -> Self {
        let code: u8 = match err {
            TradelabError::Io(_) => 1,
            TradelabError::ConfigParse { .. }
            | TradelabError::ConfigMissing { .. }
            | TradelabError::ConfigInvalid { .. } => 2,
            TradelabError::ValueParse(_) => 4,
            TradelabError::Report { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}
