use thiserror::Error as ThisError;

/// Everything a simulator, batch runner or config loader can fail with.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SimError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("stake exceeds representable range (round={round}, stake={stake})")]
    StakeOverflow { round: usize, stake: i64 },
    #[error("profit exceeds representable range (round={round})")]
    ProfitOverflow { round: usize },
    #[error("cannot reserve storage for {field} (requested={requested})")]
    Capacity { field: &'static str, requested: usize },
    #[error("os entropy unavailable: {0}")]
    Entropy(String),
    #[error("config parse error: {0}")]
    Config(String),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
