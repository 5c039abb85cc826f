#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Parse(#[from] CostParseError),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Raised when an activity cost is not a `$<number>` string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid cost '{value}': {reason}")]
pub struct CostParseError {
    pub value: String,
    pub reason: CostParseReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CostParseReason {
    #[error("empty amount")]
    Empty,

    #[error("not a number")]
    NotANumber,

    #[error("amount must be finite")]
    NotFinite,

    #[error("amount must not be negative")]
    Negative,
}

impl CostParseError {
    pub fn new(value: impl Into<String>, reason: CostParseReason) -> Self {
        Self {
            value: value.into(),
            reason,
        }
    }
}

impl From<time::error::Parse> for Error {
    fn from(value: time::error::Parse) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Config(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Config(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Config(format!($fmt, $($arg)*)))
    };
}
