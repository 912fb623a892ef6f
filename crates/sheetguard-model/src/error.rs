use thiserror::Error;

/// Schema declaration failures.
///
/// These surface to the schema author at build time and are not recoverable:
/// the declaration itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duplicate field '{0}' in schema")]
    DuplicateField(String),
    #[error("fields '{first}' and '{second}' both map to data key '{data_key}'")]
    DuplicateDataKey {
        data_key: String,
        first: String,
        second: String,
    },
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Header reconciliation failures.
///
/// Raised when an external header row does not match the schema. One error
/// per call, first violation found; per-cell data problems are never reported
/// this way (they accumulate on the cells instead).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("got unexpected field '{0}'")]
    Unexpected(String),
    #[error("required field '{0}' not given")]
    MissingRequired(String),
}
