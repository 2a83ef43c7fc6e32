use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown strategy `{name}` (expected one of: tt, video, iterative)")]
    UnknownStrategy { name: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("emitted {emitted} sets; expected: {expected}")]
    CountMismatch { emitted: u128, expected: u128 },
}

pub type Result<T> = std::result::Result<T, Error>;
