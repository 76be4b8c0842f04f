use thiserror::Error;

/// Value-level decode failures.
///
/// A `DecodeError` aborts the record it occurred in: fields applied before
/// it stay applied, fields after it are never reached. It is reported as a
/// per-record diagnostic and never propagates past the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("invalid client protocol tag: {0:?}")]
    InvalidClientProto(String),

    #[error("invalid integer numeral: {0:?}")]
    InvalidNumber(String),

    #[error("malformed packed question: {0}")]
    MalformedQuestion(String),

    #[error("packed question has no question section")]
    EmptyQuestion,
}
