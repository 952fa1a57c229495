use crate::model::Ms;

/// Caller mistakes only. Every detected scheduling condition (conflicts,
/// warnings) is returned as data, never as an error.
#[derive(Debug)]
pub enum EngineError {
    InvalidSpan { start: Ms, end: Ms },
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidSpan { start, end } => {
                write!(f, "invalid span: [{start}, {end}) is empty or inverted")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
