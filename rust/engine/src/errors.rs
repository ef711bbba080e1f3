use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card count: {actual}, expected between {min} and {max}")]
    InvalidCardCount {
        actual: usize,
        min: usize,
        max: usize,
    },
    #[error("Insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Malformed card: {0}")]
    MalformedCard(String),
}
