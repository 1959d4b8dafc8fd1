use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RelayResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid invocation event")]
    InvalidEvent,

    /// Only ever seen inside the decoder, which turns it into an error card.
    #[error("Failed to decode pipeline event")]
    Decode,

    #[error("Delivery error")]
    Delivery,

    #[error("{failed} of {total} records failed delivery")]
    AggregateFailure { failed: usize, total: usize },
}
