//! Error types for the cycle pipeline

use sinkcycle_pactl::PactlError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CycleError>;

#[derive(Error, Debug)]
pub enum CycleError {
    /// The reported default sink is not in the enumerated list. A state
    /// mismatch between the server and this tool; never resolved by
    /// guessing a target.
    #[error("current sink `{current}` not among the {sink_count} enumerated sinks")]
    NotFound { current: String, sink_count: usize },

    #[error(transparent)]
    Pactl(#[from] PactlError),
}

impl CycleError {
    /// Exit code to propagate to the invoking shell. Underlying command
    /// codes pass through; a missing current sink uses a fixed 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 1,
            Self::Pactl(err) => err.exit_code(),
        }
    }
}
