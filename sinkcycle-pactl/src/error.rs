//! Error types for pactl operations

use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PactlError>;

#[derive(Error, Debug)]
pub enum PactlError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    Query {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not decode sink list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("`{command}` failed ({status}): {stderr}")]
    Switch {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl PactlError {
    /// Exit code to propagate to the invoking shell.
    ///
    /// Query and switch failures carry the underlying command's code;
    /// everything else (launch failures, undecodable output, commands
    /// killed by a signal) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Query { status, .. } | Self::Switch { status, .. } => {
                status.code().unwrap_or(1)
            }
            Self::Spawn { .. } | Self::Decode(_) => 1,
        }
    }
}
